//! Difficulty tiers and score-driven progression
//!
//! Each tier bundles two inclusive ranges: horizontal spacing between
//! consecutive pipe pairs and the vertical gap size within a pair. Both
//! shrink as tiers rise.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Difficulty tier, strictly ordered from easiest to hardest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
    Titan,
}

/// Score at which play moves to Normal
pub const NORMAL_AT: u32 = 30;
/// Score at which play moves to Hard
pub const HARD_AT: u32 = 60;
/// Score at which play moves to Titan
pub const TITAN_AT: u32 = 80;

impl Difficulty {
    /// Horizontal spacing between consecutive pipe pairs (pixels, inclusive)
    pub fn horizontal_spacing(&self) -> RangeInclusive<i32> {
        match self {
            Difficulty::Easy => 300..=400,
            Difficulty::Normal => 280..=370,
            Difficulty::Hard => 250..=350,
            Difficulty::Titan => 230..=300,
        }
    }

    /// Vertical gap between a pair's upper and lower pipes (pixels, inclusive)
    pub fn vertical_gap(&self) -> RangeInclusive<i32> {
        match self {
            Difficulty::Easy => 150..=200,
            Difficulty::Normal => 140..=190,
            Difficulty::Hard => 85..=120,
            Difficulty::Titan => 50..=100,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Titan => "titan",
        }
    }

    /// Tier for the given cumulative score.
    ///
    /// Transitions fire only on the exact threshold score. Score advances by
    /// exactly one per recycled pair, so every threshold is hit; any other
    /// score keeps the current tier, so a tier is never reverted within a run.
    pub fn for_score(current: Difficulty, score: u32) -> Difficulty {
        match score {
            NORMAL_AT => Difficulty::Normal,
            HARD_AT => Difficulty::Hard,
            TITAN_AT => Difficulty::Titan,
            _ => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCREEN_HEIGHT;

    #[test]
    fn tiers_are_ordered() {
        assert!(Difficulty::Easy < Difficulty::Normal);
        assert!(Difficulty::Normal < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::Titan);
    }

    #[test]
    fn ranges_shrink_with_tier() {
        let tiers = [
            Difficulty::Easy,
            Difficulty::Normal,
            Difficulty::Hard,
            Difficulty::Titan,
        ];
        for pair in tiers.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            assert!(hi.horizontal_spacing().end() <= lo.horizontal_spacing().end());
            assert!(hi.vertical_gap().end() <= lo.vertical_gap().end());
        }
    }

    #[test]
    fn gap_never_exceeds_placement_band() {
        // Configuration invariant: max gap must leave a non-empty band
        // between the 30px edge margins.
        for tier in [
            Difficulty::Easy,
            Difficulty::Normal,
            Difficulty::Hard,
            Difficulty::Titan,
        ] {
            let max_gap = *tier.vertical_gap().end() as f32;
            assert!(max_gap <= SCREEN_HEIGHT - 60.0, "{:?}", tier);
        }
    }

    #[test]
    fn progression_walks_every_tier_in_order() {
        let mut tier = Difficulty::Easy;
        for score in 0..30 {
            tier = Difficulty::for_score(tier, score);
            assert_eq!(tier, Difficulty::Easy, "score {}", score);
        }
        for score in 30..60 {
            tier = Difficulty::for_score(tier, score);
            assert_eq!(tier, Difficulty::Normal, "score {}", score);
        }
        for score in 60..80 {
            tier = Difficulty::for_score(tier, score);
            assert_eq!(tier, Difficulty::Hard, "score {}", score);
        }
        for score in 80..200 {
            tier = Difficulty::for_score(tier, score);
            assert_eq!(tier, Difficulty::Titan, "score {}", score);
        }
    }

    #[test]
    fn non_threshold_scores_keep_current_tier() {
        // The check is exact equality, so a score past the threshold does not
        // transition on its own. Documents current behavior.
        assert_eq!(
            Difficulty::for_score(Difficulty::Easy, 31),
            Difficulty::Easy
        );
        assert_eq!(
            Difficulty::for_score(Difficulty::Normal, 59),
            Difficulty::Normal
        );
    }
}
