//! Obstacle pool construction and pair placement
//!
//! Pipe pairs are placed ahead of the current rightmost pair at a
//! tier-dependent horizontal spacing, with the gap position drawn from the
//! band that keeps EDGE_MARGIN pixels clear at both screen edges.

use rand::Rng;
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use super::state::{GameState, PipePair};
use crate::config::GameConfig;
use crate::consts::PIPE_POOL_SIZE;

/// Reposition `pair` ahead of the stream.
///
/// Draws the horizontal offset and vertical gap uniformly from the tier's
/// inclusive ranges, then the gap's top edge uniformly from the screen band.
pub fn place_pair(
    pair: &mut PipePair,
    rightmost_x: f32,
    tier: Difficulty,
    config: &GameConfig,
    rng: &mut Pcg32,
) {
    let gap = rng.random_range(tier.vertical_gap()) as f32;
    let dx = rng.random_range(tier.horizontal_spacing()) as f32;
    let (band_lo, band_hi) = config.gap_band(gap);
    let gap_y = rng.random_range(band_lo as i32..=band_hi as i32) as f32;

    pair.x = rightmost_x + dx;
    pair.gap_y = gap_y;
    pair.gap = gap;
}

/// Build the fixed pool, placing each pair ahead of the previous one.
/// Mirrors run start: the first pair is offset from x = 0.
pub fn spawn_pool(state: &mut GameState) {
    debug_assert!(state.pipes.is_empty());
    for _ in 0..PIPE_POOL_SIZE {
        state.pipes.push(PipePair {
            x: 0.0,
            gap_y: 0.0,
            gap: 0.0,
        });
        let i = state.pipes.len() - 1;
        let rightmost = state.rightmost_pipe_x();
        let tier = state.difficulty;
        let config = state.config;
        place_pair(&mut state.pipes[i], rightmost, tier, &config, &mut state.rng);
    }
}
