//! Shared scene configuration
//!
//! One struct passed explicitly into the simulation instead of a global
//! engine config. Every run, test driver and renderer reads the same values.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Screen geometry and bird spawn point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Logical screen width (pixels)
    pub width: f32,
    /// Logical screen height (pixels)
    pub height: f32,
    /// Bird spawn position (center)
    pub bird_start: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            bird_start: Vec2::new(SCREEN_WIDTH * BIRD_X_FRAC, SCREEN_HEIGHT / 2.0),
        }
    }
}

impl GameConfig {
    /// Vertical band available for the top of a pipe gap of the given size.
    /// Inclusive bounds; non-empty as long as `gap <= height - 60`.
    pub fn gap_band(&self, gap: f32) -> (f32, f32) {
        (EDGE_MARGIN, self.height - EDGE_MARGIN - gap)
    }
}
