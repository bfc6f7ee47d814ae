//! Game state and core simulation types
//!
//! Everything the tick function mutates lives here. The state is
//! deterministic: a run is fully described by the config, the seed and the
//! input sequence.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use super::pipes;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Physics frozen on user request
    Paused,
    /// Resume countdown running; physics still frozen
    Resuming { ticks_left: u32 },
    /// Run ended; physics frozen until the restart delay elapses
    GameOver { ticks_left: u32 },
}

impl GamePhase {
    /// Seconds still shown on the resume countdown ("Fly in: N")
    pub fn countdown_seconds(&self) -> Option<u32> {
        match self {
            GamePhase::Resuming { ticks_left } => Some(ticks_left.div_ceil(TICK_HZ)),
            _ => None,
        }
    }
}

/// The player's bird. Horizontal position is fixed; only vertical physics run.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bird {
    pub fn new(start: Vec2) -> Self {
        Self {
            pos: start,
            vel: Vec2::ZERO,
        }
    }

    /// Upward impulse; replaces (not adds to) vertical velocity
    pub fn flap(&mut self) {
        self.vel.y = -FLAP_VELOCITY;
    }

    /// Axis-aligned bounds as (min, max) corners
    pub fn aabb(&self) -> (Vec2, Vec2) {
        let half = Vec2::new(BIRD_WIDTH / 2.0, BIRD_HEIGHT / 2.0);
        (self.pos - half, self.pos + half)
    }
}

/// One obstacle: an upper and lower pipe sharing a horizontal position and
/// separated by a vertical gap. Recycled, never destroyed.
#[derive(Debug, Clone, Copy)]
pub struct PipePair {
    /// Left edge of both pipes
    pub x: f32,
    /// Bottom of the upper pipe (top of the gap)
    pub gap_y: f32,
    /// Vertical gap size; the lower pipe starts at `gap_y + gap`
    pub gap: f32,
}

impl PipePair {
    pub fn right_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Fully scrolled past the left screen boundary
    pub fn off_screen(&self) -> bool {
        self.right_edge() <= 0.0
    }

    /// Upper pipe rect as (min, max) corners
    pub fn upper_rect(&self) -> (Vec2, Vec2) {
        (Vec2::new(self.x, 0.0), Vec2::new(self.right_edge(), self.gap_y))
    }

    /// Lower pipe rect as (min, max) corners
    pub fn lower_rect(&self, screen_height: f32) -> (Vec2, Vec2) {
        (
            Vec2::new(self.x, self.gap_y + self.gap),
            Vec2::new(self.right_edge(), screen_height),
        )
    }
}

/// Things that happened during a tick; drained by the shell for HUD/logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    /// A pipe pair was recycled and the score incremented
    Scored { score: u32 },
    DifficultyChanged(Difficulty),
    GameOver { score: u32 },
    Restarted,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all pipe placement
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Fixed-size obstacle pool (PIPE_POOL_SIZE pairs)
    pub pipes: Vec<PipePair>,
    pub score: u32,
    pub difficulty: Difficulty,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the pipe pool placed ahead of the bird
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            bird: Bird::new(config.bird_start),
            pipes: Vec::with_capacity(PIPE_POOL_SIZE),
            score: 0,
            difficulty: Difficulty::Easy,
            time_ticks: 0,
            events: Vec::new(),
        };
        pipes::spawn_pool(&mut state);
        state
    }

    /// Horizontal position of the rightmost pipe pair (0 when none placed yet)
    pub fn rightmost_pipe_x(&self) -> f32 {
        self.pipes.iter().map(|p| p.x).fold(0.0, f32::max)
    }

    /// Full reset back to a fresh run. The RNG stream continues so successive
    /// runs see different pipe layouts.
    pub fn reset(&mut self) {
        self.bird = Bird::new(self.config.bird_start);
        self.score = 0;
        self.difficulty = Difficulty::Easy;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.pipes.clear();
        pipes::spawn_pool(self);
        self.events.push(GameEvent::Restarted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_playing_at_zero() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.pipes.len(), PIPE_POOL_SIZE);
    }

    #[test]
    fn reset_keeps_pool_and_clears_run() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.score = 42;
        state.difficulty = Difficulty::Normal;
        state.phase = GamePhase::GameOver { ticks_left: 0 };
        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.pipes.len(), PIPE_POOL_SIZE);
        assert_eq!(state.events.last(), Some(&GameEvent::Restarted));
    }

    #[test]
    fn flap_replaces_vertical_velocity() {
        let mut bird = Bird::new(Vec2::new(40.0, 300.0));
        bird.vel.y = 500.0;
        bird.flap();
        assert_eq!(bird.vel.y, -FLAP_VELOCITY);
    }

    #[test]
    fn countdown_seconds_rounds_up() {
        let phase = GamePhase::Resuming { ticks_left: 180 };
        assert_eq!(phase.countdown_seconds(), Some(3));
        let phase = GamePhase::Resuming { ticks_left: 120 };
        assert_eq!(phase.countdown_seconds(), Some(2));
        let phase = GamePhase::Resuming { ticks_left: 1 };
        assert_eq!(phase.countdown_seconds(), Some(1));
        assert_eq!(GamePhase::Playing.countdown_seconds(), None);
    }
}
