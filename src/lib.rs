//! Flappy Dash - a Flappy Bird style browser game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe recycling, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `persistence`: Best-score storage behind a small capability trait
//! - `config`: Shared scene configuration
//! - `settings`: Player preferences

pub mod config;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use persistence::ScoreStore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulation tick rate in Hz
    pub const TICK_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Bird sits at a fixed fraction of the screen width
    pub const BIRD_X_FRAC: f32 = 0.1;
    pub const BIRD_WIDTH: f32 = 22.0;
    pub const BIRD_HEIGHT: f32 = 20.0;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 400.0;
    /// A flap sets vertical velocity to -FLAP_VELOCITY
    pub const FLAP_VELOCITY: f32 = 200.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 52.0;
    /// Leftward scroll speed (pixels/s)
    pub const PIPE_SPEED: f32 = 200.0;
    /// Fixed pool size; pipes are recycled, never destroyed
    pub const PIPE_POOL_SIZE: usize = 4;
    /// Minimum distance the pipe gap keeps from the top/bottom edges
    pub const EDGE_MARGIN: f32 = 30.0;

    /// Delay between game over and automatic restart (ticks)
    pub const GAME_OVER_DELAY_TICKS: u32 = TICK_HZ;
    /// Resume countdown length in seconds ("Fly in: 3..1")
    pub const COUNTDOWN_SECONDS: u32 = 3;
}
