//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Persistence reaches in through the `ScoreStore` capability only.

pub mod difficulty;
pub mod pipes;
pub mod state;
pub mod tick;

pub use difficulty::Difficulty;
pub use pipes::place_pair;
pub use state::{Bird, GameEvent, GamePhase, GameState, PipePair};
pub use tick::{TickInput, recycle_pipes, tick};
