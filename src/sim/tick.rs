//! Fixed timestep simulation tick
//!
//! The whole game advances through `tick`: bird physics, pipe scrolling,
//! recycling/scoring, collision and the pause/game-over phase machine.
//! Callable from the browser frame loop or from a test driver.

use super::difficulty::Difficulty;
use super::pipes;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::persistence::{self, ScoreStore};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Upward impulse (click/tap/space)
    pub flap: bool,
    /// Pause toggle; in Paused it starts the resume countdown
    pub pause: bool,
}

/// Advance the game by one fixed timestep.
///
/// `store` is the best-score backend; the recycle loop and game over both
/// persist through it.
pub fn tick(state: &mut GameState, input: &TickInput, store: &mut dyn ScoreStore, dt: f32) {
    match state.phase {
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }
            state.time_ticks += 1;

            if input.flap {
                state.bird.flap();
                state.events.push(GameEvent::Flapped);
            }

            // Bird physics: gravity only, horizontal position is fixed
            state.bird.vel.y += GRAVITY * dt;
            state.bird.pos.y += state.bird.vel.y * dt;

            // Scroll the stream
            for pair in &mut state.pipes {
                pair.x -= PIPE_SPEED * dt;
            }

            recycle_pipes(state, store);

            if bird_out_of_bounds(state) || bird_hits_pipe(state) {
                game_over(state, store);
            }
        }

        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Resuming {
                    ticks_left: COUNTDOWN_SECONDS * TICK_HZ,
                };
            }
        }

        GamePhase::Resuming { ticks_left } => {
            // Physics stay frozen until the countdown runs out
            state.phase = match ticks_left.checked_sub(1) {
                Some(left) if left > 0 => GamePhase::Resuming { ticks_left: left },
                _ => GamePhase::Playing,
            };
        }

        GamePhase::GameOver { ticks_left } => match ticks_left.checked_sub(1) {
            Some(left) if left > 0 => state.phase = GamePhase::GameOver { ticks_left: left },
            _ => state.reset(),
        },
    }
}

/// Scan the pool once; every pair fully past the left boundary is re-placed
/// ahead of the stream, scoring one point and re-evaluating difficulty.
pub fn recycle_pipes(state: &mut GameState, store: &mut dyn ScoreStore) {
    for i in 0..state.pipes.len() {
        if !state.pipes[i].off_screen() {
            continue;
        }

        let rightmost = state.rightmost_pipe_x();
        let tier = state.difficulty;
        let config = state.config;
        pipes::place_pair(&mut state.pipes[i], rightmost, tier, &config, &mut state.rng);

        state.score += 1;
        state.events.push(GameEvent::Scored { score: state.score });
        persistence::record_score(store, state.score);

        let next = Difficulty::for_score(state.difficulty, state.score);
        if next != state.difficulty {
            log::info!("Difficulty up: {} at score {}", next.as_str(), state.score);
            state.difficulty = next;
            state.events.push(GameEvent::DifficultyChanged(next));
        }
    }
}

/// Bird past the bottom edge or at/above the top edge
fn bird_out_of_bounds(state: &GameState) -> bool {
    let (min, max) = state.bird.aabb();
    max.y >= state.config.height || min.y <= 0.0
}

/// Axis-aligned overlap between the bird and any pipe rect
fn bird_hits_pipe(state: &GameState) -> bool {
    let (bird_min, bird_max) = state.bird.aabb();
    state.pipes.iter().any(|pair| {
        let upper = pair.upper_rect();
        let lower = pair.lower_rect(state.config.height);
        for (min, max) in [upper, lower] {
            if bird_min.x < max.x
                && bird_max.x > min.x
                && bird_min.y < max.y
                && bird_max.y > min.y
            {
                return true;
            }
        }
        false
    })
}

/// Freeze physics, persist the best score and schedule the restart
fn game_over(state: &mut GameState, store: &mut dyn ScoreStore) {
    persistence::record_score(store, state.score);
    state.events.push(GameEvent::GameOver { score: state.score });
    log::info!("Game over at score {}", state.score);
    state.phase = GamePhase::GameOver {
        ticks_left: GAME_OVER_DELAY_TICKS,
    };
}
