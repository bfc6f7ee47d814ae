//! Shape tessellation and per-frame scene building
//!
//! Everything is axis-aligned rects and small circles in logical screen
//! coordinates; the pipeline maps them to NDC.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::{BIRD_HEIGHT, BIRD_WIDTH};
use crate::sim::{GamePhase, GameState};

/// Append a filled rect given (min, max) corners
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));
    out.push(Vertex::new(min.x, max.y, color));
}

/// Append a filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Build the vertex list for one frame
pub fn build_scene(state: &GameState, reduced_motion: bool) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(256);

    // Pipes: body plus a darker rim strip facing the gap
    for pair in &state.pipes {
        let (u_min, u_max) = pair.upper_rect();
        let (l_min, l_max) = pair.lower_rect(state.config.height);
        rect(&mut vertices, u_min, u_max, colors::PIPE);
        rect(&mut vertices, l_min, l_max, colors::PIPE);

        let rim = 6.0;
        rect(
            &mut vertices,
            Vec2::new(u_min.x, (u_max.y - rim).max(0.0)),
            u_max,
            colors::PIPE_RIM,
        );
        rect(
            &mut vertices,
            l_min,
            Vec2::new(l_max.x, (l_min.y + rim).min(l_max.y)),
            colors::PIPE_RIM,
        );
    }

    // Bird: tinted red once the run has ended
    let dead = matches!(state.phase, GamePhase::GameOver { .. });
    let body = if dead && !reduced_motion {
        colors::BIRD_HIT
    } else {
        colors::BIRD
    };
    let (b_min, b_max) = state.bird.aabb();
    rect(&mut vertices, b_min, b_max, body);

    let wing_min = Vec2::new(b_min.x + 2.0, state.bird.pos.y - 2.0);
    let wing_max = Vec2::new(state.bird.pos.x, state.bird.pos.y + BIRD_HEIGHT * 0.3);
    rect(&mut vertices, wing_min, wing_max, colors::BIRD_WING);

    circle(
        &mut vertices,
        Vec2::new(b_max.x - BIRD_WIDTH * 0.25, b_min.y + BIRD_HEIGHT * 0.3),
        2.5,
        colors::BIRD_EYE,
        10,
    );

    // Dim the scene while frozen on user request
    if matches!(state.phase, GamePhase::Paused | GamePhase::Resuming { .. }) {
        rect(
            &mut vertices,
            Vec2::ZERO,
            Vec2::new(state.config.width, state.config.height),
            colors::PAUSE_OVERLAY,
        );
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn rect_emits_two_triangles() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::ZERO, Vec2::new(10.0, 20.0), colors::PIPE);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn scene_covers_every_pooled_pipe() {
        let state = GameState::new(GameConfig::default(), 3);
        let vertices = build_scene(&state, false);
        // 4 rects per pair (body + rim, upper + lower) plus the bird
        assert!(vertices.len() >= state.pipes.len() * 4 * 6);
    }
}
