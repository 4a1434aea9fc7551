//! Rendering front of the simulation
//!
//! The game only needs two primitives from the host: a line and a filled
//! circle. Text is optional. Wireframes are transformed here and clamped to
//! the finite f32 range before reaching the sink.

pub mod batch;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use batch::FrameBatch;
pub use vertex::{Vertex, colors};

use crate::sim::geometry::{clamp_point, closed_edges, transform_polygon};
use crate::sim::{GameState, Overlay, SHIP_SILHOUETTE};

const SCORE_POS: Vec2 = Vec2::new(10.0, 20.0);
const BANNER_POS: Vec2 = Vec2::new(300.0, 250.0);
const PROMPT_POS: Vec2 = Vec2::new(150.0, 300.0);
const RESTART_PROMPT: &str = "Press enter to Restart or escape to exit.";

/// Drawing primitives supplied by the host
pub trait RenderSink {
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: [f32; 4]);
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    /// Fonts live outside the core, so text is a no-op unless the host has one
    fn draw_text(&mut self, _text: &str, _pos: Vec2, _color: [f32; 4]) {}
}

/// Draw a closed polygon after rotate/scale/translate
pub fn draw_wireframe<S: RenderSink + ?Sized>(
    sink: &mut S,
    model: &[Vec2],
    pos: Vec2,
    rotation: f32,
    scale: f32,
    color: [f32; 4],
) {
    let points: Vec<Vec2> = transform_polygon(model, pos, rotation, scale)
        .into_iter()
        .map(clamp_point)
        .collect();

    for (a, b) in closed_edges(&points) {
        sink.draw_line(a, b, color);
    }
}

/// Draw the whole scene for the current session state
pub fn render_scene<S: RenderSink + ?Sized>(state: &GameState, sink: &mut S) {
    match state.overlay() {
        Some(Overlay::Dead) => {
            sink.draw_text("You Are DEAD!", BANNER_POS, colors::OVERLAY_TEXT);
            sink.draw_text(RESTART_PROMPT, PROMPT_POS, colors::OVERLAY_TEXT);
            return;
        }
        Some(Overlay::Won) | None => {}
    }

    let ship = &state.ship;
    draw_wireframe(
        sink,
        &SHIP_SILHOUETTE,
        ship.body.pos,
        ship.body.rotation,
        1.0,
        colors::SHIP,
    );
    for bullet in ship.bullets() {
        sink.draw_filled_circle(bullet.body.pos, bullet.body.size as f32, colors::BULLET);
    }

    for asteroid in state.asteroids.iter() {
        draw_wireframe(
            sink,
            asteroid.silhouette(),
            asteroid.body.pos,
            asteroid.body.rotation,
            asteroid.body.size as f32,
            colors::ASTEROID,
        );
    }

    sink.draw_text(
        &format!("Score: {}", state.score),
        SCORE_POS,
        colors::SCORE_TEXT,
    );

    if state.won {
        sink.draw_text("You WON!", BANNER_POS, colors::OVERLAY_TEXT);
        sink.draw_text(RESTART_PROMPT, PROMPT_POS, colors::OVERLAY_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ASTEROID_VERTICES;
    use crate::sim::{MovingBody, ShipState};

    #[test]
    fn test_wireframe_closes_polygon() {
        let mut batch = FrameBatch::new();
        draw_wireframe(&mut batch, &SHIP_SILHOUETTE, Vec2::ZERO, 0.0, 1.0, colors::SHIP);
        assert_eq!(batch.line_count(), 3);
        // Last edge returns to the nose
        assert_eq!(batch.lines[5].position, [0.0, -25.0]);
    }

    #[test]
    fn test_wireframe_clamps_overflow() {
        let mut batch = FrameBatch::new();
        draw_wireframe(&mut batch, &SHIP_SILHOUETTE, Vec2::ZERO, 0.0, f32::MAX, colors::SHIP);
        assert!(batch
            .lines
            .iter()
            .all(|v| v.position.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn test_scene_draws_every_entity() {
        let mut state = GameState::empty(1, 0);
        state.add_asteroid(MovingBody::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 0.0, 30));
        state.ship.spawn_bullet();

        let mut batch = FrameBatch::new();
        render_scene(&state, &mut batch);
        assert_eq!(batch.line_count(), 3 + ASTEROID_VERTICES);
        assert!(!batch.triangles.is_empty());
        assert_eq!(batch.texts.len(), 1);
        assert_eq!(batch.texts[0].text, "Score: 0");
    }

    #[test]
    fn test_scene_win_overlay() {
        let mut state = GameState::empty(1, 0);
        state.refresh_win_flag();
        let mut batch = FrameBatch::new();
        render_scene(&state, &mut batch);
        let texts: Vec<_> = batch.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Score: 0", "You WON!", RESTART_PROMPT]);
    }

    #[test]
    fn test_scene_dead_draws_overlay_only() {
        let mut state = GameState::empty(1, 0);
        state.ship.state = ShipState::Dead;
        let mut batch = FrameBatch::new();
        render_scene(&state, &mut batch);
        assert!(batch.lines.is_empty());
        assert_eq!(batch.texts.len(), 2);
    }
}
