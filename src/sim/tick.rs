//! Per-frame simulation step
//!
//! Order per frame: clamp dt, handle quit/restart, recompute the win flag,
//! then (ship alive only) ship input, ship update with collision handling,
//! ship wrap, asteroid updates.

use super::state::GameState;
use crate::consts::MAX_FRAME_DT;

/// Control state sampled for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Thrust held
    pub thrust: bool,
    /// Thrust released this frame
    pub thrust_released: bool,
    /// Fire pressed this frame (not held)
    pub fire: bool,
    /// Confirm pressed this frame
    pub confirm: bool,
    /// Quit pressed this frame
    pub quit: bool,
}

/// Clamp a raw frame time to [0, MAX_FRAME_DT]. Non-finite input gives 0.
#[inline]
pub fn clamp_delta(raw: f32) -> f32 {
    if raw.is_finite() {
        raw.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = clamp_delta(dt);

    if input.quit {
        log::info!("Quit requested");
        state.quit_requested = true;
    }

    if input.confirm && state.can_restart() {
        state.restart();
    }

    state.refresh_win_flag();

    // A dead ship freezes the field until restart
    if !state.ship.is_alive() {
        return;
    }

    let GameState {
        ship,
        asteroids,
        events,
        ..
    } = &mut *state;

    ship.process_input(input, dt, events);
    let destroyed = ship.update(dt, asteroids, events);
    ship.body.wrap();
    asteroids.update(dt);

    state.score += u64::from(destroyed);
    state.refresh_win_flag();
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::sim::body::MovingBody;
    use crate::sim::state::GameEvent;

    const DT: f32 = 1.0 / 60.0;

    fn rock(state: &mut GameState, x: f32, y: f32, size: u32) -> u32 {
        state.add_asteroid(MovingBody::new(Vec2::new(x, y), Vec2::ZERO, 0.0, size))
    }

    fn fire() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_clamp_delta() {
        assert_eq!(clamp_delta(0.2), MAX_FRAME_DT);
        assert_eq!(clamp_delta(0.01), 0.01);
        assert_eq!(clamp_delta(-1.0), 0.0);
        assert_eq!(clamp_delta(f32::NAN), 0.0);
    }

    #[test]
    fn test_ship_dies_on_asteroid() {
        let mut state = GameState::empty(1, 0);
        rock(&mut state, 400.0, 500.0, 48);
        tick(&mut state, &TickInput::default(), DT);
        assert!(!state.ship.is_alive());
        assert!(!state.won);
        assert!(state.drain_events().contains(&GameEvent::ShipDestroyed));
    }

    #[test]
    fn test_dead_ship_freezes_field() {
        let mut state = GameState::empty(1, 0);
        rock(&mut state, 400.0, 500.0, 48);
        tick(&mut state, &TickInput::default(), DT);
        assert!(!state.ship.is_alive());

        let before = state.snapshot();
        tick(&mut state, &fire(), DT);
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_shot_splits_large_asteroid() {
        let mut state = GameState::empty(1, 0);
        // Straight above the nose, within one frame of bullet travel
        let id = rock(&mut state, 400.0, 460.0, 14);
        tick(&mut state, &fire(), DT);

        assert_eq!(state.score, 1);
        assert!(state.asteroids.get(id).is_none());
        assert_eq!(state.asteroids.len(), 2);
        assert!(state.asteroids.iter().all(|a| a.body.size == 7));
    }

    #[test]
    fn test_shot_removes_small_asteroid() {
        let mut state = GameState::empty(1, 0);
        rock(&mut state, 400.0, 460.0, 12);
        tick(&mut state, &fire(), DT);

        assert_eq!(state.score, 1);
        assert!(state.asteroids.is_empty());
        assert!(state.won);
    }

    #[test]
    fn test_score_counts_one_per_asteroid() {
        let mut state = GameState::empty(1, 0);
        rock(&mut state, 100.0, 100.0, 48);
        let mut last = 0;
        for frame in 0..600 {
            let input = TickInput {
                rotate_left: frame % 3 == 0,
                fire: frame % 5 == 0,
                ..Default::default()
            };
            tick(&mut state, &input, DT);
            let destroyed = state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::AsteroidDestroyed { .. }))
                .count() as u64;
            assert_eq!(state.score, last + destroyed);
            last = state.score;
        }
    }

    #[test]
    fn test_win_then_restart() {
        let mut state = GameState::empty(3, 4);
        rock(&mut state, 400.0, 460.0, 12);
        tick(&mut state, &fire(), DT);
        assert!(state.won);

        // Confirm restarts and repopulates; the win flag drops immediately
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, DT);
        assert!(!state.won || !state.ship.is_alive());
        assert_eq!(state.score, 0);
        assert!(state.drain_events().contains(&GameEvent::GameRestarted));
    }

    #[test]
    fn test_confirm_ignored_mid_round() {
        let mut state = GameState::empty(3, 4);
        rock(&mut state, 100.0, 100.0, 20);
        state.score = 5;
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, DT);
        assert_eq!(state.score, 5);
        assert_eq!(state.asteroids.len(), 1);
    }

    #[test]
    fn test_ship_wraps() {
        let mut state = GameState::empty(1, 0);
        rock(&mut state, 100.0, 100.0, 20);
        state.ship.body.pos = Vec2::new(SCREEN_WIDTH + 24.0, 300.0);
        state.ship.body.vel = Vec2::new(120.0, 0.0);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ship.body.pos.x, -(state.ship.body.size as f32));
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut state = GameState::empty(1, 0);
        rock(&mut state, 100.0, 100.0, 20);
        state.ship.body.vel = Vec2::new(100.0, 0.0);
        tick(&mut state, &TickInput::default(), 1.0);
        assert!((state.ship.body.pos.x - (SHIP_SPAWN_X + 100.0 * MAX_FRAME_DT)).abs() < 1e-3);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = GameState::empty(1, 0);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit, DT);
        assert!(state.quit_requested);
    }

    #[test]
    fn test_same_seed_same_run() {
        let inputs: Vec<TickInput> = (0..240)
            .map(|i| TickInput {
                rotate_right: i % 4 == 0,
                thrust: i % 7 == 0,
                fire: i % 9 == 0,
                ..Default::default()
            })
            .collect();

        let mut a = GameState::new(77, 5);
        let mut b = GameState::new(77, 5);
        for input in &inputs {
            tick(&mut a, input, DT);
            tick(&mut b, input, DT);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
