//! Session state: the ship, the asteroid field and the score
//!
//! The session is an explicit value owned by the frame loop. Restarting
//! replaces the ship wholesale and repopulates the field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::AsteroidField;
use super::body::MovingBody;
use super::ship::{Ship, ShipState};
use crate::consts::*;

/// Things the simulation reports to the outside world (audio, logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Thrust held this frame
    ThrustEngaged,
    /// Thrust key let go this frame
    ThrustReleased,
    BulletFired,
    ShipDestroyed,
    AsteroidDestroyed { id: u32, size: u32, split: bool },
    GameRestarted,
}

/// End-of-game banner to draw over the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Won,
    Dead,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the asteroid RNG was created from
    pub seed: u64,
    /// Asteroids per wave on restart
    pub wave_size: u32,
    pub ship: Ship,
    pub asteroids: AsteroidField,
    /// Asteroids destroyed this session
    pub score: u64,
    /// True iff the field is empty while the ship is alive
    pub won: bool,
    /// Set when the quit key is pressed
    pub quit_requested: bool,
    /// Events produced since the last drain
    pub(super) events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session: fresh ship and a random wave of `wave_size` asteroids
    pub fn new(seed: u64, wave_size: u32) -> Self {
        let mut state = Self::empty(seed, wave_size);
        state.restart();
        state
    }

    /// A session with a ship but no asteroids (scenario setup, tests)
    pub fn empty(seed: u64, wave_size: u32) -> Self {
        Self {
            seed,
            wave_size,
            ship: Ship::new(Vec2::new(SHIP_SPAWN_X, SHIP_SPAWN_Y)),
            asteroids: AsteroidField::new(seed),
            score: 0,
            won: false,
            quit_requested: false,
            events: Vec::new(),
        }
    }

    /// Replace the ship, reset the score and spawn a new wave
    pub fn restart(&mut self) {
        self.ship = Ship::new(Vec2::new(SHIP_SPAWN_X, SHIP_SPAWN_Y));
        self.score = 0;
        self.asteroids.clear();
        self.asteroids.spawn_wave(self.wave_size);
        self.refresh_win_flag();
        self.events.push(GameEvent::GameRestarted);
        log::info!(
            "Game restarted (seed {}, {} asteroids)",
            self.seed,
            self.wave_size
        );
    }

    /// Insert an asteroid directly into the field
    pub fn add_asteroid(&mut self, body: MovingBody) -> u32 {
        self.asteroids.insert(body)
    }

    /// Restart is only offered once the round is over
    pub fn can_restart(&self) -> bool {
        !self.ship.is_alive() || self.won
    }

    pub fn refresh_win_flag(&mut self) {
        self.won = self.ship.is_alive() && self.asteroids.is_empty();
    }

    /// Take every event produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn overlay(&self) -> Option<Overlay> {
        if !self.ship.is_alive() {
            Some(Overlay::Dead)
        } else if self.won {
            Some(Overlay::Won)
        } else {
            None
        }
    }

    /// Serializable view of the session
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            won: self.won,
            ship_state: self.ship.state,
            ship: self.ship.body,
            bullets: self.ship.bullets().iter().map(|b| b.body).collect(),
            asteroids: self
                .asteroids
                .iter()
                .map(|a| AsteroidSnapshot {
                    id: a.id,
                    body: a.body,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSnapshot {
    pub id: u32,
    pub body: MovingBody,
}

/// Point-in-time copy of everything visible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u64,
    pub won: bool,
    pub ship_state: ShipState,
    pub ship: MovingBody,
    pub bullets: Vec<MovingBody>,
    pub asteroids: Vec<AsteroidSnapshot>,
}
