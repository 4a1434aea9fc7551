//! Wireframe Asteroids - a wrapped-field arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation core (motion, screen wrap, collisions, splitting)
//! - `renderer`: Line/circle rendering sink and wireframe drawing
//! - `audio`: Sound effect catalogue and event-driven playback
//! - `platform`: Input source, frame clock, window collaborator
//! - `settings`: JSON configuration
//! - `game`: Frame loop context tying the above together

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Longest step the simulation will take, in seconds
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Ship defaults
    pub const SHIP_SPAWN_X: f32 = 400.0;
    pub const SHIP_SPAWN_Y: f32 = 500.0;
    /// Rotation rate while a turn key is held (radians/s)
    pub const SHIP_ROTATION_SPEED: f32 = 5.0;
    /// Thrust acceleration along the forward vector (units/s²)
    pub const SHIP_ACCELERATION: f32 = 100.0;
    /// Distance from ship centre to its nose vertex
    pub const SHIP_NOSE_OFFSET: f32 = 25.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 200.0;
    pub const BULLET_SIZE: u32 = 2;

    /// Asteroid silhouette
    pub const ASTEROID_VERTICES: usize = 20;
    pub const ASTEROID_NOISE_MIN: f32 = 0.8;
    pub const ASTEROID_NOISE_MAX: f32 = 1.2;
    /// Constant spin added every update (radians/s)
    pub const ASTEROID_SPIN: f32 = 0.7;

    /// Asteroids above this size split in two when hit
    pub const SPLIT_THRESHOLD: u32 = 12;
    pub const CHILD_SPEED: f32 = 35.0;
    pub const CHILD_ROTATION: f32 = 0.5;

    /// Random wave spawn ranges
    pub const DEFAULT_ASTEROID_COUNT: u32 = 7;
    /// Configurable wave size range
    pub const MIN_ASTEROID_COUNT: u32 = 1;
    pub const MAX_ASTEROID_COUNT: u32 = 64;
    pub const ASTEROID_MIN_SIZE: u32 = 48;
    pub const ASTEROID_MAX_SIZE: u32 = 96;
    pub const ASTEROID_MAX_SPAWN_SPEED: f32 = 30.0;
    pub const ASTEROID_MAX_SPAWN_ROTATION: f32 = 1.0;
    /// Height of the strip at the bottom kept free of spawns
    pub const SPAWN_SAFE_MARGIN: f32 = 200.0;
}

/// Unit vector the nose points along for a given rotation.
///
/// Rotation 0 points up the screen (negative Y).
#[inline]
pub fn forward_vector(rotation: f32) -> Vec2 {
    Vec2::new(rotation.sin(), -rotation.cos())
}

/// Convert an angle into a unit direction using the (sin, cos) convention
/// the asteroid silhouettes and split velocities are built with.
#[inline]
pub fn sin_cos_direction(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}
