//! Simulation core
//!
//! All gameplay logic lives here, free of rendering, audio and platform
//! dependencies:
//! - Delta time is clamped before use
//! - Seeded RNG only
//! - Stable iteration order (asteroids by id)
//! - Collection removal is mark-then-compact

pub mod asteroid;
pub mod body;
pub mod geometry;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidField, Destroyed};
pub use body::MovingBody;
pub use geometry::{clamp_point, clamp_to_float_range, point_in_circle, transform_polygon};
pub use ship::{Bullet, SHIP_SILHOUETTE, Ship, ShipState};
pub use state::{AsteroidSnapshot, GameEvent, GameState, Overlay, Snapshot};
pub use tick::{TickInput, clamp_delta, tick};
