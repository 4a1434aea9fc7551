//! Shared motion state for the ship, asteroids and bullets

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Position, velocity, rotation and size of a simulated entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingBody {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians
    pub rotation: f32,
    /// Radius / scale unit, > 0 while alive
    pub size: u32,
}

impl MovingBody {
    pub fn new(pos: Vec2, vel: Vec2, rotation: f32, size: u32) -> Self {
        Self {
            pos,
            vel,
            rotation,
            size,
        }
    }

    /// Advance position by velocity * dt
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Wrap around the default playfield
    pub fn wrap(&mut self) {
        self.wrap_within(SCREEN_WIDTH, SCREEN_HEIGHT);
    }

    /// Toroidal wrap: an entity fully past one edge reappears just past the
    /// opposite edge. Each axis is checked once.
    pub fn wrap_within(&mut self, width: f32, height: f32) {
        let size = self.size as f32;
        self.pos.x = wrap_axis(self.pos.x, width, size);
        self.pos.y = wrap_axis(self.pos.y, height, size);
    }
}

#[inline]
fn wrap_axis(value: f32, extent: f32, size: f32) -> f32 {
    if value > extent + size {
        -size
    } else if value < -size {
        extent + size
    } else {
        value
    }
}
