//! The player's ship and its bullet stream

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidField};
use super::body::MovingBody;
use super::geometry::{point_in_circle, transform_polygon};
use super::state::GameEvent;
use super::tick::TickInput;
use crate::consts::*;
use crate::forward_vector;

/// Isosceles triangle, nose up
pub const SHIP_SILHOUETTE: [Vec2; 3] = [
    Vec2::new(0.0, -SHIP_NOSE_OFFSET),
    Vec2::new(-12.5, 12.5),
    Vec2::new(12.5, 12.5),
];

/// Ship life cycle. `Dead` lasts until the session restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipState {
    Alive,
    Dead,
}

/// A projectile. Lives until it hits an asteroid.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: MovingBody,
    spent: bool,
}

impl Bullet {
    fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            body: MovingBody::new(pos, vel, 0.0, BULLET_SIZE),
            spent: false,
        }
    }
}

/// The player-controlled ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: MovingBody,
    pub state: ShipState,
    bullets: Vec<Bullet>,
}

impl Ship {
    /// A stationary ship facing up at `pos`
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: MovingBody::new(pos, Vec2::ZERO, 0.0, SHIP_NOSE_OFFSET as u32),
            state: ShipState::Alive,
            bullets: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == ShipState::Alive
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn forward(&self) -> Vec2 {
        forward_vector(self.body.rotation)
    }

    /// Silhouette in screen space (also the collision probes)
    pub fn outline(&self) -> Vec<Vec2> {
        transform_polygon(&SHIP_SILHOUETTE, self.body.pos, self.body.rotation, 1.0)
    }

    /// Apply one frame of controls. Ignored once dead.
    pub fn process_input(&mut self, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
        if !self.is_alive() {
            return;
        }

        if input.rotate_left {
            self.body.rotation -= SHIP_ROTATION_SPEED * dt;
        }
        if input.rotate_right {
            self.body.rotation += SHIP_ROTATION_SPEED * dt;
        }

        // No speed cap
        if input.thrust {
            self.body.vel += self.forward() * SHIP_ACCELERATION * dt;
            events.push(GameEvent::ThrustEngaged);
        }
        if input.thrust_released {
            events.push(GameEvent::ThrustReleased);
        }

        if input.fire {
            self.spawn_bullet();
            events.push(GameEvent::BulletFired);
        }
    }

    /// Append one bullet at the nose, travelling along the forward vector
    pub fn spawn_bullet(&mut self) {
        let forward = self.forward();
        let pos = self.body.pos + forward * SHIP_NOSE_OFFSET;
        self.bullets.push(Bullet::new(pos, forward * BULLET_SPEED));
    }

    /// True if any silhouette vertex lies inside the asteroid's radius.
    /// Destroyed asteroids never collide.
    pub fn is_colliding_with(&self, asteroid: &Asteroid) -> bool {
        if asteroid.is_destroyed() {
            return false;
        }
        let radius = asteroid.body.size as f32;
        self.outline()
            .into_iter()
            .any(|probe| point_in_circle(asteroid.body.pos, radius, probe))
    }

    /// Move the ship, resolve ship and bullet collisions against the field.
    ///
    /// The first asteroid touching the ship kills it. Each bullet destroys at
    /// most the first asteroid containing it. Returns the number of asteroids
    /// destroyed, one point each.
    pub fn update(&mut self, dt: f32, field: &mut AsteroidField, events: &mut Vec<GameEvent>) -> u32 {
        self.body.integrate(dt);

        if self.is_alive() && field.first_match(|a| self.is_colliding_with(a)).is_some() {
            self.state = ShipState::Dead;
            log::debug!("Ship destroyed at {:?}", self.body.pos);
            events.push(GameEvent::ShipDestroyed);
        }

        let mut destroyed = 0;
        for bullet in &mut self.bullets {
            bullet.body.integrate(dt);
            let pos = bullet.body.pos;

            let hit = field.first_match(|a| point_in_circle(a.body.pos, a.body.size as f32, pos));
            if let Some(index) = hit {
                if let Some(outcome) = field.destroy(index) {
                    destroyed += 1;
                    events.push(GameEvent::AsteroidDestroyed {
                        id: outcome.id,
                        size: outcome.size,
                        split: outcome.split,
                    });
                }
                bullet.spent = true;
            }
        }

        self.bullets.retain(|b| !b.spent);
        field.compact();
        destroyed
    }
}
