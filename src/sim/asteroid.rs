//! Asteroids and the keyed collection that owns them
//!
//! Removal is two-phase: a hit asteroid is marked destroyed immediately (so
//! later scans in the same frame skip it) and physically dropped by
//! [`AsteroidField::compact`] once the scan is over.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::MovingBody;
use super::geometry::transform_polygon;
use crate::consts::*;
use crate::sin_cos_direction;

/// An irregular drifting rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub id: u32,
    pub body: MovingBody,
    /// Unit-circle outline with per-vertex radius noise, fixed at creation
    silhouette: Vec<Vec2>,
    destroyed: bool,
}

impl Asteroid {
    /// Build an asteroid, drawing a fresh noisy outline from `rng`
    pub fn new<R: Rng>(id: u32, body: MovingBody, rng: &mut R) -> Self {
        let silhouette = (0..ASTEROID_VERTICES)
            .map(|i| {
                let noise = rng.random_range(ASTEROID_NOISE_MIN..=ASTEROID_NOISE_MAX);
                let angle = (i as f32 / ASTEROID_VERTICES as f32) * TAU;
                sin_cos_direction(angle) * noise
            })
            .collect();

        Self {
            id,
            body,
            silhouette,
            destroyed: false,
        }
    }

    pub fn silhouette(&self) -> &[Vec2] {
        &self.silhouette
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Drift, spin and wrap
    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
        self.body.rotation += ASTEROID_SPIN * dt;
        self.body.wrap();
    }

    /// Outline in screen space at the current position, rotation and size
    pub fn outline(&self) -> Vec<Vec2> {
        transform_polygon(
            &self.silhouette,
            self.body.pos,
            self.body.rotation,
            self.body.size as f32,
        )
    }
}

/// What happened to an asteroid that was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destroyed {
    pub id: u32,
    pub size: u32,
    /// Whether two children were spawned
    pub split: bool,
}

/// Live asteroids keyed by a monotonically increasing id
#[derive(Debug, Clone)]
pub struct AsteroidField {
    /// Sorted by id (insertion order)
    asteroids: Vec<Asteroid>,
    next_id: u32,
    rng: Pcg32,
}

impl AsteroidField {
    pub fn new(seed: u64) -> Self {
        Self {
            asteroids: Vec::new(),
            next_id: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Insert a new asteroid built from `body` and return its id
    pub fn insert(&mut self, body: MovingBody) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let asteroid = Asteroid::new(id, body, &mut self.rng);
        self.asteroids.push(asteroid);
        id
    }

    /// Spawn `count` randomly placed asteroids, leaving the bottom strip free
    pub fn spawn_wave(&mut self, count: u32) {
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.random_range(0.0..SCREEN_WIDTH),
                self.rng.random_range(0.0..SCREEN_HEIGHT - SPAWN_SAFE_MARGIN),
            );
            let vel = Vec2::new(
                self.rng
                    .random_range(-ASTEROID_MAX_SPAWN_SPEED..=ASTEROID_MAX_SPAWN_SPEED),
                self.rng
                    .random_range(-ASTEROID_MAX_SPAWN_SPEED..=ASTEROID_MAX_SPAWN_SPEED),
            );
            let rotation = self
                .rng
                .random_range(-ASTEROID_MAX_SPAWN_ROTATION..=ASTEROID_MAX_SPAWN_ROTATION);
            let size = self.rng.random_range(ASTEROID_MIN_SIZE..=ASTEROID_MAX_SIZE);
            self.insert(MovingBody::new(pos, vel, rotation, size));
        }
        log::info!("Spawned wave of {} asteroids", count);
    }

    /// Drop every asteroid. Ids keep counting up.
    pub fn clear(&mut self) {
        self.asteroids.clear();
    }

    /// Live asteroids in iteration order
    pub fn iter(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| !a.destroyed)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn get(&self, id: u32) -> Option<&Asteroid> {
        self.iter().find(|a| a.id == id)
    }

    /// Asteroid at a scan index, including ones marked destroyed but not yet
    /// compacted
    pub fn at(&self, index: usize) -> Option<&Asteroid> {
        self.asteroids.get(index)
    }

    /// Index of the first live asteroid matching `pred`, in iteration order
    pub fn first_match<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&Asteroid) -> bool,
    {
        self.asteroids
            .iter()
            .position(|a| !a.destroyed && pred(a))
    }

    /// Apply the split rule to the asteroid at `index` and mark it destroyed.
    ///
    /// Above the split threshold two half-size children are appended at the
    /// parent's position, each heading in its own random direction. Children
    /// are live immediately. Returns `None` for an out-of-range or already
    /// destroyed index.
    pub fn destroy(&mut self, index: usize) -> Option<Destroyed> {
        let asteroid = self.asteroids.get_mut(index)?;
        if asteroid.destroyed {
            return None;
        }
        asteroid.destroyed = true;
        let (id, size, pos) = (asteroid.id, asteroid.body.size, asteroid.body.pos);

        let split = size > SPLIT_THRESHOLD;
        if split {
            for _ in 0..2 {
                let angle = self.rng.random_range(0.0..TAU);
                let vel = sin_cos_direction(angle) * CHILD_SPEED;
                self.insert(MovingBody::new(pos, vel, CHILD_ROTATION, size / 2));
            }
            log::debug!("Asteroid {} (size {}) split in two", id, size);
        } else {
            log::debug!("Asteroid {} (size {}) destroyed", id, size);
        }

        Some(Destroyed { id, size, split })
    }

    /// Physically remove everything marked destroyed
    pub fn compact(&mut self) {
        self.asteroids.retain(|a| !a.destroyed);
    }

    /// Advance every live asteroid
    pub fn update(&mut self, dt: f32) {
        for asteroid in self.asteroids.iter_mut().filter(|a| !a.destroyed) {
            asteroid.update(dt);
        }
    }
}
