//! Platform abstraction layer
//!
//! Handles the pieces owned by the host window system:
//! - Input events (keyboard edges)
//! - Frame timing
//! - Presenting a finished frame

pub mod input;

use std::time::Instant;

pub use input::{InputSource, Key, KeyboardState, sample_tick_input};

use crate::renderer::RenderSink;
use crate::sim::clamp_delta;

/// Window/display collaborator driven by [`crate::Game::run`]
pub trait Platform {
    type Sink: RenderSink;

    /// Pump OS events into the keyboard state. Returns false once the window
    /// has been closed.
    fn poll_input(&mut self, keyboard: &mut KeyboardState) -> bool;

    /// Target for this frame's draw calls
    fn sink(&mut self) -> &mut Self::Sink;

    /// Show the finished frame. May block for vsync.
    fn present(&mut self);
}

/// Measures real time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call, clamped to the maximum step
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        clamp_delta(raw)
    }
}
