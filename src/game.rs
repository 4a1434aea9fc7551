//! Frame loop context
//!
//! Owns the session, the audio manager and the frame clock. One frame is:
//! sample input, tick, forward events to audio, render.

use glam::Vec2;

use crate::audio::{AudioManager, AudioSink};
use crate::platform::{FrameClock, InputSource, KeyboardState, Platform, sample_tick_input};
use crate::renderer::{RenderSink, colors, render_scene};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

const FPS_WINDOW: usize = 60;
const FPS_POS: Vec2 = Vec2::new(700.0, 20.0);

/// Game instance holding all state
pub struct Game<A: AudioSink> {
    pub state: GameState,
    audio: AudioManager<A>,
    clock: FrameClock,
    show_fps: bool,
    // FPS tracking
    frame_times: [f32; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl<A: AudioSink> Game<A> {
    pub fn new(settings: &Settings, audio_sink: A) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let wave_size = settings.wave_size();
        log::info!("Starting session with seed {seed} and {wave_size} asteroids");

        let mut audio = AudioManager::new(audio_sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);

        Self {
            state: GameState::new(seed, wave_size),
            audio,
            clock: FrameClock::new(),
            show_fps: settings.show_fps,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn quit_requested(&self) -> bool {
        self.state.quit_requested
    }

    /// Run one frame with an explicit delta time
    pub fn frame_with_dt<I, S>(&mut self, input: &I, dt: f32, sink: &mut S)
    where
        I: InputSource + ?Sized,
        S: RenderSink + ?Sized,
    {
        let input = sample_tick_input(input);
        tick(&mut self.state, &input, dt);

        for event in self.state.drain_events() {
            self.audio.handle_event(&event);
        }

        self.track_fps(dt);

        render_scene(&self.state, sink);
        if self.show_fps {
            sink.draw_text(&format!("FPS: {}", self.fps), FPS_POS, colors::OVERLAY_TEXT);
        }
    }

    /// Drive frames until quit is requested or the window closes
    pub fn run<P: Platform>(&mut self, platform: &mut P) {
        let mut keyboard = KeyboardState::new();
        self.clock = FrameClock::new();

        while platform.poll_input(&mut keyboard) {
            let dt = self.clock.tick();
            self.frame_with_dt(&keyboard, dt, platform.sink());
            platform.present();
            keyboard.end_frame();

            if self.state.quit_requested {
                break;
            }
        }

        log::info!("Session ended with score {}", self.state.score);
    }

    fn track_fps(&mut self, dt: f32) {
        self.frame_times[self.frame_index] = dt;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        let elapsed: f32 = self.frame_times.iter().sum();
        if elapsed > 0.0 {
            self.fps = (FPS_WINDOW as f32 / elapsed).round() as u32;
        }
    }
}
