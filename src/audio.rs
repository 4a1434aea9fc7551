//! Sound effects driven by simulation events
//!
//! The simulation never touches audio. The frame loop drains its events and
//! hands them to [`AudioManager`], which maps each one to a sample on a fixed
//! mixer channel. The actual mixer is supplied by the host through
//! [`AudioSink`].

use std::fmt;

use crate::sim::GameEvent;

/// Mixer channel a sample plays on. Playing on a busy channel replaces the
/// sound that was there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel(pub u8);

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Engine hum while thrusting
    ShipHover,
    /// Bullet fired
    LaserShoot,
    /// Ship hit by an asteroid
    ShipDead,
    /// Asteroid destroyed by a bullet
    AsteroidExplosion,
    /// New round started
    RestartGame,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::ShipHover,
        SoundEffect::LaserShoot,
        SoundEffect::ShipDead,
        SoundEffect::AsteroidExplosion,
        SoundEffect::RestartGame,
    ];

    pub fn channel(&self) -> Channel {
        match self {
            SoundEffect::RestartGame => Channel(0),
            SoundEffect::ShipHover => Channel(1),
            SoundEffect::LaserShoot => Channel(2),
            SoundEffect::ShipDead => Channel(3),
            SoundEffect::AsteroidExplosion => Channel(4),
        }
    }

    /// Asset file name, relative to the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::ShipHover => "spaceshipHover.wav",
            SoundEffect::LaserShoot => "LaserShoot.wav",
            SoundEffect::ShipDead => "ShipDead.wav",
            SoundEffect::AsteroidExplosion => "AsteroidExplosion.wav",
            SoundEffect::RestartGame => "RestartGame.wav",
        }
    }

    /// Per-sample mix level (0.0 - 1.0)
    pub fn gain(&self) -> f32 {
        match self {
            SoundEffect::ShipHover => 1.0,
            SoundEffect::LaserShoot => 1.0 / 7.0,
            SoundEffect::ShipDead => 1.0 / 5.0,
            SoundEffect::AsteroidExplosion => 1.0 / 8.0,
            SoundEffect::RestartGame => 0.5,
        }
    }
}

/// Audio failures. None of them stop the game.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioError {
    /// Sample failed to load
    Load { effect: SoundEffect, reason: String },
    /// Sample failed to start
    Play { effect: SoundEffect, reason: String },
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Load { effect, reason } => {
                write!(f, "failed to load {}: {reason}", effect.file_name())
            }
            AudioError::Play { effect, reason } => {
                write!(f, "failed to play {}: {reason}", effect.file_name())
            }
        }
    }
}

impl std::error::Error for AudioError {}

/// Mixer backend supplied by the host
pub trait AudioSink {
    fn load(&mut self, effect: SoundEffect) -> Result<(), AudioError>;
    fn play(&mut self, effect: SoundEffect, channel: Channel, volume: f32)
        -> Result<(), AudioError>;
    fn stop_channel(&mut self, channel: Channel);
}

/// Sink for hosts without sound
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn load(&mut self, _effect: SoundEffect) -> Result<(), AudioError> {
        Ok(())
    }

    fn play(&mut self, _effect: SoundEffect, _channel: Channel, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_channel(&mut self, _channel: Channel) {}
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    loaded: [bool; SoundEffect::ALL.len()],
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    hovering: bool,
}

impl<S: AudioSink> AudioManager<S> {
    /// Load every sample up front. Samples that fail stay silent.
    pub fn new(mut sink: S) -> Self {
        let mut loaded = [false; SoundEffect::ALL.len()];
        for (slot, effect) in loaded.iter_mut().zip(SoundEffect::ALL) {
            match sink.load(effect) {
                Ok(()) => *slot = true,
                Err(err) => log::warn!("{err} - effect disabled"),
            }
        }

        Self {
            sink,
            loaded,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            hovering: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.stop_hover();
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Play a sound effect on its channel
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.gain();
        if vol <= 0.0 {
            return;
        }

        let Some(index) = SoundEffect::ALL.iter().position(|e| *e == effect) else {
            return;
        };
        if !self.loaded[index] {
            return;
        }

        if let Err(err) = self.sink.play(effect, effect.channel(), vol) {
            log::warn!("{err}");
        }
    }

    fn stop_hover(&mut self) {
        if self.hovering {
            self.sink.stop_channel(SoundEffect::ShipHover.channel());
            self.hovering = false;
        }
    }

    /// React to one simulation event
    pub fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ThrustEngaged => {
                if !self.hovering {
                    self.play(SoundEffect::ShipHover);
                    self.hovering = !self.muted;
                }
            }
            GameEvent::ThrustReleased => self.stop_hover(),
            GameEvent::BulletFired => self.play(SoundEffect::LaserShoot),
            GameEvent::ShipDestroyed => {
                self.play(SoundEffect::ShipDead);
                self.stop_hover();
            }
            GameEvent::AsteroidDestroyed { .. } => self.play(SoundEffect::AsteroidExplosion),
            GameEvent::GameRestarted => {
                self.stop_hover();
                self.play(SoundEffect::RestartGame);
            }
        }
    }
}
