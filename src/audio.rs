//! Fire-and-forget sound effect triggers
//!
//! The simulation emits `GameEvent`s; this module turns them into playback
//! requests against whatever backend the host wires in. A missing or failing
//! backend is reported once to the log and then silently absorbed - audio
//! must never affect game state or block the tick.

use thiserror::Error;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player launched off a platform
    Jump,
    /// Coin collected
    CoinCollect,
}

/// Playback failed inside the backend (missing asset, dead device)
#[derive(Debug, Error)]
#[error("audio playback failed: {0}")]
pub struct PlaybackError(pub String);

/// A one-shot playback device. `play` must start playback and return
/// immediately; it is never awaited.
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), PlaybackError>;
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    playback_warned: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    /// Manager with no backend: every trigger is a silent no-op.
    pub fn disabled() -> Self {
        log::warn!("no audio backend - sound disabled");
        Self {
            backend: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            playback_warned: false,
        }
    }

    pub fn with_backend(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend: Some(backend),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            playback_warned: false,
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
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Turn one simulation trigger into a playback request.
    pub fn handle_event(&mut self, event: GameEvent) {
        let effect = match event {
            GameEvent::Jump => SoundEffect::Jump,
            GameEvent::CoinCollected => SoundEffect::CoinCollect,
        };
        self.play(effect);
    }

    /// Play a sound effect. Failures are absorbed here, never surfaced.
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = &mut self.backend else {
            return;
        };
        if let Err(err) = backend.play(effect, vol) {
            if !self.playback_warned {
                log::warn!("{err}; further audio errors suppressed");
                self.playback_warned = true;
            }
        }
    }
}
