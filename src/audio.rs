//! Sound-effect routing
//!
//! The simulation only decides *which* sound plays; an injected backend
//! decides how. Implementations must be fire-and-forget: no blocking, no
//! panicking into the tick.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Runner leaves the ground
    Jump,
    /// Coin collected
    Coin,
    /// Obstacle hit, run over
    Crash,
}

/// Audio backend capability injected into the simulation
pub trait AudioSink {
    /// Play a sound effect; best effort, must not block the tick
    fn play(&mut self, sound: Sound);
}

/// Default backend that drops every effect
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, sound: Sound) {
        log::trace!("sound dropped (no audio backend): {sound:?}");
    }
}
