//! Sound effect playback
//!
//! The game has one sound: the explosion. It is optional; if the clip is
//! missing or unreadable the game plays on in silence.

use std::fmt;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Bomb hit a building
    Explosion,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Explosion => "explosion",
        }
    }
}

/// Anything that can play effects
pub trait AudioPlayer {
    /// Play an effect. Must be a no-op when muted or the clip is absent.
    fn play_effect(&mut self, effect: SoundEffect);
    fn set_muted(&mut self, muted: bool);
}

/// Raw sample data as loaded from disk
#[derive(Clone, PartialEq, Eq)]
pub struct Clip {
    bytes: Vec<u8>,
}

impl Clip {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clip({} bytes)", self.bytes.len())
    }
}

/// Output device
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, clip: &Clip);
}

/// Sink for running without an audio device
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, clip: &Clip) {
        log::trace!("play {} ({} bytes)", effect.as_str(), clip.bytes().len());
    }
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager<S: AudioSink> {
    sink: S,
    explosion: Option<Clip>,
    muted: bool,
    played: u64,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, explosion: Option<Clip>, muted: bool) -> Self {
        if explosion.is_none() {
            log::warn!("No explosion sound loaded - audio disabled");
        }
        Self {
            sink,
            explosion,
            muted,
            played: 0,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Returns true if there is anything to play
    pub fn has_sound(&self) -> bool {
        self.explosion.is_some()
    }

    /// Number of effects actually sent to the sink
    pub fn played(&self) -> u64 {
        self.played
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: AudioSink> AudioPlayer for AudioManager<S> {
    fn play_effect(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        let clip = match effect {
            SoundEffect::Explosion => self.explosion.as_ref(),
        };
        let Some(clip) = clip else {
            return;
        };
        self.sink.play(effect, clip);
        self.played += 1;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}
