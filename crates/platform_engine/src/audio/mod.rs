//! Audio trigger boundary
//!
//! The simulation only names sound cues. Playing them is the host's job, and
//! a failed playback must never reach game state, so [`trigger`] logs and
//! drops errors.

use thiserror::Error;

/// Audio playback errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// No sound is registered under this cue name
    #[error("Unknown sound cue: {0}")]
    UnknownCue(String),

    /// The output device refused playback
    #[error("Playback failed: {0}")]
    Playback(String),
}

/// Something that can play named sound cues
pub trait AudioSink {
    /// Play the sound registered as `cue`
    fn play(&mut self, cue: &str) -> Result<(), AudioError>;
}

/// Play a cue, swallowing any failure
pub fn trigger(sink: &mut dyn AudioSink, cue: &str) {
    if let Err(e) = sink.play(cue) {
        log::warn!("Ignoring audio failure for cue '{}': {}", cue, e);
    }
}

/// Sink that logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogAudioSink {
    played: usize,
}

impl LogAudioSink {
    /// Create a new logging sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cues played so far
    pub const fn played(&self) -> usize {
        self.played
    }
}

impl AudioSink for LogAudioSink {
    fn play(&mut self, cue: &str) -> Result<(), AudioError> {
        self.played += 1;
        log::info!("♪ {}", cue);
        Ok(())
    }
}
