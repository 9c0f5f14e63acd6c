use crate::error::SoundError;

/// Audio cue played after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Correct,
    Wrong,
}

/// Fire-and-forget audio side channel.
///
/// Implementations must not block; the quiz machine ignores failures.
pub trait SoundPlayer: Send + Sync {
    /// # Errors
    ///
    /// Returns `SoundError` if the cue could not be played.
    fn play(&self, cue: SoundCue) -> Result<(), SoundError>;
}

/// Player that does nothing. Used when the host has no audio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _cue: SoundCue) -> Result<(), SoundError> {
        Ok(())
    }
}
