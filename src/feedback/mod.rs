// SPDX-License-Identifier: MPL-2.0
//! Audio and haptic side effects of a banner.
//!
//! When a banner finishes its entrance animation it may play a sound and
//! trigger a vibration. Both are best-effort: failures are logged and never
//! interrupt the presentation or dismissal of the banner.
//!
//! - [`Feedback`] is the collaborator the notification manager calls into.
//! - [`SilentFeedback`] ignores every request (default for the manager).
//! - [`SystemFeedback`] decodes sound files with FFmpeg and plays them
//!   through the default cpal output.

mod audio_output;
mod decode;

pub use audio_output::SystemFeedback;
pub use decode::{decode_file, init_ffmpeg, OutputFormat};

use crate::error::Result;
use std::sync::Arc;

/// A decoded sound, ready to be played.
///
/// Each banner holds its own handle from the moment the sound is first
/// needed until the banner is detached.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    name: String,
    /// Interleaved samples normalized to [-1.0, 1.0].
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
    channels: u16,
}

impl Sound {
    #[must_use]
    pub fn new(name: impl Into<String>, samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            name: name.into(),
            samples: Arc::new(samples),
            sample_rate: sample_rate.max(1),
            channels: channels.max(1),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of frames (samples per channel).
    #[must_use]
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels)
    }
}

/// Audio/haptics collaborator of the notification manager.
pub trait Feedback {
    /// Loads the sound file with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing or cannot be decoded.
    fn load_sound(&mut self, name: &str) -> Result<Sound>;

    /// Plays a loaded sound once, without blocking.
    fn play(&mut self, sound: &Sound);

    /// Triggers a single device vibration.
    fn vibrate(&mut self);
}

/// Feedback that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn load_sound(&mut self, name: &str) -> Result<Sound> {
        Ok(Sound::new(name, Vec::new(), 44_100, 1))
    }

    fn play(&mut self, sound: &Sound) {
        tracing::trace!(sound = sound.name(), "silent feedback: sound skipped");
    }

    fn vibrate(&mut self) {
        tracing::trace!("silent feedback: vibration skipped");
    }
}
