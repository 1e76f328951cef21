// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by the unit tests.
//!
//! Re-exports the `approx` assertion macros for float comparison and
//! provides a phone-sized screen stack plus a feedback backend that records
//! what it was asked to do.

pub use approx::assert_abs_diff_eq;

use crate::error::{Error, Result};
use crate::feedback::{Feedback, Sound};
use crate::host::{HostBounds, HostId, ScreenStack};
use iced::{Point, Rectangle, Size};
use std::cell::RefCell;
use std::rc::Rc;

/// Sound name that [`RecordingFeedback`] refuses to load.
pub const MISSING_SOUND: &str = "missing.wav";

/// Bounds of a 390x844 phone with a notch and a home indicator.
pub fn phone_bounds() -> HostBounds {
    HostBounds::new(Rectangle::new(Point::ORIGIN, Size::new(390.0, 844.0)))
        .with_safe_area(44.0, 34.0)
        .with_status_bar(24.0)
}

/// A root window with one screen pushed on top. Returns the screen.
pub fn phone() -> (ScreenStack, HostId) {
    let mut stack = ScreenStack::new(phone_bounds());
    let screen = stack.push(phone_bounds());
    (stack, screen)
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub played: Vec<String>,
    pub vibrations: usize,
}

/// Feedback backend that logs plays and vibrations instead of making noise.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback(pub Rc<RefCell<Recorded>>);

impl Feedback for RecordingFeedback {
    fn load_sound(&mut self, name: &str) -> Result<Sound> {
        if name == MISSING_SOUND {
            return Err(Error::Io(format!("{name} not found")));
        }
        Ok(Sound::new(name, vec![0.0; 8], 8_000, 1))
    }

    fn play(&mut self, sound: &Sound) {
        self.0.borrow_mut().played.push(sound.name().to_owned());
    }

    fn vibrate(&mut self) {
        self.0.borrow_mut().vibrations += 1;
    }
}

/// Writes a 16-bit PCM WAV fixture for the decoder tests.
pub fn write_pcm16_wav(path: &std::path::Path, samples: &[i16], sample_rate: u32, channels: u16) {
    let block_align = channels * 2;
    let data_len = u32::try_from(samples.len() * 2).expect("fixture fits in a WAV");
    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVEfmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    std::fs::write(path, bytes).expect("write wav fixture");
}
