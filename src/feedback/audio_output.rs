// SPDX-License-Identifier: MPL-2.0
//! Sound playback through cpal.
//!
//! The output stream is opened on the first sound that needs it and then
//! kept alive; samples are appended to a bounded buffer that the audio
//! callback drains.

use super::{decode_file, Feedback, OutputFormat, Sound};
use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum buffered audio, in seconds of output.
const MAX_BUFFER_SECS: usize = 5;

/// Audio output stream manager.
struct AudioOutput {
    buffer: Arc<Mutex<Vec<f32>>>,
    max_buffer_size: usize,
    sample_rate: u32,
    channels: u16,
    /// The audio stream (kept alive to maintain playback).
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Returns an error if no audio output device is found, if the device
    /// configuration cannot be retrieved, or if the audio stream fails to start.
    fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

        let sample_rate = supported_config.sample_rate();
        let channels = supported_config.channels();

        let max_buffer_size = (sample_rate as usize) * (channels as usize) * MAX_BUFFER_SECS;
        let buffer: Arc<Mutex<Vec<f32>>> =
            Arc::new(Mutex::new(Vec::with_capacity(max_buffer_size)));

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &supported_config.into(), Arc::clone(&buffer))?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &supported_config.into(), Arc::clone(&buffer))?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &supported_config.into(), Arc::clone(&buffer))?
            }
            _ => return Err(Error::Audio("Unsupported audio sample format".to_string())),
        };

        stream
            .play()
            .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;

        tracing::debug!(sample_rate, channels, "audio output opened");

        Ok(Self {
            buffer,
            max_buffer_size,
            sample_rate,
            channels,
            _stream: stream,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        buffer: Arc<Mutex<Vec<f32>>>,
    ) -> Result<cpal::Stream> {
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let Ok(mut buf) = buffer.lock() else {
                        for sample in data.iter_mut() {
                            *sample = T::from_sample(0.0f32);
                        }
                        return;
                    };

                    for (i, sample) in data.iter_mut().enumerate() {
                        let value = buf.get(i).copied().unwrap_or(0.0);
                        // Slightly below 1.0 so i16 conversion cannot overflow.
                        *sample = T::from_sample(value.clamp(-1.0, 0.999_999_9));
                    }

                    let consumed = data.len().min(buf.len());
                    buf.drain(..consumed);
                },
                |err| {
                    tracing::warn!(error = %err, "audio output error");
                },
                None,
            )
            .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat {
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    /// Mixes a sound into the pending buffer.
    ///
    /// Sounds decoded for another layout are skipped.
    fn play(&self, sound: &Sound) {
        if sound.sample_rate() != self.sample_rate || sound.channels() != self.channels.clamp(1, 2) {
            tracing::warn!(
                sound = sound.name(),
                sample_rate = sound.sample_rate(),
                channels = sound.channels(),
                "sound does not match the output layout"
            );
            return;
        }
        let Ok(mut buf) = self.buffer.lock() else {
            return;
        };

        let rendered = spread(sound.samples(), sound.channels(), self.channels);

        // Overlapping sounds are mixed rather than queued.
        let overlap = rendered.len().min(buf.len());
        for (slot, sample) in buf.iter_mut().zip(&rendered[..overlap]) {
            *slot += sample;
        }
        let room = self.max_buffer_size.saturating_sub(buf.len());
        let tail = &rendered[overlap..];
        buf.extend_from_slice(&tail[..tail.len().min(room)]);
    }
}

/// Duplicates stereo frames over the extra channels of a wider device.
fn spread(samples: &[f32], channels: u16, device_channels: u16) -> Vec<f32> {
    if device_channels <= channels {
        return samples.to_vec();
    }
    let width = usize::from(channels);
    samples
        .chunks_exact(width)
        .flat_map(|frame| {
            (0..usize::from(device_channels)).map(move |slot| frame[slot % width])
        })
        .collect()
}

/// Feedback backed by the system's default audio device.
///
/// Sounds are decoded to the layout of the output device, which is opened
/// on the first load. Sound names are resolved against a sound directory. Desktop platforms
/// have no vibration motor, so vibration requests are only logged.
pub struct SystemFeedback {
    sound_dir: Option<PathBuf>,
    output: Option<AudioOutput>,
    output_failed: bool,
}

impl std::fmt::Debug for SystemFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFeedback")
            .field("sound_dir", &self.sound_dir)
            .field("output_open", &self.output.is_some())
            .finish()
    }
}

impl SystemFeedback {
    #[must_use]
    pub fn new(sound_dir: Option<PathBuf>) -> Self {
        Self {
            sound_dir,
            output: None,
            output_failed: false,
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        match &self.sound_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    fn output(&mut self) -> Option<&AudioOutput> {
        if self.output.is_none() && !self.output_failed {
            match AudioOutput::new() {
                Ok(output) => self.output = Some(output),
                Err(err) => {
                    tracing::warn!(error = %err, "sound playback disabled");
                    self.output_failed = true;
                }
            }
        }
        self.output.as_ref()
    }
}

impl Feedback for SystemFeedback {
    fn load_sound(&mut self, name: &str) -> Result<Sound> {
        let path = self.resolve(name);
        let format = self
            .output()
            .map_or(OutputFormat::FALLBACK, AudioOutput::format);
        decode_file(name, &path, format)
    }

    fn play(&mut self, sound: &Sound) {
        if let Some(output) = self.output() {
            output.play(sound);
        }
    }

    fn vibrate(&mut self) {
        tracing::debug!("vibration requested; no haptic device available");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_pcm16_wav;
    use tempfile::tempdir;

    #[test]
    fn stereo_is_spread_over_wider_devices() {
        let out = spread(&[0.25, -0.25, 0.5, -0.5], 2, 4);
        assert_eq!(out, vec![0.25, -0.25, 0.25, -0.25, 0.5, -0.5, 0.5, -0.5]);
    }

    #[test]
    fn matching_layouts_are_copied() {
        assert_eq!(spread(&[0.1, 0.2], 2, 2), vec![0.1, 0.2]);
        assert_eq!(spread(&[0.1, 0.2], 1, 1), vec![0.1, 0.2]);
    }

    #[test]
    fn load_sound_resolves_against_sound_dir() {
        let dir = tempdir().expect("temp dir");
        write_pcm16_wav(&dir.path().join("bell.wav"), &[0, 100, -100, 0], 8_000, 1);

        let mut feedback = SystemFeedback::new(Some(dir.path().to_path_buf()));
        let sound = feedback.load_sound("bell.wav").expect("load");
        assert_eq!(sound.name(), "bell.wav");
        assert!(sound.channels() <= 2);
    }

    #[test]
    fn missing_sound_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let mut feedback = SystemFeedback::new(Some(dir.path().to_path_buf()));
        assert!(matches!(
            feedback.load_sound("missing.wav"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    #[ignore = "requires audio hardware"]
    fn play_opens_output_once() {
        let mut feedback = SystemFeedback::new(None);
        let sound = Sound::new("beep", vec![0.1; 64], 44_100, 1);
        feedback.play(&sound);
        feedback.play(&sound);
        assert!(feedback.output.is_some() || feedback.output_failed);
    }
}
