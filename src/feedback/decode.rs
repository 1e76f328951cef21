// SPDX-License-Identifier: MPL-2.0
//! Sound file decoding with FFmpeg.
//!
//! Any container and codec FFmpeg understands can be used as a banner
//! sound. The first audio stream is decoded and resampled to packed `f32`
//! at the rate and channel count of the output device, so playback only
//! has to mix samples.

use super::Sound;
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Layout a [`Sound`] is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    /// Only mono and stereo are produced; anything wider is downmixed.
    pub channels: u16,
}

impl OutputFormat {
    /// Used when no output device could be opened.
    pub const FALLBACK: Self = Self {
        sample_rate: 48_000,
        channels: 2,
    };

    fn channel_layout(self) -> ffmpeg_next::ChannelLayout {
        match self.channels {
            1 => ffmpeg_next::ChannelLayout::MONO,
            _ => ffmpeg_next::ChannelLayout::STEREO,
        }
    }

    fn effective_channels(self) -> u16 {
        self.channels.clamp(1, 2)
    }
}

/// Initializes FFmpeg once per process.
///
/// # Errors
///
/// Returns an error if FFmpeg fails to initialize.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Audio(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Decodes the first audio stream of a file into a [`Sound`].
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and [`Error::Audio`]
/// if it has no audio stream or decoding fails.
pub fn decode_file(name: &str, path: &Path, format: OutputFormat) -> Result<Sound> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| Error::Audio(format!("{name}: no audio stream")))?;
    let stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| Error::Audio(format!("{name}: failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .audio()
        .map_err(|e| Error::Audio(format!("{name}: failed to create audio decoder: {e}")))?;

    let source_layout = if decoder.channel_layout().is_empty() {
        ffmpeg_next::ChannelLayout::default(i32::from(decoder.channels() as u16))
    } else {
        decoder.channel_layout()
    };

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        source_layout,
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        format.channel_layout(),
        format.sample_rate,
    )
    .map_err(|e| Error::Audio(format!("{name}: failed to create resampler: {e}")))?;

    let channels = format.effective_channels();
    let mut samples = Vec::new();

    for (stream, packet) in ictx.packets() {
        if stream.index() != stream_index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| Error::Audio(format!("{name}: audio packet failed: {e}")))?;
        drain_decoder(&mut decoder, &mut resampler, channels, &mut samples)?;
    }

    decoder
        .send_eof()
        .map_err(|e| Error::Audio(format!("{name}: failed to flush decoder: {e}")))?;
    drain_decoder(&mut decoder, &mut resampler, channels, &mut samples)?;

    let mut tail = ffmpeg_next::frame::Audio::empty();
    if resampler.flush(&mut tail).is_ok() {
        extract_samples(&tail, channels, &mut samples);
    }

    tracing::debug!(
        sound = name,
        frames = samples.len() / usize::from(channels),
        sample_rate = format.sample_rate,
        channels,
        "sound decoded"
    );

    Ok(Sound::new(name, samples, format.sample_rate, channels))
}

fn drain_decoder(
    decoder: &mut ffmpeg_next::decoder::Audio,
    resampler: &mut ffmpeg_next::software::resampling::Context,
    channels: u16,
    samples: &mut Vec<f32>,
) -> Result<()> {
    let mut decoded = ffmpeg_next::frame::Audio::empty();
    while decoder.receive_frame(&mut decoded).is_ok() {
        let mut resampled = ffmpeg_next::frame::Audio::empty();
        resampler
            .run(&decoded, &mut resampled)
            .map_err(|e| Error::Audio(format!("Resampling failed: {e}")))?;
        extract_samples(&resampled, channels, samples);
    }
    Ok(())
}

/// Appends the f32 samples of a packed frame.
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: u16, out: &mut Vec<f32>) {
    if frame.samples() == 0 {
        return;
    }
    let data = frame.data(0);
    let sample_count = frame.samples() * usize::from(channels);

    out.extend(
        data.chunks_exact(4)
            .take(sample_count)
            .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_pcm16_wav;
    use tempfile::tempdir;

    #[test]
    fn wav_is_resampled_to_the_output_format() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bell.wav");
        // 100 ms of a mono square wave at 8 kHz.
        let pcm: Vec<i16> = (0..800).map(|i| if i % 16 < 8 { 8_000 } else { -8_000 }).collect();
        write_pcm16_wav(&path, &pcm, 8_000, 1);

        let sound = decode_file("bell.wav", &path, OutputFormat::FALLBACK).expect("decode");

        assert_eq!(sound.name(), "bell.wav");
        assert_eq!(sound.sample_rate(), 48_000);
        assert_eq!(sound.channels(), 2);
        // Six output frames per input frame, give or take the filter delay.
        assert!(sound.frames() > 4_000, "frames = {}", sound.frames());
        assert!(sound.frames() <= 4_900, "frames = {}", sound.frames());
        assert!(sound.samples().iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn mono_output_keeps_one_channel() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("stereo.wav");
        let pcm: Vec<i16> = (0..400).map(|i| if i % 2 == 0 { 4_000 } else { -4_000 }).collect();
        write_pcm16_wav(&path, &pcm, 16_000, 2);

        let format = OutputFormat {
            sample_rate: 16_000,
            channels: 1,
        };
        let sound = decode_file("stereo.wav", &path, format).expect("decode");

        assert_eq!(sound.channels(), 1);
        assert_eq!(sound.samples().len(), sound.frames());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = decode_file("gone.wav", &dir.path().join("gone.wav"), OutputFormat::FALLBACK);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn garbage_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"definitely not a sound file").expect("write");

        assert!(decode_file("noise.wav", &path, OutputFormat::FALLBACK).is_err());
    }

    #[test]
    fn wide_layouts_are_downmixed_to_stereo() {
        let format = OutputFormat {
            sample_rate: 44_100,
            channels: 6,
        };
        assert_eq!(format.effective_channels(), 2);
        assert_eq!(format.channel_layout(), ffmpeg_next::ChannelLayout::STEREO);
    }
}
