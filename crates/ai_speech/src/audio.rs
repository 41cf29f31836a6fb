//! Audio decoding and waveform conversion
//!
//! The Whisper engine requires 16 kHz mono `f32` samples. Uploaded bytes go
//! through three steps: container/codec decoding (symphonia probes the
//! format, so anything the decoder accepts is accepted here), downmixing to
//! mono, and resampling to 16 kHz.

use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

use crate::error::SpeechError;

/// Sample rate the speech model expects.
pub const MODEL_SAMPLE_RATE: u32 = 16_000;

/// A decoded waveform before channel/rate conversion.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples
    pub samples: Vec<f32>,
    /// Channel count of the source
    pub channels: u16,
    /// Sample rate of the source in Hz
    pub sample_rate: u32,
}

/// Decode uploaded bytes into an interleaved `f32` waveform.
pub fn decode_bytes(data: &[u8]) -> Result<DecodedAudio, SpeechError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(data.to_vec())), Default::default());

    let probed = symphonia::default::get_probe()
        .format(
            &Hint::new(),
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| SpeechError::InvalidAudio(format!("unrecognized format: {e}")))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| SpeechError::InvalidAudio("no audio track found".to_string()))?;

    let track_id = track.id;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| SpeechError::InvalidAudio(format!("decoder setup failed: {e}")))?;

    let mut samples = Vec::new();
    let mut channels: u16 = 0;
    let mut sample_rate: u32 = track.codec_params.sample_rate.unwrap_or(0);

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream
            Err(SymphoniaError::IoError(_)) => break,
            Err(SymphoniaError::ResetRequired) => {
                return Err(SpeechError::InvalidAudio(
                    "chained streams are not supported".to_string(),
                ));
            }
            Err(e) => {
                return Err(SpeechError::InvalidAudio(format!("packet read failed: {e}")));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                if channels == 0 {
                    channels = u16::try_from(spec.channels.count()).unwrap_or(u16::MAX);
                    sample_rate = spec.rate;
                }
                let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buf.copy_interleaved_ref(decoded);
                samples.extend_from_slice(buf.samples());
            }
            // Corrupt packets are skipped, the rest of the stream may decode
            Err(SymphoniaError::IoError(_) | SymphoniaError::DecodeError(_)) => {}
            Err(e) => {
                return Err(SpeechError::InvalidAudio(format!("decode failed: {e}")));
            }
        }
    }

    if samples.is_empty() || channels == 0 || sample_rate == 0 {
        return Err(SpeechError::InvalidAudio(
            "no decodable audio data".to_string(),
        ));
    }

    debug!(
        samples = samples.len(),
        channels, sample_rate, "Decoded uploaded audio"
    );

    Ok(DecodedAudio {
        samples,
        channels,
        sample_rate,
    })
}

/// Mix interleaved multi-channel audio down to mono by averaging frames.
///
/// The output length is `samples.len() / channels`.
pub fn downmix_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    match channels {
        0 => Vec::new(),
        1 => samples.to_vec(),
        n => {
            let n = usize::from(n);
            #[allow(clippy::cast_precision_loss)]
            samples
                .chunks_exact(n)
                .map(|frame| frame.iter().sum::<f32>() / n as f32)
                .collect()
        }
    }
}

/// Resample mono samples to 16 kHz using linear interpolation.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn resample_to_16k(samples: &[f32], source_rate: u32) -> Vec<f32> {
    if source_rate == MODEL_SAMPLE_RATE || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = f64::from(MODEL_SAMPLE_RATE) / f64::from(source_rate);
    let output_len = (samples.len() as f64 * ratio).ceil() as usize;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        let src_pos = i as f64 / ratio;
        let idx = src_pos as usize;
        let frac = (src_pos - idx as f64) as f32;

        let sample = if idx + 1 < samples.len() {
            samples[idx] * (1.0 - frac) + samples[idx + 1] * frac
        } else if idx < samples.len() {
            samples[idx]
        } else {
            0.0
        };

        output.push(sample);
    }

    output
}

/// Decode uploaded bytes all the way to the model waveform.
pub fn decode_to_mono_16k(data: &[u8]) -> Result<Vec<f32>, SpeechError> {
    let decoded = decode_bytes(data)?;
    let mono = downmix_to_mono(&decoded.samples, decoded.channels);
    Ok(resample_to_16k(&mono, decoded.sample_rate))
}
