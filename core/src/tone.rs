use crate::config::CodecConfig;
use std::f32::consts::PI;

/// Generate a pure sine tone
///
/// Produces `round(sample_rate * duration)` samples of `sin(2π f t)`
/// with `t` evenly spaced over the half-open interval `[0, duration)`,
/// so the final sample point is never reached and consecutive tones
/// meet without a phase discontinuity at the boundary. Pure function of
/// its inputs, bit-for-bit reproducible.
pub fn generate_tone(frequency: f32, duration: f32, sample_rate: usize) -> Vec<f32> {
    let num_samples = (sample_rate as f32 * duration).round() as usize;
    sine(frequency, duration, num_samples)
}

/// Sine tone over `[0, duration)` with an explicit sample count
pub(crate) fn sine(frequency: f32, duration: f32, num_samples: usize) -> Vec<f32> {
    let mut samples = vec![0.0f32; num_samples];
    for (i, sample) in samples.iter_mut().enumerate() {
        let t = i as f32 * duration / num_samples as f32;
        *sample = (2.0 * PI * frequency * t).sin();
    }
    samples
}

/// Tone generator bound to a codec configuration
///
/// Always emits exactly `samples_per_symbol` samples per tone so that
/// encoder output and decoder windows stay aligned even when the sample
/// rate does not divide evenly by the symbol rate.
pub struct ToneSynthesizer {
    duration: f32,
    samples_per_symbol: usize,
}

impl ToneSynthesizer {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            duration: config.symbol_duration(),
            samples_per_symbol: config.samples_per_symbol(),
        }
    }

    /// One symbol-length tone at the given carrier frequency
    pub fn tone(&self, frequency: f32) -> Vec<f32> {
        sine(frequency, self.duration, self.samples_per_symbol)
    }

    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }
}
