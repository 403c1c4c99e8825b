use crate::config::CodecConfig;
use crate::DETECT_GRID_HZ;
use std::f32::consts::PI;

/// One transmitted unit of information: a fixed-duration tone at one of
/// the three carrier frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A 0 bit, carried on `freq_low`
    Zero,
    /// A 1 bit, carried on `freq_high`
    One,
    /// End-of-stream sentinel, carried on `freq_end`
    End,
}

impl Symbol {
    /// The bit value of a data symbol, if it is one
    pub fn bit(self) -> Option<u8> {
        match self {
            Symbol::Zero => Some(0),
            Symbol::One => Some(1),
            Symbol::End => None,
        }
    }

    /// The data symbol for a bit value (any nonzero value maps to One)
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            Symbol::Zero
        } else {
            Symbol::One
        }
    }
}

/// Spectral symbol detector
///
/// Scans a fixed frequency grid with a Goertzel filter, takes the
/// frequency of maximum power and classifies it against the three
/// carriers. The grid scan stands in for a raw DFT-bin argmax: at short
/// symbol windows the natural bin spacing is far coarser than the
/// carrier separation, while the Goertzel filter evaluates the spectrum
/// at any frequency directly.
pub struct SymbolDetector {
    sample_rate: f32,
    freq_low: f32,
    freq_high: f32,
    freq_end: f32,
}

impl SymbolDetector {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            sample_rate: config.sample_rate as f32,
            freq_low: config.freq_low,
            freq_high: config.freq_high,
            freq_end: config.freq_end,
        }
    }

    /// Detect the symbol carried by one full symbol window
    ///
    /// The window must span exactly one symbol; truncated windows are
    /// guarded against by the frame cursor and never reach this point.
    pub fn detect(&self, window: &[f32]) -> Symbol {
        self.classify(self.dominant_frequency(window))
    }

    /// Classify a dominant frequency against the three carriers
    ///
    /// Deliberately a two-stage comparison, not a three-way nearest
    /// vote: LOW competes with HIGH first, and END is only considered
    /// inside the branch that would otherwise pick HIGH. The tape
    /// format is defined by this exact rule, so both parties must apply
    /// it bit-for-bit even where it differs from nearest-neighbor
    /// around the LOW/END midpoint.
    pub fn classify(&self, frequency: f32) -> Symbol {
        if (frequency - self.freq_low).abs() < (frequency - self.freq_high).abs() {
            Symbol::Zero
        } else if (frequency - self.freq_end).abs() < (frequency - self.freq_high).abs() {
            Symbol::End
        } else {
            Symbol::One
        }
    }

    /// Frequency of maximum spectral power over the search grid
    fn dominant_frequency(&self, window: &[f32]) -> f32 {
        let nyquist = self.sample_rate / 2.0;
        let mut best_freq = 0.0f32;
        let mut best_power = -1.0f32;

        let mut freq = 0.0f32;
        while freq <= nyquist {
            let power = goertzel_power(window, freq, self.sample_rate);
            if power > best_power {
                best_power = power;
                best_freq = freq;
            }
            freq += DETECT_GRID_HZ;
        }

        best_freq
    }
}

/// Spectral power at an arbitrary frequency via the Goertzel recurrence
fn goertzel_power(samples: &[f32], freq: f32, sample_rate: f32) -> f32 {
    let omega = 2.0 * PI * freq / sample_rate;
    let coeff = 2.0 * omega.cos();

    let mut q1 = 0.0f32;
    let mut q2 = 0.0f32;
    for &sample in samples {
        let q0 = coeff * q1 - q2 + sample;
        q2 = q1;
        q1 = q0;
    }

    let real = q1 - q2 * omega.cos();
    let imag = q2 * omega.sin();
    real * real + imag * imag
}
