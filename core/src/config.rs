use crate::error::{Result, WavetapeError};
use crate::{DEFAULT_SYMBOL_RATE, FREQ_END, FREQ_HIGH, FREQ_LOW, SAMPLE_RATE};

/// Payload protection mode
///
/// The file-extension header is always plain-encoded, even in Hamming
/// mode; only payload bytes are wrapped in codewords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    /// 8 raw FSK bits per byte
    Plain,
    /// 12-symbol Hamming(12,8) codeword per byte, single-bit correction
    Hamming,
}

/// Immutable codec configuration, fixed for the life of an
/// encoder/decoder instance
///
/// Carrier frequencies and sample rate must match exactly between the
/// encoding and decoding party.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Symbol rate in symbols per second
    pub symbol_rate: usize,
    /// Sample rate in Hz
    pub sample_rate: usize,
    /// Carrier frequency for a 0 bit (Hz)
    pub freq_low: f32,
    /// Carrier frequency for a 1 bit (Hz)
    pub freq_high: f32,
    /// Carrier frequency for the end sentinel (Hz)
    pub freq_end: f32,
    /// Payload protection mode
    pub protection: Protection,
}

impl CodecConfig {
    /// Create a configuration with the default carriers at 44100 Hz
    pub fn new(symbol_rate: usize, protection: Protection) -> Result<Self> {
        let config = Self {
            symbol_rate,
            sample_rate: SAMPLE_RATE,
            freq_low: FREQ_LOW,
            freq_high: FREQ_HIGH,
            freq_end: FREQ_END,
            protection,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate frequency and rate choices
    ///
    /// The three carriers must be distinct and below Nyquist, and a
    /// symbol must span at least one sample. Carriers too close to
    /// resolve at the chosen symbol duration produce decode ambiguity,
    /// not a crash; that is not checked here.
    pub fn validate(&self) -> Result<()> {
        if self.symbol_rate == 0 {
            return Err(WavetapeError::InvalidConfig(
                "symbol rate must be positive".to_string(),
            ));
        }
        if self.samples_per_symbol() == 0 {
            return Err(WavetapeError::InvalidConfig(format!(
                "symbol rate {} exceeds sample rate {}",
                self.symbol_rate, self.sample_rate
            )));
        }
        let nyquist = self.sample_rate as f32 / 2.0;
        for freq in [self.freq_low, self.freq_high, self.freq_end] {
            if freq <= 0.0 || freq >= nyquist {
                return Err(WavetapeError::InvalidConfig(format!(
                    "carrier {} Hz outside (0, {}) Hz",
                    freq, nyquist
                )));
            }
        }
        if self.freq_low == self.freq_high
            || self.freq_low == self.freq_end
            || self.freq_high == self.freq_end
        {
            return Err(WavetapeError::InvalidConfig(
                "carrier frequencies must be distinct".to_string(),
            ));
        }
        Ok(())
    }

    /// Samples per symbol window, truncated like the tape format defines
    pub fn samples_per_symbol(&self) -> usize {
        self.sample_rate / self.symbol_rate
    }

    /// Duration of one symbol in seconds
    pub fn symbol_duration(&self) -> f32 {
        1.0 / self.symbol_rate as f32
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            symbol_rate: DEFAULT_SYMBOL_RATE,
            sample_rate: SAMPLE_RATE,
            freq_low: FREQ_LOW,
            freq_high: FREQ_HIGH,
            freq_end: FREQ_END,
            protection: Protection::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CodecConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.samples_per_symbol(), 22);
    }

    #[test]
    fn test_zero_symbol_rate_rejected() {
        assert!(CodecConfig::new(0, Protection::Plain).is_err());
    }

    #[test]
    fn test_symbol_rate_above_sample_rate_rejected() {
        assert!(CodecConfig::new(SAMPLE_RATE + 1, Protection::Plain).is_err());
    }

    #[test]
    fn test_duplicate_carriers_rejected() {
        let mut config = CodecConfig::default();
        config.freq_high = config.freq_low;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_carrier_above_nyquist_rejected() {
        let mut config = CodecConfig::default();
        config.freq_end = 30000.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_samples_per_symbol_truncates() {
        let config = CodecConfig::new(1000, Protection::Plain).unwrap();
        // 44100 / 1000 = 44.1, truncated
        assert_eq!(config.samples_per_symbol(), 44);
    }
}
