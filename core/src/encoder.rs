use crate::byte_codec::ByteEncoder;
use crate::config::{CodecConfig, Protection};
use crate::error::{Result, WavetapeError};
use crate::symbol::Symbol;
use crate::{END_SEQUENCE_SYMBOLS, PREAMBLE_PAIRS};
use log::debug;

/// Assembles a complete tape frame from file bytes
///
/// Frame layout: `[preamble (protected mode)] [extension header]
/// [payload] [end sentinel]`. The header is one plain-encoded byte per
/// extension character plus a NUL terminator, and stays plain even when
/// the payload is Hamming-protected. Encoding is a single generative
/// pass with no failure states beyond extension validation.
pub struct TapeEncoder {
    config: CodecConfig,
    bytes: ByteEncoder,
}

impl TapeEncoder {
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        let bytes = ByteEncoder::new(&config);
        Ok(Self { config, bytes })
    }

    /// Encode file bytes and their extension into a waveform
    ///
    /// The output is normalized so the maximum absolute sample is 1.0,
    /// ready for 16-bit quantization by the container layer.
    pub fn encode(&self, data: &[u8], extension: &str) -> Result<Vec<f32>> {
        if extension.bytes().any(|b| b == 0 || !b.is_ascii()) {
            return Err(WavetapeError::InvalidExtension);
        }

        let mut signal = Vec::with_capacity(self.estimated_samples(data.len(), extension.len()));

        // Synchronization pattern for the receiver, protected mode only
        if self.config.protection == Protection::Hamming {
            for _ in 0..PREAMBLE_PAIRS {
                signal.extend(self.bytes.symbol_tone(Symbol::One));
                signal.extend(self.bytes.symbol_tone(Symbol::Zero));
            }
        }

        for byte in extension.bytes() {
            signal.extend(self.bytes.encode_byte_plain(byte));
        }
        signal.extend(self.bytes.encode_byte_plain(0));

        for &byte in data {
            signal.extend(self.bytes.encode_byte(byte));
        }

        for _ in 0..END_SEQUENCE_SYMBOLS {
            signal.extend(self.bytes.symbol_tone(Symbol::End));
        }

        normalize(&mut signal);

        debug!(
            "encoded {} payload bytes (ext {:?}) into {} samples",
            data.len(),
            extension,
            signal.len()
        );
        Ok(signal)
    }

    fn estimated_samples(&self, data_len: usize, ext_len: usize) -> usize {
        let spb = self.config.samples_per_symbol();
        let preamble = match self.config.protection {
            Protection::Hamming => PREAMBLE_PAIRS * 2,
            Protection::Plain => 0,
        };
        let header = (ext_len + 1) * 8;
        let payload = data_len * self.bytes.symbols_per_byte();
        (preamble + header + payload + END_SEQUENCE_SYMBOLS) * spb
    }
}

/// Scale the buffer so its peak absolute amplitude is 1.0
fn normalize(signal: &mut [f32]) {
    let peak = signal.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
    if peak > 0.0 {
        for sample in signal.iter_mut() {
            *sample /= peak;
        }
    }
}
