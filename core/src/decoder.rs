use crate::byte_codec::{ByteDecoder, DecodedByte};
use crate::config::{CodecConfig, Protection};
use crate::error::Result;
use crate::{BITS_PER_BYTE, PREAMBLE_PAIRS};
use log::debug;

/// Recovered file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub payload: Vec<u8>,
    pub extension: String,
}

/// Byte-aligned window reader over a flat sample buffer
///
/// Yields `None` once fewer samples remain than requested, which is how
/// truncation at the end of a recording surfaces: as a normal end of
/// stream, never an error.
struct SymbolCursor<'a> {
    samples: &'a [f32],
    pos: usize,
    samples_per_symbol: usize,
}

impl<'a> SymbolCursor<'a> {
    fn new(samples: &'a [f32], samples_per_symbol: usize) -> Self {
        Self {
            samples,
            pos: 0,
            samples_per_symbol,
        }
    }

    /// Take the next window of `symbols` whole symbols, if available
    fn take_window(&mut self, symbols: usize) -> Option<&'a [f32]> {
        let len = symbols * self.samples_per_symbol;
        let end = self.pos.checked_add(len)?;
        if end > self.samples.len() {
            return None;
        }
        let window = &self.samples[self.pos..end];
        self.pos = end;
        Some(window)
    }
}

/// Parses a recorded waveform back into file bytes
///
/// Walks the stream as a state machine: preamble (protected mode),
/// then the NUL-terminated extension header, then payload bytes until
/// the end sentinel or truncation.
pub struct TapeDecoder {
    config: CodecConfig,
    bytes: ByteDecoder,
}

impl TapeDecoder {
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        let bytes = ByteDecoder::new(&config);
        Ok(Self { config, bytes })
    }

    /// Decode a sample buffer into payload bytes and extension string
    ///
    /// Total: every input decodes to something. A buffer that ends
    /// mid-byte drops the partial byte; an End symbol anywhere
    /// finalizes the frame; corruption beyond what the protection mode
    /// repairs yields wrong bytes, not failure.
    pub fn decode(&self, samples: &[f32]) -> DecodedFile {
        let mut cursor = SymbolCursor::new(samples, self.config.samples_per_symbol());
        let mut payload = Vec::new();
        let mut extension = String::new();

        // Preamble: fixed-length synchronization pattern, skipped
        if self.config.protection == Protection::Hamming
            && cursor.take_window(PREAMBLE_PAIRS * 2).is_none()
        {
            debug!("stream shorter than preamble");
            return DecodedFile { payload, extension };
        }

        // Header: plain bytes up to the NUL terminator. An End symbol
        // here finalizes the whole frame with a partial extension.
        loop {
            let window = match cursor.take_window(BITS_PER_BYTE) {
                Some(window) => window,
                None => return DecodedFile { payload, extension },
            };
            match self.bytes.decode_plain(window) {
                DecodedByte::Byte(0) => break,
                DecodedByte::Byte(byte) => extension.push(byte as char),
                DecodedByte::End => {
                    debug!("end sentinel inside header, extension {:?}", extension);
                    return DecodedFile { payload, extension };
                }
            }
        }
        debug!("header complete, extension {:?}", extension);

        // Payload: mode-dependent bytes until the sentinel or until the
        // recording runs out mid-byte.
        let symbols_per_byte = self.bytes.symbols_per_byte();
        while let Some(window) = cursor.take_window(symbols_per_byte) {
            match self.bytes.decode_byte(window) {
                DecodedByte::Byte(byte) => payload.push(byte),
                DecodedByte::End => break,
            }
        }

        debug!("decoded {} payload bytes", payload.len());
        DecodedFile { payload, extension }
    }
}
