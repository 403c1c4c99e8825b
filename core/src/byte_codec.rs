use crate::config::{CodecConfig, Protection};
use crate::hamming;
use crate::symbol::{Symbol, SymbolDetector};
use crate::tone::ToneSynthesizer;
use crate::BITS_PER_BYTE;

/// Result of decoding one byte-aligned window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedByte {
    Byte(u8),
    /// An End symbol was detected inside the window; any bits decoded
    /// before it are discarded
    End,
}

/// Serializes bytes into modulated symbol tones
pub struct ByteEncoder {
    synth: ToneSynthesizer,
    freq_low: f32,
    freq_high: f32,
    freq_end: f32,
    protection: Protection,
}

impl ByteEncoder {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            synth: ToneSynthesizer::new(config),
            freq_low: config.freq_low,
            freq_high: config.freq_high,
            freq_end: config.freq_end,
            protection: config.protection,
        }
    }

    /// Tone for a single symbol
    pub fn symbol_tone(&self, symbol: Symbol) -> Vec<f32> {
        let freq = match symbol {
            Symbol::Zero => self.freq_low,
            Symbol::One => self.freq_high,
            Symbol::End => self.freq_end,
        };
        self.synth.tone(freq)
    }

    /// Encode a byte as 8 bit-tones, MSB first
    pub fn encode_byte_plain(&self, byte: u8) -> Vec<f32> {
        let mut signal = Vec::with_capacity(BITS_PER_BYTE * self.synth.samples_per_symbol());
        for i in 0..BITS_PER_BYTE {
            let bit = (byte >> (7 - i)) & 1;
            signal.extend(self.symbol_tone(Symbol::from_bit(bit)));
        }
        signal
    }

    /// Encode a byte as a 12-symbol Hamming(12,8) codeword
    pub fn encode_byte_protected(&self, byte: u8) -> Vec<f32> {
        let codeword = hamming::encode(byte);
        let mut signal =
            Vec::with_capacity(hamming::CODEWORD_BITS * self.synth.samples_per_symbol());
        for bit in codeword {
            signal.extend(self.symbol_tone(Symbol::from_bit(bit)));
        }
        signal
    }

    /// Encode a payload byte according to the configured protection
    pub fn encode_byte(&self, byte: u8) -> Vec<f32> {
        match self.protection {
            Protection::Plain => self.encode_byte_plain(byte),
            Protection::Hamming => self.encode_byte_protected(byte),
        }
    }

    /// Symbols occupied by one payload byte
    pub fn symbols_per_byte(&self) -> usize {
        match self.protection {
            Protection::Plain => BITS_PER_BYTE,
            Protection::Hamming => hamming::CODEWORD_BITS,
        }
    }
}

/// Recovers bytes from byte-aligned sample windows
pub struct ByteDecoder {
    detector: SymbolDetector,
    samples_per_symbol: usize,
    protection: Protection,
}

impl ByteDecoder {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            detector: SymbolDetector::new(config),
            samples_per_symbol: config.samples_per_symbol(),
            protection: config.protection,
        }
    }

    /// Decode 8 plain symbols, MSB first
    ///
    /// Short-circuits to `End` as soon as any symbol detects as the
    /// sentinel; a partial byte before an End is discarded, not an
    /// error. The window must span exactly 8 symbols.
    pub fn decode_plain(&self, window: &[f32]) -> DecodedByte {
        debug_assert_eq!(window.len(), BITS_PER_BYTE * self.samples_per_symbol);

        let mut byte = 0u8;
        for chunk in window.chunks_exact(self.samples_per_symbol) {
            match self.detector.detect(chunk).bit() {
                Some(bit) => byte = (byte << 1) | bit,
                None => return DecodedByte::End,
            }
        }
        DecodedByte::Byte(byte)
    }

    /// Decode a 12-symbol Hamming codeword window, correcting a single
    /// corrupted symbol
    pub fn decode_protected(&self, window: &[f32]) -> DecodedByte {
        debug_assert_eq!(window.len(), hamming::CODEWORD_BITS * self.samples_per_symbol);

        let mut codeword = [0u8; hamming::CODEWORD_BITS];
        for (i, chunk) in window.chunks_exact(self.samples_per_symbol).enumerate() {
            match self.detector.detect(chunk).bit() {
                Some(bit) => codeword[i] = bit,
                None => return DecodedByte::End,
            }
        }
        DecodedByte::Byte(hamming::decode(&codeword))
    }

    /// Decode a payload byte window according to the configured
    /// protection
    pub fn decode_byte(&self, window: &[f32]) -> DecodedByte {
        match self.protection {
            Protection::Plain => self.decode_plain(window),
            Protection::Hamming => self.decode_protected(window),
        }
    }

    /// Symbols occupied by one payload byte
    pub fn symbols_per_byte(&self) -> usize {
        match self.protection {
            Protection::Plain => BITS_PER_BYTE,
            Protection::Hamming => hamming::CODEWORD_BITS,
        }
    }
}
