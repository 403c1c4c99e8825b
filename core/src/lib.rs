//! Audio codec for storing files on analog media (cassette tape)
//!
//! Encodes a byte stream as binary FSK tones, framed with a
//! null-terminated file-extension header and an end-of-stream sentinel.
//! The protected mode wraps every payload byte in a Hamming(12,8)
//! codeword so a single corrupted symbol per byte is repaired.

pub mod byte_codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hamming;
pub mod symbol;
pub mod tone;

pub use config::{CodecConfig, Protection};
pub use decoder::{DecodedFile, TapeDecoder};
pub use encoder::TapeEncoder;
pub use error::{Result, WavetapeError};
pub use symbol::Symbol;

/// Sample rate for all generated and accepted audio (Hz)
pub const SAMPLE_RATE: usize = 44100;

/// Default carrier for a 0 bit (Hz)
pub const FREQ_LOW: f32 = 1000.0;

/// Default carrier for a 1 bit (Hz)
pub const FREQ_HIGH: f32 = 2000.0;

/// Default carrier for the end-of-stream sentinel (Hz)
pub const FREQ_END: f32 = 3000.0;

/// Default symbol rate (symbols per second)
pub const DEFAULT_SYMBOL_RATE: usize = 2000;

/// Number of End tones in the end-of-stream sentinel
pub const END_SEQUENCE_SYMBOLS: usize = 10;

/// HIGH/LOW tone pairs in the protected-mode preamble
pub const PREAMBLE_PAIRS: usize = 5;

/// Spacing of the demodulator's frequency search grid (Hz)
pub const DETECT_GRID_HZ: f32 = 25.0;

/// Bits per plain byte on the wire
pub const BITS_PER_BYTE: usize = 8;

/// Full-scale value for 16-bit PCM quantization
pub const PCM_FULL_SCALE: f32 = 32767.0;
