//! Hamming(12,8) single-error-correcting code
//!
//! Codeword positions are 1-indexed. Parity bits sit at the power-of-two
//! positions 1, 2, 4 and 8; the 8 data bits go MSB-first into positions
//! 3, 5, 6, 7, 9, 10, 11 and 12. Parity bit `p` makes even parity over
//! every position whose index has bit `p` set, which is the unique
//! layout under which the recomputed 4-bit syndrome equals the 1-based
//! position of a single flipped bit.
//!
//! Known limitation, inherent to any single-error-correcting code:
//! double-bit errors are not detected and decode to a wrong byte.

/// Bits per codeword
pub const CODEWORD_BITS: usize = 12;

/// 1-indexed data bit positions, MSB first
const DATA_POSITIONS: [usize; 8] = [3, 5, 6, 7, 9, 10, 11, 12];

/// 1-indexed parity bit positions
const PARITY_POSITIONS: [usize; 4] = [1, 2, 4, 8];

/// Encode a byte into a 12-bit codeword (each element 0 or 1)
pub fn encode(byte: u8) -> [u8; CODEWORD_BITS] {
    // 1-indexed scratch; slot 0 unused
    let mut code = [0u8; CODEWORD_BITS + 1];

    for (i, &pos) in DATA_POSITIONS.iter().enumerate() {
        code[pos] = (byte >> (7 - i)) & 1;
    }

    for &p in &PARITY_POSITIONS {
        let mut parity = 0u8;
        for (pos, &bit) in code.iter().enumerate().skip(1) {
            if pos != p && pos & p != 0 {
                parity ^= bit;
            }
        }
        code[p] = parity;
    }

    let mut out = [0u8; CODEWORD_BITS];
    out.copy_from_slice(&code[1..]);
    out
}

/// Decode a 12-bit codeword back to a byte, correcting a single flipped
/// bit
///
/// The syndrome is the XOR of the 1-indexed positions of all set bits;
/// a nonzero syndrome in 1..=12 names the corrupted position directly.
/// Syndromes above 12 can only arise from multi-bit corruption and are
/// left uncorrected.
pub fn decode(codeword: &[u8; CODEWORD_BITS]) -> u8 {
    let mut code = [0u8; CODEWORD_BITS + 1];
    code[1..].copy_from_slice(codeword);

    let mut syndrome = 0usize;
    for (pos, &bit) in code.iter().enumerate().skip(1) {
        if bit != 0 {
            syndrome ^= pos;
        }
    }

    if (1..=CODEWORD_BITS).contains(&syndrome) {
        code[syndrome] ^= 1;
    }

    let mut byte = 0u8;
    for &pos in &DATA_POSITIONS {
        byte = (byte << 1) | code[pos];
    }
    byte
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_bytes() {
        for byte in 0..=255u8 {
            assert_eq!(decode(&encode(byte)), byte);
        }
    }

    #[test]
    fn test_single_bit_flip_corrected_all_positions() {
        for byte in 0..=255u8 {
            let codeword = encode(byte);
            for pos in 0..CODEWORD_BITS {
                let mut corrupted = codeword;
                corrupted[pos] ^= 1;
                assert_eq!(
                    decode(&corrupted),
                    byte,
                    "byte {:#04x} not recovered after flipping bit {}",
                    byte,
                    pos + 1
                );
            }
        }
    }

    #[test]
    fn test_double_bit_flip_does_not_panic() {
        // Double errors exceed the code's correction capability; the
        // result may be wrong but decoding must stay total.
        for byte in [0x00u8, 0x5A, 0xFF] {
            let codeword = encode(byte);
            for a in 0..CODEWORD_BITS {
                for b in (a + 1)..CODEWORD_BITS {
                    let mut corrupted = codeword;
                    corrupted[a] ^= 1;
                    corrupted[b] ^= 1;
                    let _ = decode(&corrupted);
                }
            }
        }
    }

    #[test]
    fn test_codeword_parity_is_even() {
        for byte in [0x00u8, 0x01, 0x80, 0xA7, 0xFF] {
            let code = encode(byte);
            for &p in &[1usize, 2, 4, 8] {
                let parity: u8 = code
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| (i + 1) & p != 0)
                    .fold(0, |acc, (_, &bit)| acc ^ bit);
                assert_eq!(parity, 0, "parity group {} odd for byte {:#04x}", p, byte);
            }
        }
    }

    #[test]
    fn test_distinct_bytes_distinct_codewords() {
        let a = encode(0x41);
        let b = encode(0x42);
        assert_ne!(a, b);
    }
}
