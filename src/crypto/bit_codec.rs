use crate::crypto::error::CipherError;
use bitvec::prelude::*;

/// Bit vector with the cipher's canonical ordering: bit 0 is the most
/// significant bit of byte 0, matching the byte-by-byte MSB-first encoding
/// the permutation tables are written against.
pub type Bits = BitVec<u8, Msb0>;

/// Width of one cipher block in bits.
pub const BLOCK_BITS: usize = 64;

/// Width of one cipher block in bytes.
pub const BLOCK_BYTES: usize = 8;

/// Encodes a byte sequence as a bit vector, each byte contributing its eight
/// bits MSB-first in input order. Any input, including empty, is valid; the
/// result length is always a multiple of 8.
pub fn bytes_to_bits(input: &[u8]) -> Bits {
    BitVec::from_slice(input)
}

/// Reassembles bytes from a bit vector produced by [`bytes_to_bits`] or by
/// the cipher pipeline.
pub fn bits_to_bytes(bits: &BitSlice<u8, Msb0>) -> Result<Vec<u8>, CipherError> {
    if bits.len() % 8 != 0 {
        return Err(CipherError::MalformedBitLength { length: bits.len() });
    }

    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().by_vals().enumerate() {
            if bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    Ok(bytes)
}

/// XOR of two equal-width bit vectors.
pub fn xor_bits(a: &BitSlice<u8, Msb0>, b: &BitSlice<u8, Msb0>) -> Bits {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x ^ y)
        .collect()
}

/// Zero-pads a bit vector up to the next 64-bit block boundary.
///
/// The padding carries no length marker, so it is not reversible: decrypted
/// output may end in zero bytes that were padding rather than content, and
/// callers must not strip them blindly (the plaintext may legitimately end
/// in zeros).
pub fn pad_to_block(bits: &mut Bits) {
    let rem = bits.len() % BLOCK_BITS;
    if rem != 0 {
        bits.resize(bits.len() + (BLOCK_BITS - rem), false);
    }
}

/// Splits a block-aligned bit vector into 64-bit blocks.
pub fn split_blocks(bits: &BitSlice<u8, Msb0>) -> Vec<Bits> {
    bits.chunks(BLOCK_BITS).map(|c| c.to_bitvec()).collect()
}
