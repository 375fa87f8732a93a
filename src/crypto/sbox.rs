use crate::crypto::bit_codec::Bits;
use crate::crypto::des_tables::S_BOXES;
use crate::crypto::error::CipherError;
use bitvec::prelude::*;

/// Substitutes a 48-bit vector down to 32 bits through the eight S-boxes.
///
/// Each 6-bit group addresses one box: the outer bits (first and last) form
/// the row, the middle four bits the column. The looked-up value is emitted
/// as 4 bits MSB-first.
pub fn substitute(block48: &BitSlice<u8, Msb0>) -> Result<Bits, CipherError> {
    if block48.len() != S_BOXES.len() * 6 {
        return Err(CipherError::MalformedBitLength {
            length: block48.len(),
        });
    }

    let mut output = Bits::with_capacity(32);
    for (i, sbox) in S_BOXES.iter().enumerate() {
        let group = &block48[i * 6..(i + 1) * 6];
        let row = ((group[0] as usize) << 1) | group[5] as usize;
        let column = group[1..5]
            .iter()
            .by_vals()
            .fold(0usize, |acc, bit| (acc << 1) | bit as usize);

        let value = sbox[row][column];
        for shift in (0..4).rev() {
            output.push((value >> shift) & 1 == 1);
        }
    }

    Ok(output)
}
