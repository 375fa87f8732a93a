use crate::crypto::bit_codec::Bits;
use crate::crypto::error::CipherError;
use bitvec::prelude::*;

/// Applies a static permutation table to a bit vector.
///
/// Table entries are 1-based positions into the input; the output width is
/// the table length, so the same operation serves contraction (PC-1, PC-2),
/// expansion (E) and plain reordering (IP, FP, P).
pub fn permute(input: &BitSlice<u8, Msb0>, table: &[usize]) -> Result<Bits, CipherError> {
    let width = input.len();
    let mut output = Bits::with_capacity(table.len());

    for &position in table {
        if position == 0 || position > width {
            return Err(CipherError::IndexOutOfRange { position, width });
        }
        output.push(input[position - 1]);
    }

    Ok(output)
}
