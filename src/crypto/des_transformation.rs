use crate::crypto::bit_codec::{Bits, xor_bits};
use crate::crypto::des_tables::{E, P};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::permutation::permute;
use crate::crypto::sbox::substitute;
use bitvec::prelude::*;

/// The round function F: extension, subkey XOR, S-box substitution, P-box.
pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(
        &self,
        right_half: &BitSlice<u8, Msb0>,
        round_key: &BitSlice<u8, Msb0>,
    ) -> Result<Bits, CipherError> {
        // 1. Extension 32 -> 48
        let expanded = permute(right_half, &E)?;

        // 2. XOR with the round subkey
        let mixed = xor_bits(&expanded, round_key);

        // 3. S-boxes 48 -> 32
        let substituted = substitute(&mixed)?;

        // 4. P-box
        permute(&substituted, &P)
    }
}
