use crate::crypto::bit_codec::{Bits, xor_bits};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use bitvec::prelude::*;
use std::sync::Arc;

/// An iterated Feistel network over an injected round transformation.
///
/// Decryption runs the same rounds but consumes the round keys in reverse
/// order; that reversal is the whole of the construction's invertibility.
pub struct FeistelNetwork {
    rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        FeistelNetwork {
            rounds,
            transformation,
        }
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &BitSlice<u8, Msb0>,
        round_keys: &[Bits],
    ) -> Result<Bits, CipherError> {
        self.run(block, round_keys, false)
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &BitSlice<u8, Msb0>,
        round_keys: &[Bits],
    ) -> Result<Bits, CipherError> {
        self.run(block, round_keys, true)
    }

    fn run(
        &self,
        block: &BitSlice<u8, Msb0>,
        round_keys: &[Bits],
        decrypting: bool,
    ) -> Result<Bits, CipherError> {
        let half = block.len() / 2;
        let mut left = block[..half].to_bitvec();
        let mut right = block[half..].to_bitvec();

        for i in 0..self.rounds {
            let key_index = if decrypting { self.rounds - 1 - i } else { i };
            let f = self
                .transformation
                .transform(&right, &round_keys[key_index])?;
            let new_right = xor_bits(&left, &f);
            left = right;
            right = new_right;
        }

        // Undo the last round's swap; without this the network is not
        // its own inverse.
        let mut output = Bits::with_capacity(block.len());
        output.extend_from_bitslice(&right);
        output.extend_from_bitslice(&left);
        Ok(output)
    }
}
