use crate::crypto::bit_codec::Bits;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::permutation::permute;
use bitvec::prelude::*;

/// The 64-bit block primitive: initial permutation, 16 Feistel rounds,
/// final permutation.
///
/// Round keys are passed in per call rather than stored, so one instance is
/// safe to share across concurrent operations with different keys.
pub struct Des {
    feistel_network: FeistelNetwork,
}

impl Des {
    pub fn new(
        transformation: std::sync::Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Des {
            feistel_network: FeistelNetwork::new(16, transformation),
        }
    }

    pub fn encrypt_block(
        &self,
        block: &BitSlice<u8, Msb0>,
        round_keys: &[Bits],
    ) -> Result<Bits, CipherError> {
        let permuted = permute(block, &IP)?;
        let mixed = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, round_keys)?;
        permute(&mixed, &FP)
    }

    pub fn decrypt_block(
        &self,
        block: &BitSlice<u8, Msb0>,
        round_keys: &[Bits],
    ) -> Result<Bits, CipherError> {
        let permuted = permute(block, &IP)?;
        let mixed = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, round_keys)?;
        permute(&mixed, &FP)
    }
}
