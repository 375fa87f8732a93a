use crate::crypto::bit_codec::{Bits, bytes_to_bits};
use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::permutation::permute;

/// The 16-round subkey schedule.
///
/// Key material of any length is accepted: it is bit-encoded and normalized
/// to 64 bits, zero-padded on the right when short and truncated when long.
/// An empty key is rejected.
pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Bits>, CipherError> {
        if key.is_empty() {
            return Err(CipherError::InvalidKeyMaterial);
        }

        // 1) Normalize to 64 bits, then PC-1 down to 56.
        let mut key_bits = bytes_to_bits(key);
        key_bits.resize(64, false);
        let permuted = permute(&key_bits, &PC1)?;

        // 2) Split into the two 28-bit halves.
        let mut c = permuted[..28].to_bitvec();
        let mut d = permuted[28..].to_bitvec();

        // 3) Rotate both halves each round, rejoin, compress through PC-2.
        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in &SHIFT_BITS {
            c.rotate_left(shift);
            d.rotate_left(shift);

            let mut cd = Bits::with_capacity(56);
            cd.extend_from_bitslice(&c);
            cd.extend_from_bitslice(&d);

            round_keys.push(permute(&cd, &PC2)?);
        }

        Ok(round_keys)
    }
}
