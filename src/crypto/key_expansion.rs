use crate::crypto::bit_codec::Bits;
use crate::crypto::error::CipherError;

/// Derives the ordered sequence of round subkeys from raw key material.
///
/// Implementations must be deterministic and side-effect-free: the schedule
/// is a pure function of the key bytes, so one cipher instance can serve
/// concurrent calls with different keys.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Bits>, CipherError>;
}
