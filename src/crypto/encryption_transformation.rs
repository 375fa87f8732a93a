use crate::crypto::bit_codec::Bits;
use crate::crypto::error::CipherError;
use bitvec::prelude::*;

/// The keyed round function F applied to one Feistel half.
pub trait EncryptionTransformation {
    fn transform(
        &self,
        input_block: &BitSlice<u8, Msb0>,
        round_key: &BitSlice<u8, Msb0>,
    ) -> Result<Bits, CipherError>;
}
