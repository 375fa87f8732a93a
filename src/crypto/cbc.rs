use crate::crypto::bit_codec::{BLOCK_BYTES, Bits, bytes_to_bits, xor_bits};
use crate::crypto::des::Des;
use crate::crypto::error::CipherError;
use rayon::prelude::*;

// Messages below this many blocks decrypt sequentially; the rayon fan-out
// only pays for itself on large inputs.
const PARALLEL_DECRYPT_THRESHOLD: usize = 4 * 1024 * 1024 / BLOCK_BYTES;

/// Cipher-block chaining over a 64-bit block primitive.
///
/// Encryption XORs each plaintext block with the previous *ciphertext* block
/// before the cipher; decryption XORs the cipher output with the previous
/// ciphertext block after it. The IV stands in for the block before the
/// first.
pub struct CbcChain {
    iv: Bits,
}

impl CbcChain {
    pub fn new(iv: [u8; BLOCK_BYTES]) -> Self {
        CbcChain {
            iv: bytes_to_bits(&iv),
        }
    }

    pub fn iv(&self) -> &Bits {
        &self.iv
    }

    /// Encrypts blocks strictly in order: block i's input depends on block
    /// i-1's ciphertext, so there is no intra-message parallelism here.
    pub fn encrypt(
        &self,
        blocks: &[Bits],
        cipher: &Des,
        round_keys: &[Bits],
    ) -> Result<Vec<Bits>, CipherError> {
        let mut output = Vec::with_capacity(blocks.len());
        let mut prev = self.iv.clone();

        for block in blocks {
            let mixed = xor_bits(block, &prev);
            let encrypted = cipher.encrypt_block(&mixed, round_keys)?;
            prev = encrypted.clone();
            output.push(encrypted);
        }

        Ok(output)
    }

    /// Decrypts a chain of ciphertext blocks.
    ///
    /// Every block's chaining predecessor is a *ciphertext* block, already in
    /// hand, so unlike encryption the per-block work fans out across threads
    /// for large messages.
    pub fn decrypt(
        &self,
        blocks: &[Bits],
        cipher: &Des,
        round_keys: &[Bits],
    ) -> Result<Vec<Bits>, CipherError> {
        if blocks.len() >= PARALLEL_DECRYPT_THRESHOLD {
            blocks
                .par_iter()
                .enumerate()
                .map(|(i, block)| {
                    let prev = if i == 0 { &self.iv } else { &blocks[i - 1] };
                    let decrypted = cipher.decrypt_block(block, round_keys)?;
                    Ok(xor_bits(&decrypted, prev))
                })
                .collect()
        } else {
            let mut output = Vec::with_capacity(blocks.len());
            let mut prev = &self.iv;

            for block in blocks {
                let decrypted = cipher.decrypt_block(block, round_keys)?;
                output.push(xor_bits(&decrypted, prev));
                prev = block;
            }

            Ok(output)
        }
    }
}
