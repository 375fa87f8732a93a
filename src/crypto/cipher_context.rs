use crate::crypto::bit_codec::{BLOCK_BYTES, Bits, bits_to_bytes, bytes_to_bits, pad_to_block, split_blocks};
use crate::crypto::cbc::CbcChain;
use crate::crypto::cipher_io::write_all;
use crate::crypto::cipher_types::{CipherInput, CipherOutput};
use crate::crypto::des::Des;
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

/// The cipher facade: owns the initialization vector, splits messages into
/// blocks, drives the chaining mode and renders the output.
///
/// The IV is fixed for the lifetime of the instance and reused across all
/// calls — an inherited weakening relative to standard CBC, kept for
/// behavioral fidelity. There is likewise no authentication tag; callers
/// needing real confidentiality or integrity must wrap this engine rather
/// than rely on it directly.
///
/// Round keys are derived from the supplied key material on every call, so a
/// single instance may serve concurrent operations with different keys.
#[derive(Clone)]
pub struct CipherContext {
    cipher: Arc<Des>,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    chain: Arc<CbcChain>,
}

impl CipherContext {
    /// A context over the standard 16-round substitution-permutation
    /// components.
    pub fn new(iv: [u8; BLOCK_BYTES]) -> Self {
        Self::with_components(iv, Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }

    /// A context with injected key-schedule and round-function seams, for
    /// variant ciphers and tests.
    pub fn with_components(
        iv: [u8; BLOCK_BYTES],
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        CipherContext {
            cipher: Arc::new(Des::new(transformation)),
            key_expansion,
            chain: Arc::new(CbcChain::new(iv)),
        }
    }

    /// Encrypts a message, returning the concatenated ciphertext blocks as
    /// raw bytes.
    ///
    /// The plaintext is zero-bit padded up to the 64-bit block boundary
    /// first; the padding carries no length marker and is therefore visible
    /// to [`decrypt_bytes`](Self::decrypt_bytes) as trailing zero bytes.
    /// An empty message produces zero blocks, i.e. empty output.
    pub fn encrypt_bytes(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        let round_keys = self.key_expansion.generate_round_keys(key)?;

        let mut bits = bytes_to_bits(plaintext);
        pad_to_block(&mut bits);
        let blocks = split_blocks(&bits);

        let cipher_blocks = self.chain.encrypt(&blocks, &self.cipher, &round_keys)?;
        collect_blocks(&cipher_blocks)
    }

    /// Decrypts concatenated ciphertext blocks back to the padded plaintext.
    ///
    /// Trailing zero bytes introduced by encryption's padding are returned
    /// as-is: stripping them is ambiguous when the original message
    /// legitimately ends in zeros, so no stripping happens here.
    pub fn decrypt_bytes(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() % BLOCK_BYTES != 0 {
            return Err(CipherError::MalformedCiphertextLength {
                length: ciphertext.len(),
            });
        }
        let round_keys = self.key_expansion.generate_round_keys(key)?;

        let bits = bytes_to_bits(ciphertext);
        let blocks = split_blocks(&bits);

        let plain_blocks = self.chain.decrypt(&blocks, &self.cipher, &round_keys)?;
        collect_blocks(&plain_blocks)
    }

    /// [`encrypt_bytes`](Self::encrypt_bytes) rendered as lowercase hex.
    pub fn encrypt_to_hex(&self, plaintext: &[u8], key: &[u8]) -> Result<String, CipherError> {
        Ok(hex::encode(self.encrypt_bytes(plaintext, key)?))
    }

    /// Counterpart of [`encrypt_to_hex`](Self::encrypt_to_hex): decodes the
    /// hex rendering, then decrypts.
    pub fn decrypt_from_hex(&self, ciphertext: &str, key: &[u8]) -> Result<Vec<u8>, CipherError> {
        let raw = hex::decode(ciphertext).map_err(|_| CipherError::InvalidHexEncoding)?;
        self.decrypt_bytes(&raw, key)
    }

    /// Encrypts bytes or a file into a buffer or a file. File reads run on
    /// the blocking thread pool.
    pub async fn encrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        key: &[u8],
    ) -> std::io::Result<()> {
        let encrypted = match input {
            CipherInput::Bytes(data) => self.encrypt_bytes(&data, key)?,
            CipherInput::File(path) => {
                let this = self.clone();
                let key = key.to_vec();
                run_file_task(move || {
                    let data = std::fs::read(&path)?;
                    Ok(this.encrypt_bytes(&data, &key)?)
                })
                .await?
            }
        };
        write_all(output, &encrypted)
    }

    /// Decrypts bytes or a file into a buffer or a file.
    pub async fn decrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        key: &[u8],
    ) -> std::io::Result<()> {
        let decrypted = match input {
            CipherInput::Bytes(data) => self.decrypt_bytes(&data, key)?,
            CipherInput::File(path) => {
                let this = self.clone();
                let key = key.to_vec();
                run_file_task(move || {
                    let data = std::fs::read(&path)?;
                    Ok(this.decrypt_bytes(&data, &key)?)
                })
                .await?
            }
        };
        write_all(output, &decrypted)
    }

    /// Encrypts independent messages concurrently. The chaining dependency
    /// only binds blocks within one message; across messages the work is
    /// embarrassingly parallel.
    pub async fn encrypt_many(
        &self,
        messages: Vec<Vec<u8>>,
        key: &[u8],
    ) -> std::io::Result<Vec<Vec<u8>>> {
        self.process_many(messages, key, true).await
    }

    /// Decrypts independent messages concurrently.
    pub async fn decrypt_many(
        &self,
        messages: Vec<Vec<u8>>,
        key: &[u8],
    ) -> std::io::Result<Vec<Vec<u8>>> {
        self.process_many(messages, key, false).await
    }

    async fn process_many(
        &self,
        messages: Vec<Vec<u8>>,
        key: &[u8],
        encrypting: bool,
    ) -> std::io::Result<Vec<Vec<u8>>> {
        let tasks = messages.into_iter().map(|message| {
            let this = self.clone();
            let key = key.to_vec();
            tokio::task::spawn_blocking(move || {
                if encrypting {
                    this.encrypt_bytes(&message, &key)
                } else {
                    this.decrypt_bytes(&message, &key)
                }
            })
        });

        let joined = futures::future::try_join_all(tasks)
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        joined
            .into_iter()
            .map(|result| result.map_err(std::io::Error::from))
            .collect()
    }
}

fn collect_blocks(blocks: &[Bits]) -> Result<Vec<u8>, CipherError> {
    let mut bits = Bits::with_capacity(blocks.len() * 64);
    for block in blocks {
        bits.extend_from_bitslice(block);
    }
    bits_to_bytes(&bits)
}

async fn run_file_task<F, T>(task: F) -> std::io::Result<T>
where
    F: FnOnce() -> std::io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
}
