#[cfg(test)]
mod tests {
    use des_cbc::crypto::cipher_context::CipherContext;
    use des_cbc::crypto::cipher_types::{CipherInput, CipherOutput};
    use des_cbc::crypto::error::CipherError;
    use std::io::Write;
    use std::sync::Arc;

    const IV: [u8; 8] = *b"01234567";
    const KEY: &[u8] = b"Super_Se";

    #[test]
    fn test_single_block_roundtrip_exact() {
        let ctx = CipherContext::new(IV);
        let ciphertext = ctx.encrypt_bytes(b"ABCDEFGH", KEY).unwrap();
        assert_eq!(ciphertext.len(), 8);

        let plaintext = ctx.decrypt_bytes(&ciphertext, KEY).unwrap();
        assert_eq!(plaintext, b"ABCDEFGH");
    }

    #[test]
    fn test_key_truncation_matches_normalized_key() {
        // only the first 64 bits of key material are used
        let ctx = CipherContext::new(IV);
        let full = ctx.encrypt_bytes(b"ABCDEFGH", b"Super_Secret_key").unwrap();
        let truncated = ctx.encrypt_bytes(b"ABCDEFGH", KEY).unwrap();
        assert_eq!(full, truncated);
    }

    #[test]
    fn test_short_message_keeps_padding_artifact() {
        let ctx = CipherContext::new(IV);
        let ciphertext = ctx.encrypt_bytes(b"A", KEY).unwrap();
        assert_eq!(ciphertext.len(), 8);

        // the zero padding is part of the decrypted output, never stripped
        let plaintext = ctx.decrypt_bytes(&ciphertext, KEY).unwrap();
        assert_eq!(plaintext, b"A\0\0\0\0\0\0\0");
    }

    #[test]
    fn test_empty_message_produces_no_blocks() {
        let ctx = CipherContext::new(IV);
        let ciphertext = ctx.encrypt_bytes(b"", KEY).unwrap();
        assert!(ciphertext.is_empty());

        let plaintext = ctx.decrypt_bytes(b"", KEY).unwrap();
        assert!(plaintext.is_empty());
    }

    #[test]
    fn test_multi_block_roundtrip() {
        let ctx = CipherContext::new(IV);
        let message = b"The quick brown fox jumps over the lazy dog.";
        let ciphertext = ctx.encrypt_bytes(message, KEY).unwrap();
        assert_eq!(ciphertext.len() % 8, 0);

        let plaintext = ctx.decrypt_bytes(&ciphertext, KEY).unwrap();
        assert_eq!(&plaintext[..message.len()], message);
        assert!(plaintext[message.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_encryption_is_deterministic() {
        let ctx = CipherContext::new(IV);
        let first = ctx.encrypt_bytes(b"same input", KEY).unwrap();
        let second = ctx.encrypt_bytes(b"same input", KEY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_ciphertext_length_is_rejected() {
        let ctx = CipherContext::new(IV);
        assert_eq!(
            ctx.decrypt_bytes(&[1, 2, 3, 4, 5], KEY),
            Err(CipherError::MalformedCiphertextLength { length: 5 })
        );
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let ctx = CipherContext::new(IV);
        assert_eq!(
            ctx.encrypt_bytes(b"ABCDEFGH", b""),
            Err(CipherError::InvalidKeyMaterial)
        );
    }

    #[test]
    fn test_diffusion_across_blocks() {
        // flipping one plaintext bit in block 1 must leave block 0 alone and
        // change every block from 1 onward
        let ctx = CipherContext::new(IV);
        let mut message = *b"AAAAAAAABBBBBBBBCCCCCCCC";
        let baseline = ctx.encrypt_bytes(&message, KEY).unwrap();

        message[8] ^= 0x01;
        let mutated = ctx.encrypt_bytes(&message, KEY).unwrap();

        assert_eq!(baseline[..8], mutated[..8]);
        assert_ne!(baseline[8..16], mutated[8..16]);
        assert_ne!(baseline[16..24], mutated[16..24]);
    }

    #[test]
    fn test_key_avalanche() {
        let ctx = CipherContext::new(IV);
        let message = b"AAAAAAAABBBBBBBBCCCCCCCC";
        let baseline = ctx.encrypt_bytes(message, b"Super_Se").unwrap();
        let flipped = ctx.encrypt_bytes(message, b"Super_Sf").unwrap();

        let differing_bits: u32 = baseline
            .iter()
            .zip(flipped.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();

        // statistically ~50% of 192 bits; anything above a quarter shows the
        // schedule feeds every round
        assert!(differing_bits > 48, "only {differing_bits} bits differ");
        for chunk in 0..3 {
            assert_ne!(
                baseline[chunk * 8..(chunk + 1) * 8],
                flipped[chunk * 8..(chunk + 1) * 8]
            );
        }
    }

    #[test]
    fn test_hex_boundary_is_symmetric() {
        let ctx = CipherContext::new(IV);
        let encoded = ctx.encrypt_to_hex(b"ABCDEFGH", KEY).unwrap();
        assert_eq!(encoded.len(), 16);
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit()));

        let decoded = ctx.decrypt_from_hex(&encoded, KEY).unwrap();
        assert_eq!(decoded, b"ABCDEFGH");
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        let ctx = CipherContext::new(IV);
        assert_eq!(
            ctx.decrypt_from_hex("not hex at all!!", KEY),
            Err(CipherError::InvalidHexEncoding)
        );
    }

    #[test]
    fn test_iv_seeds_first_block() {
        let one = CipherContext::new(*b"01234567");
        let other = CipherContext::new(*b"76543210");
        let a = one.encrypt_bytes(b"ABCDEFGH", KEY).unwrap();
        let b = other.encrypt_bytes(b"ABCDEFGH", KEY).unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_async_bytes_to_buffer_roundtrip() {
        let ctx = CipherContext::new(IV);
        let plaintext = b"Hello, world!\n";

        let mut encrypted_output = CipherOutput::Buffer(Box::new(Vec::new()));
        ctx.encrypt(
            CipherInput::Bytes(plaintext.to_vec()),
            &mut encrypted_output,
            KEY,
        )
        .await
        .unwrap();

        let encrypted = match encrypted_output {
            CipherOutput::Buffer(buf) => *buf,
            _ => panic!("Expected buffer output"),
        };

        let mut decrypted_output = CipherOutput::Buffer(Box::new(Vec::new()));
        ctx.decrypt(CipherInput::Bytes(encrypted), &mut decrypted_output, KEY)
            .await
            .unwrap();

        let decrypted = match decrypted_output {
            CipherOutput::Buffer(buf) => *buf,
            _ => panic!("Expected buffer output"),
        };

        assert_eq!(&decrypted[..plaintext.len()], plaintext);
        assert!(decrypted[plaintext.len()..].iter().all(|&b| b == 0));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_async_file_roundtrip() {
        let ctx = CipherContext::new(IV);

        let mut input_file = tempfile::NamedTempFile::new().unwrap();
        input_file.write_all(b"file contents to protect").unwrap();
        let input_path = input_file.path().to_string_lossy().into_owned();

        let encrypted_file = tempfile::NamedTempFile::new().unwrap();
        let encrypted_path = encrypted_file.path().to_string_lossy().into_owned();

        ctx.encrypt(
            CipherInput::File(input_path),
            &mut CipherOutput::File(encrypted_path.clone()),
            KEY,
        )
        .await
        .unwrap();

        let mut decrypted_output = CipherOutput::Buffer(Box::new(Vec::new()));
        ctx.decrypt(
            CipherInput::File(encrypted_path),
            &mut decrypted_output,
            KEY,
        )
        .await
        .unwrap();

        let decrypted = match decrypted_output {
            CipherOutput::Buffer(buf) => *buf,
            _ => panic!("Expected buffer output"),
        };
        assert_eq!(&decrypted[..24], b"file contents to protect");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_batch_of_independent_messages() {
        let ctx = CipherContext::new(IV);
        let messages: Vec<Vec<u8>> = (0..16u8)
            .map(|i| format!("message number {i:02}!").into_bytes())
            .collect();

        let encrypted = ctx.encrypt_many(messages.clone(), KEY).await.unwrap();
        assert_eq!(encrypted.len(), messages.len());

        let decrypted = ctx.decrypt_many(encrypted, KEY).await.unwrap();
        for (original, roundtripped) in messages.iter().zip(&decrypted) {
            assert_eq!(&roundtripped[..original.len()], &original[..]);
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_shared_context_with_concurrent_keys() {
        // one instance, different keys in flight at once: the schedule is
        // derived per call, never stored on the context
        let ctx = Arc::new(CipherContext::new(IV));

        let mut handles = Vec::new();
        for i in 0..8u8 {
            let ctx = Arc::clone(&ctx);
            handles.push(tokio::spawn(async move {
                let key = vec![b'k', i, b'e', b'y', i, i, b'!', b'!'];
                let message = vec![i; 24];
                let ciphertext = ctx.encrypt_bytes(&message, &key).unwrap();
                let plaintext = ctx.decrypt_bytes(&ciphertext, &key).unwrap();
                assert_eq!(plaintext, message);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
    }
}
