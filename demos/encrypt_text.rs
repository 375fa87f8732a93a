use des_cbc::crypto::cipher_context::CipherContext;
use des_cbc::crypto::cipher_types::{CipherInput, CipherOutput};

fn random_bytes(len: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let data = text.as_bytes().to_vec();

    let key = random_bytes(8);
    let ctx = CipherContext::new(*b"01234567");

    let mut enc_out = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.encrypt(CipherInput::Bytes(data.clone()), &mut enc_out, &key)
        .await?;
    let encrypted = match enc_out {
        CipherOutput::Buffer(b) => *b,
        _ => unreachable!(),
    };

    println!("ciphertext: {}", hex::encode(&encrypted));

    let mut dec_out = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.decrypt(CipherInput::Bytes(encrypted), &mut dec_out, &key)
        .await?;
    let decrypted = match dec_out {
        CipherOutput::Buffer(b) => *b,
        _ => unreachable!(),
    };

    assert_eq!(&decrypted[..data.len()], &data[..]);
    println!("CBC roundtrip OK");

    Ok(())
}
