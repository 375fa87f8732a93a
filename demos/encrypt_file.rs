use des_cbc::crypto::cipher_context::CipherContext;
use des_cbc::crypto::cipher_types::{CipherInput, CipherOutput};
use rand::RngCore;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let mut payload = vec![0u8; 1024 * 1024];
    rand::rng().fill_bytes(&mut payload);

    let mut input_file = NamedTempFile::new()?;
    input_file.write_all(&payload)?;
    let input_path = input_file.path().to_string_lossy().into_owned();

    let encrypted_file = NamedTempFile::new()?;
    let encrypted_path = encrypted_file.path().to_string_lossy().into_owned();

    let ctx = CipherContext::new(*b"01234567");
    let key = b"Super_Se";

    ctx.encrypt(
        CipherInput::File(input_path),
        &mut CipherOutput::File(encrypted_path.clone()),
        key,
    )
    .await?;

    let mut decrypted = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.decrypt(CipherInput::File(encrypted_path), &mut decrypted, key)
        .await?;

    let decrypted = match decrypted {
        CipherOutput::Buffer(b) => *b,
        _ => unreachable!(),
    };
    assert_eq!(&decrypted[..payload.len()], &payload[..]);
    println!("1MB file roundtrip OK");

    Ok(())
}
