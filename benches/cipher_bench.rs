use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::RngCore;
use tokio::runtime::Runtime;

use des_cbc::crypto::cipher_context::CipherContext;
use des_cbc::crypto::cipher_types::{CipherInput, CipherOutput};

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

fn bench_in_memory(c: &mut Criterion) {
    let ctx = CipherContext::new(*b"01234567");
    let key = b"Super_Se";

    let mut group = c.benchmark_group("CBC In-Memory");
    for size in [1024usize, 64 * 1024] {
        let plaintext = random_bytes(size);
        let ciphertext = ctx.encrypt_bytes(&plaintext, key).unwrap();

        group.bench_function(BenchmarkId::new("Encrypt", size), |b| {
            b.iter(|| ctx.encrypt_bytes(&plaintext, key).unwrap())
        });
        group.bench_function(BenchmarkId::new("Decrypt", size), |b| {
            b.iter(|| ctx.decrypt_bytes(&ciphertext, key).unwrap())
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let ctx = CipherContext::new(*b"01234567");
    let key = b"Super_Se";
    let messages: Vec<Vec<u8>> = (0..32).map(|_| random_bytes(4096)).collect();

    let rt = Runtime::new().unwrap();

    c.bench_function("Batch Encrypt 32x4KB", |b| {
        b.to_async(&rt).iter(|| {
            let ctx = ctx.clone();
            let messages = messages.clone();
            async move {
                ctx.encrypt_many(messages, key).await.unwrap();
            }
        })
    });
}

fn bench_file(c: &mut Criterion) {
    use std::io::Write;

    let mut input_file = tempfile::NamedTempFile::new().unwrap();
    input_file.write_all(&random_bytes(1024 * 1024)).unwrap();
    let input_path = input_file.path().to_string_lossy().into_owned();

    let ctx = CipherContext::new(*b"01234567");
    let key = b"Super_Se";

    let rt = Runtime::new().unwrap();

    c.bench_function("File Encrypt 1MB", |b| {
        b.to_async(&rt).iter(|| {
            let ctx = ctx.clone();
            let input = input_path.clone();
            async move {
                let output_file = tempfile::NamedTempFile::new().unwrap();
                let output_path = output_file.path().to_string_lossy().into_owned();
                ctx.encrypt(
                    CipherInput::File(input),
                    &mut CipherOutput::File(output_path),
                    key,
                )
                .await
                .unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_in_memory, bench_batch, bench_file);
criterion_main!(benches);
