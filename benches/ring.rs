use traceable_ring::rng::Csprng;
use traceable_ring::{PrivateKey, PublicKey, ring_verify, sign};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn ring_of(size: usize, rng: &mut Csprng) -> Vec<PublicKey> {
    (0..size)
        .map(|_| PrivateKey::generate(rng).unwrap().public_key())
        .collect()
}

pub fn bench_sign(c: &mut Criterion) {
    let mut rng = Csprng::new();
    let signer = PrivateKey::generate(&mut rng).unwrap();

    let mut group = c.benchmark_group("ring sign");
    for &size in &[1usize, 5, 20] {
        let mut ring = ring_of(size - 1, &mut rng);
        ring.push(signer.public_key());

        group.bench_function(format!("n = {size}"), |b| {
            b.iter(|| {
                sign(
                    black_box(b"benchmark message"),
                    black_box(&ring),
                    black_box(&signer),
                    ring.len() - 1,
                    &mut rng,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

pub fn bench_verify(c: &mut Criterion) {
    let mut rng = Csprng::new();
    let signer = PrivateKey::generate(&mut rng).unwrap();

    let mut group = c.benchmark_group("ring verify");
    for &size in &[1usize, 5, 20] {
        let mut ring = ring_of(size - 1, &mut rng);
        ring.push(signer.public_key());

        let signature = sign(b"benchmark message", &ring, &signer, ring.len() - 1, &mut rng).unwrap();

        group.bench_function(format!("n = {size}"), |b| {
            b.iter(|| ring_verify(black_box(b"benchmark message"), black_box(&signature)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
