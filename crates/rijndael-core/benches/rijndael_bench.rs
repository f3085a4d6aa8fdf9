use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rijndael_core::{expand_key, KeySize, Rijndael};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    for size in KeySize::ALL {
        let key = vec![0x5au8; size.bytes()];
        group.bench_function(format!("expand_{}", size.bits()), |b| {
            b.iter(|| expand_key(&key).unwrap());
        });
    }
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut group = c.benchmark_group("block");
    for size in KeySize::ALL {
        let mut key = vec![0u8; size.bytes()];
        rng.fill_bytes(&mut key);
        let cipher = Rijndael::new(&key).unwrap();
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);

        group.bench_function(format!("encrypt_{}", size.bits()), |b| {
            b.iter(|| cipher.encrypt_block(&block));
        });
        group.bench_function(format!("decrypt_{}", size.bits()), |b| {
            b.iter(|| cipher.decrypt_block(&block));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_blocks);
criterion_main!(benches);
