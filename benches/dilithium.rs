use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dilithium_crypto::sign::{keypair_from_seed, signature, verify};
use dilithium_crypto::SecurityLevel;

const LEVELS: [SecurityLevel; 3] = [
    SecurityLevel::Dilithium2,
    SecurityLevel::Dilithium3,
    SecurityLevel::Dilithium5,
];

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("keygen");
    let seed = [0x55u8; 32];
    for level in LEVELS {
        group.bench_with_input(
            BenchmarkId::from_parameter(level.mode()),
            &level,
            |b, &level| {
                b.iter(|| black_box(keypair_from_seed(level, black_box(&seed))));
            },
        );
    }
    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");
    let seed = [0x55u8; 32];
    let message = [0xA7u8; 32];
    for level in LEVELS {
        let (_, sk) = keypair_from_seed(level, &seed);
        group.bench_with_input(
            BenchmarkId::from_parameter(level.mode()),
            &level,
            |b, &level| {
                b.iter(|| black_box(signature(level, black_box(&message), &sk).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");
    let seed = [0x55u8; 32];
    let message = [0xA7u8; 32];
    for level in LEVELS {
        let (pk, sk) = keypair_from_seed(level, &seed);
        let sig = signature(level, &message, &sk).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(level.mode()),
            &level,
            |b, &level| {
                b.iter(|| verify(level, black_box(&sig), black_box(&message), &pk).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify);
criterion_main!(benches);
