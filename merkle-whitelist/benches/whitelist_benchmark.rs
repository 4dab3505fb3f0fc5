use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use merkle_whitelist::{Identifier, MerkleWhitelist, keccak256};

fn prepare_whitelist(count: u32) -> (MerkleWhitelist, Vec<Identifier>) {
    let ids: Vec<Identifier> = (0..count)
        .map(|i| Identifier::new(keccak256(&i.to_le_bytes())))
        .collect();
    let whitelist = MerkleWhitelist::new(ids.clone()).expect("distinct identifiers");
    (whitelist, ids)
}

fn bench(c: &mut Criterion) {
    let sizes = [16u32, 128, 1024];

    {
        let mut group = c.benchmark_group("whitelist root");
        for size in sizes {
            let (whitelist, _) = prepare_whitelist(size);
            group.bench_with_input(BenchmarkId::new("members", size), &whitelist, |b, w| {
                b.iter(|| black_box(w.derive_merkle_root().expect("root")));
            });
        }
    }

    {
        let mut group = c.benchmark_group("whitelist proof");
        for size in sizes {
            let (whitelist, ids) = prepare_whitelist(size);
            let target = ids[ids.len() / 2];
            group.bench_with_input(BenchmarkId::new("members", size), &whitelist, |b, w| {
                b.iter(|| black_box(w.derive_proof(&target).expect("member")));
            });
        }
    }

    c.bench_function("whitelist verify", |b| {
        let (whitelist, ids) = prepare_whitelist(1024);
        let target = ids[7];
        let proof = whitelist.derive_proof(&target).expect("member");
        b.iter(|| black_box(whitelist.verify_proof(&proof, &target).expect("non-empty")));
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
