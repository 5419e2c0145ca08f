use criterion::{criterion_group, criterion_main, Criterion};
use ledger_core::{pow::mine, Block, Transaction};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_pow(c: &mut Criterion) {
    c.bench_function("mine_block_difficulty_3", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let txs: Vec<Transaction> = (0..10)
            .map(|i| Transaction::transfer(format!("alice-{i}"), "bob", rng.gen_range(1..10)))
            .collect();

        let block = Block::new(1, [0u8; 32], 1_700_000_000, None, txs);

        b.iter(|| {
            let mut candidate = block.clone();
            mine(&mut candidate, 3);
        });
    });
}

criterion_group!(benches, bench_pow);
criterion_main!(benches);
