use ledger_core::{Chain, ChainConfig, Transaction};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn create_chain(difficulty: u32, reward: i64) -> Chain {
    Chain::with_config(ChainConfig::new(difficulty, reward)).expect("valid config")
}

pub fn random_transfers(rng: &mut StdRng, count: usize, accounts: usize) -> Vec<Transaction> {
    (0..count)
        .map(|_| {
            let from = rng.gen_range(0..accounts);
            let to = rng.gen_range(0..accounts);
            Transaction::transfer(
                format!("addr-{from}"),
                format!("addr-{to}"),
                rng.gen_range(1..1_000),
            )
        })
        .collect()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
