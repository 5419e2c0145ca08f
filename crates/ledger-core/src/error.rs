use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("chain has no blocks")]
    EmptyChain,

    #[error("mining cancelled")]
    MiningCancelled,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("genesis block is malformed")]
    BadGenesis,

    #[error("block {index} has index {found}")]
    IndexMismatch { index: usize, found: u64 },

    #[error("block {index} hash does not match its contents")]
    HashMismatch { index: u64 },

    #[error("block {index} does not link to its predecessor")]
    BrokenLink { index: u64 },

    #[error("block {index} does not meet difficulty {difficulty}")]
    InsufficientWork { index: u64, difficulty: u32 },
}
