pub const HASH_SIZE: usize = 32;
pub const HASH_HEX_SIZE: usize = HASH_SIZE * 2;
pub const DEFAULT_DIFFICULTY: u32 = 4;
pub const DEFAULT_REWARD: i64 = 50;
pub const GENESIS_DATA: &str = "Genesis Block";
pub const GENESIS_PREVIOUS_HASH: [u8; HASH_SIZE] = [0u8; HASH_SIZE];
