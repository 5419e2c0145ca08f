use crate::constants::{DEFAULT_DIFFICULTY, DEFAULT_REWARD, HASH_HEX_SIZE};
use crate::{Amount, LedgerError, Result};
use serde::{Deserialize, Serialize};

/// Construction-time parameters of a chain. Neither changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Leading zero hex characters required of a mined block hash.
    pub difficulty: u32,
    /// Amount minted to whoever mines the next block.
    pub reward: Amount,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            reward: DEFAULT_REWARD,
        }
    }
}

impl ChainConfig {
    pub fn new(difficulty: u32, reward: Amount) -> Self {
        Self { difficulty, reward }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.difficulty as usize > HASH_HEX_SIZE {
            return Err(LedgerError::InvalidConfig(format!(
                "difficulty {} exceeds {} hex characters",
                self.difficulty, HASH_HEX_SIZE
            )));
        }
        Ok(())
    }
}
