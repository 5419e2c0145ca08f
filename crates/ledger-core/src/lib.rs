pub mod balance;
pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod hasher;
pub mod pow;

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

pub use balance::{balance_of, balances};
pub use chain::Chain;
pub use config::ChainConfig;
pub use error::{LedgerError, Result};
pub use pow::CancelToken;

pub type Hash = [u8; 32];
pub type Address = String;
pub type Amount = i64;
pub type Balance = i128;

/// A transfer of `amount` from `from` to `to`. A missing sender marks a mint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub from: Option<Address>,
    pub to: Address,
    pub amount: Amount,
}

impl Transaction {
    pub fn transfer(from: impl Into<Address>, to: impl Into<Address>, amount: Amount) -> Self {
        Self {
            from: Some(from.into()),
            to: to.into(),
            amount,
        }
    }

    pub fn reward(to: impl Into<Address>, amount: Amount) -> Self {
        Self {
            from: None,
            to: to.into(),
            amount,
        }
    }

    pub fn is_reward(&self) -> bool {
        self.from.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub previous_hash: Hash,
    pub timestamp: u64,
    pub data: Option<String>,
    pub transactions: Vec<Transaction>,
    pub nonce: u64,
    pub hash: Hash,
}

impl Block {
    /// Builds a block with nonce 0 and its hash already committed.
    pub fn new(
        index: u64,
        previous_hash: Hash,
        timestamp: u64,
        data: Option<String>,
        transactions: Vec<Transaction>,
    ) -> Self {
        let mut block = Self {
            index,
            previous_hash,
            timestamp,
            data,
            transactions,
            nonce: 0,
            hash: [0u8; 32],
        };
        block.hash = block.recompute_hash();
        block
    }

    /// Hash of the current fields. Never touches the stored `hash`.
    pub fn recompute_hash(&self) -> Hash {
        hasher::hash(
            self.index,
            &self.previous_hash,
            self.timestamp,
            self.data.as_deref(),
            &self.transactions,
            self.nonce,
        )
    }

    pub(crate) fn preimage_prefix(&self) -> Vec<u8> {
        hasher::preimage_prefix(
            self.index,
            &self.previous_hash,
            self.timestamp,
            self.data.as_deref(),
            &self.transactions,
        )
    }

    pub fn is_consistent(&self) -> bool {
        self.hash == self.recompute_hash()
    }

    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

/// Seconds since the unix epoch; a clock before 1970 reads as 0.
pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
