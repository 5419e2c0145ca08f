use crate::{hasher, Block, Hash, LedgerError, Result};
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared flag a caller flips to stop an in-flight nonce search.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Mine the block by incrementing its nonce until the hash has at least
/// `difficulty` leading zero hex characters. Starts from the block's current
/// nonce and always hashes at least once.
pub fn mine(block: &mut Block, difficulty: u32) {
    search(block, difficulty, || false);
}

/// Like [`mine`], but checks `cancel` between nonce attempts. On cancellation
/// the block's stored hash is stale and the block must be discarded.
pub fn mine_with_cancel(block: &mut Block, difficulty: u32, cancel: &CancelToken) -> Result<()> {
    if search(block, difficulty, || cancel.is_cancelled()) {
        Ok(())
    } else {
        warn!(index = block.index, nonce = block.nonce, "mining cancelled");
        Err(LedgerError::MiningCancelled)
    }
}

fn search(block: &mut Block, difficulty: u32, cancelled: impl Fn() -> bool) -> bool {
    let mut base = Sha256::new();
    base.update(block.preimage_prefix());

    let mut nonce = block.nonce;
    loop {
        let hash = hasher::finish(base.clone(), nonce);
        if meets_difficulty(&hash, difficulty) {
            block.nonce = nonce;
            block.hash = hash;
            info!(
                index = block.index,
                nonce,
                hash = %hex::encode(hash),
                "block mined"
            );
            return true;
        }
        if cancelled() {
            block.nonce = nonce;
            return false;
        }
        // 2^64 attempts is out of reach; wrapping keeps the loop total.
        nonce = nonce.wrapping_add(1);
    }
}

pub fn meets_difficulty(hash: &Hash, difficulty: u32) -> bool {
    leading_zero_nibbles(hash) >= difficulty
}

/// Number of leading `0` characters in the hex rendering of `hash`.
pub fn leading_zero_nibbles(hash: &Hash) -> u32 {
    let mut total = 0u32;
    for b in hash {
        if *b == 0 {
            total += 2;
        } else {
            if *b < 0x10 {
                total += 1;
            }
            break;
        }
    }
    total
}
