//! Canonical block encoding and SHA-256 digest.
//!
//! Integers are fixed-width little endian, strings are length prefixed and
//! optional fields carry a presence tag, so two distinct field tuples never
//! encode to the same bytes. The nonce is always the final eight bytes, which
//! lets the miner hash the prefix once per block.

use crate::{Hash, Transaction};
use sha2::{Digest, Sha256};

pub fn hash(
    index: u64,
    previous_hash: &Hash,
    timestamp: u64,
    data: Option<&str>,
    transactions: &[Transaction],
    nonce: u64,
) -> Hash {
    let prefix = preimage_prefix(index, previous_hash, timestamp, data, transactions);
    hash_with_nonce(&prefix, nonce)
}

/// Everything the block hash commits to except the nonce.
pub fn preimage_prefix(
    index: u64,
    previous_hash: &Hash,
    timestamp: u64,
    data: Option<&str>,
    transactions: &[Transaction],
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + 32 + 8 + 16 + transactions.len() * 48);
    bytes.extend_from_slice(&index.to_le_bytes());
    bytes.extend_from_slice(previous_hash);
    bytes.extend_from_slice(&timestamp.to_le_bytes());
    put_optional_str(&mut bytes, data);
    bytes.extend_from_slice(&(transactions.len() as u64).to_le_bytes());
    for tx in transactions {
        put_optional_str(&mut bytes, tx.from.as_deref());
        put_str(&mut bytes, &tx.to);
        bytes.extend_from_slice(&tx.amount.to_le_bytes());
    }
    bytes
}

pub fn hash_with_nonce(prefix: &[u8], nonce: u64) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(prefix);
    finish(hasher, nonce)
}

/// Completes a hasher already fed with a preimage prefix.
pub(crate) fn finish(mut hasher: Sha256, nonce: u64) -> Hash {
    hasher.update(nonce.to_le_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest[..]);
    out
}

fn put_str(bytes: &mut Vec<u8>, s: &str) {
    bytes.extend_from_slice(&(s.len() as u64).to_le_bytes());
    bytes.extend_from_slice(s.as_bytes());
}

fn put_optional_str(bytes: &mut Vec<u8>, s: Option<&str>) {
    match s {
        None => bytes.push(0),
        Some(s) => {
            bytes.push(1);
            put_str(bytes, s);
        }
    }
}
