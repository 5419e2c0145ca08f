//! Balances derived by replaying every committed transaction.
//!
//! Nothing is cached: each call walks the whole chain. Pending transactions
//! (including the queued miner reward) are not counted until mined.

use crate::{Address, Balance, Chain};
use std::collections::BTreeMap;

/// Net of everything `address` received minus everything it sent. Unknown
/// addresses yield 0.
pub fn balance_of(chain: &Chain, address: &str) -> Balance {
    let mut balance: Balance = 0;
    for tx in chain.blocks().iter().flat_map(|b| &b.transactions) {
        if tx.from.as_deref() == Some(address) {
            balance -= Balance::from(tx.amount);
        }
        if tx.to == address {
            balance += Balance::from(tx.amount);
        }
    }
    balance
}

/// Balance of every address that appears in a committed transaction.
pub fn balances(chain: &Chain) -> BTreeMap<Address, Balance> {
    let mut out: BTreeMap<Address, Balance> = BTreeMap::new();
    for tx in chain.blocks().iter().flat_map(|b| &b.transactions) {
        if let Some(from) = &tx.from {
            *out.entry(from.clone()).or_default() -= Balance::from(tx.amount);
        }
        *out.entry(tx.to.clone()).or_default() += Balance::from(tx.amount);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChainConfig, Transaction};

    fn chain_with(txs: Vec<Transaction>) -> Chain {
        let mut chain = Chain::with_config(ChainConfig::new(1, 50)).unwrap();
        for tx in txs {
            chain.add_transaction(tx);
        }
        chain.mine_pending("Miner").unwrap();
        chain
    }

    #[test]
    fn unknown_address_is_zero() {
        let chain = chain_with(vec![Transaction::transfer("A", "B", 5)]);
        assert_eq!(balance_of(&chain, "Nobody"), 0);
        assert_eq!(balance_of(&Chain::new(), "A"), 0);
    }

    #[test]
    fn debits_and_credits() {
        let chain = chain_with(vec![
            Transaction::transfer("A", "B", 100),
            Transaction::transfer("B", "A", 50),
        ]);
        assert_eq!(balance_of(&chain, "A"), -50);
        assert_eq!(balance_of(&chain, "B"), 50);
    }

    #[test]
    fn self_transfer_nets_zero() {
        let chain = chain_with(vec![Transaction::transfer("A", "A", 30)]);
        assert_eq!(balance_of(&chain, "A"), 0);
        assert_eq!(balances(&chain).get("A"), Some(&0));
    }

    #[test]
    fn pending_is_not_counted() {
        let mut chain = chain_with(vec![]);
        chain.add_transaction(Transaction::transfer("A", "B", 9));
        assert_eq!(balance_of(&chain, "B"), 0);
        assert_eq!(balance_of(&chain, "Miner"), 0);
    }

    #[test]
    fn negative_amounts_are_replayed_as_given() {
        let chain = chain_with(vec![Transaction::transfer("A", "B", -7)]);
        assert_eq!(balance_of(&chain, "A"), 7);
        assert_eq!(balance_of(&chain, "B"), -7);
    }

    #[test]
    fn extreme_amounts_do_not_overflow() {
        let chain = chain_with(vec![
            Transaction::transfer("A", "B", i64::MAX),
            Transaction::transfer("A", "B", i64::MAX),
        ]);
        assert_eq!(balance_of(&chain, "B"), 2 * i64::MAX as i128);
    }

    #[test]
    fn balances_match_balance_of() {
        let mut chain = chain_with(vec![
            Transaction::transfer("A", "B", 100),
            Transaction::transfer("B", "C", 40),
        ]);
        chain.mine_pending("Other").unwrap();
        let all = balances(&chain);
        for (address, balance) in &all {
            assert_eq!(*balance, balance_of(&chain, address));
        }
        assert_eq!(all.get("Miner"), Some(&50));
        assert!(!all.contains_key("Other"));
    }
}
