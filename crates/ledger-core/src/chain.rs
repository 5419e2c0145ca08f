use crate::constants::{GENESIS_DATA, GENESIS_PREVIOUS_HASH};
use crate::pow::{self, CancelToken};
use crate::{
    balance, now_secs, Address, Amount, Balance, Block, ChainConfig, LedgerError, Result,
    Transaction,
};
use tracing::{debug, info, warn};

/// In-memory chain of mined blocks plus the pool of transactions waiting for
/// the next one.
#[derive(Clone, Debug)]
pub struct Chain {
    blocks: Vec<Block>,
    pending: Vec<Transaction>,
    config: ChainConfig,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    /// A chain holding only the genesis block, with the default difficulty
    /// and reward.
    pub fn new() -> Self {
        Self::from_config(ChainConfig::default())
    }

    pub fn with_config(config: ChainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: ChainConfig) -> Self {
        debug!(
            difficulty = config.difficulty,
            reward = config.reward,
            "creating chain"
        );
        Self {
            blocks: vec![Self::create_genesis_block()],
            pending: Vec::new(),
            config,
        }
    }

    /// Rebuilds a chain from blocks kept elsewhere. The blocks are taken as
    /// given; call [`Chain::validate`] to check them.
    pub fn from_blocks(blocks: Vec<Block>, config: ChainConfig) -> Result<Self> {
        config.validate()?;
        if blocks.is_empty() {
            return Err(LedgerError::EmptyChain);
        }
        Ok(Self {
            blocks,
            pending: Vec::new(),
            config,
        })
    }

    pub fn create_genesis_block() -> Block {
        Block::new(
            0,
            GENESIS_PREVIOUS_HASH,
            now_secs(),
            Some(GENESIS_DATA.to_string()),
            vec![],
        )
    }

    pub fn latest_block(&self) -> Result<&Block> {
        self.blocks.last().ok_or(LedgerError::EmptyChain)
    }

    /// Queues a transaction for the next block. Content is not checked.
    pub fn add_transaction(&mut self, tx: Transaction) {
        debug!(from = ?tx.from, to = %tx.to, amount = tx.amount, "transaction queued");
        self.pending.push(tx);
    }

    /// Mines the pending pool into a new block, appends it and reseeds the
    /// pool with the reward for `miner_address`. Blocks until a nonce is found.
    pub fn mine_pending(&mut self, miner_address: impl Into<Address>) -> Result<Block> {
        let mut block = self.candidate()?;
        pow::mine(&mut block, self.config.difficulty);
        Ok(self.commit(block, miner_address.into()))
    }

    /// Cancellable [`Chain::mine_pending`]. On cancellation the candidate is
    /// dropped and neither the blocks nor the pending pool change.
    pub fn mine_pending_with(
        &mut self,
        miner_address: impl Into<Address>,
        cancel: &CancelToken,
    ) -> Result<Block> {
        let mut block = self.candidate()?;
        pow::mine_with_cancel(&mut block, self.config.difficulty, cancel)?;
        Ok(self.commit(block, miner_address.into()))
    }

    fn candidate(&self) -> Result<Block> {
        let latest = self.latest_block()?;
        Ok(Block::new(
            self.blocks.len() as u64,
            latest.hash,
            now_secs(),
            None,
            self.pending.clone(),
        ))
    }

    fn commit(&mut self, block: Block, miner_address: Address) -> Block {
        info!(
            index = block.index,
            txs = block.transactions.len(),
            hash = %block.hash_hex(),
            "block appended"
        );
        self.blocks.push(block.clone());
        self.pending = vec![Transaction::reward(miner_address, self.config.reward)];
        block
    }

    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "chain failed validation");
                false
            }
        }
    }

    /// Checks every block's hash, index, link to its predecessor and proof of
    /// work, stopping at the first violation.
    pub fn validate(&self) -> Result<()> {
        let genesis = self.blocks.first().ok_or(LedgerError::EmptyChain)?;
        if genesis.index != 0
            || genesis.previous_hash != GENESIS_PREVIOUS_HASH
            || !genesis.is_consistent()
        {
            return Err(LedgerError::BadGenesis);
        }

        for (i, pair) in self.blocks.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            let position = i + 1;
            if current.index != position as u64 {
                return Err(LedgerError::IndexMismatch {
                    index: position,
                    found: current.index,
                });
            }
            if !current.is_consistent() {
                return Err(LedgerError::HashMismatch {
                    index: current.index,
                });
            }
            if current.previous_hash != previous.hash {
                return Err(LedgerError::BrokenLink {
                    index: current.index,
                });
            }
            if !pow::meets_difficulty(&current.hash, self.config.difficulty) {
                return Err(LedgerError::InsufficientWork {
                    index: current.index,
                    difficulty: self.config.difficulty,
                });
            }
        }
        Ok(())
    }

    pub fn balance_of(&self, address: &str) -> Balance {
        balance::balance_of(self, address)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: u64) -> Option<&Block> {
        usize::try_from(index).ok().and_then(|i| self.blocks.get(i))
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn config(&self) -> ChainConfig {
        self.config
    }

    pub fn difficulty(&self) -> u32 {
        self.config.difficulty
    }

    pub fn reward(&self) -> Amount {
        self.config.reward
    }
}
