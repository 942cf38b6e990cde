use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use std::sync::{Mutex, MutexGuard};

use super::amount::Amount;
use super::block::Block;
use super::hasher::BlockHash;
use super::pow::{valid_proof, CancelToken, ProofOfWork, ProofOutcome, MINING_DIFFICULTY};
use super::transaction::Transaction;

/// Amount paid to the miner for every mined block
pub const MINING_REWARD: Amount = Amount::from_coins(1);

/// Errors that can occur during blockchain operations
#[derive(Debug, Error)]
pub enum BlockchainError {
    #[error("Chain tip moved during mining: expected {expected}, found {found}")]
    StaleTip { expected: BlockHash, found: BlockHash },

    #[error("Invalid chain: {0}")]
    InvalidChain(String),

    #[error("Balance of {0} exceeds the representable amount range")]
    BalanceOverflow(String),
}

/// Result of one mining cycle
#[derive(Debug, Clone)]
pub enum MiningOutcome {
    /// The block committed to the chain
    Mined(Block),

    /// The proof of work search was cancelled and nothing was committed
    Cancelled,
}

/// Append-only sequence of blocks that always holds a genesis block
#[derive(Debug, Clone)]
struct Chain {
    genesis: Block,
    blocks: Vec<Block>,
}

impl Chain {
    fn new(genesis: Block) -> Self {
        Chain {
            genesis,
            blocks: Vec::new(),
        }
    }

    fn tip(&self) -> &Block {
        self.blocks.last().unwrap_or(&self.genesis)
    }

    fn iter(&self) -> impl Iterator<Item = &Block> {
        std::iter::once(&self.genesis).chain(self.blocks.iter())
    }

    fn len(&self) -> usize {
        self.blocks.len() + 1
    }

    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// Chain and pending pool, guarded together
#[derive(Debug)]
struct Ledger {
    chain: Chain,
    pending_transactions: Vec<Transaction>,
}

impl Ledger {
    /// Seals the first `count` pending transactions into a new block
    fn commit(&mut self, nonce: u64, previous_hash: BlockHash, count: usize) -> Block {
        let count = count.min(self.pending_transactions.len());
        let transactions: Vec<Transaction> = self.pending_transactions.drain(..count).collect();
        let block = Block::new(nonce, previous_hash, transactions);
        self.chain.push(block.clone());
        block
    }
}

/// Whole-chain presentation returned to API clients
#[derive(Serialize)]
struct ChainView<'a> {
    chain: Vec<&'a Block>,
}

/// Represents the blockchain
///
/// Chain and pool share one lock. A second lock serializes mining cycles so
/// that the proof of work search runs without blocking readers or
/// submitters, while two cycles can never commit from the same snapshot.
#[derive(Debug)]
pub struct Blockchain {
    ledger: Mutex<Ledger>,

    /// Held for the whole of a mining cycle and by `create_block`
    mining: Mutex<()>,

    /// Address credited with mining rewards
    miner_address: String,

    pow: ProofOfWork,
}

impl Blockchain {
    /// Creates a new blockchain with a genesis block
    ///
    /// # Arguments
    ///
    /// * `miner_address` - The address that receives mining rewards
    ///
    /// # Returns
    ///
    /// A new Blockchain instance
    pub fn new(miner_address: impl Into<String>) -> Self {
        let genesis = Block::new(0, Block::sentinel().hash(), Vec::new());
        let miner_address = miner_address.into();

        info!(
            "Created genesis block {} for miner {}",
            genesis.hash(),
            miner_address
        );

        Blockchain {
            ledger: Mutex::new(Ledger {
                chain: Chain::new(genesis),
                pending_transactions: Vec::new(),
            }),
            mining: Mutex::new(()),
            miner_address,
            pow: ProofOfWork::new(MINING_DIFFICULTY),
        }
    }

    /// Replaces the proof of work settings
    pub fn with_proof_of_work(mut self, pow: ProofOfWork) -> Self {
        self.pow = pow;
        self
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn mining_guard(&self) -> MutexGuard<'_, ()> {
        self.mining.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn miner_address(&self) -> &str {
        &self.miner_address
    }

    pub fn difficulty(&self) -> usize {
        self.pow.difficulty()
    }

    /// Gets the last block in the chain
    pub fn last_block(&self) -> Block {
        self.ledger().chain.tip().clone()
    }

    /// Number of blocks in the chain, genesis included
    pub fn len(&self) -> usize {
        self.ledger().chain.len()
    }

    /// Gets the entire blockchain
    pub fn chain(&self) -> Vec<Block> {
        self.ledger().chain.iter().cloned().collect()
    }

    /// Adds a new transaction to the pending pool
    ///
    /// No balance or signature check is made.
    pub fn add_transaction(&self, sender: &str, recipient: &str, value: Amount) {
        let transaction = Transaction::new(sender, recipient, value);
        debug!("Pending transaction {} -> {}: {}", sender, recipient, value);
        self.ledger().pending_transactions.push(transaction);
    }

    /// Returns a copy of the pending pool
    pub fn copy_pending_pool(&self) -> Vec<Transaction> {
        self.ledger().pending_transactions.clone()
    }

    /// Gets all pending transactions
    pub fn pending_transactions(&self) -> Vec<Transaction> {
        self.copy_pending_pool()
    }

    /// Seals the whole pending pool into a new block and appends it
    ///
    /// # Arguments
    ///
    /// * `nonce` - The proof of work nonce
    /// * `previous_hash` - The hash of the current last block
    ///
    /// # Returns
    ///
    /// The newly appended block
    pub fn create_block(&self, nonce: u64, previous_hash: BlockHash) -> Block {
        let _mining = self.mining_guard();
        let mut ledger = self.ledger();
        let count = ledger.pending_transactions.len();
        let block = ledger.commit(nonce, previous_hash, count);
        info!("Committed block {} with {} transactions", ledger.chain.len() - 1, count);
        block
    }

    /// Runs one mining cycle to completion
    ///
    /// # Returns
    ///
    /// true once a block has been committed
    pub fn mine(&self) -> bool {
        match self.mine_with_cancel(&CancelToken::new()) {
            Ok(MiningOutcome::Mined(_)) => true,
            Ok(MiningOutcome::Cancelled) => false,
            Err(err) => {
                warn!("Mining failed: {}", err);
                false
            }
        }
    }

    /// Runs one mining cycle that can be aborted through `cancel`
    ///
    /// The reward is added to the live pool, the pool is snapshotted, and the
    /// proof is searched against the snapshot. Only the snapshot is
    /// committed; transactions submitted during the search stay pending. If
    /// the search is cancelled, the reward added by this cycle is withdrawn.
    pub fn mine_with_cancel(&self, cancel: &CancelToken) -> Result<MiningOutcome, BlockchainError> {
        let _mining = self.mining_guard();

        let (snapshot, previous_hash) = {
            let mut ledger = self.ledger();
            ledger
                .pending_transactions
                .push(Transaction::reward(&self.miner_address, MINING_REWARD));
            (ledger.pending_transactions.clone(), ledger.chain.tip().hash())
        };

        let nonce = match self.pow.search(&previous_hash, &snapshot, cancel) {
            ProofOutcome::Found(nonce) => nonce,
            ProofOutcome::Cancelled => {
                // Only this cycle removes from the pool, so the reward is
                // still at the end of the snapshot prefix.
                let mut ledger = self.ledger();
                ledger.pending_transactions.remove(snapshot.len() - 1);
                warn!(
                    "Mining cancelled, {} transactions left pending",
                    ledger.pending_transactions.len()
                );
                return Ok(MiningOutcome::Cancelled);
            }
        };

        let mut ledger = self.ledger();
        let tip_hash = ledger.chain.tip().hash();
        if tip_hash != previous_hash {
            return Err(BlockchainError::StaleTip {
                expected: previous_hash,
                found: tip_hash,
            });
        }

        let block = ledger.commit(nonce, previous_hash, snapshot.len());
        info!(
            "Mined block {} with nonce {} and {} transactions",
            ledger.chain.len() - 1,
            nonce,
            block.transactions().len()
        );

        Ok(MiningOutcome::Mined(block))
    }

    /// Confirmed balance of `address`
    ///
    /// Only committed blocks count; the pending pool is ignored.
    /// Totals are accumulated in wide integers, so only a final balance
    /// outside the `Amount` range is an error.
    pub fn calculate_total_amount(&self, address: &str) -> Result<Amount, BlockchainError> {
        let total: i128 = self
            .ledger()
            .chain
            .iter()
            .flat_map(|block| block.transactions())
            .map(|transaction| transaction.balance_delta(address))
            .sum();

        Amount::from_wide_units(total)
            .ok_or_else(|| BlockchainError::BalanceOverflow(address.to_string()))
    }

    /// Validates the blockchain
    pub fn validate(&self) -> Result<(), BlockchainError> {
        let ledger = self.ledger();
        let blocks: Vec<&Block> = ledger.chain.iter().collect();

        if blocks[0].previous_hash() != &Block::sentinel().hash() {
            return Err(BlockchainError::InvalidChain(
                "genesis block is not linked to the sentinel".to_string(),
            ));
        }

        for (index, pair) in blocks.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);

            if current.previous_hash() != &previous.hash() {
                return Err(BlockchainError::InvalidChain(format!(
                    "block {} does not link to its predecessor",
                    index + 1
                )));
            }

            if !valid_proof(
                current.nonce(),
                current.previous_hash(),
                current.transactions(),
                self.pow.difficulty(),
            ) {
                return Err(BlockchainError::InvalidChain(format!(
                    "block {} has an invalid proof of work",
                    index + 1
                )));
            }
        }

        Ok(())
    }

    /// Checks if the blockchain is valid
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!("{}", err);
                false
            }
        }
    }

    /// Presentation JSON of the whole chain
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let ledger = self.ledger();
        let view = ChainView {
            chain: ledger.chain.iter().collect(),
        };
        serde_json::to_value(view)
    }

    /// Writes every block to the debug log
    pub fn log_chain(&self) {
        let ledger = self.ledger();
        for (index, block) in ledger.chain.iter().enumerate() {
            debug!("{} Chain {} {}\n{}", "=".repeat(25), index, "=".repeat(25), block);
        }
    }

    #[cfg(test)]
    fn push_block_unchecked(&self, block: Block) {
        self.ledger().chain.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::amount::MAX_TRANSFER_COINS;
    use crate::blockchain::transaction::MINING_SENDER;

    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn coins(value: f64) -> Amount {
        Amount::from_f64(value).unwrap()
    }

    #[test]
    fn test_new_blockchain() {
        let blockchain = Blockchain::new("Alice");
        let chain = blockchain.chain();

        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].nonce(), 0);
        assert_eq!(chain[0].previous_hash(), &Block::sentinel().hash());
        assert!(chain[0].transactions().is_empty());
        assert_eq!(blockchain.last_block(), chain[0]);
        assert!(blockchain.pending_transactions().is_empty());
    }

    #[test]
    fn test_genesis_link_is_deterministic() {
        let first = Blockchain::new("Alice").last_block();
        let second = Blockchain::new("Alice").last_block();

        assert_eq!(first.previous_hash(), second.previous_hash());
    }

    #[test]
    fn test_add_transaction() {
        let blockchain = Blockchain::new("Alice");
        blockchain.add_transaction("Alice", "Bob", coins(1.0));
        blockchain.add_transaction("Bob", "Carol", coins(2.0));

        let pending = blockchain.copy_pending_pool();
        assert_eq!(
            pending,
            vec![
                Transaction::new("Alice", "Bob", coins(1.0)),
                Transaction::new("Bob", "Carol", coins(2.0)),
            ]
        );
        assert_eq!(blockchain.len(), 1);
    }

    #[test]
    fn test_copy_pending_pool_is_a_snapshot() {
        let blockchain = Blockchain::new("Alice");
        blockchain.add_transaction("Alice", "Bob", coins(1.0));

        let snapshot = blockchain.copy_pending_pool();
        blockchain.add_transaction("Alice", "Bob", coins(2.0));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(blockchain.copy_pending_pool().len(), 2);
    }

    #[test]
    fn test_create_block() {
        let blockchain = Blockchain::new("Alice");
        blockchain.add_transaction("Alice", "Bob", coins(1.0));
        let previous_hash = blockchain.last_block().hash();

        let block = blockchain.create_block(5, previous_hash);

        assert_eq!(block.nonce(), 5);
        assert_eq!(block.previous_hash(), &previous_hash);
        assert_eq!(block.transactions().len(), 1);
        assert_eq!(blockchain.len(), 2);
        assert_eq!(blockchain.last_block(), block);
        assert!(blockchain.pending_transactions().is_empty());
    }

    #[test]
    fn test_mine_block() {
        let blockchain = Blockchain::new("Alice");
        blockchain.add_transaction("Alice", "Bob", coins(1.0));

        assert!(blockchain.mine());

        let chain = blockchain.chain();
        assert_eq!(chain.len(), 2);

        let transactions = chain[1].transactions();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0], Transaction::new("Alice", "Bob", coins(1.0)));
        assert_eq!(transactions[1], Transaction::new(MINING_SENDER, "Alice", coins(1.0)));

        assert!(blockchain.pending_transactions().is_empty());
        assert_eq!(blockchain.calculate_total_amount("Alice").unwrap(), coins(1.0));
        assert_eq!(blockchain.calculate_total_amount("Bob").unwrap(), coins(1.0));
    }

    #[test]
    fn test_mined_block_appends_reward_to_snapshot() {
        let blockchain = Blockchain::new("miner");
        blockchain.add_transaction("a", "b", coins(0.25));
        blockchain.add_transaction("b", "c", coins(0.5));
        let before = blockchain.copy_pending_pool();

        let block = match blockchain.mine_with_cancel(&CancelToken::new()).unwrap() {
            MiningOutcome::Mined(block) => block,
            MiningOutcome::Cancelled => panic!("expected a mined block"),
        };

        let mut expected = before;
        expected.push(Transaction::reward("miner", MINING_REWARD));
        assert_eq!(block.transactions(), expected.as_slice());
        assert!(blockchain.pending_transactions().is_empty());
    }

    #[test]
    fn test_mined_proof_verifies() {
        let blockchain = Blockchain::new("miner");
        blockchain.add_transaction("a", "b", coins(3.0));
        assert!(blockchain.mine());

        let block = blockchain.last_block();
        assert!(valid_proof(
            block.nonce(),
            block.previous_hash(),
            block.transactions(),
            MINING_DIFFICULTY
        ));
    }

    #[test]
    fn test_hash_linkage() {
        let blockchain = Blockchain::new("miner");
        for i in 0..3 {
            blockchain.add_transaction("a", "b", Amount::from_coins(i));
            assert!(blockchain.mine());
        }

        let chain = blockchain.chain();
        assert_eq!(chain.len(), 4);
        for i in 1..chain.len() {
            assert_eq!(chain[i].previous_hash(), &chain[i - 1].hash());
        }
        assert!(blockchain.is_valid());
    }

    #[test]
    fn test_empty_pool_mines_reward_only() {
        let blockchain = Blockchain::new("miner");

        assert!(blockchain.mine());
        assert!(blockchain.mine());

        let chain = blockchain.chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[2].transactions(), &[Transaction::reward("miner", MINING_REWARD)]);
    }

    #[test]
    fn test_balance_conservation() {
        let blockchain = Blockchain::new("miner");
        let blocks = 4;
        for _ in 0..blocks {
            assert!(blockchain.mine());
        }

        assert_eq!(
            blockchain.calculate_total_amount("miner").unwrap(),
            MINING_REWARD.checked_times(blocks).unwrap()
        );
        assert_eq!(
            blockchain.calculate_total_amount(MINING_SENDER).unwrap(),
            MINING_REWARD.checked_times(-blocks).unwrap()
        );
    }

    #[test]
    fn test_pending_pool_not_counted() {
        let blockchain = Blockchain::new("miner");
        blockchain.add_transaction("a", "b", coins(5.0));

        assert_eq!(blockchain.calculate_total_amount("b").unwrap(), Amount::ZERO);
        assert_eq!(blockchain.calculate_total_amount("a").unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_cancelled_mining_withdraws_reward() {
        let blockchain = Blockchain::new("miner").with_proof_of_work(ProofOfWork::new(64));
        blockchain.add_transaction("a", "b", coins(1.0));

        let token = CancelToken::new();
        token.cancel();

        let outcome = blockchain.mine_with_cancel(&token).unwrap();
        assert!(matches!(outcome, MiningOutcome::Cancelled));
        assert_eq!(blockchain.len(), 1);
        assert_eq!(
            blockchain.pending_transactions(),
            vec![Transaction::new("a", "b", coins(1.0))]
        );
    }

    #[test]
    fn test_cancel_after_mid_search_submission_withdraws_only_reward() {
        let pow = ProofOfWork::new(64).with_check_interval(16);
        let blockchain = Arc::new(Blockchain::new("miner").with_proof_of_work(pow));
        blockchain.add_transaction("a", "b", coins(1.0));
        blockchain.add_transaction("b", "c", coins(2.0));
        let token = CancelToken::new();

        let worker = {
            let blockchain = blockchain.clone();
            let token = token.clone();
            thread::spawn(move || blockchain.mine_with_cancel(&token))
        };

        // The reward shows up in the pool once the snapshot has been taken.
        while !blockchain.pending_transactions().iter().any(|tx| tx.is_reward()) {
            thread::yield_now();
        }
        blockchain.add_transaction("c", "d", coins(3.0));
        token.cancel();

        let outcome = worker.join().unwrap().unwrap();
        assert!(matches!(outcome, MiningOutcome::Cancelled));
        assert_eq!(blockchain.len(), 1);
        assert_eq!(
            blockchain.pending_transactions(),
            vec![
                Transaction::new("a", "b", coins(1.0)),
                Transaction::new("b", "c", coins(2.0)),
                Transaction::new("c", "d", coins(3.0)),
            ]
        );
        assert!(blockchain.pending_transactions().iter().all(|tx| !tx.is_reward()));
    }

    #[test]
    fn test_large_transfers_to_one_recipient() {
        let blockchain = Blockchain::new("miner").with_proof_of_work(ProofOfWork::new(1));
        let max = Amount::from_f64(MAX_TRANSFER_COINS as f64).unwrap();
        blockchain.add_transaction("a", "b", max);
        blockchain.add_transaction("a", "b", max);
        assert!(blockchain.mine());

        assert_eq!(
            blockchain.calculate_total_amount("b").unwrap(),
            Amount::from_coins(2 * MAX_TRANSFER_COINS)
        );
        assert_eq!(
            blockchain.calculate_total_amount("a").unwrap(),
            Amount::from_coins(-2 * MAX_TRANSFER_COINS)
        );
    }

    #[test]
    fn test_balance_overflow_is_reported() {
        let blockchain = Blockchain::new("miner").with_proof_of_work(ProofOfWork::new(1));
        let huge = Amount::from_units(i64::MAX);
        blockchain.add_transaction("a", "b", huge);
        blockchain.add_transaction("a", "b", huge);
        assert!(blockchain.mine());

        assert!(matches!(
            blockchain.calculate_total_amount("b"),
            Err(BlockchainError::BalanceOverflow(address)) if address == "b"
        ));
        assert!(matches!(
            blockchain.calculate_total_amount("a"),
            Err(BlockchainError::BalanceOverflow(_))
        ));
    }

    #[test]
    fn test_balance_may_pass_through_wide_range() {
        let blockchain = Blockchain::new("miner").with_proof_of_work(ProofOfWork::new(1));
        let huge = Amount::from_units(i64::MAX);
        blockchain.add_transaction("a", "b", huge);
        blockchain.add_transaction("a", "b", huge);
        blockchain.add_transaction("b", "a", huge);
        assert!(blockchain.mine());

        assert_eq!(blockchain.calculate_total_amount("b").unwrap(), huge);
    }

    #[test]
    fn test_reads_stay_available_while_mining() {
        let blockchain =
            Arc::new(Blockchain::new("miner").with_proof_of_work(ProofOfWork::new(64)));
        let token = CancelToken::new();

        let worker = {
            let blockchain = blockchain.clone();
            let token = token.clone();
            thread::spawn(move || blockchain.mine_with_cancel(&token))
        };

        // Reads stay available while the search runs.
        thread::sleep(Duration::from_millis(20));
        assert_eq!(blockchain.len(), 1);
        assert_eq!(blockchain.calculate_total_amount("miner").unwrap(), Amount::ZERO);
        token.cancel();

        let outcome = worker.join().unwrap().unwrap();
        assert!(matches!(outcome, MiningOutcome::Cancelled));
        assert!(blockchain.pending_transactions().is_empty());
    }

    #[test]
    fn test_transactions_submitted_while_mining_stay_pending() {
        let blockchain = Arc::new(Blockchain::new("miner").with_proof_of_work(ProofOfWork::new(4)));
        blockchain.add_transaction("a", "b", coins(1.0));

        let worker = {
            let blockchain = blockchain.clone();
            thread::spawn(move || blockchain.mine_with_cancel(&CancelToken::new()))
        };

        // Wait until the cycle has taken its snapshot (the reward is in the pool).
        while !blockchain.pending_transactions().iter().any(|tx| tx.is_reward()) {
            if worker.is_finished() {
                break;
            }
            thread::yield_now();
        }
        blockchain.add_transaction("c", "d", coins(2.0));

        let block = match worker.join().unwrap().unwrap() {
            MiningOutcome::Mined(block) => block,
            MiningOutcome::Cancelled => panic!("expected a mined block"),
        };

        assert_eq!(block.transactions().len(), 2);
        assert_eq!(
            blockchain.pending_transactions(),
            vec![Transaction::new("c", "d", coins(2.0))]
        );
        assert!(blockchain.is_valid());
    }

    #[test]
    fn test_concurrent_mining_keeps_linkage() {
        let blockchain = Arc::new(Blockchain::new("miner"));

        let workers: Vec<_> = (0..3)
            .map(|_| {
                let blockchain = blockchain.clone();
                thread::spawn(move || blockchain.mine())
            })
            .collect();

        for worker in workers {
            assert!(worker.join().unwrap());
        }

        assert_eq!(blockchain.len(), 4);
        assert_eq!(
            blockchain.calculate_total_amount("miner").unwrap(),
            MINING_REWARD.checked_times(3).unwrap()
        );
        assert!(blockchain.is_valid());
    }

    #[test]
    fn test_validate_detects_broken_link() {
        let blockchain = Blockchain::new("miner");
        assert!(blockchain.mine());

        blockchain.push_block_unchecked(Block::new(0, BlockHash([9; 32]), Vec::new()));

        assert!(matches!(
            blockchain.validate(),
            Err(BlockchainError::InvalidChain(_))
        ));
        assert!(!blockchain.is_valid());
    }

    #[test]
    fn test_validate_detects_bad_proof() {
        let blockchain = Blockchain::new("miner");
        let previous_hash = blockchain.last_block().hash();
        let bad_nonce = (0..)
            .find(|nonce| !valid_proof(*nonce, &previous_hash, &[], MINING_DIFFICULTY))
            .unwrap();

        blockchain.create_block(bad_nonce, previous_hash);

        assert!(!blockchain.is_valid());
    }

    #[test]
    fn test_to_json() {
        let blockchain = Blockchain::new("Alice");
        blockchain.add_transaction("Alice", "Bob", coins(1.0));
        assert!(blockchain.mine());

        let json = blockchain.to_json().unwrap();
        let chain = json["chain"].as_array().unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0]["nonce"], 0);
        assert_eq!(
            chain[1]["previous_hash"],
            blockchain.chain()[0].hash().to_hex()
        );
        assert_eq!(chain[1]["transactions"][0]["sender_address"], "Alice");
        assert_eq!(chain[1]["transactions"][0]["recipient_address"], "Bob");
        assert_eq!(chain[1]["transactions"][0]["value"], 1.0);
        assert_eq!(chain[1]["transactions"][1]["sender_address"], MINING_SENDER);
    }
}
