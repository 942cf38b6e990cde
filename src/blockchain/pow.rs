use log::debug;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::hasher::{self, BlockHash};
use super::transaction::Transaction;

/// Number of leading hex zeros a proof hash must have
pub const MINING_DIFFICULTY: usize = 3;

/// How many nonces are tried between cancellation checks
const DEFAULT_CHECK_INTERVAL: u64 = 1024;

/// Shared flag used to abort a proof of work search
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Whether both handles share the same flag
    pub fn same_as(&self, other: &CancelToken) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Result of a proof of work search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofOutcome {
    /// The first nonce satisfying the difficulty
    Found(u64),

    /// The search was aborted through its cancel token
    Cancelled,
}

/// Checks whether `nonce` is a valid proof for the given block contents
///
/// The candidate is hashed with a zero timestamp, so a proof can be checked
/// from a committed block's nonce, previous hash and transactions alone.
pub fn valid_proof(
    nonce: u64,
    previous_hash: &BlockHash,
    transactions: &[Transaction],
    difficulty: usize,
) -> bool {
    hasher::hash_fields(0, nonce, previous_hash, transactions).meets_difficulty(difficulty)
}

/// Brute-force nonce search
#[derive(Debug, Clone, Copy)]
pub struct ProofOfWork {
    difficulty: usize,
    check_interval: u64,
}

impl ProofOfWork {
    pub fn new(difficulty: usize) -> Self {
        ProofOfWork {
            difficulty,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }

    /// Sets how many nonces are tried between cancellation checks
    pub fn with_check_interval(mut self, check_interval: u64) -> Self {
        self.check_interval = check_interval.max(1);
        self
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Searches nonces upward from 0 until one satisfies the difficulty
    ///
    /// There is no upper bound; the token is the only way to stop early.
    pub fn search(
        &self,
        previous_hash: &BlockHash,
        transactions: &[Transaction],
        cancel: &CancelToken,
    ) -> ProofOutcome {
        let mut nonce: u64 = 0;

        loop {
            if nonce % self.check_interval == 0 && cancel.is_cancelled() {
                debug!("Proof of work cancelled after {} attempts", nonce);
                return ProofOutcome::Cancelled;
            }

            if valid_proof(nonce, previous_hash, transactions, self.difficulty) {
                debug!("Proof of work found nonce {} at difficulty {}", nonce, self.difficulty);
                return ProofOutcome::Found(nonce);
            }

            nonce = nonce.wrapping_add(1);
        }
    }
}

impl Default for ProofOfWork {
    fn default() -> Self {
        ProofOfWork::new(MINING_DIFFICULTY)
    }
}
