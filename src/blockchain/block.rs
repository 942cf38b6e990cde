use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use std::fmt;

use super::hasher::{self, BlockHash};
use super::transaction::Transaction;

/// Represents a block in the blockchain
///
/// A block is immutable once built. Its hash is never stored; it is
/// recomputed from the canonical encoding of the fields on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Block {
    /// Creation time in nanoseconds since the Unix epoch
    timestamp: i64,

    /// Proof of work nonce
    nonce: u64,

    /// Hash of the previous block
    #[schema(value_type = String, example = "000a3f...")]
    previous_hash: BlockHash,

    /// Transactions committed by this block, in pool order
    transactions: Vec<Transaction>,
}

impl Block {
    /// Creates a new block stamped with the current time
    ///
    /// # Arguments
    ///
    /// * `nonce` - The proof of work nonce
    /// * `previous_hash` - The hash of the previous block
    /// * `transactions` - The transactions to include in the block
    ///
    /// # Returns
    ///
    /// A new Block instance
    pub fn new(nonce: u64, previous_hash: BlockHash, transactions: Vec<Transaction>) -> Self {
        Block {
            timestamp: Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX),
            nonce,
            previous_hash,
            transactions,
        }
    }

    /// The zero-valued block whose hash seeds the genesis block's link
    pub fn sentinel() -> Self {
        Block {
            timestamp: 0,
            nonce: 0,
            previous_hash: BlockHash::default(),
            transactions: Vec::new(),
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn previous_hash(&self) -> &BlockHash {
        &self.previous_hash
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Calculates the hash of the block
    ///
    /// # Returns
    ///
    /// The SHA-256 digest of the block's canonical encoding
    pub fn hash(&self) -> BlockHash {
        hasher::hash_fields(
            self.timestamp,
            self.nonce,
            &self.previous_hash,
            &self.transactions,
        )
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "timestamp        {}", self.timestamp)?;
        writeln!(f, "nonce            {}", self.nonce)?;
        write!(f, "previous_hash    {}", self.previous_hash)?;
        for transaction in &self.transactions {
            write!(f, "\n{}", transaction)?;
        }
        Ok(())
    }
}
