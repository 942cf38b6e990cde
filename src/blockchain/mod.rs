// Blockchain module
//
// This module contains the core ledger implementation including:
// - Amount type
// - Transaction and Block structures
// - Canonical hashing
// - Proof of work search and verification
// - Blockchain structure (chain + pending pool)

pub mod amount;
pub mod block;
pub mod chain;
pub mod hasher;
pub mod pow;
pub mod transaction;

// Re-export main components for easier access
pub use amount::{Amount, AmountError};
pub use block::Block;
pub use chain::{Blockchain, BlockchainError, MiningOutcome, MINING_REWARD};
pub use hasher::BlockHash;
pub use pow::{valid_proof, CancelToken, ProofOfWork, ProofOutcome, MINING_DIFFICULTY};
pub use transaction::{Transaction, MINING_SENDER};
