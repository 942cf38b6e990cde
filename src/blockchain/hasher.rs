//! Canonical block encoding and hashing
//!
//! The byte layout produced here is the hash input for mining and for every
//! later verification. It is deliberately separate from the JSON the HTTP API
//! returns, and must not change.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use std::fmt;

use super::transaction::Transaction;

/// A 256-bit block digest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Number of leading `'0'` characters in the hex rendering
    pub fn leading_hex_zeros(&self) -> usize {
        let mut zeros = 0;
        for byte in self.0 {
            if byte == 0 {
                zeros += 2;
                continue;
            }
            if byte >> 4 == 0 {
                zeros += 1;
            }
            break;
        }
        zeros
    }

    /// Whether the first `difficulty` hex characters are all `'0'`
    pub fn meets_difficulty(&self, difficulty: usize) -> bool {
        self.leading_hex_zeros() >= difficulty
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&text, &mut bytes).map_err(serde::de::Error::custom)?;
        Ok(BlockHash(bytes))
    }
}

#[derive(Serialize)]
struct CanonicalTransaction<'a> {
    #[serde(rename = "Sender")]
    sender: &'a str,
    #[serde(rename = "Recipient")]
    recipient: &'a str,
    #[serde(rename = "Value")]
    value: i64,
}

#[derive(Serialize)]
struct CanonicalBlock<'a> {
    #[serde(rename = "Timestamp")]
    timestamp: i64,
    #[serde(rename = "Nonce")]
    nonce: u64,
    #[serde(rename = "PreviousHash")]
    previous_hash: String,
    #[serde(rename = "Transactions")]
    transactions: Vec<CanonicalTransaction<'a>>,
}

/// Encodes block fields into their canonical byte form
pub fn canonical_bytes(
    timestamp: i64,
    nonce: u64,
    previous_hash: &BlockHash,
    transactions: &[Transaction],
) -> Vec<u8> {
    let block = CanonicalBlock {
        timestamp,
        nonce,
        previous_hash: previous_hash.to_hex(),
        transactions: transactions
            .iter()
            .map(|tx| CanonicalTransaction {
                sender: tx.sender(),
                recipient: tx.recipient(),
                value: tx.value().units(),
            })
            .collect(),
    };

    // Strings and integers in a plain struct always serialize.
    serde_json::to_vec(&block).expect("canonical block encoding cannot fail")
}

/// Hashes block fields with SHA-256 over their canonical encoding
pub fn hash_fields(
    timestamp: i64,
    nonce: u64,
    previous_hash: &BlockHash,
    transactions: &[Transaction],
) -> BlockHash {
    let bytes = canonical_bytes(timestamp, nonce, previous_hash, transactions);
    BlockHash(Sha256::digest(&bytes).into())
}
