use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use std::fmt;

use super::amount::Amount;

/// Sender identity used for mining reward transactions
pub const MINING_SENDER: &str = "THE BLOCKCHAIN";

/// Represents a transfer of value between two addresses
///
/// Transactions carry no identity beyond their field values and are never
/// validated: self-transfers, negative values and unknown addresses are all
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// Sender's address
    #[serde(rename = "sender_address")]
    sender: String,

    /// Recipient's address
    #[serde(rename = "recipient_address")]
    recipient: String,

    /// Amount being transferred
    #[schema(value_type = f64, example = 1.0)]
    value: Amount,
}

impl Transaction {
    /// Creates a new transaction
    ///
    /// # Arguments
    ///
    /// * `sender` - The address of the sender
    /// * `recipient` - The address of the recipient
    /// * `value` - The amount to transfer
    ///
    /// # Returns
    ///
    /// A new Transaction instance
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, value: Amount) -> Self {
        Transaction {
            sender: sender.into(),
            recipient: recipient.into(),
            value,
        }
    }

    /// Creates a mining reward transaction paying `recipient`
    pub fn reward(recipient: impl Into<String>, value: Amount) -> Self {
        Transaction::new(MINING_SENDER, recipient, value)
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    /// Checks if the transaction is a mining reward
    pub fn is_reward(&self) -> bool {
        self.sender == MINING_SENDER
    }

    /// Net effect of this transaction on the balance of `address`, in minor units
    pub fn balance_delta(&self, address: &str) -> i128 {
        let value = i128::from(self.value.units());
        let mut delta = 0;
        if self.recipient == address {
            delta += value;
        }
        if self.sender == address {
            delta -= value;
        }
        delta
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(40))?;
        writeln!(f, " sender_address       {}", self.sender)?;
        writeln!(f, " recipient_address    {}", self.recipient)?;
        write!(f, " value                {}", self.value)
    }
}
