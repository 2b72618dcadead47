//! # Transaction Module
//!
//! Append-only transaction records kept by each account. A record captures
//! the signed amount of the mutation, the balance it produced, and when it
//! happened.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in an account's transaction history.
///
/// Records are immutable once appended and ordered by occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Signed amount: positive for credits, negative for debits
    amount: Decimal,
    /// Account balance immediately after this transaction
    balance_after: Decimal,
    /// When the transaction happened
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(amount: Decimal, balance_after: Decimal) -> Self {
        Self {
            amount,
            balance_after,
            timestamp: Utc::now(),
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Check whether this transaction credited the account
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} at {}",
            self.amount,
            self.balance_after,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
