//! # Account Module
//!
//! Checking account with a balance, an overdraft limit, an append-only
//! transaction history, and an owned set of credit cards. The account is the
//! lifetime owner of its cards; each card keeps only a non-owning
//! back-reference (the account number).

use crate::card::Card;
use crate::error::{CoreError, CoreResult};
use crate::ids::IdSource;
use crate::transaction::Transaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed overdraft limit, in whole currency units. The balance may go
/// negative via withdrawals and transfers, but never below this line.
const OVERDRAFT_LIMIT_UNITS: i64 = -1000;

/// A checking account.
///
/// Created with a zero balance; mutated only by [`deposit`](Account::deposit),
/// [`withdraw`](Account::withdraw), and [`transfer`](crate::ledger::transfer).
/// Every successful mutation appends exactly one [`Transaction`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Holder's full name
    holder: String,
    /// Holder's tax id (CPF)
    tax_id: String,
    /// Branch number, set at creation and not mutable afterwards
    branch: u32,
    /// Account number
    number: u32,
    /// Current balance; may be negative down to the overdraft limit
    balance: Decimal,
    /// Append-only history, ordered by occurrence
    transactions: Vec<Transaction>,
    /// Cards issued against this account
    cards: Vec<Card>,
}

impl Account {
    /// Open an account with a zero balance.
    pub fn new(holder: &str, tax_id: &str, branch: u32, number: u32) -> Self {
        Self {
            holder: holder.to_string(),
            tax_id: tax_id.to_string(),
            branch,
            number,
            balance: Decimal::ZERO,
            transactions: Vec::new(),
            cards: Vec::new(),
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn branch(&self) -> u32 {
        self.branch
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The overdraft limit. Recomputed on every call; always the same
    /// constant in this design.
    pub fn overdraft_limit(&self) -> Decimal {
        Decimal::from(OVERDRAFT_LIMIT_UNITS)
    }

    /// How much can still be withdrawn before hitting the overdraft limit.
    pub fn available(&self) -> Decimal {
        self.balance - self.overdraft_limit()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Credit `amount` to the balance and append a transaction.
    ///
    /// The sign of `amount` is not validated: a negative deposit silently
    /// debits the account.
    pub fn deposit(&mut self, amount: Decimal) {
        self.record(amount);
        tracing::debug!(account = self.number, %amount, balance = %self.balance, "deposit");
    }

    /// Debit `amount` from the balance if the overdraft limit allows it.
    ///
    /// On rejection the balance is unchanged and no transaction is appended.
    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        if self.balance - amount < self.overdraft_limit() {
            return Err(CoreError::InsufficientFunds {
                requested: amount,
                available: self.available(),
            });
        }
        self.record(-amount);
        tracing::debug!(account = self.number, %amount, balance = %self.balance, "withdraw");
        Ok(())
    }

    /// Issue a new card bound to this account and register it in the owned
    /// card set. Returns a mutable borrow of the stored card.
    pub fn issue_card(&mut self, ids: &mut dyn IdSource) -> &mut Card {
        let card = Card::issue(&self.holder, self.number, ids);
        tracing::debug!(account = self.number, card = card.number(), "card issued");
        self.cards.push(card);
        // Just pushed, so the set is non-empty.
        self.cards.last_mut().expect("card set is non-empty")
    }

    /// Apply a signed mutation and append the matching transaction record.
    /// Callers are responsible for any sufficiency check.
    pub(crate) fn record(&mut self, amount: Decimal) {
        self.balance += amount;
        self.transactions.push(Transaction::new(amount, self.balance));
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {}/{} ({}, balance: {})",
            self.branch, self.number, self.holder, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FixedIds;
    use rust_decimal_macros::dec;

    fn account() -> Account {
        Account::new("Lucas", "111.222.333-44", 1234, 4321)
    }

    #[test]
    fn test_account_starts_empty() {
        let acc = account();
        assert_eq!(acc.balance(), dec!(0));
        assert_eq!(acc.overdraft_limit(), dec!(-1000));
        assert!(acc.transactions().is_empty());
        assert!(acc.cards().is_empty());
    }

    #[test]
    fn test_deposits_accumulate() {
        let mut acc = account();
        acc.deposit(dec!(500));
        acc.deposit(dec!(120.50));
        acc.deposit(dec!(29.50));

        assert_eq!(acc.balance(), dec!(650));
        assert_eq!(acc.transactions().len(), 3);

        // Timestamps are monotonically non-decreasing
        let stamps: Vec<_> = acc.transactions().iter().map(|t| t.timestamp()).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_negative_deposit_is_silently_permitted() {
        // Current behavior: deposit sign is not validated.
        let mut acc = account();
        acc.deposit(dec!(-50));
        assert_eq!(acc.balance(), dec!(-50));
        assert_eq!(acc.transactions().len(), 1);
    }

    #[test]
    fn test_withdraw_within_limit() {
        let mut acc = account();
        acc.deposit(dec!(500));

        acc.withdraw(dec!(200)).expect("within limit");
        assert_eq!(acc.balance(), dec!(300));
        assert_eq!(acc.transactions().len(), 2);
        assert_eq!(acc.transactions()[1].amount(), dec!(-200));
        assert_eq!(acc.transactions()[1].balance_after(), dec!(300));
    }

    #[test]
    fn test_withdraw_into_overdraft() {
        let mut acc = account();
        acc.deposit(dec!(100));

        // 100 - 1100 = -1000, exactly at the limit: allowed
        acc.withdraw(dec!(1100)).expect("exactly at the limit");
        assert_eq!(acc.balance(), dec!(-1000));
    }

    #[test]
    fn test_withdraw_rejected_below_limit() {
        let mut acc = account();
        acc.deposit(dec!(500));
        acc.withdraw(dec!(200)).expect("within limit");

        let err = acc.withdraw(dec!(2000)).expect_err("breaches the limit");
        assert!(err.is_insufficient_funds());

        // State unchanged: balance kept, no transaction appended
        assert_eq!(acc.balance(), dec!(300));
        assert_eq!(acc.transactions().len(), 2);
    }

    #[test]
    fn test_insufficient_funds_reports_available() {
        let mut acc = account();
        acc.deposit(dec!(300));

        match acc.withdraw(dec!(2000)) {
            Err(CoreError::InsufficientFunds {
                requested,
                available,
            }) => {
                assert_eq!(requested, dec!(2000));
                assert_eq!(available, dec!(1300));
            }
            other => panic!("expected InsufficientFunds, got {:?}", other),
        }
    }

    #[test]
    fn test_issue_card_registers_link() {
        let mut acc = account();
        let mut ids = FixedIds::default();

        let card_number = acc.issue_card(&mut ids).number();

        assert_eq!(acc.cards().len(), 1);
        let card = &acc.cards()[0];
        assert_eq!(card.number(), card_number);
        assert_eq!(card.titular(), "Lucas");
        assert_eq!(card.account_number(), acc.number());
    }
}
