//! # Card Module
//!
//! Credit card bound to exactly one account. The account owns the card; the
//! card keeps the account number as a non-owning back-reference. The only
//! mutable attribute after issuance is the 4-digit access code.

use crate::error::{CoreError, CoreResult};
use crate::ids::IdSource;
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed credit limit for every issued card, in whole currency units.
const CREDIT_LIMIT_UNITS: i64 = 1000;

/// Access code every card starts with.
const DEFAULT_ACCESS_CODE: &str = "1234";

/// Cards expire this many years after issuance.
const VALIDITY_YEARS: i32 = 4;

/// A credit card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// 16-digit card number
    number: u64,
    /// Titular name, copied from the account holder at issuance
    titular: String,
    /// Expiry month (1-12)
    expiry_month: u32,
    /// Expiry year
    expiry_year: i32,
    /// 3-digit security code
    security_code: String,
    /// Fixed credit limit
    limit: Decimal,
    /// 4-digit access code; mutable with validation
    access_code: String,
    /// Number of the owning account (non-owning back-reference)
    account_number: u32,
}

impl Card {
    /// Issue a card for an account. Called by
    /// [`Account::issue_card`](crate::account::Account::issue_card), which
    /// records the ownership link.
    pub(crate) fn issue(titular: &str, account_number: u32, ids: &mut dyn IdSource) -> Self {
        let today = Utc::now();
        Self {
            number: ids.card_number(),
            titular: titular.to_string(),
            expiry_month: today.month(),
            expiry_year: today.year() + VALIDITY_YEARS,
            security_code: ids.security_code(),
            limit: Decimal::from(CREDIT_LIMIT_UNITS),
            access_code: DEFAULT_ACCESS_CODE.to_string(),
            account_number,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn titular(&self) -> &str {
        &self.titular
    }

    /// Expiry as "month/year", e.g. "8/2030"
    pub fn expiry(&self) -> String {
        format!("{}/{}", self.expiry_month, self.expiry_year)
    }

    pub fn security_code(&self) -> &str {
        &self.security_code
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    pub fn access_code(&self) -> &str {
        &self.access_code
    }

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    /// Replace the access code.
    ///
    /// Accepted iff the candidate is exactly 4 ASCII digits; otherwise the
    /// prior code is retained.
    pub fn set_access_code(&mut self, code: &str) -> CoreResult<()> {
        if code.len() == 4 && code.chars().all(|c| c.is_ascii_digit()) {
            self.access_code = code.to_string();
            Ok(())
        } else {
            Err(CoreError::InvalidAccessCode(code.to_string()))
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Card {} ({}, expires {}, account {})",
            self.number,
            self.titular,
            self.expiry(),
            self.account_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FixedIds;
    use rust_decimal_macros::dec;

    fn card() -> Card {
        let mut ids = FixedIds::default();
        Card::issue("Lucas", 4321, &mut ids)
    }

    #[test]
    fn test_card_issuance_defaults() {
        let card = card();

        assert_eq!(card.number(), 4_111_111_111_111_111);
        assert_eq!(card.titular(), "Lucas");
        assert_eq!(card.security_code(), "007");
        assert_eq!(card.limit(), dec!(1000));
        assert_eq!(card.access_code(), "1234");
        assert_eq!(card.account_number(), 4321);
    }

    #[test]
    fn test_card_expires_four_years_out() {
        let card = card();
        let today = Utc::now();

        assert_eq!(card.expiry(), format!("{}/{}", today.month(), today.year() + 4));
    }

    #[test]
    fn test_set_access_code_accepts_four_digits() {
        let mut card = card();

        card.set_access_code("4563").expect("valid code");
        assert_eq!(card.access_code(), "4563");

        card.set_access_code("0000").expect("leading zeros are valid");
        assert_eq!(card.access_code(), "0000");
    }

    #[test]
    fn test_set_access_code_rejects_invalid() {
        let mut card = card();
        card.set_access_code("4563").expect("valid code");

        for bad in ["123", "12345", "12a4", "abcd", "", "12 4", "١٢٣٤"] {
            let err = card.set_access_code(bad).expect_err("invalid code");
            assert!(err.is_policy_rejection());
            // Prior code retained
            assert_eq!(card.access_code(), "4563");
        }
    }
}
