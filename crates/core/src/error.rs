//! # Error Module
//!
//! Domain errors for Bancosim using thiserror.
//!
//! Every failure in this simulation is a recoverable no-op: the requested
//! mutation is aborted, prior state is retained, and the caller receives a
//! typed reason instead of a printed message.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    // === Account errors ===
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        /// How much could still be withdrawn: balance minus the overdraft limit.
        available: Decimal,
    },

    // === Card errors ===
    #[error("Invalid access code {0:?}: must be exactly 4 digits")]
    InvalidAccessCode(String),

    // === Branch errors ===
    #[error("Client {name} does not meet the minimum net worth: {net_worth}")]
    ClientBelowMinimumWorth { name: String, net_worth: Decimal },

    #[error("Loan unavailable: requested {requested}, reserve {reserve}")]
    LoanUnavailable { requested: Decimal, reserve: Decimal },

    #[error("Branch {0} is not a virtual branch")]
    NotAVirtualBranch(u32),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Check whether this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    /// Check whether this is a policy rejection (card code, client gate, loan)
    pub fn is_policy_rejection(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidAccessCode(_)
                | CoreError::ClientBelowMinimumWorth { .. }
                | CoreError::LoanUnavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::InsufficientFunds {
            requested: dec!(2000),
            available: dec!(1300),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 2000, available 1300"
        );

        let err = CoreError::InvalidAccessCode("12a4".to_string());
        assert!(err.to_string().contains("12a4"));
    }

    #[test]
    fn test_error_checks() {
        let err = CoreError::InsufficientFunds {
            requested: dec!(100),
            available: dec!(50),
        };
        assert!(err.is_insufficient_funds());
        assert!(!err.is_policy_rejection());

        let err = CoreError::LoanUnavailable {
            requested: dec!(2_000_000),
            reserve: dec!(1_000_000),
        };
        assert!(err.is_policy_rejection());
    }
}
