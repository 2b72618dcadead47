//! # Ledger Module
//!
//! Operations spanning more than one account. `transfer` receives both
//! account handles and applies the debit and the credit itself, so no entity
//! reaches into another's internals and the all-or-nothing behavior is
//! explicit.

use crate::account::Account;
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;

/// Move `amount` from one account to another.
///
/// The sufficiency check is the same as [`Account::withdraw`]: the source
/// balance may not drop below its overdraft limit. On success exactly one
/// transaction is appended to each history; on rejection neither account
/// changes.
pub fn transfer(from: &mut Account, to: &mut Account, amount: Decimal) -> CoreResult<()> {
    if from.balance() - amount < from.overdraft_limit() {
        return Err(CoreError::InsufficientFunds {
            requested: amount,
            available: from.available(),
        });
    }
    from.record(-amount);
    to.record(amount);
    tracing::debug!(
        from = from.number(),
        to = to.number(),
        %amount,
        "transfer"
    );
    Ok(())
}
