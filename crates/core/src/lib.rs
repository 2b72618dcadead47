//! # Bancosim Core
//!
//! Domain types for a small educational banking simulation: checking
//! accounts with overdraft bookkeeping, credit cards with a validated access
//! code, and bank branches in three specializations (standard, premium,
//! virtual).
//!
//! Everything is in-memory and single-threaded by design: there is no
//! persistence, no synchronization, and concurrent access from multiple
//! callers is unsupported. Failures are typed [`CoreError`] values and every
//! rejected operation leaves state unchanged.
//!
//! Randomized identifiers (branch numbers, card numbers, security codes) are
//! drawn through the injectable [`IdSource`] trait so tests can pin them.

pub mod account;
pub mod branch;
pub mod card;
pub mod error;
pub mod ids;
pub mod ledger;
pub mod transaction;

pub use account::Account;
pub use branch::{Branch, BranchKind, Client, Loan, ReserveStatus, VIRTUAL_BRANCH_NUMBER};
pub use card::Card;
pub use error::{CoreError, CoreResult};
pub use ids::{FixedIds, IdSource, RandomIds};
pub use ledger::transfer;
pub use transaction::Transaction;
