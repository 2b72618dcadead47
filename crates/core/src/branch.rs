//! # Branch Module
//!
//! Bank branches with a cash reserve, a client roster, and a loan ledger.
//! The standard/premium/virtual specializations are a tagged [`BranchKind`],
//! selected at construction. Policy differences
//! (premium client gate, virtual external balance) hang off the kind; all
//! other behavior is shared.

use crate::error::{CoreError, CoreResult};
use crate::ids::IdSource;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Branch number every virtual branch uses.
pub const VIRTUAL_BRANCH_NUMBER: u32 = 1234;

/// Reserve level at or above which a branch is considered healthy,
/// in whole currency units.
const HEALTHY_RESERVE_UNITS: i64 = 1_000_000;

/// Opening reserve for standard and virtual branches.
const STANDARD_OPENING_RESERVE_UNITS: i64 = 1_000_000;

/// Opening reserve for premium branches.
const PREMIUM_OPENING_RESERVE_UNITS: i64 = 10_000_000;

/// Minimum net worth to join a premium branch (exclusive).
const PREMIUM_MINIMUM_WORTH_UNITS: i64 = 1_000_000;

/// A client on a branch's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub tax_id: String,
    pub net_worth: Decimal,
}

/// A recorded loan. Recording is ledger-only: the branch reserve is not
/// debited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub amount: Decimal,
    pub borrower_tax_id: String,
    pub interest_rate: Decimal,
}

/// Branch specialization, selected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum BranchKind {
    /// Default acceptance policy, opening reserve of 1,000,000
    Standard,
    /// Clients must have net worth above 1,000,000; opening reserve of 10,000,000
    Premium,
    /// Fixed branch number; holds a secondary balance with an external
    /// payment processor
    Virtual {
        website: String,
        external_balance: Decimal,
    },
}

impl BranchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchKind::Standard => "standard",
            BranchKind::Premium => "premium",
            BranchKind::Virtual { .. } => "virtual",
        }
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a reserve health check. Pure reporting; carries the reserve at
/// the time of the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "reserve")]
pub enum ReserveStatus {
    Healthy(Decimal),
    BelowRecommended(Decimal),
}

impl ReserveStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ReserveStatus::Healthy(_))
    }

    pub fn reserve(&self) -> Decimal {
        match self {
            ReserveStatus::Healthy(reserve) | ReserveStatus::BelowRecommended(reserve) => *reserve,
        }
    }
}

/// A bank branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Contact phone
    phone: String,
    /// Branch tax id (CNPJ)
    tax_id: String,
    /// Branch number: random in [1001, 9999], fixed for virtual branches
    number: u32,
    /// Cash reserve
    reserve: Decimal,
    /// Client roster
    clients: Vec<Client>,
    /// Loan ledger
    loans: Vec<Loan>,
    /// Specialization
    kind: BranchKind,
}

impl Branch {
    /// Open a standard branch.
    pub fn standard(phone: &str, tax_id: &str, ids: &mut dyn IdSource) -> Self {
        Self::open(
            phone,
            tax_id,
            ids.branch_number(),
            Decimal::from(STANDARD_OPENING_RESERVE_UNITS),
            BranchKind::Standard,
        )
    }

    /// Open a premium branch.
    pub fn premium(phone: &str, tax_id: &str, ids: &mut dyn IdSource) -> Self {
        Self::open(
            phone,
            tax_id,
            ids.branch_number(),
            Decimal::from(PREMIUM_OPENING_RESERVE_UNITS),
            BranchKind::Premium,
        )
    }

    /// Open a virtual branch. Uses the fixed [`VIRTUAL_BRANCH_NUMBER`] and
    /// starts with an empty external balance.
    pub fn virtual_branch(website: &str, tax_id: &str, phone: &str) -> Self {
        Self::open(
            phone,
            tax_id,
            VIRTUAL_BRANCH_NUMBER,
            Decimal::from(STANDARD_OPENING_RESERVE_UNITS),
            BranchKind::Virtual {
                website: website.to_string(),
                external_balance: Decimal::ZERO,
            },
        )
    }

    fn open(phone: &str, tax_id: &str, number: u32, reserve: Decimal, kind: BranchKind) -> Self {
        Self {
            phone: phone.to_string(),
            tax_id: tax_id.to_string(),
            number,
            reserve,
            clients: Vec::new(),
            loans: Vec::new(),
            kind,
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn reserve(&self) -> Decimal {
        self.reserve
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn kind(&self) -> &BranchKind {
        &self.kind
    }

    /// Virtual branches only: the website clients reach the branch at.
    pub fn website(&self) -> Option<&str> {
        match &self.kind {
            BranchKind::Virtual { website, .. } => Some(website),
            _ => None,
        }
    }

    /// Virtual branches only: the secondary balance held with the external
    /// payment processor.
    pub fn external_balance(&self) -> Option<Decimal> {
        match &self.kind {
            BranchKind::Virtual {
                external_balance, ..
            } => Some(*external_balance),
            _ => None,
        }
    }

    /// Check whether the reserve is at the recommended level. No mutation.
    pub fn check_reserve(&self) -> ReserveStatus {
        if self.reserve >= Decimal::from(HEALTHY_RESERVE_UNITS) {
            ReserveStatus::Healthy(self.reserve)
        } else {
            ReserveStatus::BelowRecommended(self.reserve)
        }
    }

    /// Record a loan in the ledger iff the reserve strictly exceeds the
    /// requested amount. The reserve is NOT debited by recording.
    pub fn record_loan(
        &mut self,
        amount: Decimal,
        borrower_tax_id: &str,
        interest_rate: Decimal,
    ) -> CoreResult<()> {
        if amount >= self.reserve {
            return Err(CoreError::LoanUnavailable {
                requested: amount,
                reserve: self.reserve,
            });
        }
        self.loans.push(Loan {
            amount,
            borrower_tax_id: borrower_tax_id.to_string(),
            interest_rate,
        });
        tracing::debug!(branch = self.number, %amount, "loan recorded");
        Ok(())
    }

    /// Add a client to the roster. Premium branches reject clients whose net
    /// worth is at or below the minimum; other kinds accept everyone.
    pub fn add_client(&mut self, name: &str, tax_id: &str, net_worth: Decimal) -> CoreResult<()> {
        if matches!(self.kind, BranchKind::Premium)
            && net_worth <= Decimal::from(PREMIUM_MINIMUM_WORTH_UNITS)
        {
            return Err(CoreError::ClientBelowMinimumWorth {
                name: name.to_string(),
                net_worth,
            });
        }
        self.clients.push(Client {
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            net_worth,
        });
        tracing::debug!(branch = self.number, client = name, "client added");
        Ok(())
    }

    /// Move funds from the cash reserve to the external balance. Virtual
    /// branches only. No sufficiency check: the reserve may go negative.
    pub fn deposit_to_external(&mut self, amount: Decimal) -> CoreResult<()> {
        match &mut self.kind {
            BranchKind::Virtual {
                external_balance, ..
            } => {
                self.reserve -= amount;
                *external_balance += amount;
                tracing::debug!(branch = self.number, %amount, "moved reserve -> external");
                Ok(())
            }
            _ => Err(CoreError::NotAVirtualBranch(self.number)),
        }
    }

    /// Move funds from the external balance back to the cash reserve.
    /// Virtual branches only. No check against the external balance.
    pub fn withdraw_from_external(&mut self, amount: Decimal) -> CoreResult<()> {
        match &mut self.kind {
            BranchKind::Virtual {
                external_balance, ..
            } => {
                *external_balance -= amount;
                self.reserve += amount;
                tracing::debug!(branch = self.number, %amount, "moved external -> reserve");
                Ok(())
            }
            _ => Err(CoreError::NotAVirtualBranch(self.number)),
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Branch {} ({}, reserve: {}, clients: {})",
            self.number,
            self.kind,
            self.reserve,
            self.clients.len()
        )
    }
}
