//! # Bancosim Reports
//!
//! Console reporting for the banking simulation: account statements,
//! transaction tables, and branch reserve reports, plus text/JSON exporters
//! over a tabular report view.
//!
//! Rendering is separated from the domain so every failure message and
//! statement line is an assertable `String` rather than a side effect.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bancosim_core::Account;
//! use bancosim_reports::{statement, JsonExporter, ReportExporter, StatementReport};
//!
//! let account = Account::new("Lucas", "111.222.333-44", 1234, 4321);
//! println!("{}", statement::balance_line(&account));
//!
//! let report = StatementReport::from_account(&account);
//! println!("{}", JsonExporter::new().export(&report));
//! ```

pub mod exporters;
pub mod statement;

// Re-export main types
pub use exporters::{
    BranchReport,
    JsonExporter,
    ReportData,
    ReportExporter,
    StatementReport,
    TextExporter,
};

pub use statement::{
    balance_line, format_brl, format_timestamp, history, overdraft_line, reserve_report,
};
