//! Account statements and branch reserve reports.
//!
//! Renders the human-readable console text of the simulation as plain
//! `String`s so callers decide where it goes and tests can assert on it.
//! Timestamps are shown in São Paulo local time (UTC-3).

use bancosim_core::{Account, Branch, ReserveStatus};
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;

const SAO_PAULO_OFFSET_SECS: i32 = 3 * 3600;

fn sao_paulo() -> FixedOffset {
    FixedOffset::west_opt(SAO_PAULO_OFFSET_SECS).expect("UTC-3 is a valid offset")
}

/// Format a timestamp as "dd/mm/yyyy HH:MM:SS" in São Paulo local time.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&sao_paulo())
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}

/// Format an amount as Brazilian currency, e.g. "R$ 1,000,000.00".
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("R$ {}{}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

/// One-line balance statement.
pub fn balance_line(account: &Account) -> String {
    format!(
        "{}, your current balance is {}",
        account.holder(),
        format_brl(account.balance())
    )
}

/// One-line overdraft limit statement.
pub fn overdraft_line(account: &Account) -> String {
    format!(
        "Your overdraft limit is {}",
        format_brl(account.overdraft_limit())
    )
}

/// Full transaction history as a tab-separated table, newest last.
pub fn history(account: &Account) -> String {
    let mut out = String::new();
    out.push_str(&format!("Transaction history of {}\n", account.holder()));
    out.push_str("Amount\tBalance\tDate and time\n");
    for tx in account.transactions() {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            format_brl(tx.amount()),
            format_brl(tx.balance_after()),
            format_timestamp(tx.timestamp())
        ));
    }
    out
}

/// Reserve health report for a branch.
pub fn reserve_report(branch: &Branch) -> String {
    match branch.check_reserve() {
        ReserveStatus::Healthy(reserve) => format!(
            "Branch {}: reserve is at the recommended level. Current reserve: {}",
            branch.number(),
            format_brl(reserve)
        ),
        ReserveStatus::BelowRecommended(reserve) => format!(
            "Branch {}: reserve below the recommended level. Current reserve: {}",
            branch.number(),
            format_brl(reserve)
        ),
    }
}
