//! Report exporters - plain text and JSON.
//!
//! Reports are a tabular view (title, headers, rows) plus summary key-value
//! pairs; exporters turn that view into a target format.

use bancosim_core::{Account, Branch};

use crate::statement::{format_brl, format_timestamp};

/// Trait for exporting reports to different formats
pub trait ReportExporter {
    /// Export to the target format
    fn export(&self, report: &dyn ReportData) -> String;

    /// File extension for this format
    fn extension(&self) -> &'static str;
}

/// Trait for data that can be exported
pub trait ReportData {
    /// Report title
    fn title(&self) -> &str;

    /// Column headers
    fn headers(&self) -> Vec<String>;

    /// Data rows
    fn rows(&self) -> Vec<Vec<String>>;

    /// Summary statistics as key-value pairs
    fn summary(&self) -> Vec<(String, String)>;
}

// ============================================================================
// Text Exporter
// ============================================================================

/// Plain text exporter: title, summary lines, then a column-aligned table.
#[derive(Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for TextExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let headers = report.headers();
        let rows = report.rows();

        // Column widths over header + every row
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (i, field) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(field.len());
                }
            }
        }

        let mut out = String::new();
        out.push_str(report.title());
        out.push('\n');
        for (key, value) in report.summary() {
            out.push_str(&format!("{}: {}\n", key, value));
        }
        if headers.is_empty() {
            return out;
        }

        let render_row = |fields: &[String]| -> String {
            fields
                .iter()
                .enumerate()
                .map(|(i, f)| format!("{:<width$}", f, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        out.push_str(&render_row(&headers));
        out.push('\n');
        for row in &rows {
            out.push_str(&render_row(row));
            out.push('\n');
        }
        out
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

// ============================================================================
// JSON Exporter
// ============================================================================

/// JSON format exporter
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let headers = report.headers();

        let data: Vec<serde_json::Value> = report
            .rows()
            .iter()
            .map(|row| {
                let obj: serde_json::Map<String, serde_json::Value> = headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let value = row.get(i).cloned().unwrap_or_default();
                        (header.clone(), serde_json::Value::String(value))
                    })
                    .collect();
                serde_json::Value::Object(obj)
            })
            .collect();

        let summary: serde_json::Map<String, serde_json::Value> = report
            .summary()
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();

        let output = serde_json::json!({
            "title": report.title(),
            "summary": summary,
            "data": data,
        });

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_default()
        } else {
            serde_json::to_string(&output).unwrap_or_default()
        }
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

// ============================================================================
// Statement Report
// ============================================================================

/// Tabular view of an account's transaction history.
#[derive(Debug, Clone)]
pub struct StatementReport {
    title: String,
    holder: String,
    balance: String,
    overdraft_limit: String,
    rows: Vec<[String; 3]>,
}

impl StatementReport {
    pub fn from_account(account: &Account) -> Self {
        Self {
            title: format!("Statement - account {}/{}", account.branch(), account.number()),
            holder: account.holder().to_string(),
            balance: format_brl(account.balance()),
            overdraft_limit: format_brl(account.overdraft_limit()),
            rows: account
                .transactions()
                .iter()
                .map(|tx| {
                    [
                        format_brl(tx.amount()),
                        format_brl(tx.balance_after()),
                        format_timestamp(tx.timestamp()),
                    ]
                })
                .collect(),
        }
    }
}

impl ReportData for StatementReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Amount".to_string(),
            "Balance".to_string(),
            "Date and time".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.to_vec()).collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("Holder".to_string(), self.holder.clone()),
            ("Balance".to_string(), self.balance.clone()),
            ("Overdraft limit".to_string(), self.overdraft_limit.clone()),
            ("Transactions".to_string(), self.rows.len().to_string()),
        ]
    }
}

// ============================================================================
// Branch Report
// ============================================================================

/// Tabular view of a branch: one client per row, reserve figures in the
/// summary.
#[derive(Debug, Clone)]
pub struct BranchReport {
    title: String,
    kind: String,
    reserve: String,
    external_balance: Option<String>,
    loan_count: usize,
    rows: Vec<[String; 3]>,
}

impl BranchReport {
    pub fn from_branch(branch: &Branch) -> Self {
        Self {
            title: format!("Branch {} ({})", branch.number(), branch.kind()),
            kind: branch.kind().to_string(),
            reserve: format_brl(branch.reserve()),
            external_balance: branch.external_balance().map(format_brl),
            loan_count: branch.loans().len(),
            rows: branch
                .clients()
                .iter()
                .map(|c| {
                    [
                        c.name.clone(),
                        c.tax_id.clone(),
                        format_brl(c.net_worth),
                    ]
                })
                .collect(),
        }
    }
}

impl ReportData for BranchReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Client".to_string(),
            "Tax id".to_string(),
            "Net worth".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.to_vec()).collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        let mut summary = vec![
            ("Kind".to_string(), self.kind.clone()),
            ("Reserve".to_string(), self.reserve.clone()),
        ];
        if let Some(external) = &self.external_balance {
            summary.push(("External balance".to_string(), external.clone()));
        }
        summary.push(("Clients".to_string(), self.rows.len().to_string()));
        summary.push(("Loans".to_string(), self.loan_count.to_string()));
        summary
    }
}
