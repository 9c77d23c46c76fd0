//! Reports handed from the walker to the writer.

use crate::rows::{InformationTableRow, SearchResultRow};
use serde::Serialize;

/// Holdings extracted from one filing's information table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingsReport {
    /// Filing type of the originating search row.
    pub filing_type: String,
    /// Filing date of the originating search row.
    pub filing_date: String,
    /// URL the information table was read from.
    pub document_url: String,
    /// Rows in document order.
    pub rows: Vec<InformationTableRow>,
}

impl HoldingsReport {
    /// Rows joined with tabs and line feeds, each line terminated.
    pub fn to_block(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("{}\n", row.fields().join("\t")))
            .collect()
    }
}

/// Unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// A flat search result row.
    Filing(SearchResultRow),
    /// The information table of one filing.
    Holdings(HoldingsReport),
}

impl Report {
    /// Filing type the report originates from.
    pub fn filing_type(&self) -> &str {
        match self {
            Self::Filing(row) => &row.filing_type,
            Self::Holdings(report) => &report.filing_type,
        }
    }

    /// Output records, one per artifact line.
    pub fn records(&self) -> Vec<Vec<&str>> {
        match self {
            Self::Filing(row) => vec![row.fields().to_vec()],
            Self::Holdings(report) => report.rows.iter().map(|r| r.fields().to_vec()).collect(),
        }
    }
}
