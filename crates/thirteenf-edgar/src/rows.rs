//! Named-field decoders for the three EDGAR tables.

use crate::error::{EdgarError, Result};
use crate::table::Cell;
use serde::Serialize;
use std::fmt;

/// Which table a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Company search results.
    SearchResults,
    /// Documents of one filing.
    DetailDocuments,
    /// 13F information table.
    InformationTable,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SearchResults => "search results",
            Self::DetailDocuments => "filing detail",
            Self::InformationTable => "information table",
        })
    }
}

/// A row type decoded positionally from a fixed number of cells.
pub trait FromCells: Sized {
    /// Table the row belongs to.
    const KIND: TableKind;
    /// Exact number of cells a row must have.
    const WIDTH: usize;

    /// Map cells onto fields. Only called with exactly `WIDTH` cells.
    fn from_exact(cells: Vec<Cell>) -> Self;

    /// Check the cell count, then map.
    ///
    /// # Errors
    /// Returns `EdgarError::MalformedRow` when the count differs from `WIDTH`.
    fn from_cells(cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != Self::WIDTH {
            return Err(EdgarError::MalformedRow {
                kind: Self::KIND,
                expected: Self::WIDTH,
                found: cells.len(),
            });
        }
        Ok(Self::from_exact(cells))
    }
}

/// Decode every row, failing on the first malformed one.
pub fn decode_rows<T: FromCells>(rows: Vec<Vec<Cell>>) -> Result<Vec<T>> {
    rows.into_iter().map(T::from_cells).collect()
}

/// One row of the company search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultRow {
    /// Filing type, e.g. `13F-HR`.
    pub filing_type: String,
    /// Format cell text, e.g. `Documents`.
    pub format: String,
    /// Link to the filing detail page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_link: Option<String>,
    /// Description, with line breaks folded to ` - `.
    pub description: String,
    /// Filing date as shown, e.g. `2019-05-15`.
    pub filing_date: String,
    /// File/film number.
    pub file_number: String,
}

impl SearchResultRow {
    /// Fields in output column order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.filing_type,
            &self.format,
            &self.description,
            &self.filing_date,
            &self.file_number,
        ]
    }
}

impl FromCells for SearchResultRow {
    const KIND: TableKind = TableKind::SearchResults;
    const WIDTH: usize = 5;

    fn from_exact(cells: Vec<Cell>) -> Self {
        let [filing, format, description, filing_date, file_number] = take_cells(cells);
        Self {
            filing_type: filing.text,
            format: format.text,
            format_link: format.href,
            description: description.text,
            filing_date: filing_date.text,
            file_number: file_number.text,
        }
    }
}

/// One document listed on a filing detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailDocumentRow {
    /// Sequence number.
    pub sequence: String,
    /// Document description.
    pub description: String,
    /// Document file name as shown.
    pub document: String,
    /// Link to the document.
    pub document_link: Option<String>,
    /// Document type, e.g. `INFORMATION TABLE`.
    pub document_type: String,
    /// Size as shown.
    pub size: String,
}

impl FromCells for DetailDocumentRow {
    const KIND: TableKind = TableKind::DetailDocuments;
    const WIDTH: usize = 5;

    fn from_exact(cells: Vec<Cell>) -> Self {
        let [sequence, description, document, document_type, size] = take_cells(cells);
        Self {
            sequence: sequence.text,
            description: description.text,
            document: document.text,
            document_link: document.href,
            document_type: document_type.text,
            size: size.text,
        }
    }
}

/// Column titles of the information table artifact.
pub const INFORMATION_TABLE_HEADER: [&str; 12] = [
    "Name Of Issuer",
    "Title Of Class",
    "CUSIP",
    "Value (x$1000)",
    "SHRS or PRN AMT",
    "SH/PRN",
    "Put/Call",
    "Investment Discretion",
    "Manager",
    "Sole",
    "Shared",
    "None",
];

/// One holding from a 13F information table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InformationTableRow {
    /// Name of issuer.
    pub issuer: String,
    /// Title of class.
    pub title_of_class: String,
    /// CUSIP.
    pub cusip: String,
    /// Market value in thousands of dollars.
    pub value: String,
    /// Shares or principal amount.
    pub amount: String,
    /// `SH` or `PRN`.
    pub amount_type: String,
    /// `Put`, `Call` or empty.
    pub put_call: String,
    /// Investment discretion.
    pub discretion: String,
    /// Other manager.
    pub manager: String,
    /// Sole voting authority.
    pub sole: String,
    /// Shared voting authority.
    pub shared: String,
    /// No voting authority.
    pub none: String,
}

impl InformationTableRow {
    /// Fields in [`INFORMATION_TABLE_HEADER`] order.
    pub fn fields(&self) -> [&str; 12] {
        [
            &self.issuer,
            &self.title_of_class,
            &self.cusip,
            &self.value,
            &self.amount,
            &self.amount_type,
            &self.put_call,
            &self.discretion,
            &self.manager,
            &self.sole,
            &self.shared,
            &self.none,
        ]
    }
}

impl FromCells for InformationTableRow {
    const KIND: TableKind = TableKind::InformationTable;
    const WIDTH: usize = 12;

    fn from_exact(cells: Vec<Cell>) -> Self {
        let [
            issuer,
            title_of_class,
            cusip,
            value,
            amount,
            amount_type,
            put_call,
            discretion,
            manager,
            sole,
            shared,
            none,
        ] = take_cells(cells).map(|c| c.text);
        Self {
            issuer,
            title_of_class,
            cusip,
            value,
            amount,
            amount_type,
            put_call,
            discretion,
            manager,
            sole,
            shared,
            none,
        }
    }
}

// Callers have checked the width.
fn take_cells<const N: usize>(cells: Vec<Cell>) -> [Cell; N] {
    let mut cells = cells.into_iter();
    std::array::from_fn(|_| cells.next().unwrap_or_default())
}
