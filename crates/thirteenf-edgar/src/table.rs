//! HTML table extraction.

use crate::error::{EdgarError, Result};
use crate::locator::Locator;
use scraper::{ElementRef, Html, Node, Selector};
use serde::Serialize;

/// Text substituted for a `<br>` inside a cell.
pub const LINE_BREAK_SEPARATOR: &str = " - ";

/// One extracted table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Cell text with whitespace collapsed and line breaks folded.
    pub text: String,
    /// First hyperlink target inside the cell.
    pub href: Option<String>,
}

impl Cell {
    /// Cell without a link.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
        }
    }
}

/// Extract the rows of the table held by the element `locator` selects.
///
/// Rows are the `tr` elements below the container, in document order, minus
/// the first `skip_rows`. Each row is its `td` cells.
///
/// # Errors
/// Returns `EdgarError::TableNotFound` when no element matches `locator`.
///
/// # Example
/// ```
/// # use thirteenf_edgar::{Locator, table::extract_table};
/// let html = r#"<div id="t"><table>
///     <tr><th>Name</th></tr>
///     <tr><td>ACME<br>CORP</td></tr>
/// </table></div>"#;
/// let rows = extract_table(html, &Locator::first_id("t"), 1).unwrap();
/// assert_eq!(rows[0][0].text, "ACME - CORP");
/// ```
pub fn extract_table(markup: &str, locator: &Locator, skip_rows: usize) -> Result<Vec<Vec<Cell>>> {
    let document = Html::parse_document(markup);
    let container_selector = locator.selector()?;
    let container = locator
        .pick(document.select(&container_selector))
        .ok_or_else(|| EdgarError::TableNotFound(format!("no {locator} on page")))?;

    let row_selector = static_selector("tr")?;
    let cell_selector = static_selector("td")?;

    let rows = container
        .select(&row_selector)
        .skip(skip_rows)
        .map(|row| row.select(&cell_selector).map(extract_cell).collect())
        .collect();

    Ok(rows)
}

fn static_selector(source: &str) -> Result<Selector> {
    Selector::parse(source).map_err(|e| EdgarError::Selector {
        selector: source.to_string(),
        reason: e.to_string(),
    })
}

fn extract_cell(cell: ElementRef<'_>) -> Cell {
    let mut raw = String::new();
    let mut href = None;

    for node in cell.descendants() {
        match node.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(element) if element.name() == "br" => raw.push_str(LINE_BREAK_SEPARATOR),
            Node::Element(element) if element.name() == "a" && href.is_none() => {
                href = element.attr("href").map(str::to_string);
            }
            _ => {}
        }
    }

    Cell {
        text: normalize_ws(&raw),
        href,
    }
}

/// Collapse whitespace runs (including non-breaking spaces) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
