//! Search page → filing detail page → information table walk.
//!
//! Every hop is fetched strictly after the row that triggers it has been
//! selected, so rows past the cap or failing the filing type filter never
//! cause a request.

use crate::client::PageFetcher;
use crate::config::{
    DETAIL_CONTAINER_ID, DOCUMENT_HEADER_ROWS, EdgarConfig, SEARCH_CONTAINER_ID, WalkerConfig,
};
use crate::error::{EdgarError, Result};
use crate::identifier::Identifier;
use crate::locator::Locator;
use crate::report::{HoldingsReport, Report};
use crate::rows::{
    DetailDocumentRow, FromCells, InformationTableRow, SearchResultRow, decode_rows,
};
use crate::table::{Cell, extract_table};
use tracing::{debug, info, warn};

/// Message used when the search page has no results container.
pub const NO_MATCH_MESSAGE: &str = "no matching ticker or CIK";

/// Drives the fetcher and the table extractor across the three page levels.
#[derive(Debug)]
pub struct ResultWalker<F> {
    fetcher: F,
    edgar: EdgarConfig,
    config: WalkerConfig,
}

impl<F: PageFetcher> ResultWalker<F> {
    /// Create a walker.
    pub const fn new(fetcher: F, edgar: EdgarConfig, config: WalkerConfig) -> Self {
        Self {
            fetcher,
            edgar,
            config,
        }
    }

    /// The underlying fetcher.
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Walk settings.
    pub const fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Fetch the search page for `identifier` and decode its first
    /// `max_records` rows.
    ///
    /// Rows past the cap are never decoded.
    ///
    /// # Errors
    /// `TableNotFound` when the page has no results container, which is what
    /// EDGAR serves for unknown identifiers. Fetch errors propagate.
    pub async fn search(&self, identifier: &Identifier) -> Result<Vec<SearchResultRow>> {
        let rows = self.search_table(identifier).await?;
        rows.into_iter()
            .take(self.config.max_records)
            .map(SearchResultRow::from_cells)
            .collect()
    }

    async fn search_table(&self, identifier: &Identifier) -> Result<Vec<Vec<Cell>>> {
        let url = self.edgar.search_url(identifier, self.config.max_records)?;
        let markup = self.fetcher.fetch(&url).await?;

        let locator = Locator::first_id(SEARCH_CONTAINER_ID);
        let rows = extract_table(&markup, &locator, 1).map_err(|e| match e {
            EdgarError::TableNotFound(_) => EdgarError::TableNotFound(NO_MATCH_MESSAGE.to_string()),
            other => other,
        })?;

        debug!(%identifier, rows = rows.len(), "search results");
        Ok(rows)
    }

    /// Flat search results for `identifier`, capped at `max_records`.
    pub async fn filings(&self, identifier: &Identifier) -> Result<Vec<Report>> {
        let rows = self.search(identifier).await?;
        Ok(rows.into_iter().map(Report::Filing).collect())
    }

    /// Information tables of every qualifying filing for `identifier`.
    ///
    /// Search rows are decoded one at a time, each right before it is
    /// considered. A filing that exposes no information table contributes
    /// nothing.
    pub async fn holdings(&self, identifier: &Identifier) -> Result<Vec<Report>> {
        let rows = self.search_table(identifier).await?;
        let mut reports = Vec::new();

        for cells in rows.into_iter().take(self.config.max_records) {
            let row = SearchResultRow::from_cells(cells)?;
            if !row.filing_type.starts_with(&self.config.filing_prefix) {
                continue;
            }

            if let Some(report) = self.filing_holdings(&row).await? {
                info!(
                    filing_type = %report.filing_type,
                    filing_date = %report.filing_date,
                    rows = report.rows.len(),
                    "information table extracted"
                );
                reports.push(Report::Holdings(report));
            }
        }

        Ok(reports)
    }

    async fn filing_holdings(&self, filing: &SearchResultRow) -> Result<Option<HoldingsReport>> {
        let Some(detail_link) = filing.format_link.as_deref() else {
            warn!(
                filing_type = %filing.filing_type,
                date = %filing.filing_date,
                "search row has no detail link"
            );
            return Ok(None);
        };

        let detail_url = self.edgar.resolve(detail_link)?;
        let markup = self.fetcher.fetch(&detail_url).await?;

        let rows = match extract_table(&markup, &Locator::last_id(DETAIL_CONTAINER_ID), 1) {
            Ok(rows) => rows,
            Err(EdgarError::TableNotFound(reason)) => {
                warn!(url = %detail_url, %reason, "filing detail page has no document table");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        // Stops at the first match; rows after it are never decoded.
        let found = rows
            .into_iter()
            .map(DetailDocumentRow::from_cells)
            .find(|doc| match doc {
                Ok(doc) => doc.document_type == self.config.document_type,
                Err(_) => true,
            })
            .transpose()?;
        let Some(document) = found else {
            debug!(url = %detail_url, "no {} in filing", self.config.document_type);
            return Ok(None);
        };

        let Some(document_link) = document.document_link.as_deref() else {
            warn!(
                url = %detail_url,
                document = %document.document,
                "information table has no link"
            );
            return Ok(None);
        };

        let document_url = self.edgar.resolve(document_link)?;
        let markup = self.fetcher.fetch(&document_url).await?;

        let locator = Locator::last_tag("table");
        let rows = match extract_table(&markup, &locator, DOCUMENT_HEADER_ROWS) {
            Ok(rows) => rows,
            Err(EdgarError::TableNotFound(reason)) => {
                warn!(url = %document_url, %reason, "information table document has no table");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(Some(HoldingsReport {
            filing_type: filing.filing_type.clone(),
            filing_date: filing.filing_date.clone(),
            document_url: document_url.to_string(),
            rows: decode_rows::<InformationTableRow>(rows)?,
        }))
    }
}
