//! Identifier → reports → artifact.

use crate::error::Result;
use thirteenf_edgar::{Identifier, PageFetcher, Report, ResultWalker};
use thirteenf_output::{ArtifactWriter, Prompt, WriteOutcome};
use tracing::info;

/// What a run extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Information table rows of every filing matching the walker's prefix.
    Holdings,
    /// The search result rows themselves.
    Filings,
}

/// Validate `raw_identifier` and collect the reports for `mode`.
///
/// Nothing is fetched when the identifier is rejected.
pub async fn collect<F: PageFetcher>(
    walker: &ResultWalker<F>,
    raw_identifier: &str,
    mode: Mode,
) -> Result<Vec<Report>> {
    let identifier = Identifier::parse(raw_identifier)?;
    info!(%identifier, ?mode, "collecting reports");

    let reports = match mode {
        Mode::Holdings => walker.holdings(&identifier).await?,
        Mode::Filings => walker.filings(&identifier).await?,
    };
    Ok(reports)
}

/// Collect the reports for `mode` and hand them to `writer`.
///
/// The output file is only touched once every page has been fetched and
/// extracted.
pub async fn export<F: PageFetcher, P: Prompt + ?Sized>(
    walker: &ResultWalker<F>,
    raw_identifier: &str,
    mode: Mode,
    writer: &ArtifactWriter,
    prompt: &mut P,
) -> Result<WriteOutcome> {
    let reports = collect(walker, raw_identifier, mode).await?;
    Ok(writer.write(&reports, prompt)?)
}
