//! Tab-separated artifact writing.
//!
//! The target file is claimed with an exclusive create. When it already
//! exists the [`Prompt`] decides between overwriting, appending and leaving
//! it alone; the decision is made once, before anything is written.

use crate::prompt::Prompt;
use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use thirteenf_edgar::{INFORMATION_TABLE_HEADER, Report};
use thiserror::Error;
use tracing::{debug, info};

/// Extension appended to the base file name.
pub const EXTENSION: &str = "tsv";

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("TSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// How the artifact was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// File did not exist and was created.
    Create,
    /// Existing file truncated.
    Overwrite,
    /// New lines added after the existing content.
    Append,
}

impl WriteMode {
    /// Whether the file starts empty, so a header belongs at the top.
    pub const fn starts_fresh(self) -> bool {
        matches!(self, Self::Create | Self::Overwrite)
    }
}

/// Result of a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Lines were written.
    Written {
        /// Artifact path.
        path: PathBuf,
        /// How the file was opened.
        mode: WriteMode,
        /// Data lines written, header excluded.
        records: usize,
    },
    /// The file existed and the user declined both overwrite and append.
    Unchanged {
        /// Artifact path.
        path: PathBuf,
    },
}

/// Writes reports to `<base>.tsv`.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    path: PathBuf,
    header: Option<&'static [&'static str]>,
    accepted_prefixes: Option<Vec<String>>,
}

impl ArtifactWriter {
    /// Writer for information table reports, headed by the 12 holdings columns.
    pub fn holdings(base: impl AsRef<OsStr>) -> Self {
        Self {
            path: artifact_path(base),
            header: Some(&INFORMATION_TABLE_HEADER),
            accepted_prefixes: None,
        }
    }

    /// Writer for flat filing rows, keeping only filing types that start with
    /// one of `prefixes` (case-insensitive). No header line.
    pub fn filings<S: AsRef<str>>(
        base: impl AsRef<OsStr>,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            path: artifact_path(base),
            header: None,
            accepted_prefixes: Some(
                prefixes
                    .into_iter()
                    .map(|p| p.as_ref().to_lowercase())
                    .collect(),
            ),
        }
    }

    /// Path of the artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `report` passes the write-time filing type filter.
    pub fn accepts(&self, report: &Report) -> bool {
        self.accepted_prefixes.as_ref().is_none_or(|prefixes| {
            let filing_type = report.filing_type().to_lowercase();
            prefixes.iter().any(|p| filing_type.starts_with(p.as_str()))
        })
    }

    /// Resolve any conflict with an existing file, then write `reports`.
    ///
    /// # Errors
    /// Returns an error if the prompt or any file operation fails.
    pub fn write<P: Prompt + ?Sized>(
        &self,
        reports: &[Report],
        prompt: &mut P,
    ) -> Result<WriteOutcome, ExportError> {
        let Some((file, mode)) = self.open(prompt)? else {
            info!(path = %self.path.display(), "file left unchanged");
            return Ok(WriteOutcome::Unchanged {
                path: self.path.clone(),
            });
        };

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(true)
            .from_writer(file);

        if mode.starts_fresh()
            && let Some(header) = self.header
        {
            wtr.write_record(header)?;
        }

        let mut records = 0;
        for report in reports.iter().filter(|r| self.accepts(r)) {
            for record in report.records() {
                wtr.write_record(&record)?;
                records += 1;
            }
        }
        wtr.flush()?;

        info!(path = %self.path.display(), ?mode, records, "artifact written");
        Ok(WriteOutcome::Written {
            path: self.path.clone(),
            mode,
            records,
        })
    }

    fn open<P: Prompt + ?Sized>(
        &self,
        prompt: &mut P,
    ) -> Result<Option<(File, WriteMode)>, ExportError> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => return Ok(Some((file, WriteMode::Create))),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %self.path.display(), "artifact already exists");
            }
            Err(e) => return Err(e.into()),
        }

        let question = format!(
            "The file \"{}\" already exists. Overwrite it? (Y/N) ",
            self.path.display()
        );
        if prompt.confirm(&question)? {
            return Ok(Some((File::create(&self.path)?, WriteMode::Overwrite)));
        }

        if prompt.confirm("Append to it? (Y/N) ")? {
            let file = OpenOptions::new().append(true).open(&self.path)?;
            return Ok(Some((file, WriteMode::Append)));
        }

        Ok(None)
    }
}

/// `<base>.tsv`, keeping any dots already in `base`.
pub fn artifact_path(base: impl AsRef<OsStr>) -> PathBuf {
    let mut name = base.as_ref().to_os_string();
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// Reports as JSON, for printing instead of writing an artifact.
pub fn reports_to_json(reports: &[Report], pretty: bool) -> Result<String, ExportError> {
    if pretty {
        Ok(serde_json::to_string_pretty(reports)?)
    } else {
        Ok(serde_json::to_string(reports)?)
    }
}
