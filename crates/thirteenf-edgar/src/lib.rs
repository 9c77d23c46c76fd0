#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/thirteenf/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod identifier;
pub mod locator;
pub mod report;
pub mod rows;
pub mod table;
pub mod walker;

pub use client::{HttpFetcher, MemoryFetcher, PageFetcher};
pub use config::{EdgarConfig, WalkerConfig};
pub use error::{EdgarError, Result};
pub use identifier::Identifier;
pub use locator::{Locator, Selection, Target};
pub use report::{HoldingsReport, Report};
pub use rows::{
    DetailDocumentRow, FromCells, INFORMATION_TABLE_HEADER, InformationTableRow, SearchResultRow,
    TableKind,
};
pub use table::Cell;
pub use walker::ResultWalker;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
