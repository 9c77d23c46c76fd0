#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/thirteenf/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pipeline;

// Re-export main types from sub-crates
pub use thirteenf_edgar as edgar;
pub use thirteenf_output as output;

pub use error::{Error, Result};
pub use pipeline::{Mode, collect, export};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
