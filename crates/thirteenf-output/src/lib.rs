#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/thirteenf/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod prompt;

pub use export::{
    ArtifactWriter, EXTENSION, ExportError, WriteMode, WriteOutcome, artifact_path,
    reports_to_json,
};
pub use prompt::{Prompt, ScriptedPrompt, is_affirmative};
