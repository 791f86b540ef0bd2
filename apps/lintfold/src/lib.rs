//! lintfold core library.
//!
//! This crate folds the flat message stream produced by lint rules into a
//! per-file summary with error, warning, and fixable counts, suitable for
//! reporting and CI gating.
//!
//! High-level modules:
//! - `aggregate`: The pure `Message[] -> LintResult` fold.
//! - `models`: Message, FileResult, LintResult, and the severity encoding.
//! - `error`: Error enums for aggregation, input loading, and config.
//! - `input`: Reading message lists from JSON files or stdin.
//! - `config`: Discovery and effective configuration resolution.
//! - `output`: Human/JSON printers.
//! - `cli`: CLI argument parsing (binary uses this).
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;

pub use aggregate::aggregate;
pub use error::AggregateError;
pub use models::{FileResult, LintResult, Message, Severity};
