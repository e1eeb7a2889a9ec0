//! robocop-reports core library.
//!
//! This crate exposes the post-scan reporting layer of Robocop: reports
//! that observe every diagnostic message of a run and emit one summary
//! each, plus the quality gate that turns issue counts into an exit status.
//!
//! High-level modules:
//! - `reports`: the `Report` trait, built-in reports and their registry.
//! - `models`: diagnostic messages and severities.
//! - `input`: loading message dumps produced by the scanner.
//! - `config`: discovery and effective configuration resolution.
//! - `output`: human/JSON printers for report runs.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `error`: the crate error type.
//! - `utils`: supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod reports;
pub mod utils;

pub use error::ReportError;
pub use models::{Message, Severity};
pub use reports::{Report, Reports};
