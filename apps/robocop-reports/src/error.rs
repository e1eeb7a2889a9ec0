//! Error type shared by the report registry, configuration loading and the
//! message input layer.

use thiserror::Error;

/// Errors surfaced by the reporting layer.
///
/// Only `Configuration`, `UnknownReport` and `InvalidConfigure` come from the
/// reports themselves; the remaining variants wrap I/O and parsing failures
/// of the runner (config files and message dumps).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Provided param '{option}' for report '{report}' does not exist")]
    Configuration { option: String, report: String },

    #[error("Provided report '{0}' does not exist")]
    UnknownReport(String),

    #[error("Provided invalid config: '{0}' (expected report_name:param:value)")]
    InvalidConfigure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid message dump {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot render JSON output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("bad input pattern: {0}")]
    Glob(#[from] glob::PatternError),
}
