//! `version`: stamps the output with the tool version.

use super::Report;
use crate::models::Message;

pub const NAME: &str = "version";

/// Version baked in at build time.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct VersionInfo {
    version: &'static str,
}

impl VersionInfo {
    pub fn new(version: &'static str) -> Self {
        VersionInfo { version }
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new(TOOL_VERSION)
    }
}

impl Report for VersionInfo {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Returns Robocop version"
    }

    fn add_message(&mut self, _message: &Message) {}

    fn get_report(&self) -> Option<String> {
        Some(format!("Report generated by Robocop version: {}", self.version))
    }
}
