//! Reports are configurable summaries produced after a scan.
//!
//! Every report observes all messages of a run through `add_message` and,
//! once the scan is over, renders a single summary with `get_report`.
//! Reports are selected by name from a fixed registry; `all` activates
//! every built-in. Configuration strings use `report_name:param:value`.
//!
//! Built-ins:
//! - `rules_by_id`: issue counts per rule, most common first.
//! - `rules_by_error_type`: issue counts per severity.
//! - `return_status`: quality gate evaluation feeding the exit code.
//! - `scan_timer`: wall time since the report was created.
//! - `json_report`: every message as a JSON record.
//! - `file_stats`: processed files versus files with issues.
//! - `version`: the tool version.

pub mod file_stats;
pub mod json_report;
pub mod return_status;
pub mod rules_by_id;
pub mod rules_by_severity;
pub mod time_taken;
pub mod version;

pub use file_stats::FileStats;
pub use json_report::JsonReport;
pub use return_status::{QualityGate, ReturnStatus, Threshold};
pub use rules_by_id::RulesById;
pub use rules_by_severity::RulesBySeverity;
pub use time_taken::TimeTaken;
pub use version::VersionInfo;

use crate::error::ReportError;
use crate::models::Message;
use serde_json::Value as Json;
use tracing::debug;

/// Keyword activating every built-in report.
pub const ALL_REPORTS: &str = "all";

/// Registered report names in activation order used by `all`.
pub const REPORT_NAMES: [&str; 7] = [
    rules_by_id::NAME,
    rules_by_severity::NAME,
    return_status::NAME,
    time_taken::NAME,
    json_report::NAME,
    file_stats::NAME,
    version::NAME,
];

/// Contract shared by all reports.
pub trait Report {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Apply a named option. Reports without options reject everything.
    fn configure(&mut self, option: &str, _value: &str) -> Result<(), ReportError> {
        Err(ReportError::Configuration {
            option: option.to_string(),
            report: self.name().to_string(),
        })
    }

    fn add_message(&mut self, message: &Message);

    /// Final summary, or `None` when the report has nothing to print.
    fn get_report(&self) -> Option<String>;
}

/// Closed set of built-in reports.
pub enum ActiveReport {
    RulesById(RulesById),
    RulesBySeverity(RulesBySeverity),
    ReturnStatus(ReturnStatus),
    TimeTaken(TimeTaken),
    JsonReport(JsonReport),
    FileStats(FileStats),
    VersionInfo(VersionInfo),
}

impl ActiveReport {
    fn as_report(&self) -> &dyn Report {
        match self {
            ActiveReport::RulesById(r) => r,
            ActiveReport::RulesBySeverity(r) => r,
            ActiveReport::ReturnStatus(r) => r,
            ActiveReport::TimeTaken(r) => r,
            ActiveReport::JsonReport(r) => r,
            ActiveReport::FileStats(r) => r,
            ActiveReport::VersionInfo(r) => r,
        }
    }

    fn as_report_mut(&mut self) -> &mut dyn Report {
        match self {
            ActiveReport::RulesById(r) => r,
            ActiveReport::RulesBySeverity(r) => r,
            ActiveReport::ReturnStatus(r) => r,
            ActiveReport::TimeTaken(r) => r,
            ActiveReport::JsonReport(r) => r,
            ActiveReport::FileStats(r) => r,
            ActiveReport::VersionInfo(r) => r,
        }
    }
}

impl Report for ActiveReport {
    fn name(&self) -> &'static str {
        self.as_report().name()
    }

    fn description(&self) -> &'static str {
        self.as_report().description()
    }

    fn configure(&mut self, option: &str, value: &str) -> Result<(), ReportError> {
        self.as_report_mut().configure(option, value)
    }

    fn add_message(&mut self, message: &Message) {
        self.as_report_mut().add_message(message)
    }

    fn get_report(&self) -> Option<String> {
        self.as_report().get_report()
    }
}

/// Registry factory: build a fresh report for a registered name.
pub fn create(name: &str) -> Option<ActiveReport> {
    let report = match name {
        rules_by_id::NAME => ActiveReport::RulesById(RulesById::new()),
        rules_by_severity::NAME => ActiveReport::RulesBySeverity(RulesBySeverity::new()),
        return_status::NAME => ActiveReport::ReturnStatus(ReturnStatus::new()),
        time_taken::NAME => ActiveReport::TimeTaken(TimeTaken::new()),
        json_report::NAME => ActiveReport::JsonReport(JsonReport::new()),
        file_stats::NAME => ActiveReport::FileStats(FileStats::new()),
        version::NAME => ActiveReport::VersionInfo(VersionInfo::default()),
        _ => return None,
    };
    Some(report)
}

/// `(name, description)` for every registered report.
pub fn describe_all() -> Vec<(&'static str, &'static str)> {
    REPORT_NAMES
        .iter()
        .filter_map(|n| create(n))
        .map(|r| (r.name(), r.description()))
        .collect()
}

/// Reports activated for a single run, kept in activation order.
pub struct Reports {
    reports: Vec<ActiveReport>,
}

impl Reports {
    /// Activate reports from CLI-style names.
    ///
    /// Each entry may hold a comma-separated list. `all` expands to every
    /// built-in. `return_status` is always active so the run has an exit
    /// status. Duplicates keep their first position.
    pub fn activate<S: AsRef<str>>(names: &[S]) -> Result<Self, ReportError> {
        let mut wanted: Vec<&str> = Vec::new();
        for entry in names {
            for name in entry.as_ref().split(',').map(str::trim) {
                if name.is_empty() {
                    continue;
                }
                if name == ALL_REPORTS {
                    wanted.extend(REPORT_NAMES);
                } else {
                    wanted.push(name);
                }
            }
        }
        wanted.push(return_status::NAME);

        let mut reports: Vec<ActiveReport> = Vec::new();
        for name in wanted {
            if reports.iter().any(|r| r.name() == name) {
                continue;
            }
            let report = create(name).ok_or_else(|| ReportError::UnknownReport(name.to_string()))?;
            debug!(report = name, "activated report");
            reports.push(report);
        }
        Ok(Reports { reports })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.reports.iter().map(|r| r.name()).collect()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.reports.iter().any(|r| r.name() == name)
    }

    /// Apply one `report_name:param:value` entry.
    ///
    /// Entries naming something other than an active report are skipped;
    /// the same flag also carries rule configuration for the scanner.
    pub fn configure(&mut self, raw: &str) -> Result<(), ReportError> {
        let mut parts = raw.splitn(3, ':');
        let (Some(name), Some(option), Some(value)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ReportError::InvalidConfigure(raw.to_string()));
        };
        match self.reports.iter_mut().find(|r| r.name() == name) {
            Some(report) => report.configure(option, value),
            None => {
                debug!(target_name = name, "configure entry does not target an active report");
                Ok(())
            }
        }
    }

    pub fn configure_all<S: AsRef<str>>(&mut self, entries: &[S]) -> Result<(), ReportError> {
        for entry in entries {
            self.configure(entry.as_ref())?;
        }
        Ok(())
    }

    /// Fan a message out to every active report.
    pub fn add_message(&mut self, message: &Message) {
        for report in self.reports.iter_mut() {
            report.add_message(message);
        }
    }

    /// Forward the number of processed files to `file_stats` if active.
    pub fn set_files_count(&mut self, count: usize) {
        for report in self.reports.iter_mut() {
            if let ActiveReport::FileStats(stats) = report {
                stats.set_files_count(count);
            }
        }
    }

    /// Non-empty summaries as `(name, text)` in activation order.
    pub fn render(&self) -> Vec<(&'static str, String)> {
        self.reports
            .iter()
            .filter_map(|r| {
                let text = r.get_report()?;
                if text.is_empty() {
                    None
                } else {
                    Some((r.name(), text))
                }
            })
            .collect()
    }

    /// Exit status computed by `return_status`.
    pub fn return_status(&self) -> u8 {
        self.reports
            .iter()
            .find_map(|r| match r {
                ActiveReport::ReturnStatus(rs) => Some(rs.return_status()),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Issues accumulated by `json_report`, if it is active.
    pub fn json_issues(&self) -> Option<&[Json]> {
        self.reports.iter().find_map(|r| match r {
            ActiveReport::JsonReport(jr) => Some(jr.issues()),
            _ => None,
        })
    }
}
