//! `return_status`: checks issue counts against the quality gate.
//!
//! Each severity has a threshold. Every occurrence above the threshold adds
//! one to the return status, which is clamped to a valid process exit code
//! (`0..=255`). The report prints nothing; the runner reads
//! [`ReturnStatus::return_status`] instead.
//!
//! Quality gates are set with `return_status:quality_gate:E=0:W=100:I=-1`.
//! `-1` disables the gate for that severity.

use super::{Report, RulesBySeverity};
use crate::error::ReportError;
use crate::models::{Message, Severity};
use tracing::debug;

pub const NAME: &str = "return_status";

const MAX_STATUS: u64 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Allowed number of issues for one severity.
pub enum Threshold {
    /// Never fails the gate (`-1`).
    Unlimited,
    /// Fails once the count is greater than the limit (`0` fails on any issue).
    Max(u64),
}

impl From<i64> for Threshold {
    fn from(v: i64) -> Self {
        if v < 0 {
            Threshold::Unlimited
        } else {
            Threshold::Max(v as u64)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityGate {
    error: Threshold,
    warning: Threshold,
    info: Threshold,
}

impl Default for QualityGate {
    fn default() -> Self {
        QualityGate {
            error: Threshold::Max(0),
            warning: Threshold::Max(0),
            info: Threshold::Unlimited,
        }
    }
}

impl QualityGate {
    pub fn threshold(&self, severity: Severity) -> Threshold {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }

    pub fn set(&mut self, severity: Severity, threshold: Threshold) {
        match severity {
            Severity::Error => self.error = threshold,
            Severity::Warning => self.warning = threshold,
            Severity::Info => self.info = threshold,
        }
    }

    /// Apply `CODE=INT[:CODE=INT...]`.
    ///
    /// Pairs are independent: a pair without `=`, with a non-integer count
    /// or with an unknown severity code is skipped and the rest still apply.
    pub fn apply(&mut self, value: &str) {
        for pair in value.split(':') {
            let Some((code, count)) = pair.split_once('=') else {
                debug!(pair, "quality gate pair without '=' skipped");
                continue;
            };
            let Some(severity) = gate_severity(code) else {
                debug!(pair, "quality gate pair with unknown severity skipped");
                continue;
            };
            match count.trim().parse::<i64>() {
                Ok(n) => self.set(severity, Threshold::from(n)),
                Err(_) => debug!(pair, "quality gate pair with invalid count skipped"),
            }
        }
    }

    /// Sum of occurrences above each threshold, clamped to `0..=255`.
    pub fn evaluate(&self, counts: &[(Severity, usize)]) -> u8 {
        let mut status: u64 = 0;
        for (severity, count) in counts {
            let count = *count as u64;
            if let Threshold::Max(limit) = self.threshold(*severity) {
                if count > limit {
                    status = status.saturating_add(count - limit);
                }
            }
        }
        status.min(MAX_STATUS) as u8
    }
}

/// Only single-letter codes are accepted as gate keys.
fn gate_severity(code: &str) -> Option<Severity> {
    match code.to_ascii_uppercase().as_str() {
        "E" => Some(Severity::Error),
        "W" => Some(Severity::Warning),
        "I" => Some(Severity::Info),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct ReturnStatus {
    counter: RulesBySeverity,
    quality_gate: QualityGate,
}

impl ReturnStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quality_gate(&self) -> &QualityGate {
        &self.quality_gate
    }

    /// Exit status for the current counts. Recomputed on every call.
    pub fn return_status(&self) -> u8 {
        self.quality_gate.evaluate(self.counter.counts())
    }
}

impl Report for ReturnStatus {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Checks if number of specific issues exceed quality gate limits"
    }

    fn configure(&mut self, option: &str, value: &str) -> Result<(), ReportError> {
        match option {
            "quality_gate" | "quality_gates" => {
                self.quality_gate.apply(value);
                Ok(())
            }
            _ => Err(ReportError::Configuration {
                option: option.to_string(),
                report: NAME.to_string(),
            }),
        }
    }

    fn add_message(&mut self, message: &Message) {
        self.counter.add_message(message);
    }

    fn get_report(&self) -> Option<String> {
        None
    }
}
