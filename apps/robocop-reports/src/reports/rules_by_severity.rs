//! `rules_by_error_type`: total issues per severity.
//!
//! Example: `Found 15 issues: 11 WARNINGs, 4 ERRORs.`

use super::Report;
use crate::models::{Message, Severity};
use crate::utils::plural;

pub const NAME: &str = "rules_by_error_type";

#[derive(Debug, Default, Clone)]
pub struct RulesBySeverity {
    /// Per-severity counts in encounter order.
    counts: Vec<(Severity, usize)>,
}

impl RulesBySeverity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> &[(Severity, usize)] {
        &self.counts
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == severity)
            .map_or(0, |(_, c)| *c)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }
}

impl Report for RulesBySeverity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Prints total number of issues grouped by severity"
    }

    fn add_message(&mut self, message: &Message) {
        match self.counts.iter_mut().find(|(s, _)| *s == message.severity) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((message.severity, 1)),
        }
    }

    fn get_report(&self) -> Option<String> {
        let total = self.total();
        if total == 0 {
            return Some("Found 0 issues.".to_string());
        }
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|(sev, count)| format!("{} {}{}", count, sev.name(), plural(*count)))
            .collect();
        let head = if total == 1 {
            "Found 1 issue: ".to_string()
        } else {
            format!("Found {total} issues: ")
        };
        Some(format!("{head}{}.", parts.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(r: &mut RulesBySeverity, sevs: &[Severity]) {
        for (i, sev) in sevs.iter().enumerate() {
            r.add_message(&Message::new(format!("{i:04}"), "rule", *sev, "a.robot"));
        }
    }

    #[test]
    fn test_zero_issues() {
        assert_eq!(RulesBySeverity::new().get_report().unwrap(), "Found 0 issues.");
    }

    #[test]
    fn test_single_issue() {
        let mut r = RulesBySeverity::new();
        feed(&mut r, &[Severity::Info]);
        assert_eq!(r.get_report().unwrap(), "Found 1 issue: 1 INFO.");
    }

    #[test]
    fn test_encounter_order_and_plurals() {
        let mut r = RulesBySeverity::new();
        let mut sevs = vec![Severity::Warning; 11];
        sevs.extend([Severity::Error; 4]);
        sevs.push(Severity::Info);
        feed(&mut r, &sevs);
        assert_eq!(
            r.get_report().unwrap(),
            "Found 16 issues: 11 WARNINGs, 4 ERRORs, 1 INFO."
        );
        assert_eq!(r.total(), 16);
        assert_eq!(r.count(Severity::Error), 4);
    }

    #[test]
    fn test_counts_sum_to_total_and_report_repeats() {
        let mut r = RulesBySeverity::new();
        feed(&mut r, &[Severity::Error, Severity::Info, Severity::Error, Severity::Warning]);
        let sum: usize = r.counts().iter().map(|(_, c)| c).sum();
        assert_eq!(sum, 4);
        let first = r.get_report().unwrap();
        assert!(first.starts_with("Found 4 issues: "));
        assert_eq!(Some(first), r.get_report());
    }
}
