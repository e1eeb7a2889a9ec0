//! `rules_by_id`: groups issues by rule and lists the most common first.
//!
//! Example:
//!
//! ```text
//! Issues by ID:
//! W0502 (too-little-calls-in-keyword) : 5
//! W0201 (missing-doc-keyword)         : 4
//! E0401 (parsing-error)               : 3
//! ```

use super::Report;
use crate::models::Message;
use std::collections::HashMap;

pub const NAME: &str = "rules_by_id";

#[derive(Debug, Default)]
pub struct RulesById {
    /// Rule full name -> slot in `counts`.
    index: HashMap<String, usize>,
    /// Counts in first-seen order; ties keep this order after sorting.
    counts: Vec<(String, usize)>,
}

impl RulesById {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(rule, count)` pairs, most common first.
    pub fn ordered(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> =
            self.counts.iter().map(|(n, c)| (n.as_str(), *c)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }
}

impl Report for RulesById {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Groups detected issues by rule id and prints it ordered by most common"
    }

    fn add_message(&mut self, message: &Message) {
        let key = message.fullname();
        match self.index.get(&key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    fn get_report(&self) -> Option<String> {
        let mut report = String::from("Issues by ID:\n");
        let ordered = self.ordered();
        if ordered.is_empty() {
            report.push_str("No issues found.");
            return Some(report);
        }
        let width = ordered.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
        let lines: Vec<String> = ordered
            .iter()
            .map(|(name, count)| format!("{name:<width$} : {count}"))
            .collect();
        report.push_str(&lines.join("\n"));
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn add(r: &mut RulesById, id: &str, name: &str, sev: Severity, times: usize) {
        for _ in 0..times {
            r.add_message(&Message::new(id, name, sev, "a.robot"));
        }
    }

    #[test]
    fn test_empty_report() {
        let r = RulesById::new();
        assert_eq!(r.get_report().unwrap(), "Issues by ID:\nNo issues found.");
    }

    #[test]
    fn test_sorted_by_count_and_aligned() {
        let mut r = RulesById::new();
        add(&mut r, "0401", "parsing-error", Severity::Error, 3);
        add(&mut r, "0502", "too-little-calls-in-keyword", Severity::Warning, 5);
        add(&mut r, "0201", "missing-doc-keyword", Severity::Warning, 4);
        let expected = "Issues by ID:\n\
W0502 (too-little-calls-in-keyword) : 5\n\
W0201 (missing-doc-keyword)         : 4\n\
E0401 (parsing-error)               : 3";
        assert_eq!(r.get_report().unwrap(), expected);
        assert_eq!(r.total(), 12);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let mut r = RulesById::new();
        add(&mut r, "0903", "empty-return", Severity::Warning, 2);
        add(&mut r, "0101", "wrong-block-name", Severity::Error, 2);
        add(&mut r, "0301", "not-allowed-char-in-name", Severity::Warning, 2);
        let names: Vec<_> = r.ordered().into_iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "W0903 (empty-return)",
                "E0101 (wrong-block-name)",
                "W0301 (not-allowed-char-in-name)"
            ]
        );
    }

    #[test]
    fn test_get_report_is_idempotent() {
        let mut r = RulesById::new();
        add(&mut r, "0401", "parsing-error", Severity::Error, 2);
        let first = r.get_report();
        assert_eq!(first, r.get_report());
        assert_eq!(r.total(), 2);
    }
}
