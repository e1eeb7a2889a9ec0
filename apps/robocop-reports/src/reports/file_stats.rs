//! `file_stats`: processed files versus files that produced issues.
//!
//! Example: `Processed 7 files from which 5 files contained issues.`
//!
//! The processed count is set by the runner; files without issues never
//! produce a message.

use super::Report;
use crate::models::Message;
use crate::utils::plural;
use std::collections::HashSet;

pub const NAME: &str = "file_stats";

#[derive(Debug, Default)]
pub struct FileStats {
    files_count: usize,
    files_with_issues: HashSet<String>,
}

impl FileStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_files_count(&mut self, count: usize) {
        self.files_count = count;
    }

    pub fn files_with_issues(&self) -> usize {
        self.files_with_issues.len()
    }
}

impl Report for FileStats {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Prints overall statistics about number of processed files"
    }

    fn add_message(&mut self, message: &Message) {
        // look up by reference first so repeat sources are not cloned
        if !self.files_with_issues.contains(&message.source) {
            self.files_with_issues.insert(message.source.clone());
        }
    }

    fn get_report(&self) -> Option<String> {
        let processed = self.files_count;
        if processed == 0 {
            return Some("No files were processed.".to_string());
        }
        let with_issues = self.files_with_issues.len();
        if with_issues == 0 {
            return Some(format!(
                "Processed {processed} file{} but no issues were found.",
                plural(processed)
            ));
        }
        Some(format!(
            "Processed {processed} file{} from which {with_issues} file{} contained issues.",
            plural(processed),
            plural(with_issues)
        ))
    }
}
