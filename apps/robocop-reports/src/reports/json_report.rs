//! `json_report`: collects every message as a JSON record.
//!
//! Nothing is printed; the runner writes [`JsonReport::issues`] as a JSON
//! array.

use super::Report;
use crate::models::Message;
use serde_json::Value as Json;

pub const NAME: &str = "json_report";

#[derive(Debug, Default)]
pub struct JsonReport {
    issues: Vec<Json>,
}

impl JsonReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in arrival order.
    pub fn issues(&self) -> &[Json] {
        &self.issues
    }
}

impl Report for JsonReport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Accumulates found issues in JSON format"
    }

    fn add_message(&mut self, message: &Message) {
        self.issues.push(message.to_json());
    }

    fn get_report(&self) -> Option<String> {
        None
    }
}
