//! `scan_timer`: wall time of the scan, e.g. `Scan finished in 0.054s.`

use super::Report;
use crate::models::Message;
use std::time::Instant;

pub const NAME: &str = "scan_timer";

#[derive(Debug)]
pub struct TimeTaken {
    start: Instant,
}

impl TimeTaken {
    pub fn new() -> Self {
        TimeTaken {
            start: Instant::now(),
        }
    }
}

impl Default for TimeTaken {
    fn default() -> Self {
        Self::new()
    }
}

impl Report for TimeTaken {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Returns Robocop execution time"
    }

    fn add_message(&mut self, _message: &Message) {}

    /// Measured at call time, so repeated calls report growing values.
    fn get_report(&self) -> Option<String> {
        let secs = self.start.elapsed().as_secs_f64();
        Some(format!("Scan finished in {secs:.3}s."))
    }
}
