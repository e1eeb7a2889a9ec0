//! Output rendering for report runs and the report listing.
//!
//! Supports `human` (default) and `json` outputs. The JSON form maps each
//! report name to its text and carries the return status, plus the issue
//! array when `json_report` is active and not written to a file.

use crate::error::ReportError;
use crate::reports::Reports;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::{Map, Value as JsonVal};
use std::fs;
use std::path::Path;

/// Print the summaries of a finished run in the requested format.
pub fn print_reports(reports: &Reports, output: &str, embed_issues: bool) -> Result<(), ReportError> {
    match output {
        "json" => {
            let doc = compose_json(reports, embed_issues);
            println!("{}", to_pretty(&doc)?);
        }
        _ => {
            let color = use_colors();
            for (name, text) in reports.render() {
                println!();
                if color && name == crate::reports::rules_by_id::NAME {
                    // bold header, plain body
                    match text.split_once('\n') {
                        Some((head, body)) => println!("{}\n{}", head.bold(), body),
                        None => println!("{}", text),
                    }
                } else {
                    println!("{}", text);
                }
            }
            if embed_issues {
                if let Some(issues) = reports.json_issues() {
                    println!("{}", to_pretty(&JsonVal::from(issues.to_vec()))?);
                }
            }
        }
    }
    Ok(())
}

/// Print the registered reports with their descriptions.
pub fn print_list(entries: &[(&str, &str)], output: &str) -> Result<(), ReportError> {
    match output {
        "json" => {
            let items: Vec<_> = entries
                .iter()
                .map(|(name, desc)| json!({"name": name, "description": desc}))
                .collect();
            println!("{}", to_pretty(&JsonVal::from(items))?);
        }
        _ => {
            let color = use_colors();
            for (name, desc) in entries {
                if color {
                    println!("{} - {}", name.bold(), desc);
                } else {
                    println!("{} - {}", name, desc);
                }
            }
        }
    }
    Ok(())
}

/// Compose the JSON document of a run (pure) for testing/snapshot purposes.
pub fn compose_json(reports: &Reports, embed_issues: bool) -> JsonVal {
    let mut texts = Map::new();
    for (name, text) in reports.render() {
        texts.insert(name.to_string(), JsonVal::String(text));
    }
    let mut doc = json!({
        "reports": texts,
        "return_status": reports.return_status(),
    });
    if embed_issues {
        if let Some(issues) = reports.json_issues() {
            doc["issues"] = JsonVal::from(issues.to_vec());
        }
    }
    doc
}

/// Write the issues collected by `json_report` as a JSON array.
pub fn write_json_report(path: &Path, issues: &[JsonVal]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let body = to_pretty(&JsonVal::from(issues.to_vec()))?;
    fs::write(path, body + "\n")?;
    Ok(())
}

fn to_pretty(v: &JsonVal) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(v)?)
}
