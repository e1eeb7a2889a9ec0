//! Loading message dumps produced by the scanner.
//!
//! A dump is either a bare JSON array of message records or an object
//! `{"files": N, "issues": [...]}` that also declares how many files were
//! scanned. Dumps are parsed in parallel; messages are returned in sorted
//! path order so every report sees them through one deterministic stream.

use crate::error::ReportError;
use crate::models::Message;
use rayon::prelude::*;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Deserialize)]
#[serde(untagged)]
enum Dump {
    Issues(Vec<Message>),
    Scan(ScanDump),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
/// Object form of a dump; `issues` is required so a misspelled key fails.
struct ScanDump {
    #[serde(default)]
    files: Option<usize>,
    issues: Vec<Message>,
}

#[derive(Debug, Default)]
/// Messages gathered from all dumps of a run.
pub struct Loaded {
    pub messages: Vec<Message>,
    /// Sum of `files` declared by the dumps.
    pub files: usize,
    /// Dumps that were read.
    pub dumps: usize,
}

/// Expand glob patterns relative to `root` into a sorted, deduplicated
/// list of existing files.
pub fn expand_patterns(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, ReportError> {
    let mut out: BTreeSet<PathBuf> = BTreeSet::new();
    for pat in patterns {
        let abs = if Path::new(pat).is_absolute() {
            PathBuf::from(pat)
        } else {
            root.join(pat)
        };
        let pattern = abs.to_string_lossy().to_string();
        let mut matched = 0usize;
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(p) if p.is_file() => {
                    matched += 1;
                    out.insert(p);
                }
                Ok(_) => {}
                Err(e) => debug!(error = %e, "unreadable glob entry skipped"),
            }
        }
        debug!(pattern = %pattern, matched, "expanded input pattern");
    }
    Ok(out.into_iter().collect())
}

/// Parse one dump from its JSON text.
pub fn parse_dump(path: &Path, text: &str) -> Result<(Vec<Message>, usize), ReportError> {
    let dump: Dump = serde_json::from_str(text).map_err(|source| ReportError::Json {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    Ok(match dump {
        Dump::Issues(issues) => (issues, 0),
        Dump::Scan(scan) => (scan.issues, scan.files.unwrap_or(0)),
    })
}

/// Read every dump, failing on the first unreadable or invalid one.
pub fn load_messages(paths: &[PathBuf]) -> Result<Loaded, ReportError> {
    let parsed: Vec<Result<(Vec<Message>, usize), ReportError>> = paths
        .par_iter()
        .map(|path| {
            let text = fs::read_to_string(path)?;
            parse_dump(path, &text)
        })
        .collect();

    let mut loaded = Loaded::default();
    for result in parsed {
        let (mut messages, files) = result?;
        loaded.messages.append(&mut messages);
        loaded.files += files;
        loaded.dumps += 1;
    }
    info!(
        dumps = loaded.dumps,
        messages = loaded.messages.len(),
        files = loaded.files,
        "loaded message dumps"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use tempfile::tempdir;

    const ISSUE: &str = r#"{"rule_id":"0201","rule_name":"missing-doc-keyword","severity":"W","source":"a.robot","line":3}"#;

    #[test]
    fn test_parse_bare_array_and_scan_object() {
        let p = Path::new("dump.json");
        let (msgs, files) = parse_dump(p, &format!("[{ISSUE},{ISSUE}]")).unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(files, 0);

        let (msgs, files) = parse_dump(p, &format!(r#"{{"files": 4, "issues": [{ISSUE}]}}"#)).unwrap();
        assert_eq!(msgs[0].severity, Severity::Warning);
        assert_eq!(msgs[0].line, 3);
        assert_eq!(files, 4);
    }

    #[test]
    fn test_parse_invalid_dump_names_path() {
        let err = parse_dump(Path::new("bad.json"), "{not json").err().unwrap();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_parse_rejects_objects_without_issues() {
        let p = Path::new("scan.json");
        let misspelled = format!(r#"{{"files": 3, "issue": [{ISSUE}]}}"#);
        assert!(matches!(parse_dump(p, &misspelled), Err(ReportError::Json { .. })));
        assert!(matches!(
            parse_dump(p, r#"{"unrelated": true}"#),
            Err(ReportError::Json { .. })
        ));
        assert!(matches!(
            parse_dump(p, r#"{"issues": [], "extra": 1}"#),
            Err(ReportError::Json { .. })
        ));
        let (msgs, files) = parse_dump(p, r#"{"issues": []}"#).unwrap();
        assert!(msgs.is_empty());
        assert_eq!(files, 0);
    }

    #[test]
    fn test_load_in_path_order_with_file_totals() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("b.json"),
            r#"{"files": 2, "issues": [{"rule_id":"0401","rule_name":"parsing-error","severity":"E","source":"b.robot"}]}"#,
        )
        .unwrap();
        fs::write(root.join("a.json"), format!(r#"{{"files": 3, "issues": [{ISSUE}]}}"#)).unwrap();
        fs::write(root.join("notes.txt"), "ignored").unwrap();

        let paths = expand_patterns(root, &["*.json".to_string(), "a.json".to_string()]).unwrap();
        assert_eq!(paths.len(), 2);
        let loaded = load_messages(&paths).unwrap();
        assert_eq!(loaded.dumps, 2);
        assert_eq!(loaded.files, 5);
        let sources: Vec<_> = loaded.messages.iter().map(|m| m.source.as_str()).collect();
        assert_eq!(sources, vec!["a.robot", "b.robot"]);
    }
}
