//! Configuration discovery and effective settings resolution.
//!
//! `robocop-reports.toml|yaml|yml` is read from the repository root (or the
//! closest ancestor holding one) and merged with CLI flags into an
//! `Effective` config.
//! Defaults:
//! - `reports`: none besides the always-on `return_status`
//! - `configure`: none
//! - `input`: none
//! - `output`: `human`
//! - `json_path`: unset (issues are embedded in JSON output instead)
//!
//! Overrides precedence: CLI > config file > defaults. List flags given on
//! the CLI replace the config list instead of extending it.

use crate::error::ReportError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_TOML: &str = "robocop-reports.toml";
const CONFIG_YAML: [&str; 2] = ["robocop-reports.yaml", "robocop-reports.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `robocop-reports.toml|yaml`.
pub struct ReportsConfig {
    #[serde(default)]
    pub reports: Option<Vec<String>>,
    /// `report_name:param:value` entries.
    #[serde(default)]
    pub configure: Option<Vec<String>>,
    /// Glob patterns of message dumps.
    #[serde(default)]
    pub input: Option<Vec<String>>,
    pub output: Option<String>,
    pub json_path: Option<String>,
}

#[derive(Debug, Default, Clone)]
/// Settings coming from the command line; `None` means "not given".
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub reports: Vec<String>,
    pub configure: Vec<String>,
    pub input: Vec<String>,
    pub output: Option<String>,
    pub json_path: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the runner after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub reports: Vec<String>,
    pub configure: Vec<String>,
    pub input: Vec<String>,
    pub output: String,
    pub json_path: Option<PathBuf>,
}

fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_TOML).exists() || CONFIG_YAML.iter().any(|y| dir.join(y).exists())
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if has_config(cur) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load the config file under `root`, if any. TOML wins over YAML.
pub fn load_config(root: &Path) -> Result<Option<ReportsConfig>, ReportError> {
    let toml_path = root.join(CONFIG_TOML);
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path)?;
        debug!(path = %toml_path.display(), "loaded config");
        return Ok(Some(toml::from_str(&s)?));
    }
    for yml in CONFIG_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p)?;
            debug!(path = %p.display(), "loaded config");
            return Ok(Some(serde_yaml::from_str(&s)?));
        }
    }
    Ok(None)
}

fn pick_list(cli: &[String], cfg: Option<Vec<String>>) -> Vec<String> {
    if cli.is_empty() {
        cfg.unwrap_or_default()
    } else {
        cli.to_vec()
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective, ReportError> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let json_path = cli
        .json_path
        .clone()
        .or(cfg.json_path)
        .map(|p| repo_root.join(p));

    Ok(Effective {
        reports: pick_list(&cli.reports, cfg.reports),
        configure: pick_list(&cli.configure, cfg.configure),
        input: pick_list(&cli.input, cfg.input),
        output,
        json_path,
        config_found,
        repo_root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn cli_at(root: &Path) -> CliOverrides {
        CliOverrides {
            repo_root: root.to_str().map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join(CONFIG_TOML)).unwrap();
        writeln!(
            f,
            "{}",
            r#"
reports = ["rules_by_id", "file_stats"]
configure = ["return_status:quality_gate:E=10:W=100"]
input = ["out/*.json"]
output = "json"
    "#
        )
        .unwrap();

        let eff = resolve_effective(&cli_at(root)).unwrap();
        assert!(eff.config_found);
        assert_eq!(eff.reports, vec!["rules_by_id", "file_stats"]);
        assert_eq!(eff.configure, vec!["return_status:quality_gate:E=10:W=100"]);
        assert_eq!(eff.input, vec!["out/*.json"]);
        assert_eq!(eff.output, "json");
        assert!(eff.json_path.is_none());
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("robocop-reports.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
reports:
  - all
json_path: robocop.json
            "#
        )
        .unwrap();

        let eff = resolve_effective(&cli_at(root)).unwrap();
        assert_eq!(eff.reports, vec!["all"]);
        assert!(eff.configure.is_empty());
        assert_eq!(eff.output, "human");
        assert_eq!(eff.json_path, Some(root.join("robocop.json")));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join(CONFIG_TOML),
            "reports = [\"version\"]\noutput = \"json\"\n",
        )
        .unwrap();

        let mut cli = cli_at(root);
        cli.reports = vec!["scan_timer".into()];
        cli.output = Some("human".into());
        let eff = resolve_effective(&cli).unwrap();
        assert_eq!(eff.reports, vec!["scan_timer"]);
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(&cli_at(dir.path())).unwrap();
        assert!(!eff.config_found);
        assert!(eff.reports.is_empty());
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_TOML), "reports = [").unwrap();
        assert!(matches!(
            resolve_effective(&cli_at(dir.path())),
            Err(ReportError::Toml(_))
        ));
    }

    #[test]
    fn test_detect_walks_up_to_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(CONFIG_TOML), "").unwrap();
        let nested = root.join("tests").join("suites");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_repo_root(&nested), root.to_path_buf());
    }
}
