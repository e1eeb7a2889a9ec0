//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "robocop-reports",
    version,
    about = "Post-scan reports for Robocop diagnostics",
    long_about = "robocop-reports: summarize Robocop diagnostics with pluggable reports and compute the quality gate exit status.\n\nConfiguration precedence: CLI > robocop-reports.toml > defaults.",
    after_help = "Examples:\n  robocop-reports run --input 'out/*.json' -r rules_by_id,file_stats\n  robocop-reports run --input dump.json -r all -c return_status:quality_gate:E=0:W=10:I=-1\n  robocop-reports list",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current robocop-reports version."
    )]
    Version,
    /// List available reports
    #[command(
        about = "List reports",
        long_about = "Print every built-in report with its description."
    )]
    List {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Feed message dumps to the selected reports
    #[command(
        about = "Run reports",
        long_about = "Read message dumps, feed every message to the activated reports and print their summaries. The exit status is the quality gate result of return_status (0-255).",
        after_help = "Examples:\n  robocop-reports run --input dump.json -r all\n  robocop-reports run --input 'out/*.json' -r json_report --json-path robocop.json"
    )]
    Run {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Glob of message dumps (repeatable)")]
        input: Vec<String>,
        #[arg(short = 'r', long = "report", help = "Reports to activate, comma-separated or repeated; 'all' for every report")]
        reports: Vec<String>,
        #[arg(short = 'c', long = "configure", help = "Report option as report_name:param:value (repeatable)")]
        configure: Vec<String>,
        #[arg(long, help = "Number of processed files (default: sum declared by dumps)")]
        files: Option<usize>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Write json_report issues to this file")]
        json_path: Option<String>,
    },
}
