//! robocop-reports CLI binary entry point.
//! Loads message dumps, drives the reports and exits with the quality gate status.

use clap::Parser;
use robocop_reports::cli::{Cli, Commands};
use robocop_reports::config::{self, CliOverrides};
use robocop_reports::error::ReportError;
use robocop_reports::utils::{error_prefix, note_prefix};
use robocop_reports::{input, output, reports};
use std::process::ExitCode;
use tracing::{debug, info};

fn init_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Commands::List { output: mode } => {
            output::print_list(&reports::describe_all(), mode.as_deref().unwrap_or("human"))
                .map(|_| 0)
        }
        Commands::Run {
            repo_root,
            input,
            reports,
            configure,
            files,
            output,
            json_path,
        } => run(
            CliOverrides {
                repo_root,
                reports,
                configure,
                input,
                output,
                json_path,
            },
            files,
        ),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            ExitCode::from(2)
        }
    }
}

/// Run the selected reports over every message and return the exit status.
fn run(overrides: CliOverrides, files: Option<usize>) -> Result<u8, ReportError> {
    let eff = config::resolve_effective(&overrides)?;
    if !eff.config_found {
        debug!("no robocop-reports config found; using defaults");
    }

    let mut active = reports::Reports::activate(&eff.reports)?;
    active.configure_all(&eff.configure)?;
    info!(reports = ?active.names(), "reports activated");

    let paths = input::expand_patterns(&eff.repo_root, &eff.input)?;
    if paths.is_empty() {
        eprintln!("{} no message dumps matched; reporting an empty run", note_prefix());
    }
    let loaded = input::load_messages(&paths)?;

    // single collector: every report sees the same ordered stream
    for message in &loaded.messages {
        active.add_message(message);
    }
    active.set_files_count(files.unwrap_or(loaded.files));

    let embed_issues = eff.json_path.is_none();
    if let (Some(path), Some(issues)) = (eff.json_path.as_ref(), active.json_issues()) {
        output::write_json_report(path, issues)?;
        info!(path = %path.display(), issues = issues.len(), "wrote json report");
    }
    output::print_reports(&active, &eff.output, embed_issues)?;

    let status = active.return_status();
    debug!(status, "quality gate evaluated");
    Ok(status)
}
