use anyhow::Result;
use clap::Parser;
use release_gate::commands::check;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status for environment failures, distinct from a BLOCKED verdict
const FATAL_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "release-gate")]
#[command(about = "Release readiness validator", long_about = None)]
#[command(version)]
struct Cli {
    /// Base path to the project folder containing docs/ and test-cases/
    /// (default: flagship-project/code-sections)
    #[arg(long, value_name = "PATH")]
    base: Option<PathBuf>,

    /// TOML manifest describing documents, headings and coverage sources
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the effective manifest as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = check::effective_config(cli.config.as_deref(), cli.base)?;
    if cli.print_config {
        check::print_config(&config)?;
        return Ok(ExitCode::SUCCESS);
    }
    let verdict = check::execute(&config)?;
    Ok(verdict.into())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
