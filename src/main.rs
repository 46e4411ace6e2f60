use anyhow::Context;
use clap::Parser;
use ipcheck::cli::{Cli, Commands};
use ipcheck::config::AppSettings;
use ipcheck::error::ConfigError;
use ipcheck::output;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings(&cli)?;

    match &cli.command {
        Commands::Check(cmd) => cmd.execute(&settings, cli.quiet).await?,
        Commands::Bulk(cmd) => cmd.execute(&settings, cli.verbose, cli.quiet).await?,
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> anyhow::Result<AppSettings> {
    if let Some(path) = &cli.config {
        return AppSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()));
    }

    match AppSettings::load() {
        Ok(settings) => Ok(settings),
        Err(ConfigError::DirectoryNotFound) => {
            warn!("no configuration directory available, using default settings");
            Ok(AppSettings::default())
        }
        Err(e) => Err(e).context("loading settings"),
    }
}

/// Diagnostics go to stderr so CSV and JSON on stdout stay parseable.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        "ipcheck=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
