//! crewplan CLI entry point.

use anyhow::Result;
use clap::Parser;
use crewplan_cli::cli::Cli;
use crewplan_cli::commands::{self, OutputOptions};
use crewplan_cli::{App, Config};
use crewplan_core::settings::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with command output
    let default_filter = if cli.verbose {
        "crewplan=debug,crewplan_cli=debug,crewplan_core=debug"
    } else {
        "crewplan=info,crewplan_cli=info,crewplan_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            cli.log_json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!cli.log_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    let config = Config::from_env();
    let mut settings = Settings::default();
    if let Some(theme) = cli.theme {
        settings = settings.with_theme(theme);
    }
    tracing::debug!(today = %config.today, theme = %settings.theme, "starting");

    let mut app = App::with_demo_data(config, settings);
    let options = OutputOptions {
        format: cli.format,
        quiet: cli.quiet,
    };
    let output = commands::run(&mut app, cli.command, options)?;
    if !output.is_empty() {
        anstream::println!("{}", output);
    }

    Ok(())
}
