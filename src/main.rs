//! FluidSurveys CLI - query surveys from the command line
//!
//! Prints API responses as pretty JSON on stdout. Logging goes to stderr and
//! is controlled by `RUST_LOG`.

use std::io;
use std::process;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use fluidsurveys::cli::{Cli, Command};

/// Installs a stderr log subscriber, defaulting to warnings only
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging();

    let mut client = cli.client();

    match &cli.command {
        Command::Surveys => print_json(&client.surveys()?)?,
        Command::Details { id } => print_json(&client.survey_details(id.as_str())?)?,
        Command::Named { name } => match client.survey_named(name)? {
            Some(details) => print_json(&details)?,
            None => {
                eprintln!("No survey named '{}'", name);
                process::exit(1);
            }
        },
    }

    Ok(())
}
