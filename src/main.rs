use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use bcrypt_cli::cli::Cli;
use bcrypt_cli::commands;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Diagnostics go to stderr, filtered by RUST_LOG (default: warnings only).
    // Stdout carries the hash, the verdict, or the error message.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut stdout = io::stdout().lock();
    let code = match commands::run(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::report_error(&err, cli.json, &mut stdout)
                .context("Failed to write error to stdout")?;
            ExitCode::from(err.exit_code())
        }
    };
    stdout.flush().context("Failed to flush stdout")?;

    Ok(code)
}
