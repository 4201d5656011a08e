// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! roster - rostering job CLI

mod color;
mod commands;
mod env;
mod exit_error;
mod matrix_file;
mod output;
mod table;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{history, matrix, quota, status, submit};
use roster_adapters::{HttpApi, HttpApiConfig, TracedApi};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster - submit worker rostering problems and browse their schedules"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Offline matrix checks
    Matrix(matrix::MatrixArgs),
    /// Submit a matrix to the solver
    Submit(submit::SubmitArgs),
    /// Check the status of a submitted task
    Status {
        /// Task ID returned by `submit`
        task_id: String,
    },
    /// Show the remaining submission quota
    Quota,
    /// Browse and manage past schedules
    History(history::HistoryArgs),
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr so stdout stays parseable.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn connect() -> Result<TracedApi<HttpApi>> {
    let api = HttpApi::new(HttpApiConfig::from_env())?;
    Ok(TracedApi::new(api))
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        // Offline: never touches the network
        Commands::Matrix(args) => matrix::handle(args.command, format)?,

        Commands::Submit(args) => {
            let poll_interval = roster_engine::env::poll_interval();
            submit::handle(args, connect()?, poll_interval, format).await?
        }
        Commands::Status { task_id } => status::handle(connect()?, task_id, format).await?,
        Commands::Quota => quota::handle(connect()?, format).await?,
        Commands::History(args) => history::handle(args.command, connect()?, format).await?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
