// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Flightgraph CLI - cheapest flights and spanning trees over airfare data

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use flightgraph::{commands, config};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flightgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "FLIGHTGRAPH_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Data directory override
    #[arg(long, env = "FLIGHTGRAPH_DATA_DIR", global = true)]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an airfare CSV into vertex and edge record files
    Import {
        /// CSV file to read
        csv: std::path::PathBuf,
    },

    /// Print the minimum spanning tree of the route graph
    Mst,

    /// Find the cheapest flight between two airports
    Path {
        /// Departure airport (prompts interactively when omitted)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Arrival airport
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Export graph to various formats
    Export {
        /// Output format (dot, json, records)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Show the effective configuration
    Config {
        /// Single key to print (e.g. csv.fare_column)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Import { csv } => commands::import::run(&config, &csv),
        Commands::Mst => commands::mst::run(&config),
        Commands::Path { from, to } => commands::path::run(&config, from, to),
        Commands::Export { format, output } => commands::export::run(&config, &format, output),
        Commands::Config { key } => commands::config::run(&config, key.as_deref()),
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
