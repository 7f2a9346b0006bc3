// SPDX-FileCopyrightText: 2026 Furrow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Furrow - farmer question classification and routing.
//!
//! This is the binary entry point for the Furrow service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;
mod serve;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use furrow_config::FurrowConfig;

/// Furrow - farmer question classification and routing.
#[derive(Parser, Debug)]
#[command(name = "furrow", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP service.
    Serve,
    /// Classify a question and show where it would be routed.
    Classify {
        /// The farmer's question.
        question: String,
        /// Show every scorer's contribution.
        #[arg(long)]
        explain: bool,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Show the routing decision for a question type.
    Route {
        /// Question type name, e.g. `soil_ph`.
        question_type: String,
    },
    /// List the supported question types.
    Types,
    /// Print the effective configuration.
    Config,
}

fn load_config(path: Option<&PathBuf>) -> FurrowConfig {
    let result = match path {
        Some(path) => furrow_config::load_and_validate_path(path),
        None => furrow_config::load_and_validate(),
    };
    match result {
        Ok(config) => config,
        Err(errors) => {
            furrow_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    let output = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await.map(|()| None),
        Some(Commands::Classify {
            question,
            explain,
            json,
        }) => commands::classify(&config, &question, explain, json).map(Some),
        Some(Commands::Route { question_type }) => {
            commands::route(&config, &question_type).map(Some)
        }
        Some(Commands::Types) => Ok(Some(commands::types())),
        Some(Commands::Config) => commands::show_config(&config).map(Some),
        None => Ok(Some("furrow: use --help for available commands\n".to_string())),
    };

    match output {
        Ok(Some(text)) => print!("{text}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
