//! golosus CLI — scaffold a Go + templ + htmx web project.
//!
//! `golosus new` writes the project tree, `golosus plan` previews it, and running
//! with no subcommand opens an interactive menu. All generation logic lives in
//! [`golosus_core`]; this binary only gathers the project name and author.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use golosus_core::config::{GeneratorConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(
    name = "golosus",
    about = "Scaffold Go + templ + htmx web projects",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a config file with default author and output directory
    /// (default: ./golosus.config.json, ignored if absent)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project
    New {
        /// Project name (creates a directory with this name); prompted if omitted
        name: Option<String>,

        /// GitHub profile used in the Go module path; prompted if omitted
        #[arg(long, short)]
        author: Option<String>,

        /// Directory in which to create the project
        #[arg(long, short)]
        output_dir: Option<PathBuf>,
    },

    /// List the folders and files a new project would contain
    Plan {
        /// Project name
        name: String,

        /// GitHub profile used in the Go module path
        #[arg(long, short)]
        author: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&error_report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::load_or_default(Path::new(CONFIG_FILE))?,
    };
    tracing::debug!(?config, "generator config");

    match cli.command {
        None => commands::menu::run(&config)?,
        Some(Commands::New {
            name,
            author,
            output_dir,
        }) => {
            commands::new::run(name, author, output_dir, &config)?;
        }
        Some(Commands::Plan { name, author }) => {
            commands::plan::run(&name, author, &config)?;
        }
    }

    Ok(())
}

/// The error followed by its whole cause chain on one line.
fn error_report(err: &anyhow::Error) -> String {
    format!("{err:#}")
}
