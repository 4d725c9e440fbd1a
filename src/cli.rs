//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use verset::output::OutputMode;

/// verset - changeset-based semantic versioning
#[derive(Parser, Debug)]
#[command(
    name = "verset",
    version,
    about = "Manage semantic versioning with changeset files",
    long_about = "Track changes as changeset files, aggregate them into \
                  semantically versioned releases, and render a changelog.\n\n\
                  A changeset records the version impact (major/minor/patch)\n\
                  and a description. Releasing folds all pending changesets\n\
                  into one immutable versioned record."
)]
pub struct Cli {
    /// Base path (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level verset subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new changeset file
    AddChange {
        /// Change type: major, minor, patch
        #[arg(short = 't', long = "type")]
        change_type: String,

        /// Change description
        #[arg(short, long)]
        description: String,

        /// Extra attributes in key=value format (repeatable)
        #[arg(short, long = "attribute", value_name = "KEY=VALUE")]
        attributes: Vec<String>,
    },

    /// Release a new version from the pending changesets
    Release,

    /// Print the changelog
    Changelog {
        /// Filter the changelog by version
        #[arg(long)]
        version: Option<String>,

        /// Path to a custom changelog template
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Show the current version
    CurrentVersion,

    /// Show the computed next version
    NextVersion,

    /// Show the status of the working directory
    Status,

    /// Verify changeset files accompany source changes
    CheckChangeset {
        /// Glob for files whose changes require a changeset
        #[arg(short, long, default_value = "**/*")]
        src: String,

        /// Base branch to compare against
        #[arg(short, long, default_value = "master")]
        base: String,
    },
}

/// Parse arguments and dispatch
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::AddChange {
            change_type,
            description,
            attributes,
        } => commands::add_change(&cli.path, &change_type, &description, &attributes, mode),
        Command::Release => commands::release(&cli.path, mode),
        Command::Changelog { version, template } => {
            commands::changelog(&cli.path, version.as_deref(), template.as_deref())
        }
        Command::CurrentVersion => commands::current_version(&cli.path, mode),
        Command::NextVersion => commands::next_version(&cli.path, mode),
        Command::Status => commands::status(&cli.path, mode),
        Command::CheckChangeset { src, base } => {
            commands::check_changeset(&cli.path, &src, &base, mode)
        }
    }
}
