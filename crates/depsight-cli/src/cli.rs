//! CLI argument definitions for depsight.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depsight",
    version,
    about = "Deterministic ordering and insight for dependency resolution reports",
    long_about = "depsight orders the edges of a dependency resolution report (what was \
                  requested, what was resolved, and who asked) so that a human auditing \
                  why a version was chosen sees a stable, reproducible listing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the edges of a report in presentation order
    Sort {
        /// Edge report file (.toml or .json)
        report: PathBuf,
        /// Version scheme: maven, semver
        #[arg(short, long)]
        scheme: Option<String>,
        /// Output format: text, json
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show why versions were chosen, with the chain of requesting components
    Insight {
        /// Edge report file (.toml or .json)
        report: PathBuf,
        /// Only show edges for this dependency (group:module, module, or project path)
        #[arg(short, long)]
        dependency: Option<String>,
        /// Maximum depth of the requesting chain
        #[arg(long)]
        depth: Option<u32>,
        /// Version scheme: maven, semver
        #[arg(short, long)]
        scheme: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
