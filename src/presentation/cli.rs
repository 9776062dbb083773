//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --manifest, --base-dir,
//! --namespace-template) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// buildnorm - normalize build configuration across project modules
#[derive(Parser, Debug)]
#[command(name = "buildnorm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the project manifest
    #[arg(short, long, global = true, default_value = "buildnorm.toml")]
    pub manifest: PathBuf,

    /// Override the project base directory (relative to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Override the fallback namespace template
    #[arg(long, global = true, value_name = "PREFIX")]
    pub namespace_template: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan output paths, order constraints and namespaces (no writes)
    Plan,

    /// Delete the redirected root output directory
    Clean {
        /// Dry run - show what would be deleted
        #[arg(long)]
        dry_run: bool,
    },
}
