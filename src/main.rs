//! buildnorm CLI - build configuration normalizer
//!
//! Usage: buildnorm [OPTIONS] <COMMAND>
//!
//! Commands:
//!   plan   Plan output paths, order constraints and namespaces
//!   clean  Delete the redirected root output directory

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use buildnorm::logging::init_logging;
use buildnorm::presentation::{Cli, CliOverrides, Commands, OutputFormat, Renderer};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let overrides = CliOverrides {
        base_dir: cli.base_dir.clone(),
        namespace_template: cli.namespace_template.clone(),
    };
    let renderer = Renderer::new(
        OutputFormat::from_json_flag(cli.json),
        std::io::stdout().is_terminal(),
    );

    match cli.command {
        Commands::Plan => commands::cmd_plan(&cli.manifest, &overrides, &cwd, &renderer),
        Commands::Clean { dry_run } => {
            commands::cmd_clean(&cli.manifest, &overrides, &cwd, dry_run, &renderer)
        }
    }
}
