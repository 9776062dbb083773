//! Clean command handler
//!
//! Runs the configuration pass, then invokes the registered clean task.

use std::path::Path;

use anyhow::{Context, Result};

use buildnorm::infrastructure::LocalFs;
use buildnorm::presentation::{prepare_run, CliOverrides, Renderer};

/// Execute the clean command
pub fn cmd_clean(
    manifest: &Path,
    overrides: &CliOverrides,
    cwd: &Path,
    dry_run: bool,
    renderer: &Renderer,
) -> Result<()> {
    let mut run = prepare_run(manifest, overrides, cwd)?;
    eprint!("{}", renderer.render_warnings(&run.warnings));

    let ctx = run.orchestrator.run(&mut run.tree)?;
    let task = ctx
        .clean_task()
        .context("no clean task was registered for this project")?;

    let fs = LocalFs::new();
    let outcome = if dry_run {
        task.preview(&fs)
    } else {
        task.clean(&fs)
            .with_context(|| format!("failed to clean {}", task.output_dir().display()))?
    };

    let rendered = renderer
        .render_clean(&outcome)
        .context("failed to render clean outcome")?;
    print!("{}", rendered);
    Ok(())
}
