//! Plan command handler
//!
//! Runs the configuration pass and prints the resulting report.

use std::path::Path;

use anyhow::{Context, Result};

use buildnorm::presentation::{prepare_run, CliOverrides, Renderer};
use buildnorm::RunReport;

/// Execute the plan command
pub fn cmd_plan(
    manifest: &Path,
    overrides: &CliOverrides,
    cwd: &Path,
    renderer: &Renderer,
) -> Result<()> {
    let mut run = prepare_run(manifest, overrides, cwd)?;
    eprint!("{}", renderer.render_warnings(&run.warnings));

    let ctx = run.orchestrator.run(&mut run.tree)?;
    let report = RunReport::new(&run.tree, &ctx);

    let rendered = renderer
        .render_report(&report)
        .context("failed to render report")?;
    print!("{}", rendered);
    Ok(())
}
