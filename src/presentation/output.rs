//! Output Rendering
//!
//! Renders run reports and clean outcomes as text or JSON. Renderers return
//! strings; the binary decides where they go.

use std::fmt::Write as _;

use serde_json::json;

use crate::application::{CleanOutcome, RunReport};
use crate::domain::value_objects::ConfigWarning;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    warn: &'static str,
    trash: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            warn: "⚠",
            trash: "🗑",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            warn: "[WARN]",
            trash: "[DEL]",
            skip: "[ ]",
        }
    }
}

/// Renders reports in the configured format
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub format: OutputFormat,
    /// Whether to use unicode icons
    pub unicode: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            unicode: true,
        }
    }
}

impl Renderer {
    pub fn new(format: OutputFormat, unicode: bool) -> Self {
        Self { format, unicode }
    }

    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    /// JSON rendering fails for paths that are not valid UTF-8
    pub fn render_report(&self, report: &RunReport) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Json => {
                let report = serde_json::to_value(report)?;
                Ok(format!("{}\n", json!({ "type": "plan_complete", "report": report })))
            }
            OutputFormat::Text => Ok(self.render_report_text(report)),
        }
    }

    fn render_report_text(&self, report: &RunReport) -> String {
        let icons = self.icons();
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{} Configured {} ({} modules, {} namespaces derived)",
            icons.check,
            report.root,
            report.modules.len(),
            report.applied_count()
        );
        let _ = writeln!(out);

        for module in &report.modules {
            let dir = module
                .output_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(out, "  {}: {}", module.name, dir);

            if let Some(outcome) = &module.normalization {
                let _ = writeln!(
                    out,
                    "    namespace: {} ({})",
                    module.namespace.as_deref().unwrap_or("-"),
                    outcome.label()
                );
            }
        }
        let _ = writeln!(out);

        let order = if report.constraints.is_empty() {
            "none".to_string()
        } else {
            report
                .constraints
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "  order: {}", order);

        if let Some(root) = report.modules.first() {
            let _ = writeln!(out, "  repositories: {}", root.repositories.join(", "));
        }

        if let Some(target) = &report.clean_target {
            let _ = writeln!(out, "  clean: {}", target.display());
        }

        out
    }

    pub fn render_clean(&self, outcome: &CleanOutcome) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Json => {
                let outcome = serde_json::to_value(outcome)?;
                Ok(format!("{}\n", json!({ "type": "clean_complete", "outcome": outcome })))
            }
            OutputFormat::Text => {
                let icons = self.icons();
                let icon = match outcome {
                    CleanOutcome::Removed(_) => icons.trash,
                    CleanOutcome::WouldRemove(_) => icons.trash,
                    CleanOutcome::AlreadyAbsent(_) => icons.skip,
                };
                Ok(format!("{} {}\n", icon, outcome))
            }
        }
    }

    /// Always text, whatever the format: warnings go to stderr, never into
    /// the JSON document on stdout
    pub fn render_warnings(&self, warnings: &[ConfigWarning]) -> String {
        let icons = self.icons();
        warnings
            .iter()
            .map(|w| format!("{} {}\n", icons.warn, w))
            .collect()
    }
}
