//! Manifest loading and settings layering

use std::fs;
use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{BuildNormError, BuildNormResult};

use super::types::{Manifest, Settings};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "buildnorm.toml";

/// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BuildNormResult<(Manifest, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(BuildNormError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse manifest text; `path` is only used for diagnostics
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> BuildNormResult<(Manifest, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let manifest: Manifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BuildNormError::InvalidManifest {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((manifest, warnings))
}

/// Apply environment variable overrides (BUILDNORM_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_overrides_from(settings, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_overrides_from<F>(mut settings: Settings, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    // BUILDNORM_BASE_DIR
    if let Some(base) = lookup("BUILDNORM_BASE_DIR").filter(|v| !v.is_empty()) {
        settings.base_directory = base.into();
    }

    // BUILDNORM_NAMESPACE_TEMPLATE
    if let Some(template) = lookup("BUILDNORM_NAMESPACE_TEMPLATE").filter(|v| !v.is_empty()) {
        settings.fallback_namespace_template = template;
    }

    // BUILDNORM_OUTPUT_SEGMENTS (comma-separated)
    if let Some(segments) = lookup("BUILDNORM_OUTPUT_SEGMENTS") {
        let parsed: Vec<String> = segments
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            settings.output_segments = parsed;
        }
    }

    settings
}

/// First line that defines `key`, as `key = ...` or as a `[..key]` table header
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| defines_key(line.trim_start(), key))
        .map(|i| i + 1)
}

fn defines_key(line: &str, key: &str) -> bool {
    if let Some(header) = line.strip_prefix('[') {
        let header = header.trim_start_matches('[');
        let name = header.split(']').next().unwrap_or_default();
        return name.rsplit('.').next().map(str::trim) == Some(key);
    }

    let unquoted = line
        .strip_prefix('"')
        .and_then(|rest| rest.strip_prefix(key))
        .and_then(|rest| rest.strip_prefix('"'));
    let rest = unquoted.or_else(|| line.strip_prefix(key));
    rest.is_some_and(|rest| rest.trim_start().starts_with('='))
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "settings",
        "base_directory",
        "fallback_namespace_template",
        "output_segments",
        "default_build_dir",
        "evaluation_anchor",
        "repositories",
        "project",
        "root",
        "modules",
        "name",
        "capabilities",
        "namespace",
        "accessors",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
