//! Reusable manifests for CLI tests.

/// Root `app` under `android/`, one derived and one explicit library namespace
pub const ANDROID_MANIFEST: &str = r#"
[settings]
base_directory = "android"

[project]
root = "app"

[[project.modules]]
name = "core"
capabilities = ["library"]

[[project.modules]]
name = "ui"
capabilities = ["com.android.library"]
namespace = "com.example.ui"

[[project.modules]]
name = "tools"
"#;

/// Same project with a misspelled settings key
pub const MANIFEST_WITH_TYPO: &str = r#"
[settings]
base_directroy = "android"

[project]
root = "app"
"#;

/// Module name that cannot be a directory
pub const MANIFEST_BAD_MODULE: &str = r#"
[project]
root = "app"

[[project.modules]]
name = "a/b"
"#;
