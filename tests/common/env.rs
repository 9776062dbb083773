//! Test environment builder for isolated buildnorm testing.
//!
//! Provides `TestEnv` - a temp project directory holding a manifest, plus
//! helpers to run the buildnorm CLI against it.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::ANDROID_MANIFEST;

/// Environment variables that would leak host settings into a run
const SCRUBBED_VARS: &[&str] = &[
    "BUILDNORM_BASE_DIR",
    "BUILDNORM_NAMESPACE_TEMPLATE",
    "BUILDNORM_OUTPUT_SEGMENTS",
    "RUST_LOG",
];

/// Result of running a buildnorm CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated project directory with a manifest
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run buildnorm from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    /// Run buildnorm from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run buildnorm from the project root with arguments that need not be UTF-8
    pub fn run_os(&self, args: &[&OsStr]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    pub fn run_from_with_env<S: AsRef<OsStr>>(
        &self,
        cwd: &Path,
        args: &[S],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);
        for key in SCRUBBED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute buildnorm");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn create_subdirectories(&self, dirs: &[&str]) {
        for dir in dirs {
            std::fs::create_dir_all(self.project_path(dir))
                .expect("Failed to create subdirectory");
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    manifest: Option<String>,
    subdirectories: Vec<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            manifest: Some(ANDROID_MANIFEST.to_string()),
            subdirectories: vec!["android".to_string()],
        }
    }

    /// Replace the default manifest
    pub fn with_manifest(mut self, toml: &str) -> Self {
        self.manifest = Some(toml.to_string());
        self
    }

    /// Do not write `buildnorm.toml`
    pub fn without_manifest(mut self) -> Self {
        self.manifest = None;
        self
    }

    pub fn with_subdirectory(mut self, dir: &str) -> Self {
        self.subdirectories.push(dir.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_buildnorm")),
        };

        let dirs: Vec<&str> = self.subdirectories.iter().map(String::as_str).collect();
        env.create_subdirectories(&dirs);

        if let Some(manifest) = &self.manifest {
            env.write_project_file("buildnorm.toml", manifest);
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
