//! Scenario: Modules with incomplete configuration objects
//!
//! Journey: Some third-party plugins expose only part of the namespace
//! accessors, or no configuration object at all. The run must still
//! complete and report what it could not do.
//!
//! Success Criteria:
//! - No module failure aborts the run
//! - Each module reports why its namespace was left alone

use crate::common::*;

const PARTIAL_MANIFEST: &str = r#"
[project]
root = "app"

[[project.modules]]
name = "legacy"
capabilities = ["library"]
accessors = "none"

[[project.modules]]
name = "readonly"
capabilities = ["library"]
accessors = "read-only"

[[project.modules]]
name = "writeonly"
capabilities = ["library"]
accessors = "write-only"

[[project.modules]]
name = "healthy"
capabilities = ["library"]
"#;

/// SCENARIO: every module gets a path, only the healthy one a namespace
#[test]
fn scenario_partial_accessors_do_not_abort() {
    let env = TestEnv::builder().with_manifest(PARTIAL_MANIFEST).build();

    let result = env.run(&["--json", "plan"]);
    assert!(result.success, "Plan failed: {}", result.stderr);

    let json = result.json();
    let modules = json["report"]["modules"].as_array().expect("modules");
    let status = |name: &str| {
        modules
            .iter()
            .find(|m| m["name"] == name)
            .map(|m| m["normalization"]["status"].clone())
            .unwrap_or_default()
    };

    assert_eq!(status("legacy"), "no_getter");
    assert_eq!(status("readonly"), "no_setter");
    assert_eq!(status("writeonly"), "no_getter");
    assert_eq!(status("healthy"), "applied");
    assert!(modules.iter().all(|m| m["output_dir"].is_string()));
}
