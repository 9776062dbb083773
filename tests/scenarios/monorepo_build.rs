//! Scenario: Mobile app inside a monorepo
//!
//! Journey: A team keeps its Android project under `android/` and wants all
//! build output in one `build/` directory at the repository root.
//!
//! Steps:
//! 1. Team writes a manifest listing app and library modules
//! 2. Team runs `plan` to review paths and derived namespaces
//! 3. A build leaves output under the shared directory
//! 4. Team runs `clean` to wipe it
//!
//! Success Criteria:
//! - Every module writes below `<repo>/build`
//! - Libraries without a namespace get one derived from their name
//! - Clean removes only the shared output directory

use crate::common::*;

const MONOREPO_MANIFEST: &str = r#"
[settings]
base_directory = "android"
fallback_namespace_template = "com.acme.mobile"

[project]
root = "app"

[[project.modules]]
name = "camera-plugin"
capabilities = ["com.android.library"]

[[project.modules]]
name = "analytics"
capabilities = ["library"]
namespace = "com.acme.analytics"

[[project.modules]]
name = "wear"
capabilities = ["application"]
"#;

/// SCENARIO: plan, build, clean
#[test]
fn scenario_plan_then_clean() {
    let env = TestEnv::builder().with_manifest(MONOREPO_MANIFEST).build();

    // Review the plan
    let result = env.run(&["plan"]);
    assert!(result.success, "Plan failed: {}", result.stderr);
    assert!(
        result
            .stdout
            .contains("namespace: com.acme.mobile.camera_plugin (applied)"),
        "stdout: {}",
        result.stdout
    );
    assert!(result.stdout.contains("namespace: com.acme.analytics (kept)"));

    // A build wrote some output
    env.write_project_file("build/camera-plugin/outputs/aar/camera.aar", "aar");
    env.write_project_file("android/app/src/main/AndroidManifest.xml", "<manifest/>");

    // Wipe it
    let result = env.run(&["clean"]);
    assert!(result.success, "Clean failed: {}", result.stderr);
    assert!(!env.project_path("build").exists());
    assert!(env
        .project_path("android/app/src/main/AndroidManifest.xml")
        .exists());
}

/// SCENARIO: CI runs the plan in JSON mode and reads it back
#[test]
fn scenario_ci_reads_json_plan() {
    let env = TestEnv::builder().with_manifest(MONOREPO_MANIFEST).build();

    let result = env.run(&["--json", "plan"]);
    assert!(result.success, "Plan failed: {}", result.stderr);

    let json = result.json();
    let modules = json["report"]["modules"].as_array().expect("modules");
    let wear = modules
        .iter()
        .find(|m| m["name"] == "wear")
        .expect("wear module");
    assert_eq!(wear["normalization"]["status"], "not_library");
    assert!(wear["output_dir"]
        .as_str()
        .is_some_and(|dir| dir.ends_with("wear")));
}
