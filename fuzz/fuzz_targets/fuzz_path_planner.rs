#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let segments: Vec<&str> = content.split(',').collect();
        let planner = buildnorm::PathPlanner::new("/work");
        let base = Path::new("/work/android");
        if let Ok(root) = planner.plan_root_path(base, segments.as_slice()) {
            assert!(root.is_absolute());
            if let Some(name) = segments.first() {
                if let Ok(sub) = planner.plan_subproject_path(&root, name) {
                    assert_eq!(sub.parent(), Some(root.as_path()));
                }
            }
        }
    }
});
