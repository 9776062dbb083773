#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing must report errors, never panic
        let _ = toml::from_str::<buildnorm::Manifest>(content);
        if let Ok((manifest, _)) =
            buildnorm::config::parse_with_warnings(content, Path::new("buildnorm.toml"))
        {
            let _ = buildnorm::infrastructure::project_tree_from_manifest(&manifest.project);
        }
    }
});
