#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let out = buildnorm::sanitize(name);
        assert_eq!(out.chars().count(), name.chars().count());
        assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
});
