//! Property tests for namespace sanitizing.

use proptest::prelude::*;

use buildnorm::domain::value_objects::fallback_namespace;
use buildnorm::sanitize;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: output only contains `[A-Za-z0-9_]`.
    #[test]
    fn property_sanitize_output_charset(name in "\\PC{0,40}") {
        let out = sanitize(&name);
        prop_assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    /// PROPERTY: one output char per input char.
    #[test]
    fn property_sanitize_preserves_char_count(name in "\\PC{0,40}") {
        prop_assert_eq!(sanitize(&name).chars().count(), name.chars().count());
    }

    /// PROPERTY: identifier-safe names pass through unchanged.
    #[test]
    fn property_sanitize_identity_on_safe_names(name in "[A-Za-z0-9_]{0,40}") {
        prop_assert_eq!(sanitize(&name), name);
    }

    /// PROPERTY: the fallback namespace is always `template.` plus the sanitized name.
    #[test]
    fn property_fallback_namespace_shape(
        template in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}",
        name in "[A-Za-z0-9_\\-. ]{1,20}",
    ) {
        let namespace = fallback_namespace(&template, &name);
        let prefix = format!("{}.", template);
        prop_assert!(namespace.starts_with(&prefix));
        prop_assert_eq!(&namespace[prefix.len()..], sanitize(&name));
    }
}
