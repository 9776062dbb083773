//! Property tests for namespace normalization.

use proptest::prelude::*;

use buildnorm::config::AccessorMode;
use buildnorm::infrastructure::DeclaredExtension;
use buildnorm::{Module, NamespaceNormalizer, NormalizeOutcome};

fn module_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9\\-]{0,15}").unwrap()
}

fn existing_namespace() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("   ".to_string())),
        "[a-z]{1,6}\\.[a-z]{1,6}".prop_map(Some),
    ]
}

fn accessor_mode() -> impl Strategy<Value = AccessorMode> {
    prop_oneof![
        Just(AccessorMode::ReadWrite),
        Just(AccessorMode::ReadOnly),
        Just(AccessorMode::WriteOnly),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second pass never changes what the first pass produced.
    #[test]
    fn property_normalize_is_idempotent(
        name in module_name(),
        namespace in existing_namespace(),
        mode in accessor_mode(),
    ) {
        let normalizer = NamespaceNormalizer::new("com.hbp");
        let mut module = Module::new(name)
            .with_capability("library")
            .with_extension(DeclaredExtension::new(namespace, mode));

        normalizer.normalize(&mut module);
        let after_first = module.namespace();
        let second = normalizer.normalize(&mut module);

        prop_assert_eq!(module.namespace(), after_first);
        prop_assert!(!second.is_applied());
    }

    /// PROPERTY: a non-empty namespace is never overwritten.
    #[test]
    fn property_explicit_namespace_kept(
        name in module_name(),
        namespace in "[a-z]{1,6}\\.[a-z]{1,6}",
    ) {
        let normalizer = NamespaceNormalizer::new("com.hbp");
        let extension = DeclaredExtension::new(Some(namespace.clone()), AccessorMode::ReadWrite);
        let mut module = Module::new(name)
            .with_capability("library")
            .with_extension(extension);

        let outcome = normalizer.normalize(&mut module);

        prop_assert_eq!(outcome, NormalizeOutcome::AlreadySet(namespace.clone()));
        prop_assert_eq!(module.namespace(), Some(namespace));
    }

    /// PROPERTY: modules without the library capability are left untouched.
    #[test]
    fn property_non_library_untouched(
        name in module_name(),
        namespace in existing_namespace(),
    ) {
        let normalizer = NamespaceNormalizer::new("com.hbp");
        let mut module = Module::new(name)
            .with_capability("application")
            .with_extension(DeclaredExtension::new(namespace.clone(), AccessorMode::ReadWrite));

        let outcome = normalizer.normalize(&mut module);

        prop_assert_eq!(outcome, NormalizeOutcome::NotLibrary);
        prop_assert_eq!(module.namespace(), namespace);
    }
}
