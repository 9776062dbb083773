//! Property tests for output path planning.

use std::path::{Component, PathBuf};

use proptest::prelude::*;

use buildnorm::PathPlanner;

fn dir_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_\\-]{1,12}").unwrap()
}

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![Just("..".to_string()), Just(".".to_string()), dir_name()]
}

#[cfg(not(windows))]
fn base_dir() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(dir_name(), 0..5).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        path.extend(parts);
        path
    })
}

#[cfg(windows)]
fn base_dir() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(dir_name(), 0..5).prop_map(|parts| {
        let mut path = PathBuf::from("C:\\");
        path.extend(parts);
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the root path is absolute and has no `.` or `..` left in it.
    #[test]
    fn property_root_path_is_normalized(
        base in base_dir(),
        segments in proptest::collection::vec(segment(), 0..6),
    ) {
        let planner = PathPlanner::new(&base);
        let root = planner.plan_root_path(&base, segments.as_slice()).unwrap();

        prop_assert!(root.is_absolute());
        prop_assert!(root
            .components()
            .all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
    }

    /// PROPERTY: every subproject path is a direct child of the root path.
    #[test]
    fn property_subproject_path_is_child_of_root(
        base in base_dir(),
        segments in proptest::collection::vec(segment(), 0..6),
        name in dir_name(),
    ) {
        let planner = PathPlanner::new(&base);
        let root = planner.plan_root_path(&base, segments.as_slice()).unwrap();
        let sub = planner.plan_subproject_path(&root, &name).unwrap();

        prop_assert!(sub.starts_with(&root));
        prop_assert_eq!(sub.parent(), Some(root.as_path()));
        prop_assert_eq!(sub.file_name().and_then(|n| n.to_str()), Some(name.as_str()));
    }

    /// PROPERTY: planning is a pure function of its inputs.
    #[test]
    fn property_root_path_is_deterministic(
        base in base_dir(),
        segments in proptest::collection::vec(segment(), 0..6),
    ) {
        let planner = PathPlanner::new(&base);
        prop_assert_eq!(
            planner.plan_root_path(&base, segments.as_slice()).unwrap(),
            planner.plan_root_path(&base, segments.as_slice()).unwrap()
        );
    }

    /// PROPERTY: planning never panics on arbitrary segments.
    #[test]
    fn property_root_path_never_panics(
        base in base_dir(),
        segments in proptest::collection::vec("\\PC{0,12}", 0..4),
    ) {
        let planner = PathPlanner::new(&base);
        let _ = planner.plan_root_path(&base, segments.as_slice());
    }
}
