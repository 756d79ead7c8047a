//! Property-based tests for the grammar and iteration.
//!
//! Algebra invariants that should always run live next to the algebra; this
//! module adds the heavier cross-style checks.

use super::{FsPath, PathIter, Style};
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-zA-Z0-9_-]{1,12}",
        1 => "[a-z]{1,6}\\.[a-z]{1,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("/".to_string()),
        1 => Just("//".to_string()),
        2 => Just("\\".to_string()),
    ]
}

fn root_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        Just("C:".to_string()),
        Just("C:\\".to_string()),
        Just("\\\\server\\".to_string()),
        Just("\\\\?\\".to_string()),
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    (
        root_strategy(),
        prop::collection::vec((component_strategy(), separator_strategy()), 0..6),
        any::<bool>(),
    )
        .prop_map(|(root, parts, trailing)| {
            let mut s = root;
            let count = parts.len();
            for (i, (name, sep)) in parts.into_iter().enumerate() {
                s.push_str(&name);
                if i + 1 < count || trailing {
                    s.push_str(&sep);
                }
            }
            s
        })
}

fn style_strategy() -> impl Strategy<Value = Style> {
    prop_oneof![Just(Style::Posix), Just(Style::Windows)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Reverse iteration visits exactly the forward elements.
    #[test]
    fn reverse_iteration_mirrors_forward(s in path_strategy(), style in style_strategy()) {
        let p = FsPath::with_style(s, style);
        let forward: Vec<String> = p.iter().map(FsPath::into_string).collect();
        let mut backward: Vec<String> = p.iter().rev().map(FsPath::into_string).collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    // The cursor and the iterator agree.
    #[test]
    fn cursor_matches_iterator(s in path_strategy(), style in style_strategy()) {
        let p = FsPath::with_style(s, style);
        prop_assume!(!p.is_empty());
        let mut it = PathIter::begin(&p).unwrap();
        let mut seen = Vec::new();
        while !it.is_end() {
            seen.push(it.get().into_string());
            it.next();
        }
        let expected: Vec<String> = p.iter().map(FsPath::into_string).collect();
        prop_assert_eq!(seen, expected);
    }

    // Only the last element may be empty, and only after a trailing separator.
    #[test]
    fn empty_element_only_at_end(s in path_strategy(), style in style_strategy()) {
        let p = FsPath::with_style(s, style);
        let elements: Vec<FsPath> = p.iter().collect();
        for (i, e) in elements.iter().enumerate() {
            if e.is_empty() {
                prop_assert_eq!(i + 1, elements.len());
            }
        }
    }

    // root-path + relative-path reconstructs the original text.
    #[test]
    fn root_and_relative_partition(s in path_strategy(), style in style_strategy()) {
        let p = FsPath::with_style(s.clone(), style);
        let rebuilt = format!("{}{}", p.root_path(), p.relative_path());
        prop_assert_eq!(rebuilt, s);
    }

    // stem + extension == filename, up to a Windows stream suffix.
    #[test]
    fn stem_and_extension_partition(s in path_strategy(), style in style_strategy()) {
        let p = FsPath::with_style(s, style);
        let joined = format!("{}{}", p.stem(), p.extension());
        prop_assert!(p.filename().as_str().starts_with(&joined));
    }

    // Normalization is idempotent under both styles.
    #[test]
    fn normal_idempotent(s in path_strategy(), style in style_strategy()) {
        let once = FsPath::with_style(s, style).lexically_normal();
        let twice = once.lexically_normal();
        prop_assert_eq!(once.as_str(), twice.as_str());
    }

    // A normalized absolute path never keeps a `..` element.
    #[test]
    fn normal_absolute_has_no_parent_refs(s in path_strategy()) {
        let p = FsPath::posix(format!("/{s}")).lexically_normal();
        prop_assert!(p.iter().all(|e| e.as_str() != ".."));
    }

    // Eq and Ord agree with compare.
    #[test]
    fn ordering_consistent(a in path_strategy(), b in path_strategy(), style in style_strategy()) {
        let (a, b) = (FsPath::with_style(a, style), FsPath::with_style(b, style));
        prop_assert_eq!(a.cmp(&b), a.compare(&b));
        prop_assert_eq!(a == b, a.compare(&b).is_eq());
    }
}
