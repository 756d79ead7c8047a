//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, CopyConfig, DirectoryConfig, StyleSetting};
use super::validator::ConfigValidator;
use crate::fs::options::{CopyForm, CopyOptions, ExistingPolicy, SymlinkPolicy};
use proptest::prelude::*;

fn style_strategy() -> impl Strategy<Value = StyleSetting> {
    prop_oneof![
        Just(StyleSetting::Native),
        Just(StyleSetting::Posix),
        Just(StyleSetting::Windows),
    ]
}

fn copy_strategy() -> impl Strategy<Value = CopyConfig> {
    (
        prop::option::of(prop_oneof![
            Just(ExistingPolicy::Error),
            Just(ExistingPolicy::Skip),
            Just(ExistingPolicy::Overwrite),
            Just(ExistingPolicy::Update),
        ]),
        prop::option::of(prop_oneof![
            Just(SymlinkPolicy::Follow),
            Just(SymlinkPolicy::Copy),
            Just(SymlinkPolicy::Skip),
        ]),
        prop::option::of(prop_oneof![
            Just(CopyForm::Copy),
            Just(CopyForm::DirectoriesOnly),
            Just(CopyForm::CreateSymlinks),
            Just(CopyForm::CreateHardLinks),
        ]),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(existing, symlinks, form, recursive)| CopyConfig {
            existing,
            symlinks,
            form,
            recursive,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(style_strategy()),
        prop::option::of(copy_strategy()),
        prop::option::of((prop::option::of(any::<bool>()), prop::option::of(any::<bool>()))),
        prop::option::of(prop_oneof![
            Just("quiet".to_string()),
            Just("normal".to_string()),
            Just("verbose".to_string()),
        ]),
    )
        .prop_map(|(style, copy, directory, log_mode)| Config {
            style,
            copy,
            directory: directory.map(|(follow, skip)| DirectoryConfig {
                follow_directory_symlink: follow,
                skip_permission_denied: skip,
            }),
            log_mode,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins wherever it sets a value
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.style, high.style.or(low.style));
        prop_assert_eq!(&result.log_mode, if high.log_mode.is_some() { &high.log_mode } else { &low.log_mode });

        let merged = CopyOptions::from(&result);
        if let Some(existing) = high.copy.and_then(|c| c.existing) {
            prop_assert_eq!(merged.existing, existing);
        }
        if let Some(recursive) = high.copy.and_then(|c| c.recursive) {
            prop_assert_eq!(merged.recursive, recursive);
        }
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // Merging is associative
    #[test]
    fn config_merge_associative(a in config_strategy(), b in config_strategy(), c in config_strategy()) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut bc = b;
        ConfigMerger::merge_into(&mut bc, &c);
        let mut right = a;
        ConfigMerger::merge_into(&mut right, &bc);

        prop_assert_eq!(left, right);
    }

    // YAML serialization preserves every field
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }

    // Validation only rejects the two conflicting copy combinations
    #[test]
    fn config_validation_matches_conflicts(config in config_strategy()) {
        let conflict = config.copy.is_some_and(|c| {
            let form = c.form.unwrap_or_default();
            (form == CopyForm::CreateSymlinks && c.recursive == Some(true))
                || (form == CopyForm::CreateHardLinks && c.symlinks == Some(SymlinkPolicy::Copy))
        });
        prop_assert_eq!(ConfigValidator::validate(&config).is_err(), conflict);
    }
}
