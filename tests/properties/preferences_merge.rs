//! Property tests for merging remembered answers.

use proptest::prelude::*;

use lambda_layer_maker::PersistedPreferences;

fn field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z0-9./-]{0,12}")
}

fn preferences() -> impl Strategy<Value = PersistedPreferences> {
    (field(), field(), field(), field(), field(), field(), field()).prop_map(
        |(region, layer_name, description, runtime, layer_file_path, bucket, key)| {
            PersistedPreferences {
                region,
                layer_name,
                description,
                runtime,
                layer_file_path,
                bucket,
                key,
                ..PersistedPreferences::default()
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging an empty update changes nothing.
    #[test]
    fn property_empty_update_is_identity(base in preferences()) {
        prop_assert_eq!(base.clone().merged_with(PersistedPreferences::default()), base);
    }

    /// PROPERTY: fields set in the update win; unset fields keep the stored value.
    #[test]
    fn property_update_fields_win(base in preferences(), update in preferences()) {
        let merged = base.clone().merged_with(update.clone());
        prop_assert_eq!(merged.region.clone(), update.region.clone().or(base.region.clone()));
        prop_assert_eq!(merged.layer_name.clone(), update.layer_name.clone().or(base.layer_name.clone()));
        prop_assert_eq!(merged.description.clone(), update.description.clone().or(base.description.clone()));
        prop_assert_eq!(merged.runtime.clone(), update.runtime.clone().or(base.runtime.clone()));
        prop_assert_eq!(merged.layer_file_path.clone(), update.layer_file_path.clone().or(base.layer_file_path.clone()));
        prop_assert_eq!(merged.bucket.clone(), update.bucket.clone().or(base.bucket.clone()));
        prop_assert_eq!(merged.key, update.key.or(base.key));
    }

    /// PROPERTY: applying the same update twice equals applying it once.
    #[test]
    fn property_merge_is_idempotent(base in preferences(), update in preferences()) {
        let once = base.merged_with(update.clone());
        let twice = once.clone().merged_with(update);
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: the JSON file form keeps every field the merge produced.
    #[test]
    fn property_merged_record_survives_json(base in preferences(), update in preferences()) {
        let merged = base.merged_with(update);
        let json = serde_json::to_string_pretty(&merged).unwrap();
        let reloaded: PersistedPreferences = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(reloaded, merged);
    }
}
