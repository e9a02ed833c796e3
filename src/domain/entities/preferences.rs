//! Persisted preferences entity
//!
//! The operator's last answers, used as prompt defaults on the next run.
//! Advisory only: every field can be overridden interactively.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat record of remembered answers.
///
/// Field names serialize in camelCase (`layerName`, `layerFilePath`). Keys
/// this version does not know are kept in `extra` and written back on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PersistedPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge: fields set in `update` win, unset fields are retained.
    pub fn merged_with(mut self, update: PersistedPreferences) -> Self {
        fn take(slot: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *slot = value;
            }
        }

        take(&mut self.region, update.region);
        take(&mut self.layer_name, update.layer_name);
        take(&mut self.description, update.description);
        take(&mut self.runtime, update.runtime);
        take(&mut self.layer_file_path, update.layer_file_path);
        take(&mut self.bucket, update.bucket);
        take(&mut self.key, update.key);
        self.extra.extend(update.extra);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_fields_not_in_update() {
        let stored = PersistedPreferences::new().with_region("eu-west-1");
        let merged = stored.merged_with(PersistedPreferences::new().with_bucket("layers"));

        assert_eq!(merged.region.as_deref(), Some("eu-west-1"));
        assert_eq!(merged.bucket.as_deref(), Some("layers"));
    }

    #[test]
    fn merge_update_wins() {
        let stored = PersistedPreferences::new().with_region("eu-west-1");
        let merged = stored.merged_with(PersistedPreferences::new().with_region("us-east-2"));

        assert_eq!(merged.region.as_deref(), Some("us-east-2"));
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let prefs: PersistedPreferences = serde_json::from_str(
            r#"{"region":"us-west-2","layerName":"deps","layerFilePath":"/tmp/a.zip"}"#,
        )
        .unwrap();

        assert_eq!(prefs.layer_name.as_deref(), Some("deps"));
        assert_eq!(prefs.layer_file_path.as_deref(), Some("/tmp/a.zip"));
        assert!(prefs.extra.is_empty());
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let prefs: PersistedPreferences =
            serde_json::from_str(r#"{"key":"layer.zip","profile":"dev"}"#).unwrap();
        let json = serde_json::to_value(&prefs).unwrap();

        assert_eq!(json["profile"], "dev");
        assert_eq!(json["key"], "layer.zip");
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let json = serde_json::to_string(&PersistedPreferences::new().with_key("k")).unwrap();
        assert_eq!(json, r#"{"key":"k"}"#);
    }

    #[test]
    fn default_is_empty() {
        assert!(PersistedPreferences::default().is_empty());
        assert!(!PersistedPreferences::new().with_key("k").is_empty());
    }
}
