//! JSON preferences store
//!
//! Remembered answers live in `~/.lambda-layer-maker.json`. The file is
//! advisory: a missing or corrupt file loads as empty, and a failed write
//! only logs a warning. Writes go through a symlinked file to its target and
//! keep an existing file's permissions.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::entities::PersistedPreferences;
use crate::domain::ports::PreferencesStore;
use crate::error::StoreError;
use crate::infrastructure::fs::layer_maker_home_dir;

pub const PREFERENCES_FILE_NAME: &str = ".lambda-layer-maker.json";

#[derive(Debug, Clone)]
pub struct JsonPreferencesStore {
    path: PathBuf,
}

impl JsonPreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.lambda-layer-maker.json`.
    ///
    /// Falls back to the working directory when no home can be resolved.
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        layer_maker_home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(PREFERENCES_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge `update` into the stored record and write it, returning any error.
    pub fn try_save(&self, update: &PersistedPreferences) -> Result<(), StoreError> {
        let merged = self.load().merged_with(update.clone());
        let mut json = serde_json::to_string_pretty(&merged)?;
        json.push('\n');

        let target = self.write_target();
        let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        if let Some(permissions) = permissions {
            tmp.as_file().set_permissions(permissions)?;
        }
        tmp.persist(&target).map_err(|e| StoreError::Persist {
            path: target.clone(),
            source: e.error,
        })?;

        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }

    /// The file a save replaces: the symlink target when the path is a link
    fn write_target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn read(&self) -> Result<PersistedPreferences, StoreError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferencesStore for JsonPreferencesStore {
    fn load(&self) -> PersistedPreferences {
        match self.read() {
            Ok(prefs) => prefs,
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                PersistedPreferences::default()
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unreadable preferences");
                PersistedPreferences::default()
            }
        }
    }

    fn save(&self, update: &PersistedPreferences) {
        if let Err(e) = self.try_save(update) {
            warn!(path = %self.path.display(), error = %e, "failed to save preferences");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> JsonPreferencesStore {
        JsonPreferencesStore::new(dir.join(PREFERENCES_FILE_NAME))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        assert!(store_in(dir.path()).load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn save_merges_with_existing_record() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&PersistedPreferences::new().with_region("us-west-2"));
        store.save(&PersistedPreferences::new().with_bucket("layers").with_key("deps.zip"));

        let loaded = store.load();
        assert_eq!(loaded.region.as_deref(), Some("us-west-2"));
        assert_eq!(loaded.bucket.as_deref(), Some("layers"));
        assert_eq!(loaded.key.as_deref(), Some("deps.zip"));
    }

    #[test]
    fn file_is_pretty_printed_camel_case() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        let update = PersistedPreferences {
            layer_name: Some("deps".to_string()),
            ..PersistedPreferences::default()
        };

        store.try_save(&update).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{\n  \"layerName\": \"deps\"\n}\n");
    }

    #[test]
    fn unknown_keys_are_kept() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), r#"{"profile":"dev","region":"eu-west-1"}"#).unwrap();

        store.save(&PersistedPreferences::new().with_region("us-east-1"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(json["profile"], "dev");
        assert_eq!(json["region"], "us-east-1");
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let dir = tempdir().unwrap();
        let store = JsonPreferencesStore::new(dir.path().join("missing/dir/prefs.json"));

        assert!(store.try_save(&PersistedPreferences::new().with_key("k")).is_err());
        store.save(&PersistedPreferences::new().with_key("k"));
        assert!(store.load().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn save_writes_through_symlink_and_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dotfiles = dir.path().join("dotfiles");
        fs::create_dir(&dotfiles).unwrap();
        let real = dotfiles.join("layer-maker.json");
        fs::write(&real, r#"{"region":"eu-west-1"}"#).unwrap();
        fs::set_permissions(&real, fs::Permissions::from_mode(0o644)).unwrap();
        let store = store_in(dir.path());
        std::os::unix::fs::symlink(&real, store.path()).unwrap();

        store.try_save(&PersistedPreferences::new().with_bucket("layers")).unwrap();

        assert!(fs::symlink_metadata(store.path()).unwrap().file_type().is_symlink());
        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&real).unwrap()).unwrap();
        assert_eq!(saved["region"], "eu-west-1");
        assert_eq!(saved["bucket"], "layers");
        let mode = fs::metadata(&real).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
