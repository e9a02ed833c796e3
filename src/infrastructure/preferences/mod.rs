//! Preferences store adapters

mod json_store;

pub use json_store::{JsonPreferencesStore, PREFERENCES_FILE_NAME};
