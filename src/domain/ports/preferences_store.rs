//! Preferences store port - remembered answers across runs.

use crate::domain::entities::PersistedPreferences;

/// Durable key/value cache of the operator's previous answers.
///
/// Neither operation fails: a missing or unreadable record loads as empty,
/// and a failed write is reported as a warning by the implementation.
pub trait PreferencesStore {
    fn load(&self) -> PersistedPreferences;

    /// Shallow-merge `update` over the stored record and write it back.
    fn save(&self, update: &PersistedPreferences);
}

impl<T: PreferencesStore + ?Sized> PreferencesStore for &T {
    fn load(&self) -> PersistedPreferences {
        (**self).load()
    }

    fn save(&self, update: &PersistedPreferences) {
        (**self).save(update)
    }
}
