//! Player preferences edited from the start menu.

use tracing::warn;

use crate::dao::{PreferenceStore, keys, storage::StorageResult};

/// Store the name the next session will record its result under.
pub fn save_username(store: &mut dyn PreferenceStore, username: &str) -> StorageResult<()> {
    store.set_string(keys::USERNAME, username.trim())
}

/// Turn sound on or off for the following sessions.
pub fn set_sound_on(store: &mut dyn PreferenceStore, on: bool) -> StorageResult<()> {
    store.set_int(keys::SOUND_ON, i64::from(on))
}

/// Whether sound is enabled. Only an explicit `1` enables it.
pub fn sound_on(store: &dyn PreferenceStore) -> bool {
    match store.get_int(keys::SOUND_ON) {
        Ok(value) => value == Some(1),
        Err(err) => {
            warn!(error = %err, "unreadable sound setting; keeping sound off");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::memory::InMemoryStore;

    #[test]
    fn sound_is_off_until_enabled() {
        let mut store = InMemoryStore::new();
        assert!(!sound_on(&store));

        set_sound_on(&mut store, true).unwrap();
        assert_eq!(store.get_string(keys::SOUND_ON).unwrap().as_deref(), Some("1"));
        assert!(sound_on(&store));

        set_sound_on(&mut store, false).unwrap();
        assert_eq!(store.get_string(keys::SOUND_ON).unwrap().as_deref(), Some("0"));
        assert!(!sound_on(&store));
    }

    #[test]
    fn garbage_sound_value_reads_as_off() {
        let store = InMemoryStore::with_values([(keys::SOUND_ON, "loud")]);
        assert!(!sound_on(&store));
    }

    #[test]
    fn username_is_trimmed() {
        let mut store = InMemoryStore::new();
        save_username(&mut store, "  Ann ").unwrap();
        assert_eq!(store.get_string(keys::USERNAME).unwrap().as_deref(), Some("Ann"));
    }
}
