use indexmap::IndexMap;

use crate::dao::{PreferenceStore, storage::StorageResult};

/// Preference store kept entirely in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: IndexMap<String, String>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with the provided key/value pairs.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for InMemoryStore {
    fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::storage::StorageError;

    #[test]
    fn missing_key_reads_as_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get_string("Username").unwrap(), None);
        assert_eq!(store.get_int("SoundOn").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = InMemoryStore::new();
        store.set_string("FirstUser", "Bo 1 10 5.00").unwrap();
        store.set_string("FirstUser", "Cy 1 12 4.00").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get_string("FirstUser").unwrap().as_deref(),
            Some("Cy 1 12 4.00")
        );
    }

    #[test]
    fn integers_are_stored_as_decimal_strings() {
        let mut store = InMemoryStore::new();
        store.set_int("SoundOn", 1).unwrap();

        assert_eq!(store.get_string("SoundOn").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get_int("SoundOn").unwrap(), Some(1));
    }

    #[test]
    fn non_numeric_integer_is_reported() {
        let store = InMemoryStore::with_values([("SoundOn", "yes")]);
        let err = store.get_int("SoundOn").unwrap_err();
        assert!(matches!(err, StorageError::NotAnInteger { ref key, .. } if key == "SoundOn"));
    }
}
