//! Whole-record JSON lists stored under a single key.

use serde::de::DeserializeOwned;
use serde::Serialize;
use ulko_core::{KeyValueStore, StorageError};

/// Read the list stored under `key`.
///
/// A missing key, an unreadable store or a payload that is not a JSON array
/// all read as an empty list. Elements that are not a `T` are skipped.
pub fn read_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, "Failed to read record: {}", e);
            return Vec::new();
        }
    };

    if raw.is_empty() {
        return Vec::new();
    }

    let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(key, "Ignoring malformed record: {}", e);
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(key, index, "Skipping malformed entry: {}", e);
                None
            }
        })
        .collect()
}

/// Replace the list stored under `key`.
pub fn write_list<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)
}

/// Put `item` at the front of the list under `key` and save it.
/// Returns the updated list.
pub fn prepend<T>(store: &dyn KeyValueStore, key: &str, item: T) -> Result<Vec<T>, StorageError>
where
    T: Serialize + DeserializeOwned,
{
    let mut items = read_list::<T>(store, key);
    items.insert(0, item);
    write_list(store, key, &items)?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use ulko_core::MemoryStore;

    #[test]
    fn test_missing_and_empty_read_as_empty() {
        let store = MemoryStore::new();
        assert!(read_list::<String>(&store, "k").is_empty());

        store.set("k", "").unwrap();
        assert!(read_list::<String>(&store, "k").is_empty());
    }

    #[test]
    fn test_malformed_reads_as_empty() {
        let store = MemoryStore::new();
        for raw in ["{not json", "{\"a\": 1}", "42", "[1, 2]"] {
            store.set("k", raw).unwrap();
            assert!(read_list::<String>(&store, "k").is_empty(), "payload {}", raw);
        }
    }

    #[test]
    fn test_bad_entries_skipped_good_ones_kept() {
        let store = MemoryStore::new();
        store.set("k", r#"["kept", 7, null, "also kept"]"#).unwrap();
        assert_eq!(read_list::<String>(&store, "k"), vec!["kept", "also kept"]);

        let items = prepend(&store, "k", "new".to_string()).unwrap();
        assert_eq!(items, vec!["new", "kept", "also kept"]);
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let store = MemoryStore::new();
        prepend(&store, "k", "first".to_string()).unwrap();
        let items = prepend(&store, "k", "second".to_string()).unwrap();
        assert_eq!(items, vec!["second", "first"]);
        assert_eq!(read_list::<String>(&store, "k"), items);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[\"second\",\"first\"]"));
    }
}
