//! Record stores over a real SQLite file.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use tempfile::tempdir;
use ulko_core::{AppContext, ColorScheme, KeyValueStore, Language, LANGUAGE_KEY};
use ulko_services::garden::GARDEN_KEY;
use ulko_services::journal::JOURNAL_KEY;
use ulko_services::{GardenStore, JournalStore, ProfileStore, SqliteKvStore};

#[test]
fn test_records_survive_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("ulkohalytin.db");

    {
        let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteKvStore::open(&db_path).unwrap());
        GardenStore::new(kv.clone())
            .add("Kielo", "Convallaria majalis")
            .unwrap();
        JournalStore::new(kv.clone()).add("Aamulenkki").unwrap();
        ProfileStore::new(kv.clone()).set_avatar_index(2).unwrap();

        let ctx = AppContext::new(kv, Language::En, ColorScheme::Light);
        ctx.set_language(Language::Fi).unwrap();
    }

    let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteKvStore::open(&db_path).unwrap());

    let species = GardenStore::new(kv.clone()).species();
    assert_eq!(species.len(), 1);
    assert_eq!(species[0].scientific_name, "Convallaria majalis");

    let entries = JournalStore::new(kv.clone()).entries();
    assert_eq!(entries[0].text, "Aamulenkki");

    assert_eq!(ProfileStore::new(kv.clone()).avatar_index(), 2);

    let ctx = AppContext::new(kv, Language::En, ColorScheme::Light);
    ctx.init();
    assert_eq!(ctx.language(), Language::Fi);
}

#[test]
fn test_malformed_rows_read_as_empty() {
    let dir = tempdir().unwrap();
    let kv = Arc::new(SqliteKvStore::open(&dir.path().join("bad.db")).unwrap());
    kv.set(GARDEN_KEY, "{\"broken\":").unwrap();
    kv.set(JOURNAL_KEY, "null").unwrap();
    kv.set(LANGUAGE_KEY, "de").unwrap();
    kv.set("profile_avatar_index", "lots").unwrap();

    assert!(GardenStore::new(kv.clone()).species().is_empty());
    assert!(JournalStore::new(kv.clone()).entries().is_empty());
    assert_eq!(ProfileStore::new(kv.clone()).avatar_index(), 0);

    let ctx = AppContext::new(kv.clone(), Language::En, ColorScheme::Light);
    ctx.init();
    assert_eq!(ctx.language(), Language::En);

    // Writing over a malformed record starts a fresh list.
    let entries = JournalStore::new(kv).add("uusi").unwrap();
    assert_eq!(entries.len(), 1);
}
