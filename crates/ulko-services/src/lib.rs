//! Local records and built-in content for Ulkohälytin
//!
//! Garden, journal and profile records are whole JSON values kept in a
//! [`ulko_core::KeyValueStore`]; [`SqliteKvStore`] is the on-disk backend.

pub mod alarm;
pub mod garden;
pub mod journal;
pub mod kv_store;
pub mod profile;
pub mod record;
pub mod trivia;

pub use alarm::{format_sound_label, AlarmSettings, SOUND_OPTIONS};
pub use garden::{GardenPlot, GardenSpecies, GardenStore, GrowthStage};
pub use journal::{JournalEntry, JournalStore};
pub use kv_store::SqliteKvStore;
pub use profile::{avatar_for, Avatar, ProfileStore, AVATARS};
pub use trivia::{random_trivia, TriviaCategory, TriviaItem, TriviaPrompt};
