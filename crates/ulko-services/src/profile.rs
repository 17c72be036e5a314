use std::sync::Arc;
use ulko_core::{KeyValueStore, StorageError};

pub const AVATAR_KEY: &str = "profile_avatar_index";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub emoji: &'static str,
    pub label: &'static str,
    /// Background of the avatar circle
    pub color: &'static str,
}

pub static AVATARS: [Avatar; 6] = [
    Avatar { emoji: "👩‍🌾", label: "Gardener", color: "#F2D7C5" },
    Avatar { emoji: "🧑‍🔬", label: "Scientist", color: "#D6E8F5" },
    Avatar { emoji: "🧑‍🎨", label: "Artist", color: "#EAD6F5" },
    Avatar { emoji: "🧑‍💻", label: "Coder", color: "#D6F5E4" },
    Avatar { emoji: "🧑‍🏫", label: "Teacher", color: "#F5E5D6" },
    Avatar { emoji: "🧑‍🚴", label: "Cyclist", color: "#E2F0C9" },
];

/// Avatar for a stored index; anything past the table shows the last one.
pub fn avatar_for(index: usize) -> &'static Avatar {
    &AVATARS[index.min(AVATARS.len() - 1)]
}

/// Parse a stored avatar index. Missing, non-numeric and negative values
/// are 0; fractional values are truncated.
pub fn parse_avatar_index(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => n as usize,
        _ => {
            tracing::warn!(value = raw, "Ignoring invalid avatar index");
            0
        }
    }
}

#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn avatar_index(&self) -> usize {
        match self.store.get(AVATAR_KEY) {
            Ok(raw) => parse_avatar_index(raw.as_deref()),
            Err(e) => {
                tracing::warn!("Failed to read avatar index: {}", e);
                0
            }
        }
    }

    pub fn set_avatar_index(&self, index: usize) -> Result<(), StorageError> {
        self.store.set(AVATAR_KEY, &index.to_string())?;
        tracing::debug!(index, "Avatar saved");
        Ok(())
    }

    pub fn avatar(&self) -> &'static Avatar {
        avatar_for(self.avatar_index())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use ulko_core::MemoryStore;

    #[test]
    fn test_parse_avatar_index() {
        assert_eq!(parse_avatar_index(None), 0);
        assert_eq!(parse_avatar_index(Some("")), 0);
        assert_eq!(parse_avatar_index(Some("4")), 4);
        assert_eq!(parse_avatar_index(Some("2.0")), 2);
        assert_eq!(parse_avatar_index(Some("abc")), 0);
        assert_eq!(parse_avatar_index(Some("-1")), 0);
        assert_eq!(parse_avatar_index(Some("NaN")), 0);
    }

    #[test]
    fn test_high_index_shows_cyclist() {
        assert_eq!(avatar_for(0).label, "Gardener");
        assert_eq!(avatar_for(5).label, "Cyclist");
        assert_eq!(avatar_for(42).emoji, "🧑‍🚴");
    }

    #[test]
    fn test_round_trip() {
        let kv = Arc::new(MemoryStore::new());
        let profile = ProfileStore::new(kv.clone());
        assert_eq!(profile.avatar_index(), 0);

        profile.set_avatar_index(3).unwrap();
        assert_eq!(kv.get(AVATAR_KEY).unwrap().as_deref(), Some("3"));
        assert_eq!(profile.avatar_index(), 3);
        assert_eq!(profile.avatar().label, "Coder");
    }
}
