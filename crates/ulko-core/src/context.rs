//! Application-wide UI context: language and color scheme.
//!
//! One `AppContext` is created by the application root and handed to every
//! screen model by reference. It owns the language preference, persisted
//! under [`LANGUAGE_KEY`], and exposes the translation helpers screens use.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StorageError;
use crate::i18n::{self, Language, PartnerService, ServiceId, TranslationKey};
use crate::store::KeyValueStore;

/// Store key of the saved language preference.
pub const LANGUAGE_KEY: &str = "app_language";

/// Light or dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn text(self) -> &'static str {
        match self {
            ColorScheme::Light => "#11181C",
            ColorScheme::Dark => "#ECEDEE",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ColorScheme::Light => "#fff",
            ColorScheme::Dark => "#151718",
        }
    }

    pub fn tint(self) -> &'static str {
        match self {
            ColorScheme::Light => "#0a7ea4",
            ColorScheme::Dark => "#fff",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ColorScheme::Light => "#687076",
            ColorScheme::Dark => "#9BA1A6",
        }
    }
}

pub struct AppContext {
    store: Arc<dyn KeyValueStore>,
    language: RwLock<Language>,
    color_scheme: RwLock<ColorScheme>,
    active: RwLock<bool>,
}

impl AppContext {
    pub fn new(store: Arc<dyn KeyValueStore>, language: Language, color_scheme: ColorScheme) -> Self {
        Self {
            store,
            language: RwLock::new(language),
            color_scheme: RwLock::new(color_scheme),
            active: RwLock::new(false),
        }
    }

    /// Start the context lifecycle: restore the saved language, if any.
    ///
    /// Unreadable or unknown stored values leave the current language as is.
    pub fn init(&self) {
        match self.store.get(LANGUAGE_KEY) {
            Ok(Some(saved)) => match Language::from_code(&saved) {
                Some(language) => {
                    *self.language.write() = language;
                    tracing::debug!(%language, "Restored saved language");
                }
                None => tracing::warn!(value = %saved, "Ignoring unknown saved language"),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to read saved language: {}", e),
        }
        *self.active.write() = true;
    }

    /// End the context lifecycle.
    pub fn teardown(&self) {
        *self.active.write() = false;
        tracing::debug!("App context torn down");
    }

    pub fn is_active(&self) -> bool {
        *self.active.read()
    }

    pub fn language(&self) -> Language {
        *self.language.read()
    }

    /// Switch language and persist the choice.
    ///
    /// The in-memory language changes even if persisting fails.
    pub fn set_language(&self, language: Language) -> Result<(), StorageError> {
        *self.language.write() = language;
        self.store.set(LANGUAGE_KEY, language.code())
    }

    pub fn color_scheme(&self) -> ColorScheme {
        *self.color_scheme.read()
    }

    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        *self.color_scheme.write() = scheme;
    }

    /// Translate `key` in the current language.
    pub fn t(&self, key: TranslationKey) -> &'static str {
        i18n::translate(self.language(), key)
    }

    /// Translate a key given as a string; unknown keys come back verbatim.
    pub fn t_raw<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate_raw(self.language(), key)
    }

    pub fn service(&self, id: &str) -> PartnerService {
        i18n::partner_service(self.language(), id)
    }

    pub fn service_ids(&self) -> [ServiceId; 3] {
        ServiceId::ORDER
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("language", &self.language())
            .field("color_scheme", &self.color_scheme())
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use crate::store::MemoryStore;

    fn context_with(store: Arc<MemoryStore>) -> AppContext {
        AppContext::new(store, Language::En, ColorScheme::Light)
    }

    #[test]
    fn test_init_restores_saved_language() {
        let store = Arc::new(MemoryStore::new());
        store.set(LANGUAGE_KEY, "fi").unwrap();

        let ctx = context_with(store);
        assert_eq!(ctx.language(), Language::En);
        ctx.init();
        assert_eq!(ctx.language(), Language::Fi);
        assert!(ctx.is_active());
        assert_eq!(ctx.t(TranslationKey::Sunrise), "Auringonnousu");
    }

    #[test]
    fn test_init_ignores_unknown_language() {
        let store = Arc::new(MemoryStore::new());
        store.set(LANGUAGE_KEY, "sv").unwrap();

        let ctx = context_with(store);
        ctx.init();
        assert_eq!(ctx.language(), Language::En);
    }

    #[test]
    fn test_set_language_persists() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context_with(store.clone());
        ctx.init();

        ctx.set_language(Language::Fi).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("fi"));

        let restored = context_with(store);
        restored.init();
        assert_eq!(restored.language(), Language::Fi);
    }

    #[test]
    fn test_teardown_deactivates() {
        let ctx = context_with(Arc::new(MemoryStore::new()));
        ctx.init();
        ctx.teardown();
        assert!(!ctx.is_active());
    }

    #[test]
    fn test_raw_lookup_fallback() {
        let ctx = context_with(Arc::new(MemoryStore::new()));
        assert_eq!(ctx.t_raw("weatherFog"), "Fog");
        assert_eq!(ctx.t_raw("weatherHail"), "weatherHail");
    }
}
