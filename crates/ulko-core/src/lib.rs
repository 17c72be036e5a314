pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod store;

pub use app::App;
pub use config::{Config, StorageConfig, UiConfig, ValidationResult, WeatherConfig};
pub use context::{AppContext, ColorScheme, LANGUAGE_KEY};
pub use error::{AppError, NetworkError, StorageError, WeatherError};
pub use i18n::{Language, PartnerService, ServiceId, TranslationKey};
pub use store::{KeyValueStore, MemoryStore};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("Ulkohälytin core initialized");
    Ok(())
}
