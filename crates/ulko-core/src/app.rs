use anyhow::Result;
use std::sync::Arc;

use crate::context::{AppContext, ColorScheme};
use crate::store::KeyValueStore;
use crate::Config;

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
    context: Arc<AppContext>,
}

impl App {
    /// Create a new application instance over the given record store
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let scheme = if config.ui.dark_mode {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        let context = Arc::new(AppContext::new(store, config.ui.language, scheme));

        Self {
            config: Arc::new(config),
            context,
        }
    }

    /// Bring the application root up: restores UI preferences.
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!("Initializing application");

        self.context.init();

        tracing::info!(
            language = %self.context.language(),
            "Application initialized successfully"
        );
        Ok(())
    }

    /// Shutdown the application root
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        self.context.teardown();
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared config handle for services built after startup
    pub fn config_handle(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// The context screens receive
    pub fn context(&self) -> Arc<AppContext> {
        self.context.clone()
    }
}
