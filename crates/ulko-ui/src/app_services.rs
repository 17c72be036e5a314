//! Application services container.
//!
//! `AppServices` is built once at startup and owns everything screens share:
//! the application root, the record store, the weather provider and the
//! record stores built on top of it. Screen models borrow what they need
//! from here instead of reaching for globals.

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use ulko_core::{App, AppContext, Config, KeyValueStore};
use ulko_services::{GardenStore, JournalStore, ProfileStore, SqliteKvStore};
use ulko_weather::WeatherProvider;

use crate::models::{
    AlarmModel, AlarmRingModel, GardenModel, JournalModel, ProfileModel, RingParams, WeatherModel,
};

pub struct AppServices {
    app: Mutex<App>,
    context: Arc<AppContext>,
    store: Arc<dyn KeyValueStore>,
    weather_provider: Arc<WeatherProvider>,
    garden: GardenStore,
    journal: JournalStore,
    profile: ProfileStore,

    /// Parent of every screen's cancellation token
    shutdown_token: CancellationToken,
}

impl AppServices {
    /// Open the on-disk record store from `config` and bring the app up.
    pub fn init(config: Config) -> Result<Arc<Self>> {
        let db_path = config.database_path();
        let store = SqliteKvStore::open(&db_path)
            .with_context(|| format!("Failed to open record store at {}", db_path.display()))?;
        tracing::info!(path = %db_path.display(), "Record store opened");
        Self::with_store(config, Arc::new(store))
    }

    /// Build the services over an existing store.
    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Arc<Self>> {
        let weather_provider = WeatherProvider::new(&config.weather)
            .context("Failed to create weather provider")?;

        let mut app = App::new(config, store.clone());
        app.initialize()?;
        let context = app.context();

        Ok(Arc::new(Self {
            app: Mutex::new(app),
            context,
            garden: GardenStore::new(store.clone()),
            journal: JournalStore::new(store.clone()),
            profile: ProfileStore::new(store.clone()),
            store,
            weather_provider: Arc::new(weather_provider),
            shutdown_token: CancellationToken::new(),
        }))
    }

    pub fn config(&self) -> Arc<Config> {
        self.app.lock().config_handle()
    }

    pub fn context(&self) -> Arc<AppContext> {
        self.context.clone()
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    pub fn weather_provider(&self) -> Arc<WeatherProvider> {
        self.weather_provider.clone()
    }

    pub fn garden_store(&self) -> &GardenStore {
        &self.garden
    }

    pub fn journal_store(&self) -> &JournalStore {
        &self.journal
    }

    pub fn profile_store(&self) -> &ProfileStore {
        &self.profile
    }

    /// Token for one screen; cancelled by the screen or by [`Self::shutdown`].
    pub fn screen_token(&self) -> CancellationToken {
        self.shutdown_token.child_token()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown_token.is_cancelled()
    }

    // =========== Screen models ===========

    pub fn weather_model(self: &Arc<Self>) -> Arc<WeatherModel> {
        Arc::new(WeatherModel::new(self.clone()))
    }

    pub fn garden_model(&self) -> GardenModel {
        GardenModel::new(self.garden.clone(), self.profile.clone())
    }

    pub fn journal_model(&self) -> JournalModel {
        JournalModel::new(self.journal.clone())
    }

    pub fn profile_model(&self) -> ProfileModel {
        ProfileModel::new(self.profile.clone())
    }

    pub fn alarm_model(&self) -> AlarmModel {
        AlarmModel::default()
    }

    pub fn alarm_ring_model(&self, params: &RingParams) -> AlarmRingModel {
        AlarmRingModel::from_params(params)
    }

    /// Cancel every screen's work and end the app lifecycle.
    pub fn shutdown(&self) -> Result<()> {
        tracing::info!("AppServices shutdown initiated");
        self.shutdown_token.cancel();
        self.app.lock().shutdown()?;
        tracing::info!("AppServices shutdown complete");
        Ok(())
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices")
            .field("context", &self.context)
            .field("weather_base_url", &self.weather_provider.base_url())
            .field("shut_down", &self.is_shut_down())
            .finish()
    }
}
