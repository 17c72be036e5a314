use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;

use ulko_core::{AppContext, AppError, TranslationKey};
use ulko_weather::summary::Period;
use ulko_weather::{DayForecast, HourlyRow, WeatherProvider};

use crate::app_services::AppServices;

#[derive(Debug, Default)]
struct WeatherState {
    loading: bool,
    /// Bumped by every refresh; only the latest one may clear `loading`
    refresh_seq: u64,
    has_data: bool,
    error_message: Option<String>,
    forecast: DayForecast,
}

/// Outcome of one [`WeatherModel::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Updated,
    Failed,
    /// The screen went away first; nothing was applied.
    Abandoned,
}

/// State behind the weather forecast screen.
///
/// `mount` hands out a fresh token for the screen, `refresh` fetches under
/// it, and `unmount` cancels it so a fetch still in flight is dropped
/// without touching the screen state.
pub struct WeatherModel {
    context: Arc<AppContext>,
    provider: Arc<WeatherProvider>,
    services: Arc<AppServices>,
    token: RwLock<Option<CancellationToken>>,
    state: RwLock<WeatherState>,
}

impl WeatherModel {
    pub fn new(services: Arc<AppServices>) -> Self {
        Self {
            context: services.context(),
            provider: services.weather_provider(),
            services,
            token: RwLock::new(None),
            state: RwLock::new(WeatherState::default()),
        }
    }

    /// Screen became visible. Replaces (and cancels) any previous token.
    pub fn mount(&self) -> CancellationToken {
        let token = self.services.screen_token();
        if let Some(old) = self.token.write().replace(token.clone()) {
            old.cancel();
        }
        tracing::debug!("Weather screen mounted");
        token
    }

    /// Screen went away. Any in-flight fetch is abandoned.
    pub fn unmount(&self) {
        if let Some(token) = self.token.write().take() {
            token.cancel();
            tracing::debug!("Weather screen unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.token
            .read()
            .as_ref()
            .is_some_and(|t| !t.is_cancelled())
    }

    /// Fetch today's forecast and apply it.
    ///
    /// On failure the localized error text is set and earlier rows stay.
    pub async fn refresh(&self) -> RefreshOutcome {
        let token = match self.token.read().clone() {
            Some(token) if !token.is_cancelled() => token,
            _ => {
                tracing::debug!("Refresh requested while unmounted");
                return RefreshOutcome::Abandoned;
            }
        };

        let seq = {
            let mut state = self.state.write();
            state.refresh_seq += 1;
            state.loading = true;
            state.error_message = None;
            state.refresh_seq
        };

        let result = self.provider.fetch_today(&token).await;

        let mut state = self.state.write();
        if state.refresh_seq == seq {
            state.loading = false;
        }
        if token.is_cancelled() {
            tracing::debug!("Dropping forecast for unmounted screen");
            return RefreshOutcome::Abandoned;
        }

        match result {
            Ok(forecast) => {
                tracing::info!(rows = forecast.rows.len(), "Weather data fetched successfully");
                state.forecast = forecast;
                state.has_data = true;
                RefreshOutcome::Updated
            }
            Err(e) => {
                let app_error: AppError = e.into();
                if app_error.is_cancelled() {
                    return RefreshOutcome::Abandoned;
                }
                tracing::error!("Failed to fetch weather: {}", app_error);
                let key = app_error.message_key().unwrap_or(TranslationKey::WeatherError);
                state.error_message = Some(self.context.t(key).to_string());
                RefreshOutcome::Failed
            }
        }
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn has_data(&self) -> bool {
        self.state.read().has_data
    }

    /// Localized error text of the last failed refresh.
    pub fn error_message(&self) -> Option<String> {
        self.state.read().error_message.clone()
    }

    pub fn forecast(&self) -> DayForecast {
        self.state.read().forecast.clone()
    }

    pub fn title(&self) -> &'static str {
        self.context.t(TranslationKey::WeatherTitle)
    }

    pub fn location(&self) -> &'static str {
        self.context.t(TranslationKey::WeatherLocation)
    }

    pub fn sunrise(&self) -> String {
        self.state.read().forecast.sunrise.clone()
    }

    pub fn sunset(&self) -> String {
        self.state.read().forecast.sunset.clone()
    }

    /// Always 8 rows.
    pub fn display_rows(&self) -> Vec<HourlyRow> {
        self.state.read().forecast.display_rows()
    }

    /// Short condition label under a slot.
    pub fn slot_label(&self, row: &HourlyRow) -> &'static str {
        self.context.t(row.condition.translation_key())
    }

    pub fn summary_text(&self) -> String {
        self.state.read().forecast.summary_text(self.context.language())
    }

    /// `(title, sentence)` for the four period cards.
    pub fn period_cards(&self, today: NaiveDate) -> Vec<(&'static str, String)> {
        let texts = self
            .state
            .read()
            .forecast
            .period_texts(self.context.language(), today);
        texts
            .into_iter()
            .map(|(period, text): (Period, String)| (self.context.t(period.title_key()), text))
            .collect()
    }
}

impl std::fmt::Debug for WeatherModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("WeatherModel")
            .field("mounted", &self.is_mounted())
            .field("loading", &state.loading)
            .field("rows", &state.forecast.rows.len())
            .field("error", &state.error_message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use ulko_core::{Config, Language, MemoryStore};

    fn services() -> Arc<AppServices> {
        let mut config = Config::default();
        // Nothing listens here; requests fail fast.
        config.weather.api_base_url = "http://127.0.0.1:9".to_string();
        config.weather.request_timeout_secs = 2;
        AppServices::with_store(config, Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_initial_state_shows_placeholders() {
        let model = services().weather_model();
        assert!(!model.loading());
        assert!(!model.has_data());
        assert_eq!(model.sunrise(), "--:--");
        assert_eq!(model.display_rows().len(), 8);
        assert_eq!(model.summary_text(), "");

        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let cards = model.period_cards(today);
        assert_eq!(cards[0], ("Morning", "Loading weather...".to_string()));
        assert_eq!(cards[3].0, "Night");
    }

    #[test]
    fn test_mount_unmount() {
        let model = services().weather_model();
        let first = model.mount();
        assert!(model.is_mounted());

        let second = model.mount();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());

        model.unmount();
        assert!(second.is_cancelled());
        assert!(!model.is_mounted());
    }

    #[tokio::test]
    async fn test_refresh_while_unmounted_is_abandoned() {
        let model = services().weather_model();
        assert_eq!(model.refresh().await, RefreshOutcome::Abandoned);
        assert!(!model.loading());
    }

    #[tokio::test]
    async fn test_connection_failure_sets_localized_error() {
        let services = services();
        services.context().set_language(Language::Fi).unwrap();
        let model = services.weather_model();
        model.mount();

        assert_eq!(model.refresh().await, RefreshOutcome::Failed);
        assert!(!model.loading());
        assert_eq!(model.error_message().as_deref(), Some("Säätietoja ei voitu hakea."));
        assert_eq!(model.display_rows().len(), 8);
    }
}
