use crate::forecast::{DayForecast, ForecastResponse};
use crate::types::WeatherError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use ulko_core::WeatherConfig;

const HOURLY_FIELDS: &str = "temperature_2m,weathercode";
const DAILY_FIELDS: &str = "sunrise,sunset";

/// Open-Meteo client for one fixed forecast point.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    latitude: f64,
    longitude: f64,
    timezone: String,
}

impl WeatherProvider {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            latitude: config.latitude,
            longitude: config.longitude,
            timezone: config.timezone.clone(),
        })
    }

    /// Point the provider at another server (mock servers in tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch today's forecast. Returns `Cancelled` as soon as `cancel`
    /// fires; the in-flight request is dropped.
    #[tracing::instrument(skip_all, fields(lat = self.latitude, lon = self.longitude))]
    pub async fn fetch_today(&self, cancel: &CancellationToken) -> Result<DayForecast, WeatherError> {
        if cancel.is_cancelled() {
            return Err(WeatherError::Cancelled);
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Forecast fetch cancelled");
                Err(WeatherError::Cancelled)
            }
            result = self.request() => result,
        }
    }

    async fn request(&self) -> Result<DayForecast, WeatherError> {
        let url = format!("{}/forecast", self.base_url);
        let latitude = self.latitude.to_string();
        let longitude = self.longitude.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("hourly", HOURLY_FIELDS),
                ("daily", DAILY_FIELDS),
                ("timezone", self.timezone.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Forecast request failed");
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        let forecast = DayForecast::from(parsed);
        tracing::debug!(
            samples = forecast.samples.len(),
            rows = forecast.rows.len(),
            "Forecast received"
        );
        Ok(forecast)
    }
}
