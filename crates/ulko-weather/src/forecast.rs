//! Open-Meteo forecast payload and the day view built from it.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use ulko_core::Language;

use crate::slots::{self, format_time, HourlyRow, PLACEHOLDER_TIME};
use crate::summary::{self, Period, WindowSummary};
use crate::types::HourlySample;

/// Raw `/forecast` response. Every field may be absent or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub hourly: Option<HourlyBlock>,
    #[serde(default)]
    pub daily: Option<DailyBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature_2m: Vec<Option<f64>>,
    /// Codes arrive as JSON numbers; `3.0` is read as code 3.
    #[serde(default, deserialize_with = "null_as_default")]
    pub weathercode: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sunrise: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sunset: Vec<Option<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn weather_code(raw: f64) -> Option<i64> {
    raw.is_finite().then(|| raw.trunc() as i64)
}

impl ForecastResponse {
    /// One sample per hourly timestamp. Shorter value arrays leave the
    /// trailing samples without data.
    pub fn samples(&self) -> Vec<HourlySample> {
        let Some(hourly) = &self.hourly else {
            return Vec::new();
        };
        hourly
            .time
            .iter()
            .enumerate()
            .map(|(i, ts)| HourlySample {
                iso_timestamp: ts.clone().unwrap_or_default(),
                temperature_celsius: hourly.temperature_2m.get(i).copied().flatten(),
                weather_code: hourly.weathercode.get(i).copied().flatten().and_then(weather_code),
            })
            .collect()
    }

    fn first_daily(&self, pick: impl Fn(&DailyBlock) -> &Vec<Option<String>>) -> String {
        self.daily
            .as_ref()
            .and_then(|d| pick(d).first())
            .and_then(Option::as_deref)
            .map(format_time)
            .unwrap_or_else(|| PLACEHOLDER_TIME.to_string())
    }
}

/// Everything the forecast screen shows for today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// `HH:MM` or `--:--`
    pub sunrise: String,
    pub sunset: String,
    pub samples: Vec<HourlySample>,
    /// Selected slot rows, at most 8
    pub rows: Vec<HourlyRow>,
}

impl Default for DayForecast {
    fn default() -> Self {
        Self {
            sunrise: PLACEHOLDER_TIME.to_string(),
            sunset: PLACEHOLDER_TIME.to_string(),
            samples: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl From<ForecastResponse> for DayForecast {
    fn from(response: ForecastResponse) -> Self {
        let samples = response.samples();
        let rows = slots::select_rows(&samples);
        Self {
            sunrise: response.first_daily(|d| &d.sunrise),
            sunset: response.first_daily(|d| &d.sunset),
            samples,
            rows,
        }
    }
}

impl DayForecast {
    /// Date of the first sample, if it can be read.
    pub fn date(&self) -> Option<NaiveDate> {
        let first = self.samples.first()?;
        let day = first.iso_timestamp.split('T').next()?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    pub fn display_rows(&self) -> Vec<HourlyRow> {
        slots::display_rows(&self.rows)
    }

    pub fn window_summary(&self) -> WindowSummary {
        summary::summarize(&summary::row_readings(&self.rows))
    }

    pub fn summary_text(&self, language: Language) -> String {
        summary::day_summary_text(language, &self.rows)
    }

    /// Period card sentences; `fallback_date` is used when the samples carry
    /// no readable date.
    pub fn period_texts(&self, language: Language, fallback_date: NaiveDate) -> Vec<(Period, String)> {
        let date = self.date().unwrap_or(fallback_date);
        summary::period_texts(language, &self.rows, date)
    }
}
