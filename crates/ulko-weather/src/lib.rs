//! Weather forecast pipeline for Ulkohälytin
//!
//! Fetches the day's hourly forecast from Open-Meteo, reduces it to eight
//! 3-hour slots and renders localized summaries.

pub mod types;
pub mod slots;
pub mod summary;
pub mod forecast;
pub mod provider;

pub use types::*;
pub use slots::{display_rows, select_rows, select_slot_indices, HourlyRow, SLOT_COUNT};
pub use summary::{Period, PeriodSummary, WindowSummary};
pub use forecast::{DayForecast, ForecastResponse};
pub use provider::WeatherProvider;
