//! Reduce a day of hourly samples to the eight 3-hour display slots.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::{round_celsius, ConditionCategory, HourlySample};

/// Hours of the day shown on the forecast strip.
pub const TARGET_HOURS: [u32; 8] = [0, 3, 6, 9, 12, 15, 18, 21];

/// Number of entries the forecast strip always renders.
pub const SLOT_COUNT: usize = TARGET_HOURS.len();

pub const PLACEHOLDER_TIME: &str = "--:--";
pub const PLACEHOLDER_TEMPERATURE: &str = "--";

/// Pick the indices of the 8 target hours on the first sample's date.
///
/// If any target is missing, falls back to the first (up to) 8 indices in
/// their original order.
pub fn select_slot_indices<S: AsRef<str>>(times: &[S]) -> Vec<usize> {
    let first_date = times
        .first()
        .and_then(|t| t.as_ref().split('T').next())
        .map(str::to_owned);

    let exact: Vec<usize> = match &first_date {
        Some(date) => TARGET_HOURS
            .iter()
            .filter_map(|hour| {
                let target = format!("{}T{:02}:00", date, hour);
                times.iter().position(|t| t.as_ref() == target)
            })
            .collect(),
        None => Vec::new(),
    };

    if exact.len() == SLOT_COUNT {
        exact
    } else {
        tracing::debug!(
            found = exact.len(),
            available = times.len(),
            "Target hours incomplete, using first samples"
        );
        (0..times.len().min(SLOT_COUNT)).collect()
    }
}

/// `HH:MM` of an API timestamp, or `--:--` if it can't be read.
pub fn format_time(iso: &str) -> String {
    const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(iso, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(iso).ok().map(|dt| dt.naive_local()))
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER_TIME.to_string())
}

/// One column of the forecast strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRow {
    pub time: String,
    pub temperature: Option<i64>,
    pub condition: ConditionCategory,
}

impl HourlyRow {
    pub fn placeholder() -> Self {
        Self {
            time: PLACEHOLDER_TIME.to_string(),
            temperature: None,
            condition: ConditionCategory::Unknown,
        }
    }

    pub fn from_sample(sample: &HourlySample) -> Self {
        Self {
            time: format_time(&sample.iso_timestamp),
            temperature: sample.temperature_celsius.map(round_celsius),
            condition: sample.condition(),
        }
    }

    /// `"4°C"` or `"--"`
    pub fn temperature_label(&self) -> String {
        match self.temperature {
            Some(t) => format!("{}°C", t),
            None => PLACEHOLDER_TEMPERATURE.to_string(),
        }
    }

    pub fn icon_name(&self) -> &'static str {
        self.condition.icon_name()
    }

    /// Hour of day parsed from the `HH:MM` label; placeholders have none.
    pub fn hour(&self) -> Option<u32> {
        self.time.split(':').next()?.parse().ok()
    }
}

/// Select the slot samples and turn them into rows (at most 8, no padding).
pub fn select_rows(samples: &[HourlySample]) -> Vec<HourlyRow> {
    let times: Vec<&str> = samples.iter().map(|s| s.iso_timestamp.as_str()).collect();
    select_slot_indices(&times)
        .into_iter()
        .map(|idx| HourlyRow::from_sample(&samples[idx]))
        .collect()
}

/// Exactly 8 rows for rendering: real rows first, placeholders after.
pub fn display_rows(rows: &[HourlyRow]) -> Vec<HourlyRow> {
    rows.iter()
        .take(SLOT_COUNT)
        .cloned()
        .chain(std::iter::repeat_with(HourlyRow::placeholder))
        .take(SLOT_COUNT)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn full_day(date: &str) -> Vec<String> {
        (0..24).map(|h| format!("{}T{:02}:00", date, h)).collect()
    }

    #[test]
    fn test_full_day_selects_target_hours() {
        let times = full_day("2026-10-17");
        let indices = select_slot_indices(&times);
        assert_eq!(indices, vec![0, 3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn test_multi_day_series_uses_first_date() {
        let mut times = full_day("2026-10-17");
        times.extend(full_day("2026-10-18"));
        let indices = select_slot_indices(&times);
        assert_eq!(indices, vec![0, 3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn test_series_starting_midday_falls_back_to_first_eight() {
        let times: Vec<String> = (10..24).map(|h| format!("2026-10-17T{:02}:00", h)).collect();
        let indices = select_slot_indices(&times);
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_short_series_returns_what_exists() {
        let times = vec!["2026-10-17T00:00", "2026-10-17T01:00", "2026-10-17T02:00"];
        assert_eq!(select_slot_indices(&times), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_series() {
        let times: Vec<String> = Vec::new();
        assert!(select_slot_indices(&times).is_empty());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2026-10-17T06:00"), "06:00");
        assert_eq!(format_time("2026-10-17T21:45:00"), "21:45");
        assert_eq!(format_time("2026-10-17T08:12:00+03:00"), "08:12");
        assert_eq!(format_time("not a time"), "--:--");
    }

    #[test]
    fn test_rows_from_samples() {
        let samples: Vec<HourlySample> = (0..24)
            .map(|h| HourlySample::new(format!("2026-10-17T{:02}:00", h), h as f64 - 0.5, 3))
            .collect();
        let rows = select_rows(&samples);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[1].time, "03:00");
        assert_eq!(rows[1].temperature, Some(3));
        assert_eq!(rows[1].temperature_label(), "3°C");
        assert_eq!(rows[1].condition, ConditionCategory::Overcast);
        assert_eq!(rows[7].hour(), Some(21));
    }

    #[test]
    fn test_missing_values_render_placeholders() {
        let sample = HourlySample {
            iso_timestamp: "garbage".to_string(),
            temperature_celsius: None,
            weather_code: None,
        };
        let row = HourlyRow::from_sample(&sample);
        assert_eq!(row.time, "--:--");
        assert_eq!(row.temperature_label(), "--");
        assert_eq!(row.icon_name(), "weather-cloudy-alert");
        assert_eq!(row.hour(), None);
    }

    #[test]
    fn test_display_rows_always_eight() {
        assert_eq!(display_rows(&[]).len(), 8);
        assert!(display_rows(&[]).iter().all(|r| *r == HourlyRow::placeholder()));

        let partial = vec![
            HourlyRow::from_sample(&HourlySample::new("2026-10-17T00:00", 1.0, 0)),
            HourlyRow::from_sample(&HourlySample::new("2026-10-17T01:00", 2.0, 0)),
        ];
        let padded = display_rows(&partial);
        assert_eq!(padded.len(), 8);
        assert_eq!(padded[0].time, "00:00");
        assert_eq!(padded[2], HourlyRow::placeholder());
    }
}
