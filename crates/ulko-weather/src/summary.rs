//! Aggregate statistics over forecast rows and their localized sentences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulko_core::i18n::{translate, Language, TranslationKey};

use crate::slots::HourlyRow;
use crate::types::{round_celsius, ConditionCategory};

/// Min/max/dominant over a window. All `None` means there was no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSummary {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub dominant: Option<ConditionCategory>,
}

impl WindowSummary {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.dominant.is_none()
    }
}

/// Most frequent condition; on equal counts the one seen first wins.
pub fn dominant_condition<I>(conditions: I) -> Option<ConditionCategory>
where
    I: IntoIterator<Item = ConditionCategory>,
{
    let mut counts: Vec<(ConditionCategory, usize)> = Vec::new();
    for condition in conditions {
        match counts.iter_mut().find(|(c, _)| *c == condition) {
            Some((_, n)) => *n += 1,
            None => counts.push((condition, 1)),
        }
    }

    let mut best: Option<(ConditionCategory, usize)> = None;
    for (condition, n) in counts {
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((condition, n));
        }
    }
    best.map(|(condition, _)| condition)
}

/// Summarize `(temperature, condition)` readings. Missing temperatures still
/// count towards the dominant condition.
pub fn summarize(readings: &[(Option<f64>, ConditionCategory)]) -> WindowSummary {
    let temps: Vec<f64> = readings
        .iter()
        .filter_map(|(t, _)| *t)
        .filter(|t| t.is_finite())
        .collect();

    WindowSummary {
        min: temps.iter().copied().reduce(f64::min).map(round_celsius),
        max: temps.iter().copied().reduce(f64::max).map(round_celsius),
        dominant: dominant_condition(readings.iter().map(|(_, c)| *c)),
    }
}

pub(crate) fn row_readings<'a>(
    rows: impl IntoIterator<Item = &'a HourlyRow>,
) -> Vec<(Option<f64>, ConditionCategory)> {
    rows.into_iter()
        .map(|r| (r.temperature.map(|t| t as f64), r.condition))
        .collect()
}

/// Part of the day a forecast card describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Noon,
    Evening,
    Night,
}

impl Period {
    /// Card order on the forecast screen.
    pub const ALL: [Period; 4] = [Period::Morning, Period::Noon, Period::Evening, Period::Night];

    /// Inclusive hour range.
    pub fn hours(self) -> (u32, u32) {
        match self {
            Period::Morning => (6, 11),
            Period::Noon => (12, 17),
            Period::Evening => (18, 22),
            Period::Night => (0, 5),
        }
    }

    pub fn contains(self, hour: u32) -> bool {
        let (start, end) = self.hours();
        (start..=end).contains(&hour)
    }

    pub fn title_key(self) -> TranslationKey {
        match self {
            Period::Morning => TranslationKey::WeatherMorningTitle,
            Period::Noon => TranslationKey::WeatherNoonTitle,
            Period::Evening => TranslationKey::WeatherEveningTitle,
            Period::Night => TranslationKey::WeatherNightTitle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub average_celsius: Option<i64>,
    pub dominant: Option<ConditionCategory>,
}

/// Average and dominant condition of the rows inside `period`.
/// Returns `None` when no row falls in the period.
pub fn summarize_period(rows: &[HourlyRow], period: Period) -> Option<PeriodSummary> {
    let in_period: Vec<&HourlyRow> = rows
        .iter()
        .filter(|r| r.hour().is_some_and(|h| period.contains(h)))
        .collect();
    if in_period.is_empty() {
        return None;
    }

    let temps: Vec<i64> = in_period.iter().filter_map(|r| r.temperature).collect();
    let average_celsius = if temps.is_empty() {
        None
    } else {
        Some(round_celsius(temps.iter().sum::<i64>() as f64 / temps.len() as f64))
    };

    Some(PeriodSummary {
        period,
        average_celsius,
        dominant: dominant_condition(in_period.iter().map(|r| r.condition)),
    })
}

/// Headline word for a condition. Finnish reuses the slot labels; English
/// has its own phrasing.
pub fn summary_label(language: Language, condition: Option<ConditionCategory>) -> &'static str {
    let condition = condition.unwrap_or(ConditionCategory::Unknown);
    match language {
        Language::Fi => translate(language, condition.translation_key()),
        Language::En => match condition {
            ConditionCategory::Clear => "Sunny",
            ConditionCategory::MostlyClear => "Mostly clear",
            ConditionCategory::Overcast => "Mostly cloudy",
            ConditionCategory::Fog => "Foggy",
            ConditionCategory::Drizzle => "Light rain",
            ConditionCategory::Rain => "Rain",
            ConditionCategory::Showers => "Showers",
            ConditionCategory::Thunder => "Storms",
            ConditionCategory::Snow => "Snow",
            ConditionCategory::Unknown => "Cloudy",
        },
    }
}

fn degrees(value: Option<i64>) -> String {
    value.map_or_else(|| "--".to_string(), |v| v.to_string())
}

/// One-line summary of the whole strip; empty when there are no rows.
pub fn day_summary_text(language: Language, rows: &[HourlyRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let summary = summarize(&row_readings(rows));
    let label = summary_label(language, summary.dominant);
    match language {
        Language::Fi => format!(
            "{}. Ylin {}°C, alin {}°C.",
            label,
            degrees(summary.max),
            degrees(summary.min)
        ),
        Language::En => format!(
            "{}. Highs {}°C and lows {}°C.",
            label,
            degrees(summary.max),
            degrees(summary.min)
        ),
    }
}

/// City part of the localized location, e.g. `Tampere`.
pub fn city_name(language: Language) -> &'static str {
    let location = translate(language, TranslationKey::WeatherLocation);
    location.split(',').next().unwrap_or(location)
}

/// Sentence for one period card. Only the morning card names the city.
pub fn period_sentence(
    language: Language,
    summary: Option<&PeriodSummary>,
    city: &str,
    date: NaiveDate,
) -> String {
    let Some(summary) = summary else {
        return String::new();
    };
    let include_city = summary.period == Period::Morning;
    let label = summary_label(language, summary.dominant);
    let date_text = language.format_long_date(date);
    let avg = degrees(summary.average_celsius);

    match language {
        Language::Fi => {
            let city_part = if include_city { format!("{}ssa ", city) } else { String::new() };
            format!(
                "{}{} lämpötila on {}°C. Sää on {}.",
                city_part,
                date_text.to_lowercase(),
                avg,
                label.to_lowercase()
            )
        }
        Language::En => {
            let city_part = if include_city { format!("in {} ", city) } else { String::new() };
            format!("The temperature {}on {} is {}°C. {}.", city_part, date_text, avg, label)
        }
    }
}

/// Text of all four period cards, in `Period::ALL` order. Before any rows
/// exist every card shows the loading text.
pub fn period_texts(language: Language, rows: &[HourlyRow], date: NaiveDate) -> Vec<(Period, String)> {
    if rows.is_empty() {
        let loading = translate(language, TranslationKey::WeatherLoading);
        return Period::ALL.iter().map(|p| (*p, loading.to_string())).collect();
    }

    let city = city_name(language);
    Period::ALL
        .iter()
        .map(|period| {
            let summary = summarize_period(rows, *period);
            (*period, period_sentence(language, summary.as_ref(), city, date))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use crate::slots::select_rows;
    use crate::types::HourlySample;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn rows(samples: &[(u32, f64, i64)]) -> Vec<HourlyRow> {
        samples
            .iter()
            .map(|(h, t, c)| HourlyRow::from_sample(&HourlySample::new(format!("2026-10-17T{:02}:00", h), *t, *c)))
            .collect()
    }

    #[test]
    fn test_summarize_min_max_dominant() {
        let readings = [
            (Some(-2.0), ConditionCategory::Clear),
            (Some(-2.0), ConditionCategory::Clear),
            (Some(4.0), ConditionCategory::Rain),
        ];
        let summary = summarize(&readings);
        assert_eq!(summary.min, Some(-2));
        assert_eq!(summary.max, Some(4));
        assert_eq!(summary.dominant, Some(ConditionCategory::Clear));
    }

    #[test]
    fn test_summarize_empty_is_no_data() {
        let summary = summarize(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary, WindowSummary::default());
    }

    #[test]
    fn test_summarize_rounds_extremes() {
        let readings = [
            (Some(-3.5), ConditionCategory::Snow),
            (Some(7.5), ConditionCategory::Snow),
            (None, ConditionCategory::Fog),
        ];
        let summary = summarize(&readings);
        assert_eq!(summary.min, Some(-3));
        assert_eq!(summary.max, Some(8));
        assert_eq!(summary.dominant, Some(ConditionCategory::Snow));
    }

    #[test]
    fn test_dominant_tie_goes_to_first_seen() {
        let order = [
            ConditionCategory::Rain,
            ConditionCategory::Clear,
            ConditionCategory::Clear,
            ConditionCategory::Rain,
        ];
        assert_eq!(dominant_condition(order), Some(ConditionCategory::Rain));
        assert_eq!(dominant_condition(Vec::new()), None);
    }

    #[test]
    fn test_period_ranges() {
        assert!(Period::Morning.contains(6) && Period::Morning.contains(11));
        assert!(!Period::Morning.contains(12));
        assert!(Period::Evening.contains(22));
        assert!(!Period::Evening.contains(23));
        assert!(Period::Night.contains(0) && !Period::Night.contains(6));
    }

    #[test]
    fn test_summarize_period_average() {
        let rows = rows(&[(6, 1.0, 0), (9, 4.0, 0), (12, 8.0, 61)]);
        let morning = summarize_period(&rows, Period::Morning).unwrap();
        assert_eq!(morning.average_celsius, Some(3));
        assert_eq!(morning.dominant, Some(ConditionCategory::Clear));
        assert!(summarize_period(&rows, Period::Night).is_none());
    }

    #[test]
    fn test_day_summary_text() {
        let rows = rows(&[(0, -2.0, 0), (3, -2.0, 0), (6, 4.0, 61)]);
        assert_eq!(
            day_summary_text(Language::En, &rows),
            "Sunny. Highs 4°C and lows -2°C."
        );
        assert_eq!(
            day_summary_text(Language::Fi, &rows),
            "Selkeää. Ylin 4°C, alin -2°C."
        );
        assert_eq!(day_summary_text(Language::En, &[]), "");
    }

    #[test]
    fn test_day_summary_without_temperatures() {
        let rows = vec![HourlyRow::placeholder()];
        assert_eq!(
            day_summary_text(Language::En, &rows),
            "Cloudy. Highs --°C and lows --°C."
        );
    }

    #[test]
    fn test_summary_labels() {
        assert_eq!(summary_label(Language::En, Some(ConditionCategory::Thunder)), "Storms");
        assert_eq!(summary_label(Language::En, None), "Cloudy");
        assert_eq!(summary_label(Language::Fi, Some(ConditionCategory::Showers)), "Sadekuuroja");
        assert_eq!(summary_label(Language::Fi, None), "Sää tuntematon");
    }

    #[test]
    fn test_period_sentences() {
        let samples: Vec<HourlySample> = (0..24)
            .map(|h| HourlySample::new(format!("2026-10-17T{:02}:00", h), 5.0, if h < 12 { 0 } else { 3 }))
            .collect();
        let rows = select_rows(&samples);

        let en = period_texts(Language::En, &rows, day());
        assert_eq!(en[0].0, Period::Morning);
        assert_eq!(
            en[0].1,
            "The temperature in Tampere on Saturday, October 17, 2026 is 5°C. Sunny."
        );
        assert_eq!(
            en[1].1,
            "The temperature on Saturday, October 17, 2026 is 5°C. Mostly cloudy."
        );

        let fi = period_texts(Language::Fi, &rows, day());
        assert_eq!(
            fi[0].1,
            "Tamperessa lauantai 17. lokakuuta 2026 lämpötila on 5°C. Sää on selkeää."
        );
        assert_eq!(fi[3].0, Period::Night);
        assert_eq!(
            fi[3].1,
            "lauantai 17. lokakuuta 2026 lämpötila on 5°C. Sää on selkeää."
        );
    }

    #[test]
    fn test_period_texts_loading_and_empty() {
        let loading = period_texts(Language::En, &[], day());
        assert!(loading.iter().all(|(_, text)| text == "Loading weather..."));

        let rows = rows(&[(6, 1.0, 0)]);
        let texts = period_texts(Language::En, &rows, day());
        assert!(!texts[0].1.is_empty());
        assert_eq!(texts[1].1, "");
        assert_eq!(texts[3].1, "");
    }
}
