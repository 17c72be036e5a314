//! Alarm settings edited on the alarm tab.

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Nature sounds bundled with the app.
pub const SOUND_OPTIONS: [&str; 9] = [
    "avala-trail-forest-nature.mp3",
    "birds-forest-nature.mp3",
    "calm-nature-ambience.mp3",
    "jungle-nature.mp3",
    "nature-ambience.mp3",
    "nature-birds-singing.mp3",
    "nature.mp3",
    "sound-of-walking-out-in-nature.mp3",
    "spring-forest-nature.mp3",
];

pub const DEFAULT_SOUND: &str = "birds-forest-nature.mp3";

/// Repeat chips, in display order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// `birds-forest-nature.mp3` -> `Birds Forest Nature`
pub fn format_sound_label(file_name: &str) -> String {
    let lower = file_name.to_ascii_lowercase();
    let stem = if lower.ends_with(".mp3") {
        &file_name[..file_name.len() - 4]
    } else {
        file_name
    };

    let mut spaced = String::with_capacity(stem.len());
    let mut in_separator = false;
    for c in stem.chars() {
        if c == '-' || c == '_' {
            if !in_separator {
                spaced.push(' ');
            }
            in_separator = true;
        } else {
            spaced.push(c);
            in_separator = false;
        }
    }

    let mut label = String::with_capacity(spaced.len());
    let mut prev_word = false;
    for c in spaced.chars() {
        let word = c.is_alphanumeric() || c == '_';
        if word && !prev_word {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        prev_word = word;
    }
    label
}

/// 12-hour clock parts, e.g. `("7:05", "AM")`.
pub fn time_parts(time: NaiveTime) -> (String, &'static str) {
    let (pm, hour) = time.hour12();
    (
        format!("{}:{:02}", hour, time.minute()),
        if pm { "PM" } else { "AM" },
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmSettings {
    pub enabled: bool,
    /// Selected repeat days, in the order they were picked
    pub days: Vec<Weekday>,
    pub time: NaiveTime,
    /// 0.0 ..= 1.0
    pub volume: f32,
    pub sound: String,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            days: vec![Weekday::Tue, Weekday::Thu, Weekday::Sat],
            time: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN),
            volume: 0.6,
            sound: DEFAULT_SOUND.to_string(),
        }
    }
}

impl AlarmSettings {
    pub fn is_day_selected(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Select an unselected day, or unselect a selected one.
    pub fn toggle_day(&mut self, day: Weekday) {
        if self.is_day_selected(day) {
            self.days.retain(|d| *d != day);
        } else {
            self.days.push(day);
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
    }

    /// Pick a bundled sound. Returns `false` for unknown files.
    pub fn set_sound(&mut self, file_name: &str) -> bool {
        if !SOUND_OPTIONS.contains(&file_name) {
            tracing::warn!(file_name, "Unknown alarm sound");
            return false;
        }
        self.sound = file_name.to_string();
        true
    }

    pub fn sound_label(&self) -> String {
        format_sound_label(&self.sound)
    }

    pub fn time_parts(&self) -> (String, &'static str) {
        time_parts(self.time)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_sound_labels() {
        assert_eq!(format_sound_label("birds-forest-nature.mp3"), "Birds Forest Nature");
        assert_eq!(format_sound_label("nature.mp3"), "Nature");
        assert_eq!(
            format_sound_label("sound-of-walking-out-in-nature.mp3"),
            "Sound Of Walking Out In Nature"
        );
        assert_eq!(format_sound_label("calm__nature-_ambience.MP3"), "Calm Nature Ambience");
        assert_eq!(format_sound_label("rain.wav"), "Rain.Wav");
    }

    #[test]
    fn test_toggle_day() {
        let mut settings = AlarmSettings::default();
        settings.toggle_day(Weekday::Tue);
        assert_eq!(settings.days, vec![Weekday::Thu, Weekday::Sat]);

        settings.toggle_day(Weekday::Mon);
        assert_eq!(settings.days, vec![Weekday::Thu, Weekday::Sat, Weekday::Mon]);
        assert!(settings.is_day_selected(Weekday::Mon));
        assert!(!settings.is_day_selected(Weekday::Sun));
    }

    #[test]
    fn test_time_parts() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(time_parts(t(7, 5)), ("7:05".to_string(), "AM"));
        assert_eq!(time_parts(t(0, 30)), ("12:30".to_string(), "AM"));
        assert_eq!(time_parts(t(12, 0)), ("12:00".to_string(), "PM"));
        assert_eq!(time_parts(t(18, 45)), ("6:45".to_string(), "PM"));
    }

    #[test]
    fn test_volume_and_sound() {
        let mut settings = AlarmSettings::default();
        settings.set_volume(1.4);
        assert_eq!(settings.volume, 1.0);
        settings.set_volume(-0.2);
        assert_eq!(settings.volume, 0.0);

        assert!(settings.set_sound("jungle-nature.mp3"));
        assert_eq!(settings.sound_label(), "Jungle Nature");
        assert!(!settings.set_sound("alarm.mp3"));
        assert_eq!(settings.sound, "jungle-nature.mp3");
    }

    #[test]
    fn test_labels_cover_week() {
        let labels: Vec<&str> = WEEK.iter().map(|d| day_label(*d)).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }
}
