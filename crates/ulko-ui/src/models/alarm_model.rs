use chrono::{NaiveTime, Weekday};
use ulko_services::alarm::{day_label, WEEK};
use ulko_services::trivia::{random_trivia, TriviaCategory, TriviaPrompt};
use ulko_services::{format_sound_label, AlarmSettings, SOUND_OPTIONS};

/// Navigation parameters of the ring screen. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingParams {
    pub category: Option<String>,
    pub time: Option<String>,
    pub question: Option<String>,
    pub prompt: Option<String>,
    pub answer: Option<String>,
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Ringing alarm with its trivia card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmRingModel {
    pub time_label: String,
    pub question: String,
    pub prompt: TriviaPrompt,
    pub answer: String,
    show_answer: bool,
}

impl AlarmRingModel {
    /// Explicit params win field by field; the rest comes from a random item
    /// of the requested category.
    pub fn from_params(params: &RingParams) -> Self {
        let category = given(&params.category).and_then(TriviaCategory::from_name);
        let fallback = random_trivia(category);

        Self {
            time_label: given(&params.time).unwrap_or(fallback.time_label).to_string(),
            question: given(&params.question).unwrap_or(fallback.question).to_string(),
            prompt: given(&params.prompt)
                .map(TriviaPrompt::from_name)
                .unwrap_or(fallback.prompt),
            answer: given(&params.answer).unwrap_or(fallback.answer).to_string(),
            show_answer: false,
        }
    }

    pub fn prompt_label(&self) -> &'static str {
        self.prompt.label()
    }

    pub fn reveal_answer(&mut self) {
        self.show_answer = true;
    }

    pub fn is_answer_shown(&self) -> bool {
        self.show_answer
    }
}

/// Alarm tab.
#[derive(Debug, Clone, Default)]
pub struct AlarmModel {
    settings: AlarmSettings,
    sound_picker_open: bool,
}

impl AlarmModel {
    pub fn settings(&self) -> &AlarmSettings {
        &self.settings
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    /// `(label, selected)` for each repeat chip, Monday first.
    pub fn day_chips(&self) -> Vec<(&'static str, bool)> {
        WEEK.iter()
            .map(|d| (day_label(*d), self.settings.is_day_selected(*d)))
            .collect()
    }

    pub fn toggle_day(&mut self, day: Weekday) {
        self.settings.toggle_day(day);
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.settings.time = time;
    }

    pub fn time_parts(&self) -> (String, &'static str) {
        self.settings.time_parts()
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.settings.set_volume(volume);
    }

    pub fn sound_label(&self) -> String {
        self.settings.sound_label()
    }

    /// `(file, label, selected)` rows of the sound picker.
    pub fn sound_options(&self) -> Vec<(&'static str, String, bool)> {
        SOUND_OPTIONS
            .iter()
            .map(|file| (*file, format_sound_label(file), *file == self.settings.sound))
            .collect()
    }

    pub fn open_sound_picker(&mut self) {
        self.sound_picker_open = true;
    }

    pub fn is_sound_picker_open(&self) -> bool {
        self.sound_picker_open
    }

    /// Choose a sound and close the picker.
    pub fn select_sound(&mut self, file_name: &str) -> bool {
        let changed = self.settings.set_sound(file_name);
        self.sound_picker_open = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_ring_uses_explicit_params() {
        let params = RingParams {
            category: Some("health".into()),
            time: Some("07:15 AM".into()),
            question: Some("Q?".into()),
            prompt: Some("how".into()),
            answer: Some("A.".into()),
        };
        let mut model = AlarmRingModel::from_params(&params);
        assert_eq!(model.time_label, "07:15 AM");
        assert_eq!(model.question, "Q?");
        assert_eq!(model.prompt_label(), "How?");
        assert!(!model.is_answer_shown());
        model.reveal_answer();
        assert!(model.is_answer_shown());
        assert_eq!(model.answer, "A.");
    }

    #[test]
    fn test_ring_falls_back_to_category_item() {
        let params = RingParams {
            category: Some("emotion".into()),
            question: Some(String::new()),
            ..RingParams::default()
        };
        let model = AlarmRingModel::from_params(&params);
        assert_eq!(model.time_label, "06:30 PM");
        assert_eq!(model.question, "DID YOU KNOW A 10-MINUTE WALK CAN LIFT YOUR MOOD?");
        assert_eq!(model.prompt, TriviaPrompt::How);
    }

    #[test]
    fn test_unknown_category_uses_whole_pool() {
        let model = AlarmRingModel::from_params(&RingParams {
            category: Some("sports".into()),
            ..RingParams::default()
        });
        assert!(!model.question.is_empty());
    }

    #[test]
    fn test_alarm_tab() {
        let mut model = AlarmModel::default();
        assert_eq!(model.sound_label(), "Birds Forest Nature");

        let chips = model.day_chips();
        assert_eq!(chips[1], ("Tue", true));
        assert_eq!(chips[0], ("Mon", false));

        model.toggle_day(Weekday::Mon);
        assert!(model.day_chips()[0].1);

        model.set_time(NaiveTime::from_hms_opt(21, 5, 0).unwrap());
        assert_eq!(model.time_parts(), ("9:05".to_string(), "PM"));

        model.open_sound_picker();
        assert!(model.is_sound_picker_open());
        assert!(model.select_sound("nature.mp3"));
        assert!(!model.is_sound_picker_open());
        let selected: Vec<_> = model.sound_options().into_iter().filter(|o| o.2).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].1, "Nature");
    }
}
