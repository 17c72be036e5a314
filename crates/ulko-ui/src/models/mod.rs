pub mod alarm_model;
pub mod garden_model;
pub mod journal_model;
pub mod profile_model;
pub mod weather_model;

pub use alarm_model::{AlarmModel, AlarmRingModel, RingParams};
pub use garden_model::GardenModel;
pub use journal_model::JournalModel;
pub use profile_model::ProfileModel;
pub use weather_model::{RefreshOutcome, WeatherModel};
