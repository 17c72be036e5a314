use serde::{Deserialize, Serialize};
use ulko_core::error::{ReqwestErrorExt, WeatherError as CoreWeatherError};
use ulko_core::{AppError, TranslationKey};

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Clear,
    MostlyClear,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Showers,
    Thunder,
    #[default]
    Unknown,
}

impl ConditionCategory {
    pub const ALL: [ConditionCategory; 10] = [
        Self::Clear,
        Self::MostlyClear,
        Self::Overcast,
        Self::Fog,
        Self::Drizzle,
        Self::Rain,
        Self::Snow,
        Self::Showers,
        Self::Thunder,
        Self::Unknown,
    ];

    /// Convert WMO weather code to a category.
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i64) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::MostlyClear,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51..=57 => Self::Drizzle,
            61..=67 => Self::Rain,
            71..=77 => Self::Snow,
            80..=82 => Self::Showers,
            95..=99 => Self::Thunder,
            _ => Self::Unknown,
        }
    }

    /// Missing codes (null in the payload, short arrays) are unknown.
    pub fn from_optional_code(code: Option<i64>) -> Self {
        code.map(Self::from_wmo_code).unwrap_or(Self::Unknown)
    }

    /// Material Community icon name
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "weather-sunny",
            Self::MostlyClear => "weather-partly-cloudy",
            Self::Overcast => "weather-cloudy",
            Self::Fog => "weather-fog",
            Self::Drizzle => "weather-rainy",
            Self::Rain => "weather-pouring",
            Self::Snow => "weather-snowy",
            Self::Showers => "weather-rainy",
            Self::Thunder => "weather-lightning",
            Self::Unknown => "weather-cloudy-alert",
        }
    }

    /// Key of the short label shown under each hourly slot
    pub fn translation_key(&self) -> TranslationKey {
        match self {
            Self::Clear => TranslationKey::WeatherClear,
            Self::MostlyClear => TranslationKey::WeatherMostlyClear,
            Self::Overcast => TranslationKey::WeatherOvercast,
            Self::Fog => TranslationKey::WeatherFog,
            Self::Drizzle => TranslationKey::WeatherDrizzle,
            Self::Rain => TranslationKey::WeatherRain,
            Self::Snow => TranslationKey::WeatherSnow,
            Self::Showers => TranslationKey::WeatherShowers,
            Self::Thunder => TranslationKey::WeatherThunder,
            Self::Unknown => TranslationKey::WeatherUnknown,
        }
    }
}

/// One hourly point of the forecast as the API reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    /// Local time, `YYYY-MM-DDTHH:MM`
    pub iso_timestamp: String,
    pub temperature_celsius: Option<f64>,
    pub weather_code: Option<i64>,
}

impl HourlySample {
    pub fn new(iso_timestamp: impl Into<String>, temperature_celsius: f64, weather_code: i64) -> Self {
        Self {
            iso_timestamp: iso_timestamp.into(),
            temperature_celsius: Some(temperature_celsius),
            weather_code: Some(weather_code),
        }
    }

    pub fn condition(&self) -> ConditionCategory {
        ConditionCategory::from_optional_code(self.weather_code)
    }
}

/// Round to the nearest whole degree; halves go up (-2.5 becomes -2).
pub fn round_celsius(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Forecast API returned HTTP {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Forecast request cancelled")]
    Cancelled,
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::Network(e) => AppError::Network(e.into_network_error()),
            WeatherError::Status(status) if status >= 500 => {
                AppError::Weather(CoreWeatherError::ServiceUnavailable)
            }
            WeatherError::Status(status) => {
                AppError::Weather(CoreWeatherError::ApiError(format!("HTTP {}", status)))
            }
            WeatherError::Parse(message) => {
                AppError::Weather(CoreWeatherError::InvalidResponse(message))
            }
            WeatherError::Cancelled => AppError::Weather(CoreWeatherError::Cancelled),
        }
    }
}
