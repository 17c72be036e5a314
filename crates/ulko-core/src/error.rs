//! Error types shared across the Ulkohälytin crates.
//!
//! Nothing here is fatal to the app. A failed forecast leaves the weather
//! screen on its previous rows, and an unreadable record reads as empty.
//! The enums keep the detail for logs; `user_message()` and
//! `message_key()` give what a screen shows instead.

use thiserror::Error;

use crate::i18n::TranslationKey;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Short English text for logs and the command line.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Storage(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "Could not read or write app files.",
            AppError::Other(_) => "Something went wrong.",
        }
    }

    /// Translated text a screen shows for this error. Cancellations and
    /// storage problems have none: screens stay quiet about those.
    pub fn message_key(&self) -> Option<TranslationKey> {
        match self {
            AppError::Weather(WeatherError::Cancelled) => None,
            AppError::Network(_) | AppError::Weather(_) => Some(TranslationKey::WeatherError),
            AppError::Storage(_) | AppError::Io(_) | AppError::Other(_) => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Weather(WeatherError::Cancelled))
    }
}

/// Transport failures talking to the forecast API.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Forecast server unreachable: {0}")]
    Unreachable(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unreadable response body: {0}")]
    Body(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::Unreachable(_) => "No connection to the weather service.",
            NetworkError::Timeout => "The weather service did not answer in time.",
            NetworkError::Status { .. } => "The weather service refused the request.",
            NetworkError::Body(_) => "The weather service sent an unreadable answer.",
        }
    }
}

/// Record store failures (SQLite or in-memory).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Record store unavailable: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Record database corrupted: {0}")]
    Corruption(String),

    #[error("Could not encode record: {0}")]
    Serialization(String),
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::ConnectionFailed(_) => "Your garden and journal could not be opened.",
            StorageError::QueryFailed(_) | StorageError::Serialization(_) => {
                "Your change could not be saved."
            }
            StorageError::Corruption(_) => "Saved app data is damaged.",
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Forecast failures above the transport layer.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Forecast API rejected the request: {0}")]
    ApiError(String),

    #[error("Forecast service unavailable")]
    ServiceUnavailable,

    #[error("Invalid forecast payload: {0}")]
    InvalidResponse(String),

    #[error("Forecast request cancelled")]
    Cancelled,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::ApiError(_) | WeatherError::InvalidResponse(_) => {
                "Unable to load weather data."
            }
            WeatherError::ServiceUnavailable => "The weather service is down. Try again later.",
            WeatherError::Cancelled => "Weather update cancelled.",
        }
    }
}

/// Classify `reqwest` failures.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            return NetworkError::Timeout;
        }
        if self.is_decode() || self.is_body() {
            return NetworkError::Body(self.to_string());
        }
        match self.status() {
            Some(status) => NetworkError::Status {
                status: status.as_u16(),
                message: self.to_string(),
            },
            None => NetworkError::Unreachable(self.to_string()),
        }
    }
}

/// Classify `rusqlite` failures.
pub trait RusqliteErrorExt {
    fn into_storage_error(self) -> StorageError;
}

impl RusqliteErrorExt for rusqlite::Error {
    fn into_storage_error(self) -> StorageError {
        use rusqlite::ErrorCode;
        match &self {
            rusqlite::Error::SqliteFailure(e, _)
                if matches!(e.code, ErrorCode::DatabaseCorrupt | ErrorCode::NotADatabase) =>
            {
                StorageError::Corruption(self.to_string())
            }
            rusqlite::Error::SqliteFailure(e, _)
                if matches!(e.code, ErrorCode::CannotOpen | ErrorCode::PermissionDenied) =>
            {
                StorageError::ConnectionFailed(self.to_string())
            }
            _ => StorageError::QueryFailed(self.to_string()),
        }
    }
}
