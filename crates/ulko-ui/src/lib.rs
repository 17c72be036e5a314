//! Screen view models for Ulkohälytin
//!
//! Each model holds the state one screen renders and the actions it offers.
//! [`AppServices`] builds them over the shared stores and weather provider.

pub mod app_services;
pub mod models;

pub use app_services::AppServices;
pub use models::*;
