//! Virtual garden: species the user has collected and how far each plot has grown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ulko_core::{KeyValueStore, StorageError};

use crate::record;

pub const GARDEN_KEY: &str = "garden_species";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenSpecies {
    pub name: String,
    pub scientific_name: String,
    /// RFC 3339 timestamp
    pub added_at: String,
}

impl GardenSpecies {
    pub fn same_species(&self, name: &str, scientific_name: &str) -> bool {
        self.name == name && self.scientific_name == scientific_name
    }
}

/// How a plot is drawn, by age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Seed,
    Sprout,
    Bloom,
}

impl GrowthStage {
    /// Under 2 whole days a seed, under 7 a sprout, then in bloom.
    pub fn from_age_days(days: i64) -> Self {
        match days.max(0) {
            0..=1 => GrowthStage::Seed,
            2..=6 => GrowthStage::Sprout,
            _ => GrowthStage::Bloom,
        }
    }
}

/// Whole days since `added_at`, never negative. Unreadable timestamps count
/// as just planted.
pub fn age_in_days(added_at: &str, now: DateTime<Utc>) -> i64 {
    match DateTime::parse_from_rfc3339(added_at) {
        Ok(added) => (now - added.with_timezone(&Utc)).num_days().max(0),
        Err(e) => {
            tracing::debug!(added_at, "Unreadable plant date: {}", e);
            0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenPlot {
    pub index: usize,
    pub species: GardenSpecies,
    pub age_days: i64,
    pub stage: GrowthStage,
}

/// Lay out the species as plots, in stored order.
pub fn plots(species: &[GardenSpecies], now: DateTime<Utc>) -> Vec<GardenPlot> {
    species
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let age_days = age_in_days(&item.added_at, now);
            GardenPlot {
                index,
                species: item.clone(),
                age_days,
                stage: GrowthStage::from_age_days(age_days),
            }
        })
        .collect()
}

/// Species list persisted under [`GARDEN_KEY`].
#[derive(Clone)]
pub struct GardenStore {
    store: Arc<dyn KeyValueStore>,
}

impl GardenStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored species, newest first
    pub fn species(&self) -> Vec<GardenSpecies> {
        record::read_list(self.store.as_ref(), GARDEN_KEY)
    }

    /// Add a species planted now. A species already in the garden (same name
    /// and scientific name) leaves the list untouched and nothing is written.
    pub fn add(&self, name: &str, scientific_name: &str) -> Result<Vec<GardenSpecies>, StorageError> {
        self.add_at(name, scientific_name, Utc::now())
    }

    pub fn add_at(
        &self,
        name: &str,
        scientific_name: &str,
        added_at: DateTime<Utc>,
    ) -> Result<Vec<GardenSpecies>, StorageError> {
        let mut existing = self.species();
        if existing.iter().any(|s| s.same_species(name, scientific_name)) {
            tracing::debug!(name, "Species already in garden");
            return Ok(existing);
        }

        existing.insert(
            0,
            GardenSpecies {
                name: name.to_string(),
                scientific_name: scientific_name.to_string(),
                added_at: added_at.to_rfc3339(),
            },
        );
        record::write_list(self.store.as_ref(), GARDEN_KEY, &existing)?;
        tracing::info!(name, total = existing.len(), "Species added to garden");
        Ok(existing)
    }
}
