use chrono::{DateTime, Utc};
use ulko_core::StorageError;
use ulko_services::garden::{self, GardenPlot};
use ulko_services::profile::{avatar_for, Avatar};
use ulko_services::{GardenSpecies, GardenStore, ProfileStore};

/// Garden tab: collected species as growing plots, plus the user's avatar.
pub struct GardenModel {
    garden: GardenStore,
    profile: ProfileStore,
    species: Vec<GardenSpecies>,
    avatar_index: usize,
}

impl GardenModel {
    pub fn new(garden: GardenStore, profile: ProfileStore) -> Self {
        let mut model = Self {
            garden,
            profile,
            species: Vec::new(),
            avatar_index: 0,
        };
        model.load();
        model
    }

    /// Re-read species and avatar; called whenever the tab gains focus.
    pub fn load(&mut self) {
        self.species = self.garden.species();
        self.avatar_index = self.profile.avatar_index();
        tracing::debug!(species = self.species.len(), "Garden loaded");
    }

    pub fn species(&self) -> &[GardenSpecies] {
        &self.species
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn plots(&self) -> Vec<GardenPlot> {
        self.plots_at(Utc::now())
    }

    pub fn plots_at(&self, now: DateTime<Utc>) -> Vec<GardenPlot> {
        garden::plots(&self.species, now)
    }

    pub fn avatar(&self) -> &'static Avatar {
        avatar_for(self.avatar_index)
    }

    /// Plant a species found on a challenge.
    pub fn add_species(&mut self, name: &str, scientific_name: &str) -> Result<(), StorageError> {
        self.species = self.garden.add(name, scientific_name)?;
        Ok(())
    }
}
