use ulko_core::StorageError;
use ulko_services::profile::{Avatar, AVATARS};
use ulko_services::ProfileStore;

/// Avatar picker.
pub struct ProfileModel {
    profile: ProfileStore,
    selected: usize,
}

impl ProfileModel {
    pub fn new(profile: ProfileStore) -> Self {
        let selected = profile.avatar_index();
        Self { profile, selected }
    }

    pub fn avatars(&self) -> &'static [Avatar] {
        &AVATARS
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Select an avatar; saved right away.
    pub fn select(&mut self, index: usize) -> Result<(), StorageError> {
        self.selected = index;
        self.profile.set_avatar_index(index)
    }
}
