//! User profile persistence.
//!
//! The profile is a single avatar value stored independently of the marker
//! collection: either an image data URL or an emoji character. Sizing and
//! compression happen in the UI before the value reaches this layer.

use crate::storage::{Storage, StorageError, AVATAR_KEY};

/// Persists the user's avatar under [`AVATAR_KEY`].
pub struct ProfileStore {
    storage: Box<dyn Storage>,
}

impl ProfileStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// The stored avatar, if any. `None` means the UI shows its default.
    pub fn load_avatar(&self) -> Result<Option<String>, StorageError> {
        self.storage.get(AVATAR_KEY)
    }

    pub fn save_avatar(&mut self, avatar: &str) -> Result<(), StorageError> {
        self.storage.set(AVATAR_KEY, avatar)
    }

    pub fn clear_avatar(&mut self) -> Result<(), StorageError> {
        self.storage.remove(AVATAR_KEY)
    }
}
