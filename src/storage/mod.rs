//! Storage layer for SplitLedger
//!
//! JSON file storage with atomic writes. This is the collaborator that keeps
//! participants and groups around between runs; the ledger engine never
//! touches it.

pub mod file_io;
pub mod participants;
pub mod groups;

pub use file_io::{read_json, write_json_atomic};
pub use groups::GroupRepository;
pub use participants::ParticipantRepository;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    pub participants: ParticipantRepository,
    pub groups: GroupRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            participants: ParticipantRepository::new(paths.participants_file()),
            groups: GroupRepository::new(paths.groups_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.participants.load()?;
        self.groups.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.participants.save()?;
        self.groups.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.paths().is_initialized());
    }

    #[test]
    fn test_save_all_and_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        storage.participants.upsert(Participant::new("Alice")).unwrap();
        storage.save_all().unwrap();

        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.participants.count().unwrap(), 1);
        assert_eq!(reopened.groups.count().unwrap(), 0);
    }
}
