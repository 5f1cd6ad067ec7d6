//! Participant repository for JSON storage
//!
//! Manages loading and saving participants to participants.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Participant, ParticipantId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable participant data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ParticipantData {
    participants: Vec<Participant>,
}

/// Repository for participant persistence
pub struct ParticipantRepository {
    path: PathBuf,
    data: RwLock<HashMap<ParticipantId, Participant>>,
    /// Index: normalized name -> participant_id
    by_name: RwLock<HashMap<String, ParticipantId>>,
}

impl ParticipantRepository {
    /// Create a new participant repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_name: RwLock::new(HashMap::new()),
        }
    }

    /// Load participants from disk
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: ParticipantData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_name = self
            .by_name
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_name.clear();

        for participant in file_data.participants {
            by_name.insert(Participant::normalize_name(&participant.name), participant.id);
            data.insert(participant.id, participant);
        }

        Ok(())
    }

    /// Save participants to disk, in creation order
    pub fn save(&self) -> Result<(), LedgerError> {
        let participants = self.get_all()?;
        write_json_atomic(&self.path, &ParticipantData { participants })
    }

    /// Get a participant by ID
    pub fn get(&self, id: ParticipantId) -> Result<Option<Participant>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all participants, oldest first
    pub fn get_all(&self) -> Result<Vec<Participant>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut participants: Vec<_> = data.values().cloned().collect();
        participants.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(participants)
    }

    /// Get a participant by exact name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Participant>, LedgerError> {
        let id = {
            let by_name = self
                .by_name
                .read()
                .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
            by_name.get(&Participant::normalize_name(name)).copied()
        };

        match id {
            Some(id) => self.get(id),
            None => Ok(None),
        }
    }

    /// Get a participant by phone number
    pub fn get_by_phone(&self, phone: &str) -> Result<Option<Participant>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let phone = phone.trim();
        Ok(data
            .values()
            .find(|p| p.phone.as_deref().map(str::trim) == Some(phone))
            .cloned())
    }

    /// Resolve many ids at once, keeping the given order
    ///
    /// Ids with no stored participant are left out.
    pub fn get_many(&self, ids: &[ParticipantId]) -> Result<Vec<Participant>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(ids.iter().filter_map(|id| data.get(id).cloned()).collect())
    }

    /// Insert or update a participant
    pub fn upsert(&self, participant: Participant) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_name = self
            .by_name
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(existing) = data.get(&participant.id) {
            by_name.remove(&Participant::normalize_name(&existing.name));
        }
        by_name.insert(Participant::normalize_name(&participant.name), participant.id);
        data.insert(participant.id, participant);

        Ok(())
    }

    /// Count participants
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ParticipantRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("participants.json");
        let repo = ParticipantRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_lookup() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let alice = Participant::with_phone("Alice", "555-0101");
        repo.upsert(alice.clone()).unwrap();

        assert_eq!(repo.get(alice.id).unwrap().unwrap().name, "Alice");
        assert_eq!(repo.get_by_name("alice").unwrap().unwrap().id, alice.id);
        assert_eq!(repo.get_by_phone(" 555-0101 ").unwrap().unwrap().id, alice.id);
        assert!(repo.get_by_name("bob").unwrap().is_none());
    }

    #[test]
    fn test_get_many_keeps_order() {
        let (_temp_dir, repo) = create_test_repo();
        let a = Participant::new("a");
        let b = Participant::new("b");
        repo.upsert(a.clone()).unwrap();
        repo.upsert(b.clone()).unwrap();

        let found = repo.get_many(&[b.id, ParticipantId::new(), a.id]).unwrap();
        let names: Vec<_> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let alice = Participant::new("Alice");
        repo.upsert(alice.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = ParticipantRepository::new(temp_dir.path().join("participants.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(alice.id).unwrap().unwrap(), alice);
        assert_eq!(repo2.get_by_name("ALICE").unwrap().unwrap().id, alice.id);
    }
}
