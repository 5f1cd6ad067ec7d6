//! Group repository for JSON storage
//!
//! Groups are stored together with their expenses in groups.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Expense, Group, GroupId, ParticipantId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable group data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GroupData {
    groups: Vec<Group>,
}

/// Repository for group persistence
pub struct GroupRepository {
    path: PathBuf,
    data: RwLock<HashMap<GroupId, Group>>,
}

impl GroupRepository {
    /// Create a new group repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load groups from disk
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: GroupData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.groups.into_iter().map(|g| (g.id, g)).collect();

        Ok(())
    }

    /// Save groups to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let groups = self.get_all()?;
        write_json_atomic(&self.path, &GroupData { groups })
    }

    /// Get a group by ID
    pub fn get(&self, id: GroupId) -> Result<Option<Group>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all groups sorted by name
    pub fn get_all(&self) -> Result<Vec<Group>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut groups: Vec<_> = data.values().cloned().collect();
        groups.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(groups)
    }

    /// Get a group by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Group>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let normalized = Group::normalize_name(name);
        Ok(data
            .values()
            .find(|g| Group::normalize_name(&g.name) == normalized)
            .cloned())
    }

    /// Get all groups a participant belongs to, sorted by name
    pub fn get_by_member(&self, member: ParticipantId) -> Result<Vec<Group>, LedgerError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|g| g.has_member(member))
            .collect())
    }

    /// Insert or update a group
    pub fn upsert(&self, group: Group) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(group.id, group);
        Ok(())
    }

    /// Append an expense to a group's history
    pub fn push_expense(&self, group_id: GroupId, expense: Expense) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let group = data
            .get_mut(&group_id)
            .ok_or_else(|| LedgerError::group_not_found(group_id.to_string()))?;
        group.expenses.push(expense);
        Ok(())
    }

    /// Count groups
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
    use crate::models::{Money, Split, SplitPolicy};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, GroupRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = GroupRepository::new(temp_dir.path().join("groups.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_lookup_by_name_and_member() {
        let (_temp_dir, repo) = create_test_repo();
        let a = ParticipantId::new();
        let b = ParticipantId::new();

        repo.upsert(Group::new("Trip", vec![a, b])).unwrap();
        repo.upsert(Group::new("Flat", vec![a])).unwrap();

        assert!(repo.get_by_name("trip").unwrap().is_some());
        assert!(repo.get_by_name("Nope").unwrap().is_none());

        let names: Vec<_> = repo
            .get_by_member(a)
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Flat", "Trip"]);
        assert_eq!(repo.get_by_member(b).unwrap().len(), 1);
    }

    #[test]
    fn test_push_expense_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let a = ParticipantId::new();
        let group = Group::new("Trip", vec![a]);
        repo.upsert(group.clone()).unwrap();

        let expense = Expense::new(
            a,
            Money::from_minor(500),
            SplitPolicy::Equal,
            vec![Split::new(a, Money::from_minor(500))],
        );
        repo.push_expense(group.id, expense.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = GroupRepository::new(temp_dir.path().join("groups.json"));
        repo2.load().unwrap();
        let loaded = repo2.get(group.id).unwrap().unwrap();
        assert_eq!(loaded.expenses, vec![expense]);
    }

    #[test]
    fn test_push_expense_unknown_group() {
        let (_temp_dir, repo) = create_test_repo();
        let a = ParticipantId::new();
        let expense = Expense::new(a, Money::from_minor(1), SplitPolicy::Equal, vec![]);
        let err = repo.push_expense(GroupId::new(), expense).unwrap_err();
        assert!(err.is_not_found());
    }
}
