//! Group service
//!
//! Creates groups from existing participants and resolves group members.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Group, GroupId, Participant};
use crate::storage::Storage;

use super::participant::ParticipantService;

/// Service for group management
pub struct GroupService<'a> {
    storage: &'a Storage,
}

impl<'a> GroupService<'a> {
    /// Create a new group service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new group
    ///
    /// Every member must already exist. Member order is kept; it decides who
    /// absorbs EQUAL-split remainders and the order of settlement transfers.
    pub fn create(&self, name: &str, members: &[String]) -> LedgerResult<Group> {
        let name = name.trim();

        if self.storage.groups.get_by_name(name)?.is_some() {
            return Err(LedgerError::Duplicate {
                entity_type: "Group",
                identifier: name.to_string(),
            });
        }

        let participants = ParticipantService::new(self.storage);
        let mut missing = Vec::new();
        let mut member_ids = Vec::with_capacity(members.len());
        for member in members {
            match participants.find(member)? {
                Some(p) => member_ids.push(p.id),
                None => missing.push(member.trim().to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(LedgerError::participant_not_found(missing.join(", ")));
        }

        let group = Group::new(name, member_ids);
        group
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.groups.upsert(group.clone())?;
        self.storage.groups.save()?;

        info!(group = %group.id, name = %group.name, members = group.members.len(), "Created group");
        Ok(group)
    }

    /// Find a group by name or ID
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Group>> {
        if let Some(group) = self.storage.groups.get_by_name(identifier)? {
            return Ok(Some(group));
        }
        match identifier.parse::<GroupId>() {
            Ok(id) => self.storage.groups.get(id),
            Err(_) => Ok(None),
        }
    }

    /// Find a group or fail with a not-found error
    pub fn require(&self, identifier: &str) -> LedgerResult<Group> {
        self.find(identifier)?
            .ok_or_else(|| LedgerError::group_not_found(identifier.trim()))
    }

    /// List all groups, sorted by name
    pub fn list(&self) -> LedgerResult<Vec<Group>> {
        self.storage.groups.get_all()
    }

    /// List the groups a participant belongs to
    pub fn list_for_member(&self, member: &str) -> LedgerResult<Vec<Group>> {
        let participant = ParticipantService::new(self.storage).require(member)?;
        self.storage.groups.get_by_member(participant.id)
    }

    /// Resolve a group's member ids into participants, in member order
    ///
    /// Members whose participant record has disappeared are left out.
    pub fn members(&self, group: &Group) -> LedgerResult<Vec<Participant>> {
        self.storage.participants.get_many(&group.members)
    }
}
