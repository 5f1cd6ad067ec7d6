//! Group model
//!
//! A named set of participants together with the expenses they share.
//! Expenses live inside their group in recording order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::ids::{GroupId, ParticipantId};

/// A group of participants sharing expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,

    /// Group name, unique (case-insensitive)
    pub name: String,

    /// Members in the order they were given; this order drives remainder
    /// assignment and settlement tie-breaks
    pub members: Vec<ParticipantId>,

    /// Recorded expenses, oldest first
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// When the group was created
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Create a new group with no expenses
    pub fn new(name: impl Into<String>, members: Vec<ParticipantId>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            members,
            expenses: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Normalize a name for case-insensitive lookup
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if a participant belongs to this group
    pub fn has_member(&self, participant: ParticipantId) -> bool {
        self.members.contains(&participant)
    }

    /// Validate the group
    pub fn validate(&self) -> Result<(), GroupValidationError> {
        if self.name.trim().is_empty() {
            return Err(GroupValidationError::EmptyName);
        }
        if self.members.is_empty() {
            return Err(GroupValidationError::NoMembers);
        }
        for (idx, member) in self.members.iter().enumerate() {
            if self.members[..idx].contains(member) {
                return Err(GroupValidationError::DuplicateMember(*member));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValidationError {
    EmptyName,
    NoMembers,
    DuplicateMember(ParticipantId),
}

impl fmt::Display for GroupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Group name cannot be empty"),
            Self::NoMembers => write!(f, "Group must have at least one member"),
            Self::DuplicateMember(id) => write!(f, "Member listed more than once: {}", id),
        }
    }
}

impl std::error::Error for GroupValidationError {}
