//! Participant model
//!
//! A person who can pay for or share in expenses. Once an expense refers to a
//! participant, the participant is never edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ParticipantId;

/// A participant in one or more groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier
    pub id: ParticipantId,

    /// Display name, unique (case-insensitive) across all participants
    pub name: String,

    /// Optional contact phone number, unique when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// When the participant was created
    pub created_at: DateTime<Utc>,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            phone: None,
            created_at: Utc::now(),
        }
    }

    /// Create a new participant with a phone number
    pub fn with_phone(name: impl Into<String>, phone: impl Into<String>) -> Self {
        let mut participant = Self::new(name);
        participant.phone = Some(phone.into());
        participant
    }

    /// Normalize a name for case-insensitive lookup
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Whether `identifier` names this participant, by id or by name
    pub fn matches(&self, identifier: &str) -> bool {
        if let Ok(id) = identifier.parse::<ParticipantId>() {
            if id == self.id {
                return true;
            }
        }
        Self::normalize_name(&self.name) == Self::normalize_name(identifier)
    }

    /// Validate the participant
    pub fn validate(&self) -> Result<(), ParticipantValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ParticipantValidationError::EmptyName);
        }
        if name.len() > 64 {
            return Err(ParticipantValidationError::NameTooLong(name.len()));
        }
        if name.contains('=') {
            return Err(ParticipantValidationError::ReservedCharacter('='));
        }
        if let Some(phone) = &self.phone {
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            let allowed = phone
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
            if digits < 5 || !allowed {
                return Err(ParticipantValidationError::InvalidPhone(phone.clone()));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantValidationError {
    EmptyName,
    NameTooLong(usize),
    ReservedCharacter(char),
    InvalidPhone(String),
}

impl fmt::Display for ParticipantValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Participant name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Participant name too long ({} chars, max 64)", len)
            }
            Self::ReservedCharacter(c) => {
                write!(f, "Participant name cannot contain '{}'", c)
            }
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ParticipantValidationError {}
