//! Participant service
//!
//! Creates participants and looks them up by name or id.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Participant, ParticipantId};
use crate::storage::Storage;

/// Service for participant management
pub struct ParticipantService<'a> {
    storage: &'a Storage,
}

impl<'a> ParticipantService<'a> {
    /// Create a new participant service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new participant
    ///
    /// Names are unique (case-insensitive); so are phone numbers when given.
    pub fn create(&self, name: &str, phone: Option<&str>) -> LedgerResult<Participant> {
        let participant = self.prepare(name, phone)?;

        self.storage.participants.upsert(participant.clone())?;
        self.storage.participants.save()?;

        info!(participant = %participant.id, name = %participant.name, "Created participant");
        Ok(participant)
    }

    /// Create several participants at once
    ///
    /// Every name is checked against storage and against the rest of the
    /// batch before anything is written, so either all are created or none.
    pub fn create_many(&self, names: &[String]) -> LedgerResult<Vec<Participant>> {
        let mut batch: Vec<Participant> = Vec::with_capacity(names.len());
        for name in names {
            let participant = self.prepare(name, None)?;
            let key = Participant::normalize_name(&participant.name);
            if batch.iter().any(|p| Participant::normalize_name(&p.name) == key) {
                return Err(LedgerError::Duplicate {
                    entity_type: "Participant",
                    identifier: participant.name,
                });
            }
            batch.push(participant);
        }

        for participant in &batch {
            self.storage.participants.upsert(participant.clone())?;
        }
        self.storage.participants.save()?;

        info!(count = batch.len(), "Created participants");
        Ok(batch)
    }

    /// Build a participant that doesn't clash with any stored one
    fn prepare(&self, name: &str, phone: Option<&str>) -> LedgerResult<Participant> {
        let name = name.trim();

        if self.storage.participants.get_by_name(name)?.is_some() {
            return Err(LedgerError::Duplicate {
                entity_type: "Participant",
                identifier: name.to_string(),
            });
        }

        let phone = phone.map(str::trim).filter(|p| !p.is_empty());
        if let Some(phone) = phone {
            if self.storage.participants.get_by_phone(phone)?.is_some() {
                return Err(LedgerError::Duplicate {
                    entity_type: "Phone number",
                    identifier: phone.to_string(),
                });
            }
        }

        let participant = match phone {
            Some(phone) => Participant::with_phone(name, phone),
            None => Participant::new(name),
        };
        participant
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        Ok(participant)
    }

    /// Find a participant by name or ID
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Participant>> {
        if let Some(participant) = self.storage.participants.get_by_name(identifier)? {
            return Ok(Some(participant));
        }
        match identifier.parse::<ParticipantId>() {
            Ok(id) => self.storage.participants.get(id),
            Err(_) => Ok(None),
        }
    }

    /// Find a participant or fail with a not-found error
    pub fn require(&self, identifier: &str) -> LedgerResult<Participant> {
        self.find(identifier)?
            .ok_or_else(|| LedgerError::participant_not_found(identifier.trim()))
    }

    /// List all participants, oldest first
    pub fn list(&self) -> LedgerResult<Vec<Participant>> {
        self.storage.participants.get_all()
    }
}
