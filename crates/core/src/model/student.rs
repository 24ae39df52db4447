use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::MAX_TEXT_LEN;
use crate::model::ids::StudentId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentError {
    #[error("first name cannot be empty")]
    EmptyFirstName,

    #[error("last name cannot be empty")]
    EmptyLastName,

    #[error("names must be at most 100 characters")]
    NameTooLong,
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// A student that passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    first_name: String,
    last_name: String,
}

impl NewStudent {
    /// Validates and normalizes a student's names.
    ///
    /// Both names are trimmed. Duplicate students are allowed.
    ///
    /// # Errors
    ///
    /// Returns `StudentError` if either name is blank or too long.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, StudentError> {
        let first_name = first_name.into().trim().to_string();
        let last_name = last_name.into().trim().to_string();

        if first_name.is_empty() {
            return Err(StudentError::EmptyFirstName);
        }
        if last_name.is_empty() {
            return Err(StudentError::EmptyLastName);
        }
        if first_name.chars().count() > MAX_TEXT_LEN || last_name.chars().count() > MAX_TEXT_LEN {
            return Err(StudentError::NameTooLong);
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Attach the store-assigned id.
    #[must_use]
    pub fn assign_id(self, id: StudentId) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

//
// ─── STUDENT ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
}

impl Student {
    /// Rehydrate a student row. Stored rows are trusted as-is.
    #[must_use]
    pub fn from_persisted(id: StudentId, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }

    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
