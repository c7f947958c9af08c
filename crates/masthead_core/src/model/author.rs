//! Author domain model.
//!
//! # Invariants
//! - `name` has at least one character.
//! - `name` is fixed after construction; writes are accepted and dropped.

use crate::model::validation::{validate_author_name, validate_id, ValidationResult};
use log::debug;
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for an author within one catalog.
pub type AuthorId = Uuid;

/// Writer of articles. Leaf entity with no outgoing references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates an author with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided id.
    ///
    /// # Errors
    /// - `ValidationError::NilId` when `id` is nil.
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> ValidationResult<Self> {
        validate_id(id)?;
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names are construct-once. The write is ignored without error.
    pub fn set_name(&mut self, _name: impl Into<String>) {
        debug!(
            "event=author_rename module=model status=ignored author_id={}",
            self.id
        );
    }
}
