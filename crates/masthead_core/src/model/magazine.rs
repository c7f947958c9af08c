//! Magazine domain model.
//!
//! # Invariants
//! - `name` has 2..=16 characters and `category` is non-empty at all times.
//! - Construction rejects invalid input; setters silently keep the prior value.

use crate::model::validation::{
    validate_category, validate_id, validate_magazine_name, ValidationResult,
};
use log::debug;
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for a magazine within one catalog.
pub type MagazineId = Uuid;

/// Publication that articles appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a magazine with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is outside 2..=16 chars.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> ValidationResult<Self> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided id.
    ///
    /// Name is checked before category.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ValidationResult<Self> {
        validate_id(id)?;
        let name = name.into();
        validate_magazine_name(&name)?;
        let category = category.into();
        validate_category(&category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when the new value is 2..=16 characters.
    ///
    /// Returns whether the write was applied. Invalid values are dropped
    /// without error and the previous name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if validate_magazine_name(&name).is_err() {
            debug!(
                "event=magazine_rename module=model status=ignored magazine_id={} chars={}",
                self.id,
                name.chars().count()
            );
            return false;
        }
        self.name = name;
        true
    }

    /// Replaces the category when the new value is non-empty.
    ///
    /// Returns whether the write was applied.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if validate_category(&category).is_err() {
            debug!(
                "event=magazine_recategorize module=model status=ignored magazine_id={}",
                self.id
            );
            return false;
        }
        self.category = category;
        true
    }
}
