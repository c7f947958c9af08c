//! Article domain model.
//!
//! # Responsibility
//! - Join exactly one author to exactly one magazine under a fixed title.
//!
//! # Invariants
//! - `title` has 5..=50 characters and never changes after construction.
//! - `author` and `magazine` always hold ids; whether they resolve is
//!   enforced by the catalog, which is the only caller allowed to reassign them.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{validate_id, validate_title, ValidationResult};
use log::debug;
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for an article within one catalog.
pub type ArticleId = Uuid;

/// Piece written by one author for one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Creates an unregistered article with a generated id.
    ///
    /// Only the title is checked here. Use `CatalogService::create_article`
    /// to also verify the references and register the result.
    pub fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<Self> {
        Self::with_id(Uuid::new_v4(), author, magazine, title)
    }

    /// Creates an unregistered article with a caller-provided id.
    pub fn with_id(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<Self> {
        validate_id(id)?;
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id,
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Titles are immutable. Any value, valid or not, is dropped.
    pub fn set_title(&mut self, _title: impl Into<String>) {
        debug!(
            "event=article_retitle module=model status=ignored article_id={}",
            self.id
        );
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
