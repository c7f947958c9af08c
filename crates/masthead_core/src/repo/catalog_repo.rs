//! Registry contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold every registered author, magazine and article in insertion order.
//! - Resolve ids to records without scanning.
//!
//! # Invariants
//! - Registries are append-only; there is no removal path.
//! - An id is registered at most once across all three kinds, so an id
//!   never resolves to both an author and a magazine.
//! - Slices returned by `authors()`, `magazines()` and `articles()` are in
//!   registration order.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Registry write errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateId { entity: &'static str, id: Uuid },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { entity, id } => write!(f, "{entity} already registered: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage seam for the three registries.
pub trait CatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId>;

    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn get_article(&self, id: ArticleId) -> Option<&Article>;

    fn get_author_mut(&mut self, id: AuthorId) -> Option<&mut Author>;
    fn get_magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;
    fn get_article_mut(&mut self, id: ArticleId) -> Option<&mut Article>;

    fn authors(&self) -> &[Author];
    fn magazines(&self) -> &[Magazine];
    fn articles(&self) -> &[Article];
}

/// One insertion-ordered registry with an id index.
#[derive(Debug)]
struct Registry<T> {
    entity: &'static str,
    items: Vec<T>,
    positions: HashMap<Uuid, usize>,
}

impl<T> Registry<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn push(&mut self, id: Uuid, item: T) -> RepoResult<Uuid> {
        if self.positions.contains_key(&id) {
            return Err(RepoError::DuplicateId {
                entity: self.entity,
                id,
            });
        }
        self.positions.insert(id, self.items.len());
        self.items.push(item);
        Ok(id)
    }

    fn get(&self, id: Uuid) -> Option<&T> {
        self.positions.get(&id).map(|&index| &self.items[index])
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut T> {
        let index = *self.positions.get(&id)?;
        self.items.get_mut(index)
    }
}

/// Process-memory registries backed by vectors.
#[derive(Debug)]
pub struct InMemoryCatalogRepository {
    authors: Registry<Author>,
    magazines: Registry<Magazine>,
    articles: Registry<Article>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self {
            authors: Registry::new("author"),
            magazines: Registry::new("magazine"),
            articles: Registry::new("article"),
        }
    }

    fn ensure_unclaimed(&self, entity: &'static str, id: Uuid) -> RepoResult<()> {
        let claimed = self.authors.positions.contains_key(&id)
            || self.magazines.positions.contains_key(&id)
            || self.articles.positions.contains_key(&id);
        if claimed {
            return Err(RepoError::DuplicateId { entity, id });
        }
        Ok(())
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        self.ensure_unclaimed(self.authors.entity, author.id())?;
        self.authors.push(author.id(), author)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        self.ensure_unclaimed(self.magazines.entity, magazine.id())?;
        self.magazines.push(magazine.id(), magazine)
    }

    fn insert_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        self.ensure_unclaimed(self.articles.entity, article.id())?;
        self.articles.push(article.id(), article)
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id)
    }

    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(id)
    }

    fn get_article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id)
    }

    fn get_author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.get_mut(id)
    }

    fn get_magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.get_mut(id)
    }

    fn get_article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.get_mut(id)
    }

    fn authors(&self) -> &[Author] {
        &self.authors.items
    }

    fn magazines(&self) -> &[Magazine] {
        &self.magazines.items
    }

    fn articles(&self) -> &[Article] {
        &self.articles.items
    }
}
