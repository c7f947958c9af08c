//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the registries for one independent author/magazine/article graph.
//! - Verify entity references before registering or reassigning articles.
//! - Route construction, mutation and lookups through one entry point.
//!
//! # Invariants
//! - A registered article always references a registered author and magazine.
//! - Failed construction leaves every registry unchanged.
//! - Article registration is irrevocable.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{ErrorKind, ValidationError};
use crate::repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository, RepoError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Id does not name a registered author.
    UnknownAuthor(AuthorId),
    /// Id does not name a registered magazine.
    UnknownMagazine(MagazineId),
    /// Id does not name a registered article.
    UnknownArticle(ArticleId),
    /// Field constraint violation.
    Validation(ValidationError),
    /// Registry-level failure.
    Repo(RepoError),
}

impl CatalogError {
    /// Maps the error onto the two public error kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownAuthor(_) | Self::UnknownMagazine(_) | Self::UnknownArticle(_) => {
                ErrorKind::Type
            }
            Self::Validation(err) => err.kind(),
            Self::Repo(_) => ErrorKind::Value,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::UnknownAuthor(_) => "unknown_author",
            Self::UnknownMagazine(_) => "unknown_magazine",
            Self::UnknownArticle(_) => "unknown_article",
            Self::Validation(_) => "validation_failed",
            Self::Repo(_) => "duplicate_id",
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAuthor(id) => write!(f, "not a registered author: {id}"),
            Self::UnknownMagazine(id) => write!(f, "not a registered magazine: {id}"),
            Self::UnknownArticle(id) => write!(f, "not a registered article: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Owning context for one relationship graph.
pub struct CatalogService<R: CatalogRepository> {
    pub(crate) repo: R,
}

/// Catalog backed by process memory.
pub type Catalog = CatalogService<InMemoryCatalogRepository>;

impl Catalog {
    /// Creates an empty in-memory catalog.
    pub fn new() -> Self {
        Self::with_repo(InMemoryCatalogRepository::new())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a catalog over the provided registries.
    pub fn with_repo(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers an author.
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let author = Author::new(name).map_err(|err| rejected("author_create", err.into()))?;
        self.register_author(author)
    }

    /// Registers a pre-built author.
    pub fn register_author(&mut self, author: Author) -> CatalogResult<AuthorId> {
        let id = self
            .repo
            .insert_author(author)
            .map_err(|err| rejected("author_create", err.into()))?;
        debug!("event=author_create module=catalog status=ok author_id={id}");
        Ok(id)
    }

    /// Creates and registers a magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::new(name, category)
            .map_err(|err| rejected("magazine_create", err.into()))?;
        self.register_magazine(magazine)
    }

    /// Registers a pre-built magazine.
    pub fn register_magazine(&mut self, magazine: Magazine) -> CatalogResult<MagazineId> {
        let id = self
            .repo
            .insert_magazine(magazine)
            .map_err(|err| rejected("magazine_create", err.into()))?;
        debug!("event=magazine_create module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    /// Creates and registers an article.
    ///
    /// # Errors
    /// - `UnknownAuthor` / `UnknownMagazine` (type kind), checked in that order.
    /// - `Validation(TitleLength)` (value kind) when the title is outside 5..=50 chars.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.ensure_author(author)
            .and_then(|()| self.ensure_magazine(magazine))
            .map_err(|err| rejected("article_create", err))?;
        let article = Article::new(author, magazine, title)
            .map_err(|err| rejected("article_create", err.into()))?;
        self.register_article(article)
    }

    /// Author-side convenience for `create_article`.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    /// Registers a pre-built article after checking both references.
    pub fn register_article(&mut self, article: Article) -> CatalogResult<ArticleId> {
        self.ensure_author(article.author())
            .and_then(|()| self.ensure_magazine(article.magazine()))
            .map_err(|err| rejected("article_create", err))?;
        let (author, magazine) = (article.author(), article.magazine());
        let id = self
            .repo
            .insert_article(article)
            .map_err(|err| rejected("article_create", err.into()))?;
        debug!(
            "event=article_create module=catalog status=ok article_id={id} author_id={author} magazine_id={magazine}"
        );
        Ok(id)
    }

    /// Reassigns an article to another registered author.
    pub fn set_article_author(&mut self, article: ArticleId, author: AuthorId) -> CatalogResult<()> {
        self.ensure_author(author)
            .map_err(|err| rejected("article_reassign_author", err))?;
        self.article_mut(article)
            .map_err(|err| rejected("article_reassign_author", err))?
            .set_author(author);
        debug!(
            "event=article_reassign_author module=catalog status=ok article_id={article} author_id={author}"
        );
        Ok(())
    }

    /// Reassigns an article to another registered magazine.
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> CatalogResult<()> {
        self.ensure_magazine(magazine)
            .map_err(|err| rejected("article_reassign_magazine", err))?;
        self.article_mut(article)
            .map_err(|err| rejected("article_reassign_magazine", err))?
            .set_magazine(magazine);
        debug!(
            "event=article_reassign_magazine module=catalog status=ok article_id={article} magazine_id={magazine}"
        );
        Ok(())
    }

    /// Accepts and drops a title write. Fails only for an unknown article.
    pub fn set_article_title(
        &mut self,
        article: ArticleId,
        title: impl Into<String>,
    ) -> CatalogResult<()> {
        self.article_mut(article)
            .map_err(|err| rejected("article_retitle", err))?
            .set_title(title);
        Ok(())
    }

    /// Accepts and drops an author rename. Fails only for an unknown author.
    pub fn set_author_name(&mut self, author: AuthorId, name: impl Into<String>) -> CatalogResult<()> {
        self.repo
            .get_author_mut(author)
            .ok_or(CatalogError::UnknownAuthor(author))
            .map_err(|err| rejected("author_rename", err))?
            .set_name(name);
        Ok(())
    }

    /// Renames a magazine if the value is valid; returns whether it applied.
    pub fn set_magazine_name(
        &mut self,
        magazine: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<bool> {
        Ok(self
            .magazine_mut(magazine)
            .map_err(|err| rejected("magazine_rename", err))?
            .set_name(name))
    }

    /// Recategorizes a magazine if the value is valid; returns whether it applied.
    pub fn set_magazine_category(
        &mut self,
        magazine: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<bool> {
        Ok(self
            .magazine_mut(magazine)
            .map_err(|err| rejected("magazine_recategorize", err))?
            .set_category(category))
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.repo.get_author(id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.repo.get_magazine(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.repo.get_article(id)
    }

    /// Registered authors in registration order.
    pub fn authors(&self) -> &[Author] {
        self.repo.authors()
    }

    /// Registered magazines in registration order.
    pub fn magazines(&self) -> &[Magazine] {
        self.repo.magazines()
    }

    /// Registered articles in registration order.
    pub fn articles(&self) -> &[Article] {
        self.repo.articles()
    }

    pub(crate) fn ensure_author(&self, id: AuthorId) -> CatalogResult<()> {
        match self.repo.get_author(id) {
            Some(_) => Ok(()),
            None => Err(CatalogError::UnknownAuthor(id)),
        }
    }

    pub(crate) fn ensure_magazine(&self, id: MagazineId) -> CatalogResult<()> {
        match self.repo.get_magazine(id) {
            Some(_) => Ok(()),
            None => Err(CatalogError::UnknownMagazine(id)),
        }
    }

    fn article_mut(&mut self, id: ArticleId) -> CatalogResult<&mut Article> {
        self.repo
            .get_article_mut(id)
            .ok_or(CatalogError::UnknownArticle(id))
    }

    fn magazine_mut(&mut self, id: MagazineId) -> CatalogResult<&mut Magazine> {
        self.repo
            .get_magazine_mut(id)
            .ok_or(CatalogError::UnknownMagazine(id))
    }
}

fn rejected(event: &str, err: CatalogError) -> CatalogError {
    debug!(
        "event={event} module=catalog status=error error_code={}",
        err.code()
    );
    err
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::model::author::Author;
    use crate::model::validation::{ErrorKind, ValidationError};
    use crate::repo::catalog_repo::RepoError;

    #[test]
    fn failed_article_creation_registers_nothing() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Jane").expect("author");
        let magazine = catalog.create_magazine("Byte", "Tech").expect("magazine");

        let err = catalog
            .create_article(author, magazine, "Nope")
            .expect_err("short title must fail");
        assert_eq!(
            err,
            CatalogError::Validation(ValidationError::TitleLength { chars: 4 })
        );
        assert!(catalog.articles().is_empty());
    }

    #[test]
    fn reference_checks_run_before_title_check() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Jane").expect("author");
        let magazine = catalog.create_magazine("Byte", "Tech").expect("magazine");

        let err = catalog
            .create_article(magazine, magazine, "x")
            .expect_err("wrong author id");
        assert_eq!(err, CatalogError::UnknownAuthor(magazine));
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = catalog
            .create_article(author, author, "x")
            .expect_err("wrong magazine id");
        assert_eq!(err, CatalogError::UnknownMagazine(author));
    }

    #[test]
    fn registering_same_author_twice_is_value_kind() {
        let mut catalog = Catalog::new();
        let author = Author::new("Jane").expect("author");
        catalog.register_author(author.clone()).expect("first");

        let err = catalog.register_author(author.clone()).expect_err("duplicate");
        assert_eq!(
            err,
            CatalogError::Repo(RepoError::DuplicateId {
                entity: "author",
                id: author.id()
            })
        );
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn error_source_exposes_validation_cause() {
        use std::error::Error;

        let err = CatalogError::from(ValidationError::EmptyCategory);
        assert!(err.source().is_some());
        assert!(CatalogError::UnknownArticle(uuid::Uuid::nil())
            .source()
            .is_none());
    }
}
