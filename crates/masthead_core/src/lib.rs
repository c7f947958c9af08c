//! Core domain logic for Masthead.
//! Authors, magazines and the articles that join them, plus relationship queries.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{ErrorKind, ValidationError, ValidationResult};
pub use repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository, RepoError, RepoResult};
pub use service::catalog_service::{Catalog, CatalogError, CatalogResult, CatalogService};
pub use service::magazine_queries::CONTRIBUTING_AUTHOR_THRESHOLD;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
