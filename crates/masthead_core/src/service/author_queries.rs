//! Author-side relationship queries.
//!
//! Every query is a full scan of the article registry filtered by author id.
//! Deduplicated results keep first-encounter order, but callers should not
//! rely on it.

use crate::model::article::Article;
use crate::model::author::AuthorId;
use crate::model::magazine::Magazine;
use crate::repo::catalog_repo::CatalogRepository;
use crate::service::catalog_service::{CatalogResult, CatalogService};
use std::collections::HashSet;

impl<R: CatalogRepository> CatalogService<R> {
    /// Articles written by `author`, in registration order.
    pub fn author_articles(&self, author: AuthorId) -> CatalogResult<Vec<&Article>> {
        self.ensure_author(author)?;
        Ok(self.articles_by(author).collect())
    }

    /// Distinct magazines `author` has written for.
    pub fn author_magazines(&self, author: AuthorId) -> CatalogResult<Vec<&Magazine>> {
        self.ensure_author(author)?;
        let mut seen = HashSet::new();
        Ok(self
            .articles_by(author)
            .map(Article::magazine)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.repo.get_magazine(id))
            .collect())
    }

    /// Distinct categories across the author's magazines.
    ///
    /// Returns `None` when the author has not written anything.
    pub fn topic_areas(&self, author: AuthorId) -> CatalogResult<Option<Vec<&str>>> {
        let magazines = self.author_magazines(author)?;
        if magazines.is_empty() {
            return Ok(None);
        }
        let mut seen = HashSet::new();
        Ok(Some(
            magazines
                .into_iter()
                .map(Magazine::category)
                .filter(|category| seen.insert(*category))
                .collect(),
        ))
    }

    fn articles_by(&self, author: AuthorId) -> impl Iterator<Item = &Article> + '_ {
        self.repo
            .articles()
            .iter()
            .filter(move |article| article.author() == author)
    }
}
