//! Magazine-side relationship queries and top-publisher selection.
//!
//! # Invariants
//! - A contributing author has strictly more than `CONTRIBUTING_AUTHOR_THRESHOLD`
//!   articles in the magazine.
//! - `top_publisher` ties resolve to the earliest registered magazine.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::CatalogRepository;
use crate::service::catalog_service::{CatalogResult, CatalogService};
use std::collections::{HashMap, HashSet};

/// Article count an author must exceed to count as contributing.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

impl<R: CatalogRepository> CatalogService<R> {
    /// Articles published in `magazine`, in registration order.
    pub fn magazine_articles(&self, magazine: MagazineId) -> CatalogResult<Vec<&Article>> {
        self.ensure_magazine(magazine)?;
        Ok(self.articles_in(magazine).collect())
    }

    /// Distinct authors who have written for `magazine`.
    pub fn contributors(&self, magazine: MagazineId) -> CatalogResult<Vec<&Author>> {
        self.ensure_magazine(magazine)?;
        let mut seen = HashSet::new();
        Ok(self
            .articles_in(magazine)
            .map(Article::author)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.repo.get_author(id))
            .collect())
    }

    /// Titles published in `magazine` in registration order, or `None` if empty.
    pub fn article_titles(&self, magazine: MagazineId) -> CatalogResult<Option<Vec<&str>>> {
        self.ensure_magazine(magazine)?;
        let titles: Vec<&str> = self.articles_in(magazine).map(Article::title).collect();
        Ok((!titles.is_empty()).then_some(titles))
    }

    /// Authors with more than two articles in `magazine`, or `None` if nobody qualifies.
    pub fn contributing_authors(&self, magazine: MagazineId) -> CatalogResult<Option<Vec<&Author>>> {
        self.ensure_magazine(magazine)?;
        let mut order: Vec<AuthorId> = Vec::new();
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.articles_in(magazine) {
            let count = counts.entry(article.author()).or_insert_with(|| {
                order.push(article.author());
                0
            });
            *count += 1;
        }

        let authors: Vec<&Author> = order
            .into_iter()
            .filter(|id| counts[id] > CONTRIBUTING_AUTHOR_THRESHOLD)
            .filter_map(|id| self.repo.get_author(id))
            .collect();
        Ok((!authors.is_empty()).then_some(authors))
    }

    /// Magazine with the most articles across the catalog.
    ///
    /// Returns `None` when no article is registered, however many magazines
    /// exist. Ties go to the magazine registered first.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let articles = self.repo.articles();
        if articles.is_empty() {
            return None;
        }

        let mut counts: HashMap<MagazineId, usize> = HashMap::new();
        for article in articles {
            *counts.entry(article.magazine()).or_default() += 1;
        }

        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in self.repo.magazines() {
            let count = counts.get(&magazine.id()).copied().unwrap_or(0);
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((magazine, count)),
            }
        }
        best.map(|(magazine, _)| magazine)
    }

    fn articles_in(&self, magazine: MagazineId) -> impl Iterator<Item = &Article> + '_ {
        self.repo
            .articles()
            .iter()
            .filter(move |article| article.magazine() == magazine)
    }
}
