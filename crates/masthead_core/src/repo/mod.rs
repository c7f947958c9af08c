//! Registry layer for catalog entities.
//!
//! # Responsibility
//! - Define the storage contract used by the catalog service.
//! - Keep lookup and ordering details out of query logic.
//!
//! # Invariants
//! - Records are validated before they reach a repository.
//! - Registries never forget a record once inserted.

pub mod catalog_repo;
