//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into construction, mutation and query APIs.
//! - Keep callers decoupled from registry storage details.

mod author_queries;
pub mod catalog_service;
pub mod magazine_queries;
