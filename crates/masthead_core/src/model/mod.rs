//! Domain model for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three entity records and their field constraints.
//! - Keep relationship traversal out of the records themselves.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil uuid.
//! - A record that exists has passed construction-time validation.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
