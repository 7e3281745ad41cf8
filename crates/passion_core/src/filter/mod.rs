//! Catalog filtering.
//!
//! # Responsibility
//! - Define user-constructible filter criteria and the panel option lists.
//! - Provide the pure project/criteria predicate.
//!
//! # Invariants
//! - Filters never fail; malformed input degrades to "no match".
//! - Default criteria match every project.

pub mod criteria;
pub mod predicate;
