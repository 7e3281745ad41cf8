//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define read contracts used by services and stores.
//! - Isolate catalog ownership details from use-case orchestration.
//!
//! # Invariants
//! - Repositories are read-only; the catalog is fixed after load.

pub mod project_repo;
