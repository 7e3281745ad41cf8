//! Domain records shared by every view projection.
//!
//! # Responsibility
//! - Define canonical data structures used by core logic.
//! - Keep serde naming aligned with authored seed data.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Records are read-only after catalog construction.

pub mod chat;
pub mod profile;
pub mod project;
