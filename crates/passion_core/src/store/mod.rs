//! View state containers.
//!
//! # Responsibility
//! - Hold the mutable UI state the views share: filter criteria, view mode,
//!   map pin selection, application modal, chat and profile state.
//! - Derive view data (filtered list, selected records) on read.
//!
//! # Invariants
//! - Stores are single-threaded and synchronous; none performs I/O.
//! - Stores never mutate catalog records.

pub mod application;
pub mod chat;
pub mod map;
pub mod profile;
pub mod selection;
