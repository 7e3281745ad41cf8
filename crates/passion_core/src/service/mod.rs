//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads into use-case level APIs.
//! - Keep UI/FFI layers decoupled from catalog ownership.

pub mod apply_service;
pub mod error;
pub mod lookup_service;
