//! UI-shell bindings for `passion_core`.

pub mod api;
