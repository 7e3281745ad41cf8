//! Project read access contract and in-memory implementation.
//!
//! # Responsibility
//! - Give services one read-only seam over the project catalog.
//! - Keep catalog ownership (`Catalog`, `Arc<Catalog>`, borrowed) a caller choice.
//!
//! # Invariants
//! - `list_projects` returns catalog order.
//! - `get_project` bypasses any filter state.

use crate::catalog::Catalog;
use crate::model::project::Project;
use std::sync::Arc;

/// Read-only repository interface over the project catalog.
pub trait ProjectRepository {
    fn list_projects(&self) -> &[Project];

    /// Resolves one project by exact id. Linear scan over a small catalog.
    fn get_project(&self, id: &str) -> Option<&Project> {
        self.list_projects().iter().find(|project| project.id == id)
    }
}

impl ProjectRepository for Catalog {
    fn list_projects(&self) -> &[Project] {
        self.projects()
    }
}

impl<R: ProjectRepository + ?Sized> ProjectRepository for &R {
    fn list_projects(&self) -> &[Project] {
        (**self).list_projects()
    }

    fn get_project(&self, id: &str) -> Option<&Project> {
        (**self).get_project(id)
    }
}

impl<R: ProjectRepository + ?Sized> ProjectRepository for Arc<R> {
    fn list_projects(&self) -> &[Project] {
        (**self).list_projects()
    }

    fn get_project(&self, id: &str) -> Option<&Project> {
        (**self).get_project(id)
    }
}
