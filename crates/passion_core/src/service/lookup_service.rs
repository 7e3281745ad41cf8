//! Project lookup use-case.
//!
//! # Responsibility
//! - Resolve one project by id directly from the catalog.
//!
//! # Invariants
//! - Lookups ignore the selection store's filter state.
//! - A missing id is a signal (`None` / `NotFound`), never a panic.

use crate::model::project::Project;
use crate::repo::project_repo::ProjectRepository;
use crate::service::error::{ProjectServiceError, ServiceResult};
use log::debug;

/// Lookup facade over a project repository.
pub struct LookupService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> LookupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the project with exactly this id, or `None`.
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.repo.get_project(id)
    }

    /// Like [`Self::project_by_id`], but maps absence to `NotFound`.
    pub fn require_project(&self, id: &str) -> ServiceResult<&Project> {
        self.project_by_id(id).ok_or_else(|| {
            debug!("event=project_lookup module=lookup status=not_found id={id}");
            ProjectServiceError::NotFound(id.to_string())
        })
    }
}
