//! Error taxonomy shared by project use-case services.

use crate::model::project::ProjectId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ProjectServiceError>;

/// Recoverable failures of lookup and apply use-cases.
///
/// Callers present these as user-facing messages; none is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectServiceError {
    /// No project with this id exists in the catalog.
    NotFound(ProjectId),
    /// The role is closed or does not exist on the project.
    RoleClosed {
        project_id: ProjectId,
        role_title: String,
    },
}

impl Display for ProjectServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "project not found: {id}"),
            Self::RoleClosed {
                project_id,
                role_title,
            } => write!(
                f,
                "role `{role_title}` is not open on project {project_id}"
            ),
        }
    }
}

impl Error for ProjectServiceError {}
