//! Apply-to-role use-case.
//!
//! # Responsibility
//! - Validate an application against the catalog.
//! - Emit exactly one notification on success.
//!
//! # Invariants
//! - No counter is incremented and no application record is stored.
//! - Unknown project maps to `NotFound`; unknown or closed role maps to
//!   `RoleClosed`.

use crate::model::project::Project;
use crate::notify::{Notification, NotificationKind, NotificationSink};
use crate::repo::project_repo::ProjectRepository;
use crate::service::error::{ProjectServiceError, ServiceResult};
use log::{info, warn};

/// Application facade over a project repository.
pub struct ApplyService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ApplyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates `(project_id, role_title)` and notifies `sink` on success.
    ///
    /// # Contract
    /// - Returns the emitted notification.
    /// - On error nothing is emitted.
    pub fn apply_to_project<S: NotificationSink + ?Sized>(
        &self,
        project_id: &str,
        role_title: &str,
        sink: &mut S,
    ) -> ServiceResult<Notification> {
        let Some(project) = self.repo.get_project(project_id) else {
            warn!("event=apply_rejected module=apply status=error reason=not_found project_id={project_id}");
            return Err(ProjectServiceError::NotFound(project_id.to_string()));
        };

        if !is_role_open(project, role_title) {
            warn!("event=apply_rejected module=apply status=error reason=role_closed project_id={project_id}");
            return Err(ProjectServiceError::RoleClosed {
                project_id: project_id.to_string(),
                role_title: role_title.to_string(),
            });
        }

        let notification = Notification::new(
            NotificationKind::ApplicationSubmitted {
                project_id: project.id.clone(),
                role_title: role_title.to_string(),
            },
            format!("Application submitted for {role_title}!"),
        );
        sink.notify(&notification);
        info!(
            "event=apply_submitted module=apply status=ok project_id={} notification_id={}",
            project.id, notification.id
        );

        Ok(notification)
    }
}

fn is_role_open(project: &Project, role_title: &str) -> bool {
    project.role(role_title).is_some_and(|role| role.is_open)
}

#[cfg(test)]
mod tests {
    use super::ApplyService;
    use crate::catalog::Catalog;
    use crate::model::project::Project;
    use crate::notify::RecordingSink;
    use crate::service::error::ProjectServiceError;

    fn catalog_with_closed_role() -> Catalog {
        let mut projects: Vec<Project> = Catalog::seed().expect("seed").projects().to_vec();
        projects[0].roles[1].is_open = false;
        Catalog::new(projects).expect("catalog")
    }

    #[test]
    fn closed_role_is_rejected_without_notification() {
        let service = ApplyService::new(catalog_with_closed_role());
        let mut sink = RecordingSink::new();

        let err = service
            .apply_to_project("1", "Data Scientist", &mut sink)
            .expect_err("closed role must be rejected");
        assert_eq!(
            err,
            ProjectServiceError::RoleClosed {
                project_id: "1".to_string(),
                role_title: "Data Scientist".to_string(),
            }
        );
        assert!(sink.notifications().is_empty());
    }

    #[test]
    fn role_title_match_is_exact() {
        let service = ApplyService::new(Catalog::seed().expect("seed"));
        let mut sink = RecordingSink::new();
        let err = service
            .apply_to_project("1", "frontend developer", &mut sink)
            .expect_err("case differs");
        assert!(matches!(err, ProjectServiceError::RoleClosed { .. }));
    }
}
