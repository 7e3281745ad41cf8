//! Detail-view application modal state.
//!
//! # Invariants
//! - `submit` applies only with a selected role.
//! - A successful submit closes the modal and clears the role; a failed one
//!   leaves both untouched so the user can retry or cancel.

use crate::notify::{Notification, NotificationSink};
use crate::repo::project_repo::ProjectRepository;
use crate::service::apply_service::ApplyService;
use crate::service::error::ServiceResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    selected_role: Option<String>,
    modal_open: bool,
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `role_title` and opens the confirmation modal.
    pub fn begin(&mut self, role_title: impl Into<String>) {
        self.selected_role = Some(role_title.into());
        self.modal_open = true;
    }

    pub fn cancel(&mut self) {
        self.selected_role = None;
        self.modal_open = false;
    }

    /// Submits the selected role for `project_id`.
    ///
    /// Returns `Ok(None)` when no role is selected.
    pub fn submit<R, S>(
        &mut self,
        project_id: &str,
        service: &ApplyService<R>,
        sink: &mut S,
    ) -> ServiceResult<Option<Notification>>
    where
        R: ProjectRepository,
        S: NotificationSink + ?Sized,
    {
        let Some(role_title) = self.selected_role.as_deref() else {
            return Ok(None);
        };

        let notification = service.apply_to_project(project_id, role_title, sink)?;
        self.cancel();
        Ok(Some(notification))
    }

    pub fn selected_role(&self) -> Option<&str> {
        self.selected_role.as_deref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}
