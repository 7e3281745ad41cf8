//! Composition root for view state.
//!
//! # Responsibility
//! - Own the catalog, every view store and the notification sink.
//! - Expose the presentation contract as plain methods, so views receive
//!   state by reference instead of through ambient globals.
//!
//! # Invariants
//! - The catalog is shared read-only between the selection store and the
//!   services; nothing mutates it after construction.
//! - Every handler that succeeds emits exactly one notification.
//! - Filter changes rewind the map cursor so paging stays within the new list.

use crate::catalog::{Catalog, CatalogResult};
use crate::config::AppConfig;
use crate::filter::criteria::FilterCriteria;
use crate::model::project::Project;
use crate::notify::{LogSink, Notification, NotificationSink};
use crate::service::apply_service::ApplyService;
use crate::service::error::ServiceResult;
use crate::service::lookup_service::LookupService;
use crate::store::application::ApplicationDraft;
use crate::store::chat::{ChatResult, ChatState, MeetingRequest};
use crate::store::map::MapSelection;
use crate::store::profile::ProfileState;
use crate::store::selection::{SelectionStore, ViewMode};
use chrono::{DateTime, Utc};
use log::info;
use std::sync::Arc;

/// Boxed sink accepted by [`AppState`].
pub type BoxedSink = Box<dyn NotificationSink + Send>;

pub struct AppState {
    selection: SelectionStore<Arc<Catalog>>,
    lookup: LookupService<Arc<Catalog>>,
    apply: ApplyService<Arc<Catalog>>,
    map: MapSelection,
    application: ApplicationDraft,
    chat: ChatState,
    profile: ProfileState,
    sink: BoxedSink,
}

impl AppState {
    /// Builds state over `catalog` with demo chat and profile fixtures.
    pub fn new(catalog: Catalog, sink: BoxedSink, now: DateTime<Utc>) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            selection: SelectionStore::new(Arc::clone(&catalog)),
            lookup: LookupService::new(Arc::clone(&catalog)),
            apply: ApplyService::new(catalog),
            map: MapSelection::new(),
            application: ApplicationDraft::new(),
            chat: ChatState::demo(now),
            profile: ProfileState::demo(),
            sink,
        }
    }

    /// Seed catalog with a logging sink.
    pub fn seeded() -> CatalogResult<Self> {
        Ok(Self::new(Catalog::seed()?, Box::new(LogSink), Utc::now()))
    }

    /// Loads the configured catalog (or the seed) with a logging sink.
    pub fn from_config(config: &AppConfig) -> CatalogResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::seed()?,
        };
        info!(
            "event=app_state_init module=app status=ok projects={}",
            catalog.len()
        );
        Ok(Self::new(catalog, Box::new(LogSink), Utc::now()))
    }

    pub fn filtered_projects(&self) -> Vec<&Project> {
        self.selection.filtered_projects()
    }

    /// Replaces the criteria and rewinds the map cursor.
    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        self.selection.set_filters(criteria);
        self.map.reset_cursor();
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear_filters();
        self.map.reset_cursor();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.selection.criteria()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.selection.set_view_mode(mode);
    }

    pub fn view_mode(&self) -> ViewMode {
        self.selection.view_mode()
    }

    /// Catalog lookup that ignores the active filters.
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.lookup.project_by_id(id)
    }

    pub fn apply_to_project(
        &mut self,
        project_id: &str,
        role_title: &str,
    ) -> ServiceResult<Notification> {
        self.apply
            .apply_to_project(project_id, role_title, &mut self.sink)
    }

    pub fn application(&self) -> &ApplicationDraft {
        &self.application
    }

    pub fn begin_application(&mut self, role_title: impl Into<String>) {
        self.application.begin(role_title);
    }

    pub fn cancel_application(&mut self) {
        self.application.cancel();
    }

    /// Submits the application modal for `project_id`.
    pub fn submit_application(&mut self, project_id: &str) -> ServiceResult<Option<Notification>> {
        self.application
            .submit(project_id, &self.apply, &mut self.sink)
    }

    pub fn map(&self) -> &MapSelection {
        &self.map
    }

    pub fn select_map_pin(&mut self, project_id: &str) {
        let filtered = self.selection.filtered_projects();
        self.map.select(project_id, &filtered);
    }

    pub fn next_map_project(&mut self) -> bool {
        let filtered = self.selection.filtered_projects();
        self.map.next(&filtered)
    }

    pub fn previous_map_project(&mut self) -> bool {
        let filtered = self.selection.filtered_projects();
        self.map.previous(&filtered)
    }

    /// Selected pin, if it is still in the filtered list.
    pub fn selected_map_project(&self) -> Option<&Project> {
        let filtered = self.selection.filtered_projects();
        self.map.selected_project(&filtered)
    }

    pub fn toggle_map_sidebar(&mut self) {
        self.map.toggle_sidebar();
    }

    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatState {
        &mut self.chat
    }

    pub fn send_chat_message(&mut self) -> ChatResult<Notification> {
        self.chat.send_message(&mut self.sink)
    }

    pub fn schedule_meeting(&mut self, request: &MeetingRequest) -> ChatResult<Notification> {
        self.chat.schedule_meeting(request, &mut self.sink)
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileState {
        &mut self.profile
    }
}
