//! Core domain logic for the passion projects browser.
//! This crate is the single source of truth for catalog, filter and
//! view-state invariants; UI shells only render what it derives.

pub mod app;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;
pub mod store;

pub use app::{AppState, BoxedSink};
pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use config::{AppConfig, ConfigError};
pub use filter::criteria::{
    timeline_label, ActiveFilter, FilterCriteria, TimelineOption, AVAILABLE_TAGS, TIMELINE_OPTIONS,
};
pub use filter::predicate::matches;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::chat::{ChatMessage, ChatRoom};
pub use model::profile::{Achievement, ProfileStats, RecentProject, UserProfile};
pub use model::project::{
    Founder, Location, Project, ProjectId, ProjectValidationError, Role, Timeline, TimelineStatus,
};
pub use notify::{LogSink, Notification, NotificationKind, NotificationSink, RecordingSink};
pub use repo::project_repo::ProjectRepository;
pub use service::apply_service::ApplyService;
pub use service::error::{ProjectServiceError, ServiceResult};
pub use service::lookup_service::LookupService;
pub use store::application::ApplicationDraft;
pub use store::chat::{
    format_last_message_time, format_message_time, ChatError, ChatResult, ChatState,
    MeetingRequest, MeetingType, MEETING_DURATIONS_MINUTES,
};
pub use store::map::{MapCenter, MapSelection, DEFAULT_MAP_CENTER};
pub use store::profile::ProfileState;
pub use store::selection::{SelectionStore, ViewMode};

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
