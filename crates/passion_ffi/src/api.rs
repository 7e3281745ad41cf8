//! FFI use-case API for UI-shell calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the shell via FRB.
//! - Own the process-wide `AppState` composition root.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call locks the state once, runs one synchronous operation and
//!   returns a plain envelope.

use passion_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppConfig, AppState, FilterCriteria, Project, ViewMode,
};
use log::error;
use std::sync::{Mutex, OnceLock};

static APP_STATE: OnceLock<Mutex<AppState>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Same `level + log_dir` is idempotent; a different pair returns an error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// List card for one project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_remote: bool,
    /// Lowercase status (`planning|active|completed`).
    pub status: String,
    pub tags: Vec<String>,
    pub open_roles: u32,
    pub views: u64,
    pub applications: u64,
}

/// Role row on the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoleItem {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub is_open: bool,
}

/// Detail view payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetailItem {
    pub card: ProjectListItem,
    pub description: String,
    pub founder_name: String,
    pub founder_avatar: String,
    pub founder_bio: String,
    /// ISO `YYYY-MM-DD`.
    pub start_date: String,
    pub end_date: Option<String>,
    pub roles: Vec<ProjectRoleItem>,
}

/// Filtered list envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListResponse {
    /// Projects in catalog order (empty on failure).
    pub items: Vec<ProjectListItem>,
    /// Active view mode (`list|map`).
    pub view_mode: String,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl ProjectListResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            view_mode: ViewMode::default().as_str().to_string(),
            message: message.into(),
        }
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Id of the emitted notification, when any.
    pub notification_id: Option<String>,
    /// Toast text on success, error text on failure.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, notification_id: Option<String>) -> Self {
        Self {
            ok: true,
            notification_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            notification_id: None,
            message: message.into(),
        }
    }
}

/// Returns the filtered project list for the current criteria.
#[flutter_rust_bridge::frb(sync)]
pub fn projects_list() -> ProjectListResponse {
    with_app_state(list_response).unwrap_or_else(ProjectListResponse::failure)
}

/// Replaces the filter criteria and returns the new filtered list.
///
/// # FFI contract
/// - No validation; unknown `timeline` values simply match nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn projects_set_filters(
    location: String,
    tags: Vec<String>,
    remote: bool,
    timeline: String,
) -> ProjectListResponse {
    let criteria = FilterCriteria {
        location,
        tags,
        remote,
        timeline,
    };
    with_app_state(|state| {
        state.set_filters(criteria);
        list_response(state)
    })
    .unwrap_or_else(ProjectListResponse::failure)
}

/// Resets filters and returns the full catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn projects_clear_filters() -> ProjectListResponse {
    with_app_state(|state| {
        state.clear_filters();
        list_response(state)
    })
    .unwrap_or_else(ProjectListResponse::failure)
}

/// Resolves one project by id, ignoring filters.
///
/// # FFI contract
/// - `None` when the id is unknown or the state is unavailable; the latter
///   is logged as `event=project_get status=error`.
#[flutter_rust_bridge::frb(sync)]
pub fn project_get(id: String) -> Option<ProjectDetailItem> {
    lookup_or_log(
        "project_get",
        with_app_state(|state| state.project_by_id(id.trim()).map(to_detail_item)),
    )
}

/// Switches between `list` and `map` presentation.
#[flutter_rust_bridge::frb(sync)]
pub fn view_mode_set(mode: String) -> ActionResponse {
    let Some(mode) = ViewMode::parse(&mode) else {
        return ActionResponse::failure(format!(
            "view_mode_set failed: unsupported mode `{}`",
            mode.trim()
        ));
    };
    match with_app_state(|state| state.set_view_mode(mode)) {
        Ok(()) => ActionResponse::success(format!("View mode set to {mode}."), None),
        Err(err) => ActionResponse::failure(err),
    }
}

/// Applies to one role; returns toast text on success.
#[flutter_rust_bridge::frb(sync)]
pub fn project_apply(project_id: String, role_title: String) -> ActionResponse {
    let result = with_app_state(|state| {
        state
            .apply_to_project(project_id.trim(), role_title.trim())
            .map_err(|err| err.to_string())
    });
    match result.and_then(|inner| inner) {
        Ok(notification) => ActionResponse::success(
            notification.message,
            Some(notification.id.to_string()),
        ),
        Err(err) => ActionResponse::failure(format!("project_apply failed: {err}")),
    }
}

/// Selects `room_id` and "sends" `text` to it.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_send(room_id: String, text: String) -> ActionResponse {
    let result = with_app_state(|state| {
        state
            .chat_mut()
            .select_room(room_id.trim())
            .map_err(|err| err.to_string())?;
        state.chat_mut().set_draft(text);
        state.send_chat_message().map_err(|err| err.to_string())
    });
    match result.and_then(|inner| inner) {
        Ok(notification) => ActionResponse::success(
            notification.message,
            Some(notification.id.to_string()),
        ),
        Err(err) => ActionResponse::failure(format!("chat_send failed: {err}")),
    }
}

fn with_app_state<T>(f: impl FnOnce(&mut AppState) -> T) -> Result<T, String> {
    let cell = match APP_STATE.get() {
        Some(cell) => cell,
        None => {
            let state = AppState::from_config(&AppConfig::from_env()).map_err(|err| {
                error!("event=app_state_init module=ffi status=error error={err}");
                format!("app state init failed: {err}")
            })?;
            // A concurrent caller may have initialized first; either value is equivalent.
            let _ = APP_STATE.set(Mutex::new(state));
            APP_STATE
                .get()
                .ok_or_else(|| "app state init failed: state unavailable".to_string())?
        }
    };
    let mut guard = cell
        .lock()
        .map_err(|_| "app state lock poisoned".to_string())?;
    Ok(f(&mut guard))
}

fn lookup_or_log<T>(operation: &str, result: Result<Option<T>, String>) -> Option<T> {
    match result {
        Ok(found) => found,
        Err(err) => {
            error!("event={operation} module=ffi status=error error={err}");
            None
        }
    }
}

fn list_response(state: &mut AppState) -> ProjectListResponse {
    let items = state
        .filtered_projects()
        .into_iter()
        .map(to_list_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No projects found.".to_string()
    } else {
        format!("{} projects found.", items.len())
    };
    ProjectListResponse {
        items,
        view_mode: state.view_mode().as_str().to_string(),
        message,
    }
}

fn to_list_item(project: &Project) -> ProjectListItem {
    ProjectListItem {
        id: project.id.clone(),
        title: project.title.clone(),
        summary: project.summary.clone(),
        image: project.image.clone(),
        address: project.location.address.clone(),
        latitude: project.location.latitude,
        longitude: project.location.longitude,
        is_remote: project.is_remote,
        status: project.timeline.status.as_str().to_string(),
        tags: project.tags.clone(),
        open_roles: u32::try_from(project.open_roles().count()).unwrap_or(u32::MAX),
        views: project.views,
        applications: project.applications,
    }
}

fn to_detail_item(project: &Project) -> ProjectDetailItem {
    ProjectDetailItem {
        card: to_list_item(project),
        description: project.description.clone(),
        founder_name: project.founder.name.clone(),
        founder_avatar: project.founder.avatar.clone(),
        founder_bio: project.founder.bio.clone(),
        start_date: project.timeline.start_date.to_string(),
        end_date: project.timeline.end_date.map(|date| date.to_string()),
        roles: project
            .roles
            .iter()
            .map(|role| ProjectRoleItem {
                title: role.title.clone(),
                description: role.description.clone(),
                skills: role.skills.clone(),
                is_open: role.is_open,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        chat_send, core_version, init_logging, lookup_or_log, ping, project_apply, project_get,
        projects_clear_filters, projects_list, projects_set_filters, view_mode_set,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/passion-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn filter_flow_round_trips_through_shared_state() {
        let health = projects_set_filters(String::new(), vec!["Health".to_string()], false, String::new());
        assert_eq!(health.items.len(), 1);
        assert_eq!(health.items[0].title, "Student Mental Health App");

        let remote = projects_set_filters(String::new(), Vec::new(), true, String::new());
        let ids = remote
            .items
            .iter()
            .map(|item| item.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(projects_list().items.len(), 2);

        let cleared = projects_clear_filters();
        assert_eq!(cleared.items.len(), 3);
        assert_eq!(cleared.message, "3 projects found.");
    }

    #[test]
    fn project_get_returns_detail_or_none() {
        let detail = project_get("1".to_string()).expect("project 1 should exist");
        assert_eq!(detail.card.title, "EcoTech Startup");
        assert_eq!(detail.start_date, "2024-01-15");
        assert_eq!(detail.roles.len(), 2);
        assert!(project_get("does-not-exist".to_string()).is_none());
    }

    #[test]
    fn state_failures_resolve_to_none() {
        let failed: Result<Option<u8>, String> = Err("app state lock poisoned".to_string());
        assert_eq!(lookup_or_log("project_get", failed), None);
        assert_eq!(lookup_or_log("project_get", Ok(Some(7u8))), Some(7));
        assert_eq!(lookup_or_log::<u8>("project_get", Ok(None)), None);
    }

    #[test]
    fn project_apply_reports_success_and_role_closed() {
        let ok = project_apply("1".to_string(), "Frontend Developer".to_string());
        assert!(ok.ok, "{}", ok.message);
        assert_eq!(ok.message, "Application submitted for Frontend Developer!");
        assert!(ok.notification_id.is_some());

        let closed = project_apply("1".to_string(), "Nonexistent Role".to_string());
        assert!(!closed.ok);
        assert!(closed.message.contains("not open"));
    }

    #[test]
    fn view_mode_set_rejects_unknown_mode() {
        assert!(view_mode_set("map".to_string()).ok);
        let bad = view_mode_set("grid".to_string());
        assert!(!bad.ok);
        assert!(bad.message.contains("grid"));
    }

    #[test]
    fn chat_send_rejects_blank_text() {
        let blank = chat_send("1".to_string(), "   ".to_string());
        assert!(!blank.ok);
        assert!(chat_send("1".to_string(), "hello team".to_string()).ok);
        assert!(!chat_send("nope".to_string(), "hi".to_string()).ok);
    }
}
