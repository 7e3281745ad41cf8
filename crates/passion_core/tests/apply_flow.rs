use passion_core::{
    ApplicationDraft, ApplyService, Catalog, LookupService, NotificationKind, ProjectServiceError,
    RecordingSink,
};

fn seed() -> Catalog {
    Catalog::seed().unwrap()
}

#[test]
fn lookup_resolves_present_id_and_signals_missing_id() {
    let lookup = LookupService::new(seed());

    let project = lookup.project_by_id("1").unwrap();
    assert_eq!(project.title, "EcoTech Startup");
    assert!(lookup.project_by_id("does-not-exist").is_none());

    let err = lookup.require_project("does-not-exist").unwrap_err();
    assert_eq!(
        err,
        ProjectServiceError::NotFound("does-not-exist".to_string())
    );
}

#[test]
fn apply_to_open_role_emits_one_notification() {
    let service = ApplyService::new(seed());
    let mut sink = RecordingSink::new();

    let notification = service
        .apply_to_project("1", "Frontend Developer", &mut sink)
        .unwrap();

    assert_eq!(sink.notifications().len(), 1);
    assert_eq!(sink.notifications()[0], notification);
    assert_eq!(
        notification.kind,
        NotificationKind::ApplicationSubmitted {
            project_id: "1".to_string(),
            role_title: "Frontend Developer".to_string(),
        }
    );
    assert_eq!(
        notification.message,
        "Application submitted for Frontend Developer!"
    );
}

#[test]
fn apply_to_unknown_role_is_role_closed() {
    let service = ApplyService::new(seed());
    let mut sink = RecordingSink::new();

    let err = service
        .apply_to_project("1", "Nonexistent Role", &mut sink)
        .unwrap_err();
    assert!(matches!(err, ProjectServiceError::RoleClosed { .. }));
    assert!(sink.notifications().is_empty());
}

#[test]
fn apply_to_unknown_project_is_not_found() {
    let service = ApplyService::new(seed());
    let mut sink = RecordingSink::new();

    let err = service
        .apply_to_project("42", "Frontend Developer", &mut sink)
        .unwrap_err();
    assert_eq!(err, ProjectServiceError::NotFound("42".to_string()));
    assert!(err.to_string().contains("42"));
}

#[test]
fn apply_never_changes_counters() {
    let catalog = seed();
    let service = ApplyService::new(&catalog);
    let mut sink = RecordingSink::new();

    service
        .apply_to_project("3", "Backend Developer", &mut sink)
        .unwrap();
    service
        .apply_to_project("3", "Backend Developer", &mut sink)
        .unwrap();

    assert_eq!(catalog.projects()[2].applications, 8);
    assert_eq!(catalog.projects()[2].views, 567);
    assert_eq!(sink.notifications().len(), 2);
}

#[test]
fn application_draft_closes_after_successful_submit() {
    let service = ApplyService::new(seed());
    let mut sink = RecordingSink::new();
    let mut draft = ApplicationDraft::new();

    draft.begin("UX Designer");
    assert!(draft.is_modal_open());
    assert_eq!(draft.selected_role(), Some("UX Designer"));

    let notification = draft.submit("2", &service, &mut sink).unwrap();
    assert!(notification.is_some());
    assert!(!draft.is_modal_open());
    assert_eq!(draft.selected_role(), None);
}

#[test]
fn application_draft_stays_open_after_failed_submit() {
    let service = ApplyService::new(seed());
    let mut sink = RecordingSink::new();
    let mut draft = ApplicationDraft::new();

    draft.begin("UX Designer");
    let err = draft.submit("1", &service, &mut sink).unwrap_err();
    assert!(matches!(err, ProjectServiceError::RoleClosed { .. }));
    assert!(draft.is_modal_open());
    assert_eq!(draft.selected_role(), Some("UX Designer"));

    draft.cancel();
    assert!(!draft.is_modal_open());
}

#[test]
fn application_draft_without_role_is_noop() {
    let service = ApplyService::new(seed());
    let mut sink = RecordingSink::new();
    let mut draft = ApplicationDraft::new();

    assert_eq!(draft.submit("1", &service, &mut sink).unwrap(), None);
    assert!(sink.notifications().is_empty());
}
