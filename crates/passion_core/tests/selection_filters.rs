use passion_core::{
    matches, Catalog, FilterCriteria, Project, ProjectRepository, SelectionStore, ViewMode,
};

fn store() -> SelectionStore<Catalog> {
    SelectionStore::new(Catalog::seed().unwrap())
}

fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|project| project.title.clone()).collect()
}

#[test]
fn default_criteria_returns_full_catalog_in_order() {
    let store = store();
    assert_eq!(
        titles(&store.filtered_projects()),
        vec![
            "EcoTech Startup",
            "Student Mental Health App",
            "Local Food Delivery Network"
        ]
    );
    assert_eq!(store.view_mode(), ViewMode::List);
}

#[test]
fn health_tag_selects_only_mental_health_app() {
    let mut store = store();
    store.set_filters(FilterCriteria::new().with_tags(["Health"]));
    assert_eq!(
        titles(&store.filtered_projects()),
        vec!["Student Mental Health App"]
    );
}

#[test]
fn remote_only_excludes_on_site_projects() {
    let mut store = store();
    store.set_filters(FilterCriteria::new().with_remote(true));
    assert_eq!(
        titles(&store.filtered_projects()),
        vec!["EcoTech Startup", "Local Food Delivery Network"]
    );
}

#[test]
fn remote_false_applies_no_constraint() {
    let mut store = store();
    store.set_filters(FilterCriteria::new().with_remote(false));
    assert_eq!(store.filtered_count(), 3);
}

#[test]
fn remote_constraint_wins_for_every_on_site_project() {
    let catalog = Catalog::seed().unwrap();
    let variants = [
        FilterCriteria::new().with_remote(true),
        FilterCriteria::new().with_remote(true).with_location("NY"),
        FilterCriteria::new()
            .with_remote(true)
            .with_tags(["Health", "Education"])
            .with_timeline("planning"),
    ];

    for project in catalog.list_projects().iter().filter(|p| !p.is_remote) {
        for criteria in &variants {
            assert!(!matches(project, criteria));
        }
    }
}

#[test]
fn filters_combine_with_and() {
    let mut store = store();
    store.set_filters(
        FilterCriteria::new()
            .with_tags(["Sustainability"])
            .with_location("los angeles"),
    );
    assert_eq!(
        titles(&store.filtered_projects()),
        vec!["Local Food Delivery Network"]
    );

    store.set_filters(
        FilterCriteria::new()
            .with_tags(["Sustainability"])
            .with_timeline("planning"),
    );
    assert!(store.filtered_projects().is_empty());
}

#[test]
fn timeline_filter_is_exact_status_match() {
    let mut store = store();
    store.set_filters(FilterCriteria::new().with_timeline("active"));
    assert_eq!(
        titles(&store.filtered_projects()),
        vec!["EcoTech Startup", "Local Food Delivery Network"]
    );

    store.set_filters(FilterCriteria::new().with_timeline("archived"));
    assert_eq!(store.filtered_count(), 0);
}

#[test]
fn filtering_is_idempotent() {
    let mut store = store();
    store.set_filters(FilterCriteria::new().with_tags(["Sustainability"]));
    let first = titles(&store.filtered_projects());
    let second = titles(&store.filtered_projects());
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn set_filters_replaces_previous_criteria_wholesale() {
    let mut store = store();
    store.set_filters(
        FilterCriteria::new()
            .with_remote(true)
            .with_location("francisco"),
    );
    store.set_filters(FilterCriteria::new().with_tags(["Food"]));

    assert!(!store.criteria().remote);
    assert!(store.criteria().location.is_empty());
    assert_eq!(
        titles(&store.filtered_projects()),
        vec!["Local Food Delivery Network"]
    );
}

#[test]
fn clear_filters_restores_full_catalog_order() {
    let mut store = store();
    let full = titles(&store.filtered_projects());

    store.set_filters(FilterCriteria::new().with_tags(["Health"]).with_remote(true));
    assert!(store.filtered_projects().is_empty());

    store.clear_filters();
    assert_eq!(titles(&store.filtered_projects()), full);
    assert!(store.criteria().is_empty());
}

#[test]
fn view_mode_does_not_affect_filtering() {
    let mut store = store();
    store.set_filters(FilterCriteria::new().with_remote(true));
    let before = titles(&store.filtered_projects());

    store.set_view_mode(ViewMode::Map);
    assert_eq!(store.view_mode(), ViewMode::Map);
    assert_eq!(titles(&store.filtered_projects()), before);
}
