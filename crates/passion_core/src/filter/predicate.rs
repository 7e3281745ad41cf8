//! Pure project/criteria predicate.

use crate::filter::criteria::FilterCriteria;
use crate::model::project::Project;

/// Returns whether `project` satisfies every active constraint in `criteria`.
///
/// - `location`: case-insensitive substring of `project.location.address`.
/// - `tags`: at least one shared tag.
/// - `remote`: project must be remote.
/// - `timeline`: exact match against the lowercase status string.
pub fn matches(project: &Project, criteria: &FilterCriteria) -> bool {
    if !criteria.location.is_empty()
        && !project
            .location
            .address
            .to_lowercase()
            .contains(&criteria.location.to_lowercase())
    {
        return false;
    }

    if !criteria.tags.is_empty() && !criteria.tags.iter().any(|tag| project.has_tag(tag)) {
        return false;
    }

    if criteria.remote && !project.is_remote {
        return false;
    }

    if !criteria.timeline.is_empty() && project.timeline.status.as_str() != criteria.timeline {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::matches;
    use crate::catalog::Catalog;
    use crate::filter::criteria::FilterCriteria;
    use crate::repo::project_repo::ProjectRepository;

    fn seed() -> Catalog {
        Catalog::seed().expect("seed catalog")
    }

    #[test]
    fn empty_criteria_matches_every_project() {
        let catalog = seed();
        let criteria = FilterCriteria::default();
        assert!(catalog
            .list_projects()
            .iter()
            .all(|project| matches(project, &criteria)));
    }

    #[test]
    fn remote_constraint_overrides_other_matching_fields() {
        let catalog = seed();
        let on_site = catalog.get_project("2").expect("project 2");
        let criteria = FilterCriteria::new()
            .with_remote(true)
            .with_location("new york")
            .with_tags(["Health"])
            .with_timeline("planning");
        assert!(!matches(on_site, &criteria));
    }

    #[test]
    fn location_match_is_case_insensitive_substring() {
        let catalog = seed();
        let project = catalog.get_project("1").expect("project 1");
        assert!(matches(project, &FilterCriteria::new().with_location("FRANCISCO")));
        assert!(matches(project, &FilterCriteria::new().with_location(", ca")));
        assert!(!matches(project, &FilterCriteria::new().with_location("Oakland")));
    }

    #[test]
    fn tag_match_is_exact_and_case_sensitive() {
        let catalog = seed();
        let project = catalog.get_project("2").expect("project 2");
        assert!(!matches(project, &FilterCriteria::new().with_tags(["health"])));
        assert!(matches(
            project,
            &FilterCriteria::new().with_tags(["Food", "Community"])
        ));
    }

    #[test]
    fn unknown_timeline_matches_nothing() {
        let catalog = seed();
        let criteria = FilterCriteria::new().with_timeline("Active");
        assert!(catalog
            .list_projects()
            .iter()
            .all(|project| !matches(project, &criteria)));
    }
}
