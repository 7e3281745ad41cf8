//! Selection store: filter criteria, view mode and the derived project list.

use crate::filter::criteria::FilterCriteria;
use crate::filter::predicate::matches;
use crate::model::project::Project;
use crate::repo::project_repo::ProjectRepository;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// How the home view presents the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Map => "map",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "list" => Some(Self::List),
            "map" => Some(Self::Map),
            _ => None,
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single source of truth for the active criteria and view mode.
///
/// The filtered list is recomputed from the catalog on every read, so it can
/// never go stale relative to the criteria.
pub struct SelectionStore<R: ProjectRepository> {
    repo: R,
    criteria: FilterCriteria,
    view_mode: ViewMode,
}

impl<R: ProjectRepository> SelectionStore<R> {
    /// Creates a store with empty criteria and list view.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            criteria: FilterCriteria::default(),
            view_mode: ViewMode::default(),
        }
    }

    /// Projects matching the current criteria, in catalog order.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        self.repo
            .list_projects()
            .iter()
            .filter(|project| matches(project, &self.criteria))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.repo
            .list_projects()
            .iter()
            .filter(|project| matches(project, &self.criteria))
            .count()
    }

    /// Replaces the criteria wholesale. No validation is performed.
    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        debug!(
            "event=filters_set module=selection status=ok active={} matched={}",
            self.criteria.active_filters().len(),
            self.filtered_count()
        );
    }

    /// Resets the criteria to the match-all default.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        debug!("event=filters_cleared module=selection status=ok");
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Pure state change; filtering is unaffected.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Underlying repository, for lookups that bypass the filters.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::ViewMode;

    #[test]
    fn view_mode_round_trips_wire_strings() {
        assert_eq!(ViewMode::parse("map"), Some(ViewMode::Map));
        assert_eq!(ViewMode::parse(" list "), Some(ViewMode::List));
        assert_eq!(ViewMode::parse("grid"), None);
        assert_eq!(ViewMode::Map.to_string(), "map");
    }
}
