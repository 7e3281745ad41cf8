//! Map view state: selected pin, sidebar paging and sidebar visibility.
//!
//! # Invariants
//! - All operations take the current filtered list from the caller; the
//!   state never caches project records.
//! - Paging never moves outside the list bounds.
//! - The cursor is reset whenever the filtered list changes.

use crate::model::project::Project;
use log::debug;

/// Geographic center of the mock map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

pub const DEFAULT_MAP_CENTER: MapCenter = MapCenter {
    latitude: 37.7749,
    longitude: -122.4194,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSelection {
    selected_id: Option<String>,
    current_index: usize,
    sidebar_open: bool,
}

impl Default for MapSelection {
    fn default() -> Self {
        Self {
            selected_id: None,
            current_index: 0,
            sidebar_open: true,
        }
    }
}

impl MapSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a pin. The sidebar index follows only when `id` is listed.
    pub fn select(&mut self, id: &str, filtered: &[&Project]) {
        self.selected_id = Some(id.to_string());
        if let Some(index) = filtered.iter().position(|project| project.id == id) {
            self.current_index = index;
        }
        debug!(
            "event=map_select module=map status=ok index={}",
            self.current_index
        );
    }

    /// Moves to the next project. Returns `false` at the last entry.
    pub fn next(&mut self, filtered: &[&Project]) -> bool {
        let target = self.current_index + 1;
        match filtered.get(target) {
            Some(project) => {
                self.current_index = target;
                self.selected_id = Some(project.id.clone());
                true
            }
            None => false,
        }
    }

    /// Moves to the previous project. Returns `false` at the first entry.
    pub fn previous(&mut self, filtered: &[&Project]) -> bool {
        let Some(target) = self.current_index.checked_sub(1) else {
            return false;
        };
        match filtered.get(target) {
            Some(project) => {
                self.current_index = target;
                self.selected_id = Some(project.id.clone());
                true
            }
            None => false,
        }
    }

    /// Clears the selection and rewinds the cursor to the first entry.
    ///
    /// Sidebar visibility is kept.
    pub fn reset_cursor(&mut self) {
        self.selected_id = None;
        self.current_index = 0;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Resolves the selected pin against the current filtered list.
    ///
    /// Returns `None` when the selected project has been filtered out.
    pub fn selected_project<'a>(&self, filtered: &[&'a Project]) -> Option<&'a Project> {
        let id = self.selected_id.as_deref()?;
        filtered.iter().copied().find(|project| project.id == id)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::MapSelection;
    use crate::catalog::Catalog;

    #[test]
    fn select_outside_filtered_list_keeps_index() {
        let catalog = Catalog::seed().unwrap();
        let all = catalog.projects().iter().collect::<Vec<_>>();
        let mut map = MapSelection::new();

        map.select("3", &all);
        assert_eq!(map.current_index(), 2);

        let remote_only = vec![all[0], all[2]];
        map.select("2", &remote_only);
        assert_eq!(map.selected_id(), Some("2"));
        assert_eq!(map.current_index(), 2);
        assert!(map.selected_project(&remote_only).is_none());
    }

    #[test]
    fn reset_cursor_rewinds_and_keeps_sidebar() {
        let catalog = Catalog::seed().unwrap();
        let all = catalog.projects().iter().collect::<Vec<_>>();
        let mut map = MapSelection::new();
        map.toggle_sidebar();
        map.select("3", &all);

        map.reset_cursor();
        assert_eq!(map.current_index(), 0);
        assert_eq!(map.selected_id(), None);
        assert!(!map.is_sidebar_open());
        assert!(map.next(&all));
        assert_eq!(map.selected_id(), Some("2"));
    }

    #[test]
    fn sidebar_starts_open_and_closes() {
        let mut map = MapSelection::new();
        assert!(map.is_sidebar_open());
        map.toggle_sidebar();
        assert!(!map.is_sidebar_open());
        map.toggle_sidebar();
        map.close_sidebar();
        assert!(!map.is_sidebar_open());
    }
}
