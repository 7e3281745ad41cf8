//! Filter criteria and filter-panel helpers.

use crate::model::project::TimelineStatus;
use serde::{Deserialize, Serialize};

/// Tags offered by the filter panel, in display order.
pub const AVAILABLE_TAGS: [&str; 11] = [
    "Tech",
    "Environment",
    "Education",
    "Health",
    "Food",
    "Sustainability",
    "Mobile App",
    "Community",
    "Local Business",
    "Logistics",
    "Smart Cities",
];

/// One entry of the project-status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineOption {
    /// Criteria value; empty means "no timeline constraint".
    pub value: &'static str,
    pub label: &'static str,
}

pub const TIMELINE_OPTIONS: [TimelineOption; 4] = [
    TimelineOption {
        value: "",
        label: "All Timelines",
    },
    TimelineOption {
        value: "planning",
        label: "Planning",
    },
    TimelineOption {
        value: "active",
        label: "Active",
    },
    TimelineOption {
        value: "completed",
        label: "Completed",
    },
];

/// Active filter constraints applied to the catalog.
///
/// All fields combine with logical AND. The default value matches every
/// project. Missing JSON fields fall back to their empty defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the project address.
    pub location: String,
    /// Any-of tag set; empty matches all.
    pub tags: Vec<String>,
    /// When `true`, only remote projects match.
    pub remote: bool,
    /// Exact status string; empty matches all, unknown values match none.
    pub timeline: String,
}

/// One constraint shown as a removable chip in the "active filters" row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    Location(String),
    Tag(String),
    Remote,
    Timeline(String),
}

impl ActiveFilter {
    /// Chip text for display.
    pub fn label(&self) -> String {
        match self {
            Self::Location(value) => value.clone(),
            Self::Tag(tag) => tag.clone(),
            Self::Remote => "Remote only".to_string(),
            Self::Timeline(value) => timeline_label(value)
                .map(str::to_string)
                .unwrap_or_else(|| value.clone()),
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = timeline.into();
        self
    }

    pub fn with_status(self, status: TimelineStatus) -> Self {
        self.with_timeline(status.as_str())
    }

    /// Returns whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.location.is_empty() && self.tags.is_empty() && !self.remote && self.timeline.is_empty()
    }

    /// Adds `tag` when absent, removes it when present.
    ///
    /// Added tags are appended, so chip order follows selection order.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|own| own == tag) {
            self.tags.remove(index);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Lists active constraints: location, tags, remote, then timeline.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if !self.location.is_empty() {
            active.push(ActiveFilter::Location(self.location.clone()));
        }
        active.extend(self.tags.iter().cloned().map(ActiveFilter::Tag));
        if self.remote {
            active.push(ActiveFilter::Remote);
        }
        if !self.timeline.is_empty() {
            active.push(ActiveFilter::Timeline(self.timeline.clone()));
        }
        active
    }

    /// Drops one constraint, as when its chip is dismissed.
    pub fn remove(&mut self, filter: &ActiveFilter) {
        match filter {
            ActiveFilter::Location(_) => self.location.clear(),
            ActiveFilter::Tag(tag) => self.tags.retain(|own| own != tag),
            ActiveFilter::Remote => self.remote = false,
            ActiveFilter::Timeline(_) => self.timeline.clear(),
        }
    }
}

/// Returns the selector label for a timeline criteria value.
pub fn timeline_label(value: &str) -> Option<&'static str> {
    TIMELINE_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}
