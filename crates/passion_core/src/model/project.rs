//! Project domain model.
//!
//! # Responsibility
//! - Define the catalog record rendered by list, map and detail views.
//! - Keep seed wire naming (`isRemote`, `lat`/`lng`, ...) stable via serde.
//!
//! # Invariants
//! - `id` is non-empty and unique inside one catalog.
//! - `timeline.end_date` should not be earlier than `timeline.start_date`.
//! - `views` and `applications` are display counters; core never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable project identifier as authored in seed data.
pub type ProjectId = String;

/// Lifecycle stage of a project timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    /// Team is being formed; work has not started.
    Planning,
    /// Work is in progress.
    Active,
    /// Project is finished.
    Completed,
}

impl TimelineStatus {
    /// Stable lowercase string used by filters and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Capitalized label shown on status badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Parses the lowercase wire form. Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planning" => Some(Self::Planning),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Display for TimelineStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic anchor of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    /// Human-readable address; the location filter matches against this.
    pub address: String,
}

/// Position a project is recruiting for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Only availability flag; roles are never allocated or locked.
    pub is_open: bool,
}

/// Denormalized founder card. No separate identity exists for founders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Founder {
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: TimelineStatus,
}

/// Catalog entry for a collaborative initiative seeking contributors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub summary: String,
    /// Display media URI. Never fetched or validated by core.
    pub image: String,
    pub location: Location,
    pub is_remote: bool,
    /// Insertion order is kept for display only.
    pub tags: Vec<String>,
    pub roles: Vec<Role>,
    pub founder: Founder,
    pub timeline: Timeline,
    pub created_at: NaiveDate,
    pub views: u64,
    pub applications: u64,
}

impl Project {
    /// Returns the role with an exactly matching title.
    pub fn role(&self, title: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.title == title)
    }

    /// Returns roles that currently accept applications, in display order.
    pub fn open_roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter().filter(|role| role.is_open)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|own| own == tag)
    }

    /// Validates record-level invariants.
    ///
    /// Uniqueness of `id` is a catalog concern and is checked there.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }

        if let Some(end) = self.timeline.end_date {
            if end < self.timeline.start_date {
                return Err(ProjectValidationError::InvalidTimeline {
                    id: self.id.clone(),
                    start: self.timeline.start_date,
                    end,
                });
            }
        }

        Ok(())
    }
}

/// Record-level validation failures for [`Project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyId,
    InvalidTimeline {
        id: ProjectId,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id must not be empty"),
            Self::InvalidTimeline { id, start, end } => write!(
                f,
                "project `{id}`: endDate ({end}) must be >= startDate ({start})"
            ),
        }
    }
}

impl Error for ProjectValidationError {}

#[cfg(test)]
mod tests {
    use super::TimelineStatus;

    #[test]
    fn timeline_status_parses_only_lowercase_wire_values() {
        assert_eq!(
            TimelineStatus::parse("active"),
            Some(TimelineStatus::Active)
        );
        assert_eq!(TimelineStatus::parse("Active"), None);
        assert_eq!(TimelineStatus::parse(""), None);
    }

    #[test]
    fn timeline_status_labels_are_capitalized() {
        assert_eq!(TimelineStatus::Planning.label(), "Planning");
        assert_eq!(TimelineStatus::Completed.as_str(), "completed");
    }
}
