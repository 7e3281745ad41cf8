//! Current-user profile record.

use crate::model::project::{ProjectId, TimelineStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub projects_joined: u32,
    pub projects_created: u32,
    pub connections: u32,
    pub badges: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Project the user took part in, with the role they held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentProject {
    pub id: ProjectId,
    pub title: String,
    pub role: String,
    pub status: TimelineStatus,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub stats: ProfileStats,
    pub achievements: Vec<Achievement>,
    pub recent_projects: Vec<RecentProject>,
}
