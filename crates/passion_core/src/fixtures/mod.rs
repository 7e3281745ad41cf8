//! Built-in demo data.
//!
//! # Responsibility
//! - Ship the seed project catalog as authored JSON.
//! - Build chat and profile fixtures used by the mock views.
//!
//! # Invariants
//! - Chat timestamps are relative to the caller-provided `now`, so fixtures
//!   stay deterministic under test.

use crate::model::chat::{ChatMessage, ChatRoom};
use crate::model::profile::{Achievement, ProfileStats, RecentProject, UserProfile};
use crate::model::project::TimelineStatus;
use chrono::{DateTime, Duration, Utc};

/// Seed catalog in the wire shape accepted by [`crate::Catalog::from_json_str`].
pub const SEED_PROJECTS_JSON: &str = include_str!("projects.json");

pub const ICEBREAKER_QUESTIONS: [&str; 5] = [
    "What's your biggest passion project you've worked on?",
    "If you could solve one world problem, what would it be?",
    "What's the most interesting thing you've learned this week?",
    "What's your favorite way to collaborate with others?",
    "What's one skill you're excited to develop this year?",
];

/// Demo chat rooms, most recent first.
pub fn chat_rooms(now: DateTime<Utc>) -> Vec<ChatRoom> {
    vec![
        ChatRoom {
            id: "1".to_string(),
            name: "EcoTech Team".to_string(),
            avatar: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=150"
                .to_string(),
            last_message: "Great progress on the sustainability metrics!".to_string(),
            last_message_time: now - Duration::minutes(30),
            unread_count: 3,
            is_online: true,
        },
        ChatRoom {
            id: "2".to_string(),
            name: "Sarah Chen".to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150"
                .to_string(),
            last_message: "When can we schedule the next meeting?".to_string(),
            last_message_time: now - Duration::hours(2),
            unread_count: 0,
            is_online: true,
        },
        ChatRoom {
            id: "3".to_string(),
            name: "Mental Health App Group".to_string(),
            avatar: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=150"
                .to_string(),
            last_message: "The UX research results are ready for review".to_string(),
            last_message_time: now - Duration::days(1),
            unread_count: 1,
            is_online: false,
        },
    ]
}

/// Demo conversation shown for whichever room is selected.
pub fn chat_messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    let message = |id: &str, sender: &str, content: &str, age: Duration, is_own: bool| {
        ChatMessage {
            id: id.to_string(),
            sender: sender.to_string(),
            content: content.to_string(),
            timestamp: now - age,
            is_own,
        }
    };

    vec![
        message(
            "1",
            "Sarah Chen",
            "Hi everyone! Welcome to the EcoTech project chat.",
            Duration::hours(2),
            false,
        ),
        message(
            "2",
            "You",
            "Thanks Sarah! Excited to be part of this team.",
            Duration::minutes(90),
            true,
        ),
        message(
            "3",
            "Alex Rodriguez",
            "Same here! The sustainability goals look really promising.",
            Duration::hours(1),
            false,
        ),
        message(
            "4",
            "Sarah Chen",
            "Great! Let's schedule our first team meeting. When works best for everyone?",
            Duration::minutes(30),
            false,
        ),
    ]
}

/// Profile of the signed-in demo user.
pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "Alex Johnson".to_string(),
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300".to_string(),
        bio: "Passionate full-stack developer and environmental advocate. Building sustainable \
              tech solutions and connecting with like-minded innovators."
            .to_string(),
        location: "San Francisco, CA".to_string(),
        email: "alex.johnson@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        website: "alexjohnson.dev".to_string(),
        github: "alexjohnson".to_string(),
        linkedin: "alexjohnson".to_string(),
        twitter: "@alexjohnson".to_string(),
        skills: strings(&[
            "React",
            "TypeScript",
            "Node.js",
            "Python",
            "AWS",
            "Docker",
            "Machine Learning",
            "UI/UX Design",
            "Project Management",
        ]),
        interests: strings(&[
            "Sustainability",
            "Clean Energy",
            "Education Technology",
            "Mental Health",
            "Local Communities",
            "Open Source",
        ]),
        stats: ProfileStats {
            projects_joined: 12,
            projects_created: 3,
            connections: 89,
            badges: 7,
        },
        achievements: vec![
            Achievement {
                id: "1".to_string(),
                title: "Team Builder".to_string(),
                description: "Successfully formed 5+ project teams".to_string(),
            },
            Achievement {
                id: "2".to_string(),
                title: "Top Collaborator".to_string(),
                description: "Recognized for outstanding teamwork".to_string(),
            },
            Achievement {
                id: "3".to_string(),
                title: "Innovation Leader".to_string(),
                description: "Led breakthrough project initiatives".to_string(),
            },
        ],
        recent_projects: vec![
            RecentProject {
                id: "1".to_string(),
                title: "EcoTech Startup".to_string(),
                role: "Frontend Developer".to_string(),
                status: TimelineStatus::Active,
                image: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=150"
                    .to_string(),
            },
            RecentProject {
                id: "2".to_string(),
                title: "Student Mental Health App".to_string(),
                role: "Project Lead".to_string(),
                status: TimelineStatus::Completed,
                image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=150"
                    .to_string(),
            },
            RecentProject {
                id: "3".to_string(),
                title: "Local Food Network".to_string(),
                role: "Backend Developer".to_string(),
                status: TimelineStatus::Planning,
                image: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=150"
                    .to_string(),
            },
        ],
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
