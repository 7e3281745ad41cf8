//! Chat mock-up state.
//!
//! # Responsibility
//! - Track the selected room, the message draft and the two modals
//!   (icebreakers, meeting scheduler).
//! - Turn "send" and "schedule" into notifications only.
//!
//! # Invariants
//! - Sending never appends to `messages`; it validates, logs metadata,
//!   notifies and clears the draft.
//! - A rejected send keeps the draft as typed.

use crate::fixtures;
use crate::model::chat::{ChatMessage, ChatRoom};
use crate::notify::{Notification, NotificationKind, NotificationSink};
use chrono::{DateTime, NaiveDateTime, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Meeting lengths offered by the scheduler, in minutes.
pub const MEETING_DURATIONS_MINUTES: [u32; 4] = [30, 60, 90, 120];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingType {
    TeamStandup,
    ProjectReview,
    OneOnOne,
    BrainstormingSession,
}

impl MeetingType {
    pub const ALL: [MeetingType; 4] = [
        Self::TeamStandup,
        Self::ProjectReview,
        Self::OneOnOne,
        Self::BrainstormingSession,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TeamStandup => "Team Standup",
            Self::ProjectReview => "Project Review",
            Self::OneOnOne => "One-on-One",
            Self::BrainstormingSession => "Brainstorming Session",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    pub meeting_type: MeetingType,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    RoomNotFound(String),
    NoRoomSelected,
    /// Draft is empty after trimming.
    EmptyMessage,
    IcebreakerNotFound(usize),
    UnsupportedDuration(u32),
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomNotFound(id) => write!(f, "chat room not found: {id}"),
            Self::NoRoomSelected => write!(f, "no chat room selected"),
            Self::EmptyMessage => write!(f, "message must not be empty"),
            Self::IcebreakerNotFound(index) => write!(f, "no icebreaker question at {index}"),
            Self::UnsupportedDuration(minutes) => {
                write!(f, "unsupported meeting duration: {minutes} minutes")
            }
        }
    }
}

impl Error for ChatError {}

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    rooms: Vec<ChatRoom>,
    messages: Vec<ChatMessage>,
    selected_room: Option<String>,
    draft: String,
    icebreakers_open: bool,
    calendar_open: bool,
}

impl ChatState {
    pub fn new(rooms: Vec<ChatRoom>, messages: Vec<ChatMessage>) -> Self {
        Self {
            rooms,
            messages,
            selected_room: None,
            draft: String::new(),
            icebreakers_open: false,
            calendar_open: false,
        }
    }

    /// State backed by the demo fixtures, timestamped relative to `now`.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self::new(fixtures::chat_rooms(now), fixtures::chat_messages(now))
    }

    pub fn rooms(&self) -> &[ChatRoom] {
        &self.rooms
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn select_room(&mut self, room_id: &str) -> ChatResult<&ChatRoom> {
        let room = self
            .rooms
            .iter()
            .find(|room| room.id == room_id)
            .ok_or_else(|| ChatError::RoomNotFound(room_id.to_string()))?;
        self.selected_room = Some(room.id.clone());
        Ok(room)
    }

    pub fn selected_room(&self) -> Option<&ChatRoom> {
        let id = self.selected_room.as_deref()?;
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the send action is enabled.
    pub fn can_send(&self) -> bool {
        self.selected_room.is_some() && !self.draft.trim().is_empty()
    }

    /// "Sends" the draft to the selected room.
    ///
    /// # Contract
    /// - Emits one `MessageSent` notification and clears the draft.
    /// - Message text is not logged; only its length is.
    pub fn send_message<S: NotificationSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> ChatResult<Notification> {
        let room_id = self
            .selected_room
            .clone()
            .ok_or(ChatError::NoRoomSelected)?;
        let text = self.draft.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        info!(
            "event=chat_send module=chat status=ok room_id={} chars={}",
            room_id,
            text.chars().count()
        );
        let notification = Notification::new(
            NotificationKind::MessageSent { room_id },
            "Message sent",
        );
        sink.notify(&notification);
        self.draft.clear();
        Ok(notification)
    }

    pub fn open_icebreakers(&mut self) {
        self.icebreakers_open = true;
    }

    pub fn close_icebreakers(&mut self) {
        self.icebreakers_open = false;
    }

    pub fn is_icebreakers_open(&self) -> bool {
        self.icebreakers_open
    }

    pub fn icebreaker_questions(&self) -> &'static [&'static str] {
        &fixtures::ICEBREAKER_QUESTIONS
    }

    /// Copies icebreaker `index` into the draft and closes the modal.
    pub fn use_icebreaker(&mut self, index: usize) -> ChatResult<&str> {
        let question = fixtures::ICEBREAKER_QUESTIONS
            .get(index)
            .ok_or(ChatError::IcebreakerNotFound(index))?;
        self.draft = (*question).to_string();
        self.icebreakers_open = false;
        Ok(self.draft.as_str())
    }

    pub fn open_calendar(&mut self) {
        self.calendar_open = true;
    }

    pub fn close_calendar(&mut self) {
        self.calendar_open = false;
    }

    pub fn is_calendar_open(&self) -> bool {
        self.calendar_open
    }

    /// Confirms a meeting from the scheduler modal.
    ///
    /// An unsupported duration keeps the modal open.
    pub fn schedule_meeting<S: NotificationSink + ?Sized>(
        &mut self,
        request: &MeetingRequest,
        sink: &mut S,
    ) -> ChatResult<Notification> {
        if !MEETING_DURATIONS_MINUTES.contains(&request.duration_minutes) {
            return Err(ChatError::UnsupportedDuration(request.duration_minutes));
        }

        let notification = Notification::new(
            NotificationKind::MeetingScheduled {
                meeting_type: request.meeting_type.label().to_string(),
                duration_minutes: request.duration_minutes,
            },
            format!(
                "{} scheduled for {}",
                request.meeting_type.label(),
                request.starts_at.format("%Y-%m-%d %H:%M")
            ),
        );
        sink.notify(&notification);
        info!(
            "event=meeting_scheduled module=chat status=ok duration_minutes={}",
            request.duration_minutes
        );
        self.calendar_open = false;
        Ok(notification)
    }
}

/// Formats a room's last-activity age: `Nm ago`, `Nh ago` or `Nd ago`.
///
/// Timestamps in the future are reported as `0m ago`.
pub fn format_last_message_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = (now - then).max(chrono::Duration::zero());
    let minutes = age.num_minutes();
    let hours = age.num_hours();
    if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", age.num_days())
    }
}

/// Formats a message timestamp as `HH:MM`.
pub fn format_message_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_last_message_time, format_message_time, MeetingType};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn relative_time_uses_largest_whole_unit() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(format_last_message_time(now - Duration::minutes(30), now), "30m ago");
        assert_eq!(format_last_message_time(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_last_message_time(now - Duration::minutes(60), now), "1h ago");
        assert_eq!(format_last_message_time(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_last_message_time(now - Duration::hours(49), now), "2d ago");
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(format_last_message_time(now + Duration::minutes(5), now), "0m ago");
    }

    #[test]
    fn message_time_is_two_digit_hours_and_minutes() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        assert_eq!(format_message_time(ts), "09:05");
    }

    #[test]
    fn meeting_type_labels_parse_case_insensitively() {
        assert_eq!(
            MeetingType::from_label("one-on-one"),
            Some(MeetingType::OneOnOne)
        );
        assert_eq!(MeetingType::from_label("Lunch"), None);
    }
}
