//! Transient notification channel.
//!
//! # Responsibility
//! - Describe the "show a transient message" events emitted by handlers.
//! - Provide the sink seam plus logging and recording sinks.
//!
//! # Invariants
//! - Notifications are fire-and-forget; no sink persists them durably.
//! - Every emitted notification carries a fresh v4 id.

use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a notification reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationKind {
    /// An application passed validation for an open role.
    ApplicationSubmitted {
        project_id: String,
        role_title: String,
    },
    /// A chat draft was "sent" (logged only).
    MessageSent { room_id: String },
    MeetingScheduled {
        meeting_type: String,
        duration_minutes: u32,
    },
}

impl NotificationKind {
    /// Stable event name used in log lines.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::ApplicationSubmitted { .. } => "application_submitted",
            Self::MessageSent { .. } => "message_sent",
            Self::MeetingScheduled { .. } => "meeting_scheduled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    /// User-facing toast text.
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }
}

/// Receiver of transient notifications (toast, console, test recorder).
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification);
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, notification: &Notification) {
        (**self).notify(notification);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Box<S> {
    fn notify(&mut self, notification: &Notification) {
        (**self).notify(notification);
    }
}

/// Sink that writes each notification to the core log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, notification: &Notification) {
        info!(
            "event=notification module=notify status=ok kind={} id={}",
            notification.kind.event_name(),
            notification.id
        );
    }
}

/// Sink that keeps every notification in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    notifications: Vec<Notification>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drains recorded notifications, leaving the sink empty.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}
