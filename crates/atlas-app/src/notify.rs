//! Transient user notifications.
//!
//! At most one message is pending at a time; showing a new one replaces
//! the old. A message clears after a fixed display duration or on
//! explicit close. Click-away style dismissal is deliberately inert so a
//! stray interaction cannot hide a message mid-read.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// How long a notification stays visible without explicit dismissal.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A message for the user, paired with its visual severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Why a dismissal was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    ClickAway,
}

#[derive(Debug)]
struct Visible {
    notification: Notification,
    expires_at: Instant,
}

/// Holds at most one pending transient message.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    current: Arc<Mutex<Option<Visible>>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any displayed notification with a new one.
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let notification = Notification {
            message: message.into(),
            severity,
        };
        tracing::debug!(?severity, "Showing notification");
        *self.current.lock() = Some(Visible {
            notification,
            expires_at: Instant::now() + DISPLAY_DURATION,
        });
    }

    /// Dismiss the current notification. Click-away is ignored; only an
    /// explicit close clears the message before its display duration ends.
    pub fn dismiss(&self, reason: DismissReason) {
        if reason == DismissReason::ClickAway {
            return;
        }
        *self.current.lock() = None;
    }

    /// The currently visible notification, if any. Expired messages are
    /// cleared lazily on read.
    pub fn current(&self) -> Option<Notification> {
        let mut slot = self.current.lock();
        match slot.as_ref() {
            Some(visible) if Instant::now() >= visible.expires_at => {
                *slot = None;
                None
            }
            Some(visible) => Some(visible.notification.clone()),
            None => None,
        }
    }
}
