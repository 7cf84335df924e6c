//! Transient, self-dismissing notifications.

use chrono::{DateTime, Duration, Utc};

/// How long a toast stays visible.
pub const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            shown_at,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + Duration::milliseconds(TOAST_DURATION.as_millis() as i64)
    }

    /// Visible from `shown_at` up to, but excluding, `expires_at`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.shown_at && now < self.expires_at()
    }
}
