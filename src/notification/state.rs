use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(3);
const WARNING_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

/// Holds at most one notification; a newer one replaces the older
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationLevel::Info, DEFAULT_DURATION);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationLevel::Warning, WARNING_DURATION);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationLevel::Error, WARNING_DURATION);
    }

    fn push(&mut self, message: String, level: NotificationLevel, duration: Duration) {
        self.current = Some(Notification {
            message,
            level,
            shown_at: Instant::now(),
            duration,
        });
    }

    /// Drop the current notification once its time is up.
    ///
    /// Returns true if something was cleared.
    pub fn clear_expired(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
