//! Notification module for lolaunch
//!
//! Transient one-line messages shown in the corner of the screen, e.g. after
//! a target was opened or when the config had to fall back to defaults.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationLevel, NotificationState};
