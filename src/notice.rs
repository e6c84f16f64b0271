//! Load-failure notice
//!
//! A modal popup explaining why the roster is empty and how to fix it.
//! Shown once at startup; it blocks other keys until dismissed.

mod notice_render;
mod notice_state;

pub use notice_render::render_popup;
pub use notice_state::NoticeState;
