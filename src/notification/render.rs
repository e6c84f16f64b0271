use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::theme;
use crate::widgets::popup;

use super::{NotificationLevel, NotificationState};

const NOTIFICATION_HEIGHT: u16 = 3;

/// Render the current notification in the bottom-right corner of `area`
pub fn render_notification(frame: &mut Frame, state: &NotificationState, area: Rect) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.level {
        NotificationLevel::Info => theme::notification::INFO,
        NotificationLevel::Warning => theme::notification::WARNING,
        NotificationLevel::Error => theme::notification::ERROR,
    };

    // +2 for borders, +2 for padding
    let width = (notification.message.width() as u16).saturating_add(4);
    let popup_area = popup::bottom_right_popup(area, width, NOTIFICATION_HEIGHT, 1);
    if popup_area.width < 5 || popup_area.height < NOTIFICATION_HEIGHT {
        return;
    }

    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme::notification::BACKGROUND));

    let paragraph = Paragraph::new(format!(" {}", notification.message))
        .style(Style::default().fg(color))
        .block(block);

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
