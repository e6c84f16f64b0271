use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme;
use crate::widgets::popup;

use super::NoticeState;

const NOTICE_MAX_WIDTH: u16 = 72;
const FOOTER: &str = " Enter/Esc: dismiss ";

/// Render the notice centered over `area` if it is visible
pub fn render_popup(frame: &mut Frame, notice: &NoticeState, area: Rect) {
    if !notice.is_visible() {
        return;
    }

    let content_width = notice
        .lines()
        .iter()
        .map(|line| line.width())
        .chain(std::iter::once(notice.title().width() + 4))
        .max()
        .unwrap_or(0) as u16;

    // +2 for borders, +2 for padding
    let width = content_width
        .saturating_add(4)
        .min(NOTICE_MAX_WIDTH)
        .min(area.width);
    let inner_width = width.saturating_sub(2) as usize;
    let body_rows: usize = notice
        .lines()
        .iter()
        .map(|line| wrapped_rows(&format!(" {}", line), inner_width))
        .sum();
    let height = (body_rows.min(u16::MAX as usize) as u16).saturating_add(2);
    let popup_area = popup::centered_popup(area, width, height);

    popup::clear_area(frame, popup_area);

    let lines: Vec<Line> = notice
        .lines()
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                format!(" {}", line),
                Style::default().fg(theme::notice::TEXT),
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} ", notice.title()),
            Style::default()
                .fg(theme::notice::TITLE)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::styled(FOOTER, Style::default().fg(theme::notice::FOOTER)))
        .border_style(Style::default().fg(theme::notice::BORDER))
        .style(Style::default().bg(theme::notice::BACKGROUND));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

/// Rows `text` takes once word-wrapped to `width` columns
fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }

    let mut rows = 1;
    let mut current = 0;
    for (idx, word) in text.split(' ').enumerate() {
        let word_width = word.width();
        let needed = if idx == 0 { word_width } else { current + 1 + word_width };

        if needed <= width {
            current = needed;
        } else if word_width <= width {
            rows += 1;
            current = word_width;
        } else {
            // Words wider than the row are broken across rows
            if current > 0 {
                rows += 1;
            }
            rows += (word_width - 1) / width;
            current = word_width % width;
            if current == 0 {
                current = width;
            }
        }
    }
    rows
}

#[cfg(test)]
#[path = "notice_render_tests.rs"]
mod notice_render_tests;
