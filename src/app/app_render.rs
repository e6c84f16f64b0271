use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app_state::App;
use crate::notice;
use crate::notification::render_notification;
use crate::theme;

const TITLE_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const BUTTONS_HEIGHT: u16 = 3;
const HINTS_HEIGHT: u16 = 1;
const VERSION_HEIGHT: u16 = 1;

/// Width taken by the selection bar and padding in front of each name
const ITEM_PREFIX_WIDTH: usize = 4;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(BUTTONS_HEIGHT),
            Constraint::Length(HINTS_HEIGHT),
            Constraint::Length(VERSION_HEIGHT),
        ])
        .split(frame.area());

        self.layout_regions.clear();

        self.render_title(frame, layout[0]);
        self.render_input(frame, layout[1]);
        self.render_list(frame, layout[2]);
        self.render_buttons(frame, layout[3]);
        self.render_hints(frame, layout[4]);
        render_version(frame, layout[5]);

        notice::render_popup(frame, &self.notice, frame.area());
        render_notification(frame, &self.notification, frame.area());
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Span::styled(
            self.title.as_str(),
            Style::default()
                .fg(theme::title::FG)
                .add_modifier(theme::title::MODIFIER),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Search ")
                .border_style(Style::default().fg(theme::input::BORDER)),
        );
        frame.render_widget(&self.input, area);
        self.layout_regions.input = Some(area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(
            " Champions ({}/{}) ",
            self.selector.filtered_count(),
            self.selector.total_count()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(theme::list::BORDER));

        let inner = block.inner(area);
        let max_text_width = (inner.width as usize).saturating_sub(ITEM_PREFIX_WIDTH + 1);

        if self.selector.is_empty() {
            let message = Paragraph::new(Line::from(Span::styled(
                "  No matches",
                Style::default().fg(theme::list::NO_MATCHES),
            )))
            .block(block);
            frame.render_widget(message, area);
            self.layout_regions.list = Some(inner);
            return;
        }

        let selected = self.selector.selected_index();
        let items: Vec<ListItem> = self
            .selector
            .filtered_names()
            .enumerate()
            .map(|(idx, name)| {
                let text = truncate_to_width(name, max_text_width);
                if Some(idx) == selected {
                    let bg = Style::default().bg(theme::list::ITEM_SELECTED_BG);
                    ListItem::new(Line::from(vec![
                        Span::styled(" ┃", bg.fg(theme::list::ITEM_SELECTED_BAR)),
                        Span::styled("  ", bg),
                        Span::styled(text, bg.add_modifier(theme::list::ITEM_SELECTED_MODIFIER)),
                    ]))
                    .style(bg)
                } else {
                    ListItem::new(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(text, Style::default().fg(theme::list::ITEM_NORMAL_FG)),
                    ]))
                }
            })
            .collect();

        self.list_state.select(selected);
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.list_state);
        self.layout_regions.list = Some(inner);
    }

    /// One button per target, then the quit button
    fn render_buttons(&mut self, frame: &mut Frame, area: Rect) {
        let count = self.targets.len() + 1;
        let constraints = vec![Constraint::Ratio(1, count as u32); count];
        let cells = Layout::horizontal(constraints).split(area);

        for (idx, (target, cell)) in self.targets.iter().zip(cells.iter()).enumerate() {
            let color = match idx {
                0 => theme::buttons::PRIMARY,
                1 => theme::buttons::SECONDARY,
                _ => theme::buttons::OTHER,
            };
            frame.render_widget(button(&target.label, color), *cell);
            self.layout_regions.buttons.push(*cell);
        }

        let quit_cell = cells[count - 1];
        frame.render_widget(button("Quit", theme::buttons::QUIT), quit_cell);
        self.layout_regions.quit = Some(quit_cell);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(theme::hints::KEY);
        let text_style = Style::default().fg(theme::hints::TEXT);

        let mut spans = Vec::new();
        for (idx, target) in self.targets.iter().take(2).enumerate() {
            let keys = if idx == 0 { "Enter" } else { "Shift+Enter/^O" };
            spans.push(Span::styled(keys, key_style));
            spans.push(Span::styled(format!(": {}  ", target.label), text_style));
        }
        spans.push(Span::styled("↑↓", key_style));
        spans.push(Span::styled(": move  ", text_style));
        spans.push(Span::styled("Esc", key_style));
        spans.push(Span::styled(": quit", text_style));

        let hints = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(hints, area);
    }
}

fn render_version(frame: &mut Frame, area: Rect) {
    let version = Paragraph::new(Span::styled(
        format!("lolaunch v{}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(theme::hints::VERSION)
            .add_modifier(theme::hints::VERSION_MODIFIER),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(version, area);
}

fn button(label: &str, color: Color) -> Paragraph<'_> {
    Paragraph::new(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::buttons::BORDER)),
    )
}

/// Cut `text` to at most `max_width` columns, marking the cut with `…`
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        width += char_width;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
