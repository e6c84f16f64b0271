use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use tui_textarea::Input;

use super::app_state::App;
use super::mouse_click;
use crate::layout::region_at;
use crate::selector::Direction;

/// How long to wait for input before re-checking notification expiry
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Target used by Enter
const PRIMARY_TARGET: usize = 0;
/// Target used by Shift+Enter, Alt+Enter and Ctrl+O
const SECONDARY_TARGET: usize = 1;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                Event::Paste(text) => self.handle_paste_event(text),
                _ => {}
            }
        }

        self.notification.clear_expired(Instant::now());
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C quits from anywhere
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        // The notice blocks everything else until dismissed
        if self.notice.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice.dismiss();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),

            KeyCode::Up => self.move_selection(Direction::Up),
            KeyCode::Down => self.move_selection(Direction::Down),
            KeyCode::Char('p') if ctrl => self.move_selection(Direction::Up),
            KeyCode::Char('n') if ctrl => self.move_selection(Direction::Down),

            // Some terminals (e.g., macOS Terminal.app) don't send Shift+Enter
            // or Alt+Enter, so Ctrl+O is the universal fallback.
            KeyCode::Enter
                if key
                    .modifiers
                    .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                self.confirm(SECONDARY_TARGET)
            }
            KeyCode::Char('o') if ctrl => self.confirm(SECONDARY_TARGET),
            KeyCode::Enter => self.confirm(PRIMARY_TARGET),

            // Single-line input: never let the textarea insert a newline or tab
            KeyCode::Tab | KeyCode::BackTab => {}
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => {}

            _ => {
                if self.input.input(Input::from(key)) {
                    self.on_query_changed();
                }
            }
        }
    }

    /// Handle mouse clicks and wheel scrolling
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.notice.is_visible() {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(event::MouseButton::Left) => {
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                mouse_click::handle_click(self, region, mouse);
            }
            MouseEventKind::ScrollUp => self.move_selection(Direction::Up),
            MouseEventKind::ScrollDown => self.move_selection(Direction::Down),
            _ => {}
        }
    }

    /// Insert pasted text into the query, keeping only its first line
    pub fn handle_paste_event(&mut self, text: String) {
        if self.notice.is_visible() {
            return;
        }

        let first_line = text.lines().next().unwrap_or_default();
        if first_line.is_empty() {
            return;
        }

        self.input.insert_str(first_line);
        self.on_query_changed();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
