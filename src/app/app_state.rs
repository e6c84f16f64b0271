use ratatui::{style::Style, widgets::ListState};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::error::LoadError;
use crate::layout::LayoutRegions;
use crate::notice::NoticeState;
use crate::notification::NotificationState;
use crate::selector::{Direction, Selector, SelectorEvent};
use crate::target::{Opener, ResolvedTarget, Target};
use crate::theme;

pub const PLACEHOLDER_TEXT: &str = "Type a champion name";

/// What happens to a resolved target
pub enum LaunchMode {
    /// Hand it to an opener and keep running
    Open(Box<dyn Opener>),
    /// Keep it as output and quit
    Print,
}

/// Application state
pub struct App {
    pub input: TextArea<'static>,
    pub selector: Selector,
    pub targets: Vec<Target>,
    pub title: String,
    pub notice: NoticeState,
    pub notification: NotificationState,
    pub list_state: ListState,
    pub layout_regions: LayoutRegions,
    launch: LaunchMode,
    output: Option<ResolvedTarget>,
    should_quit: bool,
}

impl App {
    /// Create the app from the outcome of the roster load.
    ///
    /// A failed load leaves the selector empty and raises the notice.
    pub fn new(roster: Result<Vec<String>, LoadError>, config: &Config, launch: LaunchMode) -> Self {
        let (names, notice) = match roster {
            Ok(names) => (names, NoticeState::new()),
            Err(error) => {
                log::warn!("{}", error);
                (Vec::new(), NoticeState::from_load_error(&error))
            }
        };

        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text(PLACEHOLDER_TEXT);
        input.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));

        Self {
            input,
            selector: Selector::new(names),
            targets: config.targets.clone(),
            title: config.title.clone(),
            notice,
            notification: NotificationState::new(),
            list_state: ListState::default(),
            layout_regions: LayoutRegions::new(),
            launch,
            output: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The resolved target kept in print mode, if any
    pub fn output(&self) -> Option<&ResolvedTarget> {
        self.output.as_ref()
    }

    pub fn take_output(&mut self) -> Option<ResolvedTarget> {
        self.output.take()
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    /// Re-filter after the input text changed
    pub fn on_query_changed(&mut self) {
        let query = self.input.lines()[0].clone();
        self.selector.apply(SelectorEvent::QueryChanged(&query));
        *self.list_state.offset_mut() = 0;
    }

    pub fn move_selection(&mut self, direction: Direction) {
        self.selector.apply(SelectorEvent::Move(direction));
    }

    /// Step the selection until it reaches `position` in the filtered list
    pub fn select_position(&mut self, position: usize) {
        if position >= self.selector.filtered_count() {
            return;
        }

        while let Some(current) = self.selector.selected_index() {
            let direction = match current.cmp(&position) {
                std::cmp::Ordering::Less => Direction::Down,
                std::cmp::Ordering::Greater => Direction::Up,
                std::cmp::Ordering::Equal => break,
            };
            self.move_selection(direction);
        }
    }

    /// Resolve the selection against the target at `target_index` and
    /// dispatch it
    pub fn confirm(&mut self, target_index: usize) {
        let Some(target) = self.targets.get(target_index) else {
            log::debug!("No target configured at index {}", target_index);
            return;
        };

        let Some(resolved) = self.selector.apply(SelectorEvent::Confirm(&target.template)) else {
            return;
        };

        match &self.launch {
            LaunchMode::Print => {
                self.output = Some(resolved);
                self.should_quit = true;
            }
            LaunchMode::Open(opener) => match opener.open(&resolved) {
                Ok(()) => self.notification.show(format!("Opened {}", resolved)),
                Err(error) => {
                    log::warn!("{}", error);
                    self.notification.show_error(error.to_string());
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
