//! Mouse click handling
//!
//! Clicking a list row selects it; clicking a target button confirms the
//! selection with that button's target; the quit button ends the session.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::List) => click_list(app, mouse),
        Some(Region::Button(idx)) => app.confirm(idx),
        Some(Region::Quit) => app.quit(),
        // The input always has focus; nothing to do
        Some(Region::Input) | None => {}
    }
}

fn click_list(app: &mut App, mouse: MouseEvent) {
    let Some(list_rect) = app.layout_regions.list else {
        return;
    };

    let row = mouse.row.saturating_sub(list_rect.y) as usize;
    let position = app.list_state.offset() + row;
    app.select_position(position);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
