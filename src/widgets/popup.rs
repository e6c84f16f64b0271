use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of at most `width` x `height`, centered in `frame_area`
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2,
        y: frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect anchored to the bottom-right corner of `area`, `margin` cells in
pub fn bottom_right_popup(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(margin * 2));
    let popup_height = height.min(area.height.saturating_sub(margin * 2));

    Rect {
        x: (area.x + area.width).saturating_sub(popup_width + margin),
        y: (area.y + area.height).saturating_sub(popup_height + margin),
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
