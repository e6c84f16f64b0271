//! Tests for mouse click handling

use ratatui::layout::Rect;

use crate::layout::Region;
use crate::test_utils::test_helpers::{click, test_app, TEST_ROSTER};

use super::handle_click;

#[test]
fn test_click_list_row_selects_entry() {
    let (mut app, _) = test_app(TEST_ROSTER);
    app.layout_regions.list = Some(Rect::new(1, 5, 30, 10));

    handle_click(&mut app, Some(Region::List), click(4, 8));

    assert_eq!(app.selector.selected_index(), Some(3));
    assert_eq!(app.selector.selected_name(), Some("Kai'Sa"));
}

#[test]
fn test_click_list_accounts_for_scroll_offset() {
    let (mut app, _) = test_app(TEST_ROSTER);
    app.layout_regions.list = Some(Rect::new(1, 5, 30, 2));
    *app.list_state.offset_mut() = 2;

    handle_click(&mut app, Some(Region::List), click(4, 6));

    assert_eq!(app.selector.selected_index(), Some(3));
}

#[test]
fn test_click_below_last_entry_keeps_selection() {
    let (mut app, _) = test_app(&["Ahri", "Akali"]);
    app.layout_regions.list = Some(Rect::new(1, 5, 30, 10));

    handle_click(&mut app, Some(Region::List), click(4, 5 + 6));

    assert_eq!(app.selector.selected_index(), Some(0));
}

#[test]
fn test_click_list_without_recorded_region_is_noop() {
    let (mut app, _) = test_app(TEST_ROSTER);

    handle_click(&mut app, Some(Region::List), click(4, 8));

    assert_eq!(app.selector.selected_index(), Some(0));
}

#[test]
fn test_click_button_opens_its_target() {
    let (mut app, opened) = test_app(TEST_ROSTER);

    handle_click(&mut app, Some(Region::Button(1)), click(0, 0));

    assert_eq!(
        opened.borrow().as_slice(),
        ["https://lolalytics.com/lol/ahri/aram/build/"]
    );
}

#[test]
fn test_click_outside_regions_is_noop() {
    let (mut app, opened) = test_app(TEST_ROSTER);

    handle_click(&mut app, None, click(0, 0));
    handle_click(&mut app, Some(Region::Input), click(0, 0));

    assert_eq!(app.selector.selected_index(), Some(0));
    assert!(opened.borrow().is_empty());
}

#[test]
fn test_click_quit_button_quits_without_opening() {
    let (mut app, opened) = test_app(TEST_ROSTER);

    handle_click(&mut app, Some(Region::Quit), click(0, 0));

    assert!(app.should_quit());
    assert!(opened.borrow().is_empty());
}
