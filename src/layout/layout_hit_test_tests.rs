use ratatui::layout::Rect;

use super::*;

fn regions() -> LayoutRegions {
    LayoutRegions {
        input: Some(Rect::new(0, 1, 40, 3)),
        list: Some(Rect::new(1, 5, 38, 10)),
        buttons: vec![Rect::new(0, 16, 14, 3), Rect::new(14, 16, 13, 3)],
        quit: Some(Rect::new(27, 16, 13, 3)),
    }
}

#[test]
fn test_empty_regions_hit_nothing() {
    assert_eq!(region_at(&LayoutRegions::new(), 5, 5), None);
}

#[test]
fn test_hit_input() {
    assert_eq!(region_at(&regions(), 10, 2), Some(Region::Input));
}

#[test]
fn test_hit_list() {
    assert_eq!(region_at(&regions(), 1, 5), Some(Region::List));
    assert_eq!(region_at(&regions(), 38, 14), Some(Region::List));
}

#[test]
fn test_list_border_is_not_list() {
    assert_eq!(region_at(&regions(), 0, 5), None);
    assert_eq!(region_at(&regions(), 10, 15), None);
}

#[test]
fn test_hit_buttons() {
    assert_eq!(region_at(&regions(), 0, 16), Some(Region::Button(0)));
    assert_eq!(region_at(&regions(), 13, 18), Some(Region::Button(0)));
    assert_eq!(region_at(&regions(), 14, 17), Some(Region::Button(1)));
}

#[test]
fn test_hit_quit_button() {
    assert_eq!(region_at(&regions(), 27, 16), Some(Region::Quit));
    assert_eq!(region_at(&regions(), 39, 18), Some(Region::Quit));
}

#[test]
fn test_outside_everything() {
    assert_eq!(region_at(&regions(), 10, 0), None);
    assert_eq!(region_at(&regions(), 50, 10), None);
}

#[test]
fn test_clear_resets_regions() {
    let mut r = regions();
    r.clear();
    assert_eq!(r, LayoutRegions::new());
}
