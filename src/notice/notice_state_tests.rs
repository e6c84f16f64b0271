//! Tests for notice_state

use std::path::PathBuf;

use super::*;

#[test]
fn test_new_notice_is_hidden() {
    let notice = NoticeState::new();
    assert!(!notice.is_visible());
    assert!(notice.lines().is_empty());
}

#[test]
fn test_not_found_notice_names_file_format_and_example() {
    let error = LoadError::NotFound {
        path: PathBuf::from("champions.txt"),
    };
    let notice = NoticeState::from_load_error(&error);

    assert!(notice.is_visible());
    assert!(notice.title().contains("not found"));

    let body = notice.lines().join("\n");
    assert!(body.contains("File name: champions.txt"));
    assert!(body.contains("one champion name per line"));
    assert!(body.contains("Aatrox"));
    assert!(body.contains("Ahri"));
    assert!(body.contains("Akali"));
}

#[test]
fn test_not_found_notice_uses_file_name_of_nested_path() {
    let error = LoadError::NotFound {
        path: PathBuf::from("lists/names.txt"),
    };
    let notice = NoticeState::from_load_error(&error);
    let body = notice.lines().join("\n");
    assert!(body.contains("'lists/names.txt'"));
    assert!(body.contains("File name: names.txt"));
}

#[test]
fn test_unreadable_notice_shows_raw_error() {
    let error = LoadError::Unreadable {
        path: PathBuf::from("champions.txt"),
        message: "stream did not contain valid UTF-8".to_string(),
    };
    let notice = NoticeState::from_load_error(&error);

    assert!(notice.is_visible());
    assert_eq!(notice.title(), "Error");
    let body = notice.lines().join("\n");
    assert!(body.contains("stream did not contain valid UTF-8"));
    assert!(body.contains("contents and format"));
}

#[test]
fn test_dismiss_hides_notice() {
    let error = LoadError::NotFound {
        path: PathBuf::from("champions.txt"),
    };
    let mut notice = NoticeState::from_load_error(&error);
    notice.dismiss();
    assert!(!notice.is_visible());
}
