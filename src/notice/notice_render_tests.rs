use std::path::PathBuf;

use super::*;
use crate::error::LoadError;
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(notice: &NoticeState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| render_popup(f, notice, f.area()))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_hidden_notice_renders_nothing() {
    let notice = NoticeState::new();
    let output = render_to_string(&notice, 80, 24);
    assert!(!output.contains('╭'));
}

#[test]
fn test_not_found_notice_renders_title_and_example() {
    let notice = NoticeState::from_load_error(&LoadError::NotFound {
        path: PathBuf::from("champions.txt"),
    });
    let output = render_to_string(&notice, 80, 24);

    assert!(output.contains("List file not found"));
    assert!(output.contains("File name: champions.txt"));
    assert!(output.contains("Aatrox"));
    assert!(output.contains("dismiss"));
}

#[test]
fn test_unreadable_notice_renders_message() {
    let notice = NoticeState::from_load_error(&LoadError::Unreadable {
        path: PathBuf::from("champions.txt"),
        message: "permission denied".to_string(),
    });
    let output = render_to_string(&notice, 100, 12);

    assert!(output.contains("permission denied"));
}

#[test]
fn test_unreadable_notice_shows_advice_after_wrapped_message() {
    let notice = NoticeState::from_load_error(&LoadError::Unreadable {
        path: PathBuf::from("champions.txt"),
        message: "stream did not contain valid UTF-8".to_string(),
    });
    let output = render_to_string(&notice, 100, 24);

    assert!(output.contains("valid UTF-8"));
    assert!(output.contains("contents and format"));
}

#[test]
fn test_not_found_notice_with_long_path_shows_last_line() {
    let notice = NoticeState::from_load_error(&LoadError::NotFound {
        path: PathBuf::from("/home/someone/games/league/launcher/data/lists/champions.txt"),
    });
    let output = render_to_string(&notice, 100, 30);

    assert!(output.contains("List file"));
    assert!(output.contains("restart."));
}

#[test]
fn test_wrapped_rows_counts_word_wrapping() {
    assert_eq!(wrapped_rows("", 10), 1);
    assert_eq!(wrapped_rows("short", 10), 1);
    assert_eq!(wrapped_rows("one two three", 10), 2);
    assert_eq!(wrapped_rows("abcdefghijklmnopqrstuvwxy", 10), 3);
    assert_eq!(wrapped_rows("ab abcdefghijklmnopqrst", 10), 3);
}

#[test]
fn snapshot_unreadable_notice() {
    let notice = NoticeState::from_load_error(&LoadError::Unreadable {
        path: PathBuf::from("champions.txt"),
        message: "permission denied".to_string(),
    });
    let output = render_to_string(&notice, 80, 6);
    assert_snapshot!(output, @r#"
"                                                                                "
"      ╭ Error ───────────────────────────────────────────────────────────╮      "
"      │ An error occurred while reading the list file: permission denied │      "
"      │ Check the file's contents and format.                            │      "
"      ╰ Enter/Esc: dismiss ──────────────────────────────────────────────╯      "
"                                                                                "
"#);
}
