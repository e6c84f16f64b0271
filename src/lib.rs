//! lolaunch: a terminal launcher that filters a list of names as you type
//! and opens a web page keyed by the selected name.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod notice;
pub mod notification;
pub mod roster;
pub mod selector;
pub mod target;
pub mod theme;
pub mod token;
pub mod widgets;

mod test_utils;
