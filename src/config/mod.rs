//! Configuration for lolaunch
//!
//! Read from `~/.config/lolaunch/config.toml` unless a path is given on the
//! command line. A bad config never stops the launcher: defaults are used
//! and a warning is surfaced once.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path, parse_config};
pub use types::{Config, DEFAULT_TITLE};
