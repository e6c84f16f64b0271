// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::roster::DEFAULT_LIST_FILE;
use crate::target::{Target, default_targets};

pub const DEFAULT_TITLE: &str = "LoL Stats Launcher";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_list_file() -> PathBuf {
    PathBuf::from(DEFAULT_LIST_FILE)
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,

    /// Roster file, relative to the working directory
    #[serde(default = "default_list_file")]
    pub list_file: PathBuf,

    /// Confirm actions in key order: Enter, then Shift+Enter
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: default_title(),
            list_file: default_list_file(),
            targets: default_targets(),
        }
    }
}

impl Config {
    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.targets.is_empty() {
            return Err("at least one [[targets]] entry is required".to_string());
        }

        if let Some(target) = self.targets.iter().find(|t| !t.has_placeholder()) {
            return Err(format!(
                "template of target '{}' has no {} placeholder",
                target.label,
                crate::target::PLACEHOLDER
            ));
        }

        Ok(())
    }
}
