use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::LoadError;

/// List file looked up in the working directory when nothing else is configured
pub const DEFAULT_LIST_FILE: &str = "champions.txt";

/// Reads the one-name-per-line roster file
pub struct RosterReader;

impl RosterReader {
    /// Read names from a UTF-8 text file
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Trimmed, non-empty lines in file order
    /// * `Err(LoadError::NotFound)` - The file does not exist
    /// * `Err(LoadError::Unreadable)` - Any other read failure, including invalid UTF-8
    pub fn read(path: &Path) -> Result<Vec<String>, LoadError> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        let names = Self::parse(&contents);
        log::debug!("Loaded {} names from {}", names.len(), path.display());
        Ok(names)
    }

    /// Split roster text into names, dropping blank lines and a leading BOM
    pub fn parse(contents: &str) -> Vec<String> {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
