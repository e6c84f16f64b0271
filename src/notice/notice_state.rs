use crate::error::LoadError;

const EXAMPLE_NAMES: &[&str] = &["Aatrox", "Ahri", "Akali", "..."];

/// Title and body of the load-failure popup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeState {
    visible: bool,
    title: String,
    lines: Vec<String>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the remediation text for a failed roster load
    pub fn from_load_error(error: &LoadError) -> Self {
        match error {
            LoadError::NotFound { path } => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());

                let mut lines = vec![
                    format!("List file '{}' was not found.", path.display()),
                    "Prepare the file as follows:".to_string(),
                    format!("  1. File name: {}", file_name),
                    "  2. Contents: one champion name per line".to_string(),
                    String::new(),
                    "Example:".to_string(),
                ];
                lines.extend(EXAMPLE_NAMES.iter().map(|name| format!("  {}", name)));
                lines.push(String::new());
                lines.push(
                    "Place it in the directory you run lolaunch from and restart.".to_string(),
                );

                Self {
                    visible: true,
                    title: "List file not found".to_string(),
                    lines,
                }
            }
            LoadError::Unreadable { message, .. } => Self {
                visible: true,
                title: "Error".to_string(),
                lines: vec![
                    format!("An error occurred while reading the list file: {}", message),
                    "Check the file's contents and format.".to_string(),
                ],
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
#[path = "notice_state_tests.rs"]
mod notice_state_tests;
