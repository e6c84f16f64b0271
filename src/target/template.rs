use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::lookup_token;

/// Placeholder replaced by the lookup token in a target template
pub const PLACEHOLDER: &str = "{q}";

/// A labelled URL template, e.g. `https://lolalytics.com/lol/{q}/build/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub label: String,
    pub template: String,
}

impl Target {
    pub fn new(label: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            template: template.into(),
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.template.contains(PLACEHOLDER)
    }

    /// Resolve this target for a display name
    pub fn resolve(&self, name: &str) -> ResolvedTarget {
        substitute(&self.template, &lookup_token(name))
    }
}

/// The two stats pages the launcher opens out of the box
pub fn default_targets() -> Vec<Target> {
    vec![
        Target::new("SumRift", "https://lolalytics.com/lol/{q}/build/"),
        Target::new("ARAM", "https://lolalytics.com/lol/{q}/aram/build/"),
    ]
}

/// Replace every placeholder in `template` with `token`.
///
/// The token is inserted verbatim; callers pass an already derived lookup
/// token.
pub fn substitute(template: &str, token: &str) -> ResolvedTarget {
    ResolvedTarget(template.replace(PLACEHOLDER, token))
}

/// A template with its placeholder filled in, ready for an opener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTarget(String);

impl ResolvedTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod template_tests;
