use serde::{Deserialize, Serialize};

use crate::target::{ResolvedTarget, substitute};
use crate::token::lookup_token;

use super::matcher::matching_indices;

/// Direction of a single selection step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Filter-and-select state over a fixed list of names.
///
/// The filtered list is kept as indices into `source`. Whenever the filtered
/// list is non-empty a selection exists and points into it; when it is empty
/// there is no selection. Every query change resets the selection to the
/// first match.
///
/// Deserializing rebuilds the filtered list from `source` and `query`; a
/// stored selection is kept only if it still points into that list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectorSnapshot")]
pub struct Selector {
    source: Vec<String>,
    query: String,
    filtered: Vec<usize>,
    selected: Option<usize>,
}

#[derive(Deserialize)]
struct SelectorSnapshot {
    source: Vec<String>,
    #[serde(default)]
    query: String,
    #[serde(default)]
    selected: Option<usize>,
}

impl From<SelectorSnapshot> for Selector {
    fn from(snapshot: SelectorSnapshot) -> Self {
        let mut selector = Self::new(snapshot.source);
        selector.set_query(&snapshot.query);
        if let Some(idx) = snapshot.selected.filter(|&idx| idx < selector.filtered.len()) {
            selector.selected = Some(idx);
        }
        selector
    }
}

impl Selector {
    pub fn new(source: Vec<String>) -> Self {
        let mut selector = Self {
            source,
            query: String::new(),
            filtered: Vec::new(),
            selected: None,
        };
        selector.refilter();
        selector
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    /// Step the selection one entry, pinning at either end
    pub fn move_selection(&mut self, direction: Direction) {
        let Some(last) = self.filtered.len().checked_sub(1) else {
            return;
        };

        let current = self.selected.unwrap_or(0);
        let next = match direction {
            Direction::Up => current.saturating_sub(1),
            Direction::Down => (current + 1).min(last),
        };
        self.selected = Some(next.min(last));
    }

    /// Resolve the selected name against `template`.
    ///
    /// Returns `None` when nothing is selected.
    pub fn confirm_selection(&self, template: &str) -> Option<ResolvedTarget> {
        let name = self.selected_name()?;
        Some(substitute(template, &lookup_token(name)))
    }

    fn refilter(&mut self) {
        self.filtered = matching_indices(&self.query, &self.source);
        self.selected = if self.filtered.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.filtered.iter().map(|&idx| self.source[idx].as_str())
    }

    pub fn filtered_name(&self, position: usize) -> Option<&str> {
        self.filtered
            .get(position)
            .map(|&idx| self.source[idx].as_str())
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.source.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.filtered_name(self.selected?)
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

#[cfg(test)]
#[path = "selector_state_tests.rs"]
mod selector_state_tests;
