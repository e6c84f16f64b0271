use crate::target::ResolvedTarget;

use super::selector_state::{Direction, Selector};

/// Everything that can happen to a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent<'a> {
    QueryChanged(&'a str),
    Move(Direction),
    /// Resolve the selection against a target template
    Confirm(&'a str),
}

impl Selector {
    /// Apply one event in place.
    ///
    /// Only `Confirm` produces a resolved target, and only when something is
    /// selected.
    pub fn apply(&mut self, event: SelectorEvent<'_>) -> Option<ResolvedTarget> {
        match event {
            SelectorEvent::QueryChanged(query) => {
                self.set_query(query);
                None
            }
            SelectorEvent::Move(direction) => {
                self.move_selection(direction);
                None
            }
            SelectorEvent::Confirm(template) => self.confirm_selection(template),
        }
    }
}

/// Value-in, value-out form of [`Selector::apply`]
pub fn reduce(mut state: Selector, event: SelectorEvent<'_>) -> (Selector, Option<ResolvedTarget>) {
    let resolved = state.apply(event);
    (state, resolved)
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod reducer_tests;
