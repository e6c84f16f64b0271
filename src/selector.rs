//! Filterable selector
//!
//! Owns the name list, the current query, the filtered view of the list and
//! the selection. Knows nothing about terminals; the app renders from it
//! after every mutation.

mod matcher;
mod reducer;
mod selector_state;

pub use matcher::matching_indices;
pub use reducer::{SelectorEvent, reduce};
pub use selector_state::{Direction, Selector};
