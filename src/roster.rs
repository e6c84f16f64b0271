//! Roster: the list of names the launcher picks from

mod reader;

pub use reader::{DEFAULT_LIST_FILE, RosterReader};
