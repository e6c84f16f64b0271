//! Targets: URL templates a lookup token is substituted into, and the
//! opener that resolved targets are handed to.

mod opener;
mod template;

pub use opener::{Opener, SystemOpener};
pub use template::{PLACEHOLDER, ResolvedTarget, Target, default_targets, substitute};
