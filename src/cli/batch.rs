//! Non-interactive modes: filter or resolve once and print the result

use std::io::{self, Write};

use crate::selector::{Selector, SelectorEvent};
use crate::target::{ResolvedTarget, Target};

/// Write every name matching `query`, one per line.
///
/// Returns how many names were written.
pub fn write_matches(out: &mut impl Write, names: Vec<String>, query: &str) -> io::Result<usize> {
    let mut selector = Selector::new(names);
    selector.apply(SelectorEvent::QueryChanged(query));

    for name in selector.filtered_names() {
        writeln!(out, "{}", name)?;
    }
    Ok(selector.filtered_count())
}

/// Resolve the first name matching `query` against `target` and write it.
///
/// Returns the resolved target, or `None` (writing nothing) if nothing
/// matched.
pub fn write_resolved(
    out: &mut impl Write,
    names: Vec<String>,
    query: &str,
    target: &Target,
) -> io::Result<Option<ResolvedTarget>> {
    let mut selector = Selector::new(names);
    selector.apply(SelectorEvent::QueryChanged(query));

    let resolved = selector.apply(SelectorEvent::Confirm(&target.template));
    if let Some(resolved) = &resolved {
        writeln!(out, "{}", resolved)?;
    }
    Ok(resolved)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod batch_tests;
