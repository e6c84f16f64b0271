/// Indices of the entries that contain `query`, ignoring case.
///
/// Surrounding whitespace of the query is ignored and an empty query matches
/// everything. Indices come back in list order; matches are never re-ranked.
pub fn matching_indices(query: &str, entries: &[String]) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..entries.len()).collect();
    }

    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
