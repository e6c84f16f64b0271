//! Lookup tokens
//!
//! A lookup token is the slug form of a display name that target sites
//! expect in their URLs: letters only, lowercase.

/// Reduce a display name to its lookup token.
///
/// Only ASCII letters survive, lowercased. Digits, spaces, punctuation and
/// non-ASCII characters (accented letters included) are dropped, so
/// `"Kai'Sa"` becomes `"kaisa"` and `"Dr. Mundo"` becomes `"drmundo"`.
pub fn lookup_token(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod token_tests;
