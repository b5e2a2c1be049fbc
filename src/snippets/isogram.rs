//! Isogram check

use std::collections::HashSet;

/// True when no letter repeats, ignoring case
pub fn is_isogram(s: &str) -> bool {
    let distinct: HashSet<char> = s.to_lowercase().chars().collect();
    s.chars().count() == distinct.len()
}
