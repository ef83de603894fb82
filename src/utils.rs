use tracing::debug;

use crate::store::DataStore;

/// Returns `on_true` if `item` is one of the whitespace-separated tokens of
/// variable `var`, `on_false` otherwise.
///
/// Matching is exact and case-sensitive; a token that merely starts with
/// `item` does not count. An unset variable returns `on_false`.
pub fn contains<T>(var: &str, item: &str, on_true: T, on_false: T, d: &DataStore) -> T {
    let value = match d.get_var(var) {
        Some(value) => value,
        None => return on_false,
    };

    let found = value.split_whitespace().any(|token| token == item);
    debug!("contains: var={}, item={}, found={}", var, item, found);

    if found {
        on_true
    } else {
        on_false
    }
}

/// Like [`contains`], but `items` is itself whitespace-split and the check
/// succeeds if any one of those tokens is present in the variable.
pub fn contains_any<T>(var: &str, items: &str, on_true: T, on_false: T, d: &DataStore) -> T {
    let value = match d.get_var(var) {
        Some(value) => value,
        None => return on_false,
    };

    let tokens: Vec<&str> = value.split_whitespace().collect();
    let found = items.split_whitespace().any(|item| tokens.contains(&item));
    debug!("contains_any: var={}, items={}, found={}", var, items, found);

    if found {
        on_true
    } else {
        on_false
    }
}

/// Returns the subset of whitespace-split `items` that are tokens of
/// variable `var`, joined with single spaces, in the order given by `items`.
/// An unset variable yields the empty string.
pub fn filter(var: &str, items: &str, d: &DataStore) -> String {
    let value = match d.get_var(var) {
        Some(value) => value,
        None => return String::new(),
    };

    let tokens: Vec<&str> = value.split_whitespace().collect();
    let kept: Vec<&str> = items
        .split_whitespace()
        .filter(|item| tokens.contains(item))
        .collect();

    let result = kept.join(" ");
    debug!("filter: var={}, items={}, kept={}", var, items, result);

    result
}
