//! Joining of list and mapping values into single table cells.
//!
//! Items are not escaped: an item that itself contains [`SEPARATOR`] makes
//! the joined cell ambiguous.

use std::fmt::Display;

/// Separator placed between joined items.
pub const SEPARATOR: &str = "; ";

/// Join items as `a; b; c`. Empty input yields an empty string.
pub fn join_sequence<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    parts.join(SEPARATOR)
}

/// Join pairs as `k1=v1; k2=v2`, in iteration order. Empty input yields an
/// empty string.
pub fn join_mapping<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    join_sequence(pairs.into_iter().map(|(k, v)| format!("{k}={v}")))
}
