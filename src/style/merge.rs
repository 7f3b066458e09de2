//! Right-most-wins merging of style token sources.
//!
//! [`merge_classes`] is the crate's class merger. Sources are given from
//! lowest to highest precedence, for example
//! `[base, variant, size, palette, caller_override]`. Each source is a
//! whitespace-separated token string.
//!
//! Resolution walks the tokens from the highest-precedence end:
//!
//! - the first token seen for a conflict key (modifiers + important marker +
//!   property group) wins, every lower-precedence token with the same key
//!   is dropped
//! - a winning token also claims the narrower groups it shadows, so a later
//!   `p-0` removes an earlier `px-2` but a later `px-2` keeps an earlier `p-0`
//! - miscellaneous tokens never conflict
//! - exact duplicates collapse to one occurrence
//!
//! Surviving tokens keep their relative source order.

use std::collections::HashSet;

use log::trace;

use super::group::{classify_utility, parse_token, PropertyGroup};

/// Identity under which two tokens compete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConflictKey {
    modifiers: String,
    important: bool,
    group: PropertyGroup,
}

impl ConflictKey {
    fn of(token: &str) -> Option<Self> {
        let parsed = parse_token(token);
        let group = classify_utility(parsed.utility)?;
        // Modifier order does not change meaning: `hover:focus:x` == `focus:hover:x`.
        let mut modifiers = parsed.modifiers;
        modifiers.sort_unstable();
        Some(Self {
            modifiers: modifiers.join(":"),
            important: parsed.important,
            group,
        })
    }

    fn with_group(&self, group: PropertyGroup) -> Self {
        Self {
            modifiers: self.modifiers.clone(),
            important: self.important,
            group,
        }
    }
}

/// Merges token sources into one class string.
///
/// # Example
///
/// ```rust
/// use folio::merge_classes;
///
/// let merged = merge_classes(["px-2 py-1 bg-red-500", "bg-blue-100 hover:bg-blue-200"]);
/// assert_eq!(merged, "px-2 py-1 bg-blue-100 hover:bg-blue-200");
/// ```
pub fn merge_classes<I, S>(sources: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sources: Vec<S> = sources.into_iter().collect();
    let tokens: Vec<&str> = sources
        .iter()
        .flat_map(|source| source.as_ref().split_whitespace())
        .collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
    let mut claimed: HashSet<ConflictKey> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for &token in tokens.iter().rev() {
        if !seen.insert(token) {
            continue;
        }
        if let Some(key) = ConflictKey::of(token) {
            if claimed.contains(&key) {
                trace!("dropping overridden style token '{}'", token);
                continue;
            }
            for &narrower in key.group.shadows() {
                claimed.insert(key.with_group(narrower));
            }
            claimed.insert(key);
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Merges ordered token lists, lowest precedence first.
///
/// Equivalent to [`merge_classes`] over the flattened lists.
pub fn merge_token_lists<L, S>(lists: &[L]) -> String
where
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    merge_classes(lists.iter().flat_map(|list| list.as_ref().iter()))
}
