//! Binary search by key.
//!
//! The search only works on a sequence sorted ascending by the same key.
//! [`find_by_key`] verifies that before searching and fails with
//! [`AgendaError::Unsorted`]; [`find_by_key_unchecked`] skips the check for
//! callers that sorted the sequence themselves a moment ago.

use crate::error::{AgendaError, Result};
use std::cmp::Ordering;

/// Searches `items` for an element whose key equals `target`.
///
/// Returns the first matching index the search lands on (not necessarily the
/// lowest one when keys repeat), or `None`.
pub fn find_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Result<Option<usize>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if let Some(position) = first_out_of_order(items, &key) {
        return Err(AgendaError::Unsorted { position });
    }
    Ok(find_by_key_unchecked(items, target, key))
}

/// Same as [`find_by_key`] without the sortedness check. Unsorted input gives
/// an unspecified answer.
pub fn find_by_key_unchecked<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut low = 0;
    let mut high = items.len();

    // Half-open range [low, high)
    while low < high {
        let mid = low + (high - low) / 2;
        match key(&items[mid]).cmp(target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

fn first_out_of_order<T, K: Ord>(items: &[T], key: &impl Fn(&T) -> K) -> Option<usize> {
    items
        .windows(2)
        .position(|w| key(&w[0]) > key(&w[1]))
        .map(|i| i + 1)
}
