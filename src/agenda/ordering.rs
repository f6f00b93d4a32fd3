//! Sort-by-key over appointment sequences.
//!
//! [`sort_by`] is a three-way-partition quicksort: the middle element is the
//! pivot, every element goes to the less, equal or greater bucket in input
//! order, and the outer buckets are sorted recursively. Keeping input order
//! inside the buckets makes the sort stable.
//!
//! The pivot is never randomized, so adversarial input degrades to O(n²).
//! Appointment books hold tens of records; revisit this before using it on
//! anything larger.

use crate::model::Appointment;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The keys an appointment book can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Chronological by `when`.
    Date,
    /// Case-insensitive by name.
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Name => write!(f, "name"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" | "when" | "time" => Ok(SortKey::Date),
            "name" => Ok(SortKey::Name),
            _ => Err(format!("Unknown sort key: {} (expected date or name)", s)),
        }
    }
}

/// Returns a sorted copy of `items`, ordered by `key`. The input is untouched.
pub fn sort_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let keyed: Vec<(K, &T)> = items.iter().map(|item| (key(item), item)).collect();
    quicksort(keyed)
        .into_iter()
        .map(|(_, item)| item.clone())
        .collect()
}

pub fn sort_appointments(appointments: &[Appointment], by: SortKey) -> Vec<Appointment> {
    match by {
        SortKey::Date => sort_by(appointments, |a| a.when),
        SortKey::Name => sort_by(appointments, Appointment::name_key),
    }
}

fn quicksort<K: Ord, T>(items: Vec<(K, T)>) -> Vec<(K, T)> {
    if items.len() <= 1 {
        return items;
    }

    let pivot = &items[items.len() / 2].0;
    let orders: Vec<Ordering> = items.iter().map(|(k, _)| k.cmp(pivot)).collect();

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for (item, order) in items.into_iter().zip(orders) {
        match order {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }

    let mut sorted = quicksort(less);
    sorted.extend(equal);
    sorted.extend(quicksort(greater));
    sorted
}
