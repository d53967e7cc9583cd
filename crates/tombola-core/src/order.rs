//! Fallible ordering for items that are only `PartialOrd`.
//!
//! `slice::sort_by` may panic when handed a comparator that is not a total
//! order, so a stable merge sort that stops at the first incomparable pair
//! is used instead.

use std::cmp::Ordering;

use crate::error::TombolaError;

/// Returns a sorted copy of `items`.
///
/// # Errors
///
/// Returns `TombolaError::ItemsNotComparable` if any compared pair has no
/// defined order, or if the comparisons were inconsistent and the result is
/// not non-decreasing.
pub fn try_sorted<T: PartialOrd + Clone>(items: &[T]) -> Result<Vec<T>, TombolaError> {
    let sorted = merge_sort(items)?;
    if sorted.windows(2).all(|pair| pair[0] <= pair[1]) {
        Ok(sorted)
    } else {
        Err(TombolaError::ItemsNotComparable)
    }
}

fn merge_sort<T: PartialOrd + Clone>(items: &[T]) -> Result<Vec<T>, TombolaError> {
    if items.len() <= 1 {
        // A lone item must still compare equal to itself (rejects NaN).
        if let Some(item) = items.first() {
            if item.partial_cmp(item) != Some(Ordering::Equal) {
                return Err(TombolaError::ItemsNotComparable);
            }
        }
        return Ok(items.to_vec());
    }

    let (left, right) = items.split_at(items.len() / 2);
    let mut left = merge_sort(left)?.into_iter().peekable();
    let mut right = merge_sort(right)?.into_iter().peekable();
    let mut merged = Vec::with_capacity(items.len());

    loop {
        let ordering = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.partial_cmp(r),
            _ => break,
        };
        let next = match ordering {
            Some(Ordering::Greater) => right.next(),
            Some(_) => left.next(),
            None => return Err(TombolaError::ItemsNotComparable),
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);

    Ok(merged)
}
