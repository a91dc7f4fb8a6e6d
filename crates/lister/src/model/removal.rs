//! Stable bulk removal of elements at arbitrary indices.
//!
//! [`remove_at_indices`] removes any set of positions from a `Vec` in a single
//! left-compaction pass. Survivors keep their relative order and stay in the
//! original allocation. The removed elements come back in the order the
//! caller listed their indices, not in sorted order, so callers can match
//! them up with bookkeeping keyed by request order.

use std::collections::VecDeque;

use lister_core::PerfSpan;
use lister_core::logging::targets;
use thiserror::Error;

/// Why a set of removal indices was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalError {
    /// An index is not below the length of the sequence.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// An index appears more than once.
    #[error("index {index} listed more than once")]
    Duplicate { index: usize },
}

/// Check `indices` against a sequence of length `len`.
///
/// Returns the indices sorted ascending. Out-of-bounds indices are reported
/// first, in caller order, then duplicates.
pub fn sorted_removal_indices(len: usize, indices: &[usize]) -> Result<Vec<usize>, RemovalError> {
    if let Some(&index) = indices.iter().find(|&&index| index >= len) {
        return Err(RemovalError::OutOfBounds { index, len });
    }

    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(RemovalError::Duplicate { index: pair[0] });
    }
    Ok(sorted)
}

/// Remove the elements at `indices` from `items`.
///
/// `indices` may be unsorted and non-contiguous but must be in bounds and
/// unique; otherwise `items` is left untouched and an error is returned.
/// An empty `indices` returns an empty vector without touching `items`.
///
/// Runs in O(n + k log k) for n elements and k removals, with O(k) extra
/// space.
///
/// # Example
///
/// ```
/// use lister::model::remove_at_indices;
///
/// let mut letters = vec!['A', 'B', 'C', 'D', 'E'];
/// let removed = remove_at_indices(&mut letters, &[3, 0]).unwrap();
///
/// assert_eq!(removed, vec!['D', 'A']);
/// assert_eq!(letters, vec!['B', 'C', 'E']);
/// ```
pub fn remove_at_indices<T>(items: &mut Vec<T>, indices: &[usize]) -> Result<Vec<T>, RemovalError> {
    if indices.is_empty() {
        return Ok(Vec::new());
    }
    let sorted = sorted_removal_indices(items.len(), indices)?;
    let _span = PerfSpan::new("remove_at_indices");

    // Everything in `write..read` is a removed element. `parked` holds their
    // original indices in slot order.
    let first = sorted[0];
    let mut write = first;
    let mut parked: VecDeque<usize> = VecDeque::with_capacity(sorted.len());
    let mut pending = sorted.iter().copied().peekable();

    for read in first..items.len() {
        if pending.next_if_eq(&read).is_some() {
            parked.push_back(read);
            continue;
        }
        // The removed element at `write` moves to the back of the parked run.
        items.swap(write, read);
        parked.rotate_left(1);
        write += 1;
    }

    let tail = items.split_off(write);
    tracing::trace!(
        target: targets::REMOVAL,
        removed = tail.len(),
        remaining = items.len(),
        "compacted"
    );

    // Hand the removed elements back in caller order.
    let mut by_origin: Vec<(usize, usize)> = parked
        .iter()
        .enumerate()
        .map(|(slot, &origin)| (origin, slot))
        .collect();
    by_origin.sort_unstable();

    let mut slots: Vec<Option<T>> = tail.into_iter().map(Some).collect();
    let removed: Vec<T> = indices
        .iter()
        .filter_map(|index| {
            let at = by_origin.binary_search_by_key(index, |&(origin, _)| origin).ok()?;
            slots[by_origin[at].1].take()
        })
        .collect();
    debug_assert_eq!(removed.len(), indices.len());

    Ok(removed)
}
