//! In-place comparison sorts over bid sequences.
//!
//! The ordered sequence itself is a plain `Vec<Bid>` (append and positional
//! access come with it), so this module only supplies the two interchangeable
//! full-sort algorithms, both ordering by title:
//! - [`selection_sort`] - O(n²) scan-and-swap, simple and allocation-free
//! - [`quick_sort`] - recursive partition-exchange, midpoint pivot
//!
//! Neither sort is stable: records with equal titles may trade places, which
//! is acceptable because a title carries no identity of its own. Both sorts
//! terminate for any finite input, including already-sorted, reverse-sorted,
//! and all-equal sequences, and neither can fail.

use crate::common::Bid;

/// Sort bids in place by title using selection sort.
///
/// For each position, the smallest remaining title is swapped into place.
/// O(n²) comparisons in every case; on equal titles the first candidate
/// found is kept, making the pass order deterministic.
pub fn selection_sort(bids: &mut [Bid]) {
    for i in 0..bids.len() {
        let mut smallest = i;
        for j in (i + 1)..bids.len() {
            if bids[j].title < bids[smallest].title {
                smallest = j;
            }
        }
        bids.swap(i, smallest);
    }
}

/// Sort bids in place by title using quicksort.
///
/// Average O(n log n), worst case O(n²) for adversarial orderings; the
/// midpoint pivot makes the common presorted/reverse-sorted inputs behave
/// like the average case.
pub fn quick_sort(bids: &mut [Bid]) {
    if bids.len() > 1 {
        quick_sort_range(bids, 0, bids.len() - 1);
    }
}

/// Recursive quicksort over the inclusive index range `[begin, end]`.
fn quick_sort_range(bids: &mut [Bid], begin: usize, end: usize) {
    // Zero or one element: nothing to do.
    if begin >= end {
        return;
    }

    let split = partition(bids, begin, end);

    quick_sort_range(bids, begin, split);
    quick_sort_range(bids, split + 1, end);
}

/// Partition `[begin, end]` around the title of its midpoint element.
///
/// Two indices scan toward each other: `low` advances while its title is
/// strictly less than the pivot title, `high` retreats while the pivot title
/// is strictly less than its title, and out-of-place pairs are swapped. When
/// the indices cross or meet, `high` is the split point: everything at or
/// below it compares `<=` the pivot title, everything above it `>=`.
///
/// The pivot title is captured by value up front, so swaps moving the pivot
/// element itself do not disturb the comparisons. Its copy also bounds both
/// scans: neither index can run past the element equal to the pivot, which
/// keeps the unguarded `+= 1` / `-= 1` in range.
fn partition(bids: &mut [Bid], begin: usize, end: usize) -> usize {
    let mid = begin + (end - begin) / 2;
    let pivot_title = bids[mid].title.clone();

    let mut low = begin;
    let mut high = end;

    loop {
        while bids[low].title < pivot_title {
            low += 1;
        }
        while pivot_title < bids[high].title {
            high -= 1;
        }

        // Crossed or met: partitioning is complete.
        if low >= high {
            return high;
        }

        bids.swap(low, high);
        low += 1;
        high -= 1;
    }
}
