//! In-place partition sort with a first-element pivot.
//!
//! The pivot is compared against a cursor that starts at the far end of the
//! sub-range. Whenever the pivot is out of order relative to the cursor the two
//! swap, the pivot takes the cursor's slot, and the cursor restarts next to
//! the pivot's old slot from the other side. The cursor always walks toward
//! the pivot, so the pivot is settled once the two meet. Both sides of the
//! settled pivot are then sorted recursively.

use tracing::trace;

/// Sorts `values[offset..offset + len]` ascending.
///
/// # Panics
///
/// Panics if `offset + len` exceeds `values.len()`.
pub fn pivot_sort<T: PartialOrd>(values: &mut [T], len: usize, offset: usize) {
    pivot_sort_observed(values, len, offset, &mut |_, _| {});
}

/// [`pivot_sort`], reporting each swap as `(pivot, cursor)` before it happens.
pub fn pivot_sort_observed<T, F>(values: &mut [T], len: usize, offset: usize, on_swap: &mut F)
where
    T: PartialOrd,
    F: FnMut(usize, usize),
{
    if len <= 1 {
        return;
    }
    assert!(
        offset + len <= values.len(),
        "sub-range {}..{} out of bounds for length {}",
        offset,
        offset + len,
        values.len()
    );

    let pivot = settle_pivot(values, len, offset, on_swap);
    trace!(offset, len, pivot, "pivot settled");

    let left = pivot - offset;
    if left > 1 {
        pivot_sort_observed(values, left, offset, on_swap);
    }
    let right = offset + len - pivot - 1;
    if right > 1 {
        pivot_sort_observed(values, right, pivot + 1, on_swap);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// Cursor is above the pivot, looking for a smaller value.
    FromFar,
    /// Cursor is below the pivot, looking for a larger value.
    FromNear,
}

fn settle_pivot<T, F>(values: &mut [T], len: usize, offset: usize, on_swap: &mut F) -> usize
where
    T: PartialOrd,
    F: FnMut(usize, usize),
{
    let mut pivot = offset;
    let mut cursor = offset + len - 1;
    let mut scan = Scan::FromFar;

    while cursor != pivot {
        match scan {
            Scan::FromFar => {
                if values[pivot] > values[cursor] {
                    on_swap(pivot, cursor);
                    values.swap(pivot, cursor);
                    (pivot, cursor) = (cursor, pivot + 1);
                    scan = Scan::FromNear;
                } else {
                    cursor -= 1;
                }
            }
            Scan::FromNear => {
                if values[pivot] < values[cursor] {
                    on_swap(pivot, cursor);
                    values.swap(pivot, cursor);
                    (pivot, cursor) = (cursor, pivot - 1);
                    scan = Scan::FromFar;
                } else {
                    cursor += 1;
                }
            }
        }
    }
    pivot
}
