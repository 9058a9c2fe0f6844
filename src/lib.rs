//! A parallel, in-place, unstable quicksort.
//!
//! The slice is recursively partitioned around median-of-three pivots. Partitioning yields
//! disjoint sub-slices, so the two sides are sorted concurrently on the [rayon] thread pool.
//! The fan-out is capped by a budget that starts at the pool size and halves at every
//! dispatch, and short sub-slices are finished sequentially where dispatch overhead would
//! dominate.

use std::cmp::Ordering;

mod pivot;
mod quicksort;

use crate::quicksort::{par_quicksort, quicksort};

/// Sub-slices shorter than this many elements are sorted sequentially instead of being
/// dispatched to the thread pool.
///
/// This is the cutover used by [`par_sort`] and [`par_sort_by`]. The `_with_threshold`
/// variants accept a caller-chosen value instead.
pub const DEFAULT_THRESHOLD: usize = 1000;

/// Sorts the slice on the calling thread, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n* \* log(*n*)) on average. Pivots are chosen as the median of the
/// first, middle and last element, which steers common inputs away from the quadratic worst
/// case without ruling it out.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// parqsort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline(always)]
pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice on the calling thread with a comparator function, but might not preserve
/// the order of equal elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but the call still
/// terminates and all original elements remain in the slice.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
///
/// parqsort::sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// parqsort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline(always)]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice in parallel, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place (i.e., does not
/// allocate). Equivalent to [`par_sort_with_threshold`] with [`DEFAULT_THRESHOLD`].
///
/// # Current implementation
///
/// The slice is partitioned in place around a median-of-three pivot, then both sides are
/// handed to [`rayon::join`]. A budget seeded with [`rayon::current_num_threads`] halves at
/// every dispatch, with the sides of a dispatch sharing their parent's budget. Once the
/// budget is down to a single unit, or a sub-slice is shorter than the threshold, sorting
/// continues sequentially on whichever worker holds the sub-slice.
///
/// # Panics
///
/// A panic from `Ord` surfaces in the calling thread once the outstanding sub-sorts have
/// finished. The slice then still holds all original elements, in unspecified order.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// parqsort::par_sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline(always)]
pub fn par_sort<T: Ord + Send>(v: &mut [T]) {
    par_sort_with_threshold(v, DEFAULT_THRESHOLD);
}

/// Sorts the slice in parallel with a comparator function, but might not preserve the order
/// of equal elements.
///
/// The comparator is shared across worker threads by reference, hence the `Sync` bound. It
/// must define a total ordering for the elements in the slice. If the ordering is not total,
/// the order of the elements is unspecified, but the call still terminates and all original
/// elements remain in the slice.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
///
/// parqsort::par_sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// parqsort::par_sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline(always)]
pub fn par_sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    par_sort_by_with_threshold(v, compare, DEFAULT_THRESHOLD);
}

/// Sorts the slice in parallel, treating sub-slices shorter than `threshold` as sequential
/// work.
///
/// Lowering the threshold fans work out more aggressively, raising it keeps more of the work
/// on fewer threads. The threshold only decides where dispatching stops, the sorted result
/// is the same for every value. See [`par_sort`] for the algorithm.
///
/// # Examples
///
/// ```
/// let mut v = vec![8, 3, 5, 1, 9, 0, 4, 2, 7, 6];
///
/// parqsort::par_sort_with_threshold(&mut v, 4);
/// assert!(v == [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[inline(always)]
pub fn par_sort_with_threshold<T: Ord + Send>(v: &mut [T], threshold: usize) {
    par_quicksort(v, &|a, b| a.lt(b), rayon::current_num_threads(), threshold);
}

/// Sorts the slice in parallel with a comparator function, treating sub-slices shorter than
/// `threshold` as sequential work.
///
/// See [`par_sort_by`] for the comparator requirements and [`par_sort_with_threshold`] for
/// the effect of `threshold`.
#[inline(always)]
pub fn par_sort_by_with_threshold<T, F>(v: &mut [T], compare: F, threshold: usize)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    par_quicksort(
        v,
        &|a, b| compare(a, b) == Ordering::Less,
        rayon::current_num_threads(),
        threshold,
    );
}
