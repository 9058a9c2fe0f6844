use crate::pivot::choose_pivot;

/// Partitions `v` around a median-of-three pivot and returns the pivot index.
///
/// On return the pivot sits at the returned index in its final sorted position, everything to
/// its left compares less than or equal to it and everything to its right compares greater.
/// Mutation happens exclusively through swaps, so `v` always remains a permutation of its
/// original content, including mid-scan when a comparison panics.
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return 0;
    }

    let pivot_idx = choose_pivot(v, is_less);

    // Lomuto scheme. The pivot is parked in the last slot, everything that compares less or
    // equal is swapped to the front, and the pivot is restored into the first slot that didn't.
    let last = len - 1;
    v.swap(pivot_idx, last);

    let mut store_idx = 0;
    for i in 0..last {
        // v[i] <= pivot, expressed through is_less with flipped operands.
        if !is_less(&v[last], &v[i]) {
            v.swap(i, store_idx);
            store_idx += 1;
        }
    }

    v.swap(store_idx, last);

    store_idx
}

/// Sequential quicksort. Recurses into one side of each partition and loops on the other.
///
/// Both sides exclude the pivot, so each round shrinks the span strictly. That guarantees
/// termination even for comparators that violate a total order.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_idx = partition(v, is_less);

        let (left, right) = v.split_at_mut(pivot_idx);
        let (_pivot, right) = right.split_at_mut(1);

        // Recurse into the shorter side only in order to minimize the total number of
        // recursive calls and consume less stack space. Skewed partitions then only grow the
        // loop count, the recursion depth stays logarithmic in the input length.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Parallel quicksort, throttled by `budget`.
///
/// `budget` is the number of execution units this call tree may still occupy. It halves at
/// every dispatch with the right side receiving the remainder, so the budgets of the two sides
/// always add up to the parent's and sibling subtrees cannot overcommit the pool between them.
/// The budget travels as a plain value, nothing is shared or synchronized.
///
/// Spans shorter than `threshold` and spans whose budget is down to a single unit are finished
/// with the sequential algorithm, the dispatch overhead would dominate otherwise.
pub(crate) fn par_quicksort<T, F>(v: &mut [T], is_less: &F, budget: usize, threshold: usize)
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    if len < threshold || budget <= 1 {
        quicksort(v, &mut |a, b| is_less(a, b));
        return;
    }

    let pivot_idx = partition(v, &mut |a, b| is_less(a, b));

    let (left, right) = v.split_at_mut(pivot_idx);
    let (_pivot, right) = right.split_at_mut(1);

    let left_budget = budget / 2;
    let right_budget = budget - left_budget;

    // The two sub-slices are disjoint views, the pivot slot between them stays untouched.
    // join returns once both closures are done and resurfaces a panic from either side in
    // this caller.
    rayon::join(
        || par_quicksort(left, is_less, left_budget, threshold),
        || par_quicksort(right, is_less, right_budget, threshold),
    );
}
