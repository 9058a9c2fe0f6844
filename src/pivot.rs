use std::mem;

/// Selects a pivot index by ranking the first, middle and last element of `v`.
///
/// Only the index roles are swapped while ranking, the slice itself is never mutated. The
/// returned index holds the median of the three sampled values. Spans shorter than 3 have no
/// meaningful median, for those index 0 is returned.
pub(crate) fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 3 {
        return 0;
    }

    let mut first = 0;
    let mut middle = len / 2;
    let mut last = len - 1;

    if is_less(&v[middle], &v[first]) {
        mem::swap(&mut first, &mut middle);
    }

    if is_less(&v[last], &v[middle]) {
        mem::swap(&mut middle, &mut last);

        if is_less(&v[middle], &v[first]) {
            mem::swap(&mut first, &mut middle);
        }
    }

    middle
}

#[cfg(test)]
mod tests {
    use super::choose_pivot;

    #[test]
    fn short_spans() {
        let mut is_less = |a: &i32, b: &i32| a < b;

        let empty: [i32; 0] = [];
        assert_eq!(choose_pivot(&empty, &mut is_less), 0);
        assert_eq!(choose_pivot(&[7], &mut is_less), 0);
        assert_eq!(choose_pivot(&[7, 3], &mut is_less), 0);
    }

    #[test]
    fn median_of_three_distinct() {
        let mut is_less = |a: &i32, b: &i32| a < b;

        // Every arrangement of three distinct values must yield the index of the median.
        for v in [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ] {
            let pivot_idx = choose_pivot(&v, &mut is_less);
            assert_eq!(v[pivot_idx], 2, "input: {:?}", v);
        }
    }

    #[test]
    fn samples_ends_and_middle() {
        let mut is_less = |a: &i32, b: &i32| a < b;

        // Samples are v[0] == 9, v[3] == 0 and v[6] == 5, the median 5 sits at index 6.
        let v = [9, 8, 7, 0, 1, 2, 5];
        assert_eq!(choose_pivot(&v, &mut is_less), 6);

        // Samples 1, 9, 4, the median 4 sits at index 4.
        let v = [1, 8, 9, 2, 4];
        assert_eq!(choose_pivot(&v, &mut is_less), 4);

        // Already sorted input keeps the middle index.
        let v = [1, 2, 3, 4, 5];
        assert_eq!(choose_pivot(&v, &mut is_less), 2);
    }

    #[test]
    fn equal_samples() {
        let mut is_less = |a: &i32, b: &i32| a < b;

        // No ranking swaps happen for equal samples, the middle index is returned as is.
        assert_eq!(choose_pivot(&[2, 2, 2], &mut is_less), 1);
        assert_eq!(choose_pivot(&[2, 2, 2, 2, 2], &mut is_less), 2);
    }
}
