/// An implementation under test.
///
/// The bounds admit parallel implementations: elements may move between worker
/// threads and the comparator is shared across them by reference.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Send;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> std::cmp::Ordering + Sync;
}

pub mod patterns;
