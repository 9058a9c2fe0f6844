#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        let mut v = data.to_vec();

        let mut expected = v.clone();
        expected.sort_unstable();

        // A small threshold forces the dispatch path even for byte sized fuzz inputs.
        parqsort::par_sort_with_threshold(&mut v, 16);
        assert_eq!(v, expected);
    });
}
