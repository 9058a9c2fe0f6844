#![no_main]

use libfuzzer_sys::fuzz_target;

use parqsort_fuzz::u8_as_i32s;

// The default threshold keeps fuzz sized inputs entirely sequential, so this target takes the
// threshold from the first input byte to let the fuzzer drive the dispatch path as well.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let threshold = data[0] as usize;
    let mut v = u8_as_i32s(&data[1..]);

    let mut expected = v.clone();
    expected.sort_unstable();

    parqsort::par_sort_with_threshold(&mut v, threshold);
    assert_eq!(v, expected);
});
