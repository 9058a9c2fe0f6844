#![no_main]

use libfuzzer_sys::fuzz_target;

use parqsort_fuzz::u8_as_i32s;

fuzz_target!(|data: &[u8]| {
    let mut v = u8_as_i32s(data);

    let mut expected = v.clone();
    expected.sort_unstable();

    parqsort::sort(&mut v);
    assert_eq!(v, expected);
});
