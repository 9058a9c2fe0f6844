/// Reinterprets the raw fuzz input as `i32` values, dropping the unaligned tail.
pub fn u8_as_i32s(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(std::mem::size_of::<i32>())
        .map(|chunk| i32::from_ne_bytes(chunk.try_into().unwrap()))
        .collect()
}
