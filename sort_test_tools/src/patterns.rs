//! Input distributions for testing and benchmarking sort implementations.
//! Limited to i32 values; callers map them into other types as needed.
//!
//! All random patterns draw from a process-wide seed so failures are
//! reproducible. Set the `OVERRIDE_SEED` env var to pin a specific seed.

use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use rand::prelude::*;

use zipf::ZipfDistribution;

/// Random values over the full i32 range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Random values drawn uniformly from `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = seeded_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random values with a Zipfian distribution, low values are common and high
/// values are rare.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Random values where the first `sorted_percent` of the slice is sorted,
/// simulating appends to an already sorted collection.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

/// The same value repeated `len` times.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Values in ascending order, already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// Values in descending order, inverse of sorted.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` ascending runs of random values.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunks_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort_unstable();
    }

    vals
}

/// `saw_count` descending runs of random values.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunks_size = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

/// `saw_count` runs of random values, each randomly ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunks_size = len / saw_count.max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

/// Runs of random values with random direction and random length in `range`.
pub fn saw_mixed_range(len: usize, range: std::ops::Range<usize>) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);

    let max_chunks = len / range.start;
    let saw_directions = random_uniform(max_chunks + 1, 0..=1);
    let chunk_sizes = random_uniform(max_chunks + 1, (range.start as i32)..(range.end as i32));

    let mut i = 0;
    let mut l = 0;
    while l < len {
        let chunk_end = std::cmp::min(l + chunk_sizes[i] as usize, len);
        let chunk = &mut vals[l..chunk_end];

        if saw_directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }

        l += chunk_sizes[i] as usize;
        i += 1;
    }

    vals
}

/// First half ascending, second half descending.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Overwrites the default behavior so that each call to a random derived
/// pattern yields new random values.
///
/// By default `patterns::random(4)` yields the same values per process
/// invocation, which is what tests want. Benchmarks should call this once at
/// startup so repeated measurement rounds see fresh inputs.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = get_or_init_seed();
    if seed_type == SeedType::ExternalOverride {
        panic!("use_random_seed_each_time conflicts with the OVERRIDE_SEED env var.");
    }

    *SEED_STATE.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

/// The seed used by all patterns in this process. Logged by the test harness
/// so that failures can be reproduced via `OVERRIDE_SEED`.
pub fn random_init_seed() -> u64 {
    get_or_init_seed().1
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_STATE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn get_or_init_seed() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_STATE.lock().unwrap().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED").ok().map(|seed| {
            u64::from_str(&seed).expect("OVERRIDE_SEED must be a positive whole number")
        }) {
            Some(override_seed) => (SeedType::ExternalOverride, override_seed),
            None => (SeedType::RandomOncePerProcess, thread_rng().gen()),
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (SeedType::RandomEachTime, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn seeded_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
