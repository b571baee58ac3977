use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const FEW_DISTINCT_VALUES: i32 = 16;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes used by the sort tests and benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    Random,
    Ascending,
    Descending,
    AllEqual,
    FewDistinct,
    /// Ascending with about 1% random swaps.
    NearlySorted,
}

pub const ALL_PATTERNS: [Pattern; 6] = [
    Pattern::Random,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::AllEqual,
    Pattern::FewDistinct,
    Pattern::NearlySorted,
];

pub fn pattern_name(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::Random => "random",
        Pattern::Ascending => "ascending",
        Pattern::Descending => "descending",
        Pattern::AllEqual => "all_equal",
        Pattern::FewDistinct => "few_distinct",
        Pattern::NearlySorted => "nearly_sorted_1pct_swaps",
    }
}

pub fn generate_i32(pattern: Pattern, size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_i32_with(&mut rng, pattern, size)
}

pub fn generate_i32_with<R: Rng + ?Sized>(rng: &mut R, pattern: Pattern, size: usize) -> Vec<i32> {
    // Values wrap past i32::MAX for huge sizes; only the shape matters here.
    let ascending = |i: usize| i as i32;

    match pattern {
        Pattern::Random => (0..size).map(|_| rng.random::<i32>()).collect(),
        Pattern::Ascending => (0..size).map(ascending).collect(),
        Pattern::Descending => (0..size).rev().map(ascending).collect(),
        Pattern::AllEqual => vec![rng.random::<i32>(); size],
        Pattern::FewDistinct => (0..size)
            .map(|_| rng.random_range(0..FEW_DISTINCT_VALUES) * 17 - 100)
            .collect(),
        Pattern::NearlySorted => {
            let mut data = (0..size).map(ascending).collect::<Vec<_>>();
            if size > 0 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_respect_size_and_shape() {
        for &pattern in &ALL_PATTERNS {
            for &size in &[0_usize, 1, 2, 100, 1000] {
                let data = generate_i32(pattern, size, RNG_SEED);
                assert_eq!(data.len(), size, "pattern={}", pattern_name(pattern));
            }
        }

        let asc = generate_i32(Pattern::Ascending, 100, 1);
        assert!(asc.windows(2).all(|w| w[0] < w[1]));

        let desc = generate_i32(Pattern::Descending, 100, 1);
        assert!(desc.windows(2).all(|w| w[0] > w[1]));

        let equal = generate_i32(Pattern::AllEqual, 100, 1);
        assert!(equal.iter().all(|&x| x == equal[0]));

        let few = generate_i32(Pattern::FewDistinct, 1000, 1);
        let mut distinct = few.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() <= FEW_DISTINCT_VALUES as usize);
    }

    #[test]
    fn default_rng_is_fixed_seed() {
        let a = generate_i32_with(&mut default_rng(), Pattern::Random, 64);
        let b = generate_i32_with(&mut default_rng(), Pattern::Random, 64);
        assert_eq!(a, b);
        assert_eq!(a, generate_i32(Pattern::Random, 64, RNG_SEED));
    }

    #[test]
    fn generation_is_deterministic() {
        for &pattern in &ALL_PATTERNS {
            assert_eq!(
                generate_i32(pattern, 512, 42),
                generate_i32(pattern, 512, 42)
            );
        }
    }
}
