use std::error::Error;
use std::fmt;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
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

/// Share of distinct values in the benchmark datasets (95% duplicates).
pub const DEFAULT_UNIQUE_RATIO: f64 = 0.05;

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

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatasetError {
    /// Unique-value ratio must lie in `[0, 1]`.
    InvalidUniqueRatio(f64),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUniqueRatio(ratio) => {
                write!(f, "unique ratio must be within [0, 1], got {ratio}")
            }
        }
    }
}

impl Error for DatasetError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    Sorted,
    Reversed,
    Shuffled,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::Sorted,
    Distribution::Reversed,
    Distribution::Shuffled,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::Shuffled => "shuffled",
        }
    }
}

/// `size * unique_ratio` distinct values `0..k`, padded with values drawn
/// uniformly from that set. The result is in generation order, not shuffled.
pub fn duplicate_heavy<R: Rng + ?Sized>(
    size: usize,
    unique_ratio: f64,
    rng: &mut R,
) -> Result<Vec<i64>, DatasetError> {
    if !(0.0..=1.0).contains(&unique_ratio) {
        return Err(DatasetError::InvalidUniqueRatio(unique_ratio));
    }
    if size == 0 {
        return Ok(Vec::new());
    }

    let unique = ((size as f64 * unique_ratio) as usize).clamp(1, size);
    let mut data = Vec::with_capacity(size);
    data.extend(0..unique as i64);
    while data.len() < size {
        data.push(rng.random_range(0..unique as i64));
    }
    Ok(data)
}

/// Duplicate-heavy dataset arranged per `dist`.
pub fn generate(
    dist: Distribution,
    size: usize,
    unique_ratio: f64,
    seed: u64,
) -> Result<Vec<i64>, DatasetError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = duplicate_heavy(size, unique_ratio, &mut rng)?;
    match dist {
        Distribution::Sorted => data.sort_unstable(),
        Distribution::Reversed => data.sort_unstable_by(|a, b| b.cmp(a)),
        Distribution::Shuffled => data.shuffle(&mut rng),
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn rejects_out_of_range_ratio() {
        let mut rng = default_rng();
        assert_eq!(
            duplicate_heavy(10, 1.5, &mut rng),
            Err(DatasetError::InvalidUniqueRatio(1.5))
        );
        assert!(duplicate_heavy(10, -0.1, &mut rng).is_err());
        assert!(duplicate_heavy(10, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn unique_share_matches_ratio() {
        let mut rng = default_rng();
        let data = duplicate_heavy(10_000, DEFAULT_UNIQUE_RATIO, &mut rng).unwrap();
        assert_eq!(data.len(), 10_000);
        let distinct: HashSet<_> = data.iter().copied().collect();
        assert_eq!(distinct.len(), 500);
        assert!(data.iter().all(|&x| (0..500).contains(&x)));
    }

    #[test]
    fn degenerate_sizes() {
        let mut rng = default_rng();
        assert!(duplicate_heavy(0, 0.5, &mut rng).unwrap().is_empty());
        assert_eq!(duplicate_heavy(4, 0.0, &mut rng).unwrap(), vec![0; 4]);
        assert_eq!(duplicate_heavy(3, 1.0, &mut rng).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn distributions_are_arranged() {
        let sorted = generate(Distribution::Sorted, 2000, DEFAULT_UNIQUE_RATIO, 7).unwrap();
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let reversed = generate(Distribution::Reversed, 2000, DEFAULT_UNIQUE_RATIO, 7).unwrap();
        assert!(reversed.windows(2).all(|w| w[0] >= w[1]));

        let mut shuffled = generate(Distribution::Shuffled, 2000, DEFAULT_UNIQUE_RATIO, 7).unwrap();
        assert!(!shuffled.windows(2).all(|w| w[0] <= w[1]));
        shuffled.sort_unstable();
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = generate(Distribution::Shuffled, 512, 0.1, 42).unwrap();
        let b = generate(Distribution::Shuffled, 512, 0.1, 42).unwrap();
        assert_eq!(a, b);
    }
}
