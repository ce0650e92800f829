pub mod algorithms;
pub mod error;
pub mod params;

pub use algorithms::quick_sort_2way::TwoWayQuickSort;
pub use algorithms::quick_sort_3way::HybridQuickSort;
pub use error::SortError;
pub use params::{DEFAULT_THRESHOLD, Threshold};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    HeapSort,
    HybridQuickSort,
    TwoWayQuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 4] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::HybridQuickSort,
    SortAlgorithm::TwoWayQuickSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::HybridQuickSort => "hybrid_quick_sort",
        SortAlgorithm::TwoWayQuickSort => "two_way_quick_sort",
    }
}

/// Counters filled in by the quicksort engines while they run.
///
/// A context can be reused across calls; counts accumulate until [`reset`].
///
/// [`reset`]: SortContext::reset
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortContext {
    pub partitions: usize,
    pub insertion_fallbacks: usize,
    pub max_depth: usize,
}

impl SortContext {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub(crate) fn enter(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

pub fn sort_slice<T: Ord>(algo: SortAlgorithm, data: &mut [T]) {
    let mut ctx = SortContext::default();
    sort_slice_with_ctx(algo, data, &mut ctx, Threshold::DEFAULT);
}

/// Sorts `data` ascending in place with `algo`.
///
/// `threshold` only affects the quicksort variants.
pub fn sort_slice_with_ctx<T: Ord>(
    algo: SortAlgorithm,
    data: &mut [T],
    ctx: &mut SortContext,
    threshold: Threshold,
) {
    match algo {
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data),
        SortAlgorithm::HeapSort => algorithms::heap_sort::sort(data),
        SortAlgorithm::HybridQuickSort => {
            HybridQuickSort::with_threshold(threshold).sort_with_ctx(data, ctx)
        }
        SortAlgorithm::TwoWayQuickSort => {
            TwoWayQuickSort::with_threshold(threshold).sort_by_with_ctx(data, T::lt, ctx)
        }
    }
}

pub fn sort_i64(algo: SortAlgorithm, data: &mut [i64]) {
    sort_slice(algo, data);
}

pub fn sort_i64_with_ctx(
    algo: SortAlgorithm,
    data: &mut [i64],
    ctx: &mut SortContext,
    threshold: Threshold,
) {
    sort_slice_with_ctx(algo, data, ctx, threshold);
}
