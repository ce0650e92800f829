//! Hybrid quicksort: median-of-three pivot, three-way (Dutch national flag)
//! partition, insertion sort for ranges at or below the threshold.
//!
//! Recursion goes into the smaller side and loops on the larger one, so the
//! stack stays logarithmic even when pivots are poor. Runs of values equal to
//! the pivot are placed once and never revisited.

use crate::SortContext;
use crate::params::Threshold;

use super::{common, insertion_sort};

pub fn sort<T: Ord>(data: &mut [T]) {
    HybridQuickSort::default().sort(data);
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HybridQuickSort {
    threshold: Threshold,
}

impl HybridQuickSort {
    pub const fn with_threshold(threshold: Threshold) -> Self {
        Self { threshold }
    }

    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn sort<T: Ord>(&self, data: &mut [T]) {
        self.sort_by(data, T::lt);
    }

    pub fn sort_by<T, F>(&self, data: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut ctx = SortContext::default();
        self.sort_by_with_ctx(data, is_less, &mut ctx);
    }

    pub fn sort_with_ctx<T: Ord>(&self, data: &mut [T], ctx: &mut SortContext) {
        self.sort_by_with_ctx(data, T::lt, ctx);
    }

    pub fn sort_by_with_ctx<T, F>(&self, data: &mut [T], mut is_less: F, ctx: &mut SortContext)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if data.len() < 2 {
            return;
        }
        let high = data.len() - 1;
        self.quicksort(data, 0, high, 0, &mut is_less, ctx);
    }

    fn quicksort<T, F>(
        &self,
        data: &mut [T],
        mut low: usize,
        mut high: usize,
        depth: usize,
        is_less: &mut F,
        ctx: &mut SortContext,
    ) where
        F: FnMut(&T, &T) -> bool,
    {
        ctx.enter(depth);

        while low < high {
            if high - low < self.threshold.get() {
                ctx.insertion_fallbacks += 1;
                insertion_sort::insertion_sort_range(data, low, high, is_less);
                return;
            }

            let (lt, pivot) = partition_3way(data, low, high, is_less);
            ctx.partitions += 1;

            // Less zone is [low, lt), greater zone is (pivot, high].
            if lt - low < high - pivot {
                if lt > low {
                    self.quicksort(data, low, lt - 1, depth + 1, is_less, ctx);
                }
                low = pivot + 1;
            } else {
                if pivot < high {
                    self.quicksort(data, pivot + 1, high, depth + 1, is_less, ctx);
                }
                if lt == low {
                    return;
                }
                high = lt - 1;
            }
        }
    }
}

/// Three-way partition of the inclusive range `[low, high]`.
///
/// Returns `(lt, pivot)`: `[low, lt)` holds values less than the pivot,
/// `[lt, pivot]` values equal to it, and `(pivot, high]` greater values. The
/// pivot itself ends up at index `pivot`.
pub fn partition_3way<T, F>(
    data: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(low < high && high < data.len());

    common::median_of_three(data, low, high, is_less);

    let (body, tail) = data.split_at_mut(high);
    let pivot = &tail[0];

    let mut i = low;
    let mut j = low;
    // Exclusive end of the unexamined zone; `high` holds the pivot.
    let mut gt = high;

    while j < gt {
        if is_less(&body[j], pivot) {
            body.swap(i, j);
            i += 1;
            j += 1;
        } else if is_less(pivot, &body[j]) {
            gt -= 1;
            body.swap(j, gt);
        } else {
            j += 1;
        }
    }

    data.swap(j, high);
    (i, j)
}
