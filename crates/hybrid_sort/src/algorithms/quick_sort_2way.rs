//! Two-way (Lomuto) quicksort with the same pivot and threshold policy as the
//! hybrid engine. Values equal to the pivot all fall on one side, so inputs
//! with few distinct values degrade towards quadratic work. Kept as a
//! baseline for the three-way partition.

use crate::SortContext;
use crate::params::Threshold;

use super::{common, insertion_sort};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TwoWayQuickSort {
    threshold: Threshold,
}

impl TwoWayQuickSort {
    pub const fn with_threshold(threshold: Threshold) -> Self {
        Self { threshold }
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

            let pivot = partition_lomuto(data, low, high, is_less);
            ctx.partitions += 1;

            if pivot - low < high - pivot {
                if pivot > low {
                    self.quicksort(data, low, pivot - 1, depth + 1, is_less, ctx);
                }
                low = pivot + 1;
            } else {
                if pivot < high {
                    self.quicksort(data, pivot + 1, high, depth + 1, is_less, ctx);
                }
                if pivot == low {
                    return;
                }
                high = pivot - 1;
            }
        }
    }
}

/// Lomuto partition of `[low, high]`; returns the final pivot index.
pub fn partition_lomuto<T, F>(data: &mut [T], low: usize, high: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(low < high && high < data.len());

    common::median_of_three(data, low, high, is_less);

    let (body, tail) = data.split_at_mut(high);
    let pivot = &tail[0];

    let mut store = low;
    for j in low..high {
        if is_less(&body[j], pivot) {
            body.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, high);
    store
}
