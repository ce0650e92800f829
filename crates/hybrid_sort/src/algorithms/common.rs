/// Places the median of `data[low]`, `data[mid]`, `data[high]` at `high`.
///
/// Three conditional swaps order the samples so the median lands at `mid`,
/// then it is swapped into `high` where partitioning expects the pivot.
#[inline]
pub fn median_of_three<T, F>(data: &mut [T], low: usize, high: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(low < high && high < data.len());

    let mid = low + (high - low) / 2;
    if is_less(&data[mid], &data[low]) {
        data.swap(low, mid);
    }
    if is_less(&data[high], &data[low]) {
        data.swap(low, high);
    }
    if is_less(&data[high], &data[mid]) {
        data.swap(mid, high);
    }
    data.swap(mid, high);
}

#[inline]
pub fn is_sorted_by<T, F>(data: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    data.windows(2).all(|w| !is_less(&w[1], &w[0]))
}
