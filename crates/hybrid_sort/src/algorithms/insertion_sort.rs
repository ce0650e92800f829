pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, T::lt);
}

pub fn sort_by<T, F>(data: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < 2 {
        return;
    }
    let high = data.len() - 1;
    insertion_sort_range(data, 0, high, &mut is_less);
}

/// Sorts the inclusive range `[start, end]`, clamped to the slice bounds.
///
/// Elements outside the clamped range are left untouched. A range that is
/// empty after clamping is a no-op.
pub fn sort_range<T: Ord>(data: &mut [T], start: isize, end: isize) {
    sort_range_by(data, start, end, T::lt);
}

pub fn sort_range_by<T, F>(data: &mut [T], start: isize, end: isize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some((low, high)) = clamp_range(data.len(), start, end) else {
        return;
    };
    insertion_sort_range(data, low, high, &mut is_less);
}

#[inline]
fn clamp_range(len: usize, start: isize, end: isize) -> Option<(usize, usize)> {
    let last = len.checked_sub(1)?;
    let low = usize::try_from(start).unwrap_or(0);
    let high = usize::try_from(end).ok()?.min(last);
    (low < high).then_some((low, high))
}

/// Insertion sort over the inclusive range `[low, high]`.
///
/// The key never moves left of `low`, so this is safe to run on any
/// sub-range, not only on ranges whose left neighbours are already smaller.
#[inline]
pub(crate) fn insertion_sort_range<T, F>(data: &mut [T], low: usize, high: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(high < data.len());

    // Adjacent swaps instead of a hole-and-shift: `T` is not required to be `Copy`.
    for i in (low + 1)..=high {
        let mut j = i;
        while j > low && is_less(&data[j], &data[j - 1]) {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}
