pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, T::lt);
}

pub fn sort_by<T, F>(data: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(data, len, root, &mut is_less);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, end, 0, &mut is_less);
    }
}

/// Restores the max-heap property below `root` within `data[..heap_size]`.
#[inline]
pub fn sift_down<T, F>(data: &mut [T], heap_size: usize, mut root: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(heap_size <= data.len());

    loop {
        let left = 2 * root + 1;
        if left >= heap_size {
            break;
        }

        let mut largest = root;
        if is_less(&data[largest], &data[left]) {
            largest = left;
        }
        let right = left + 1;
        if right < heap_size && is_less(&data[largest], &data[right]) {
            largest = right;
        }

        if largest == root {
            break;
        }

        data.swap(root, largest);
        root = largest;
    }
}
