
pub fn prop_sample_correct<T>(result: &[T], n: T, k: usize) -> bool
where
    T: Ord + Copy + Default,
{
    result.len() == k &&
    prop_strictly_increasing(result) &&
    prop_all_in_range(result, n)
}

// Also implies the items are pairwise distinct.
pub fn prop_strictly_increasing<T>(result: &[T]) -> bool
where
    T: Ord + Copy,
{
    result.windows(2).all(|w| w[0] < w[1])
}

pub fn prop_all_in_range<T>(result: &[T], n: T) -> bool
where
    T: Ord + Copy + Default,
{
    result.iter().all(|&item| T::default() <= item && item < n)
}
