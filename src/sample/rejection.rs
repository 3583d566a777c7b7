use std::collections::HashSet;

use crate::{util::validate, Result, SampleInt};

/// Draws from `[0, n)` until `k` distinct values have been seen.
/// Expected O(k) draws while `k` is small relative to `n`, but the number of
/// draws is unbounded as `k` approaches `n`.
pub fn rejection<T>(
    n: T,
    k: T,
    draw_below: &mut dyn FnMut(T) -> T) -> Result<Vec<T>>
where
    T: SampleInt,
{
    let len = validate(n, k)?;

    let mut seen: HashSet<T> = HashSet::with_capacity(2 * len);
    let mut result = Vec::with_capacity(len);
    while result.len() < len {
        let r = draw_below(n);
        if seen.insert(r) {
            result.push(r);
        }
    }

    result.sort_unstable();
    Ok(result)
}

/// Rejection sampling that checks for duplicates by scanning the values
/// accepted so far. O(k^2) comparisons with no auxiliary set.
pub fn quadratic_rejection<T>(
    n: T,
    k: T,
    draw_below: &mut dyn FnMut(T) -> T) -> Result<Vec<T>>
where
    T: SampleInt,
{
    let len = validate(n, k)?;

    let mut result = Vec::with_capacity(len);
    while result.len() < len {
        let r = draw_below(n);
        if !result.contains(&r) {
            result.push(r);
        }
    }

    result.sort_unstable();
    Ok(result)
}
