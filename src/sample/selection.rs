use crate::{util::validate, Result, SampleInt};

/// Selection sampling: walks `[0, n)` in order, keeping each value with
/// probability `needed / remaining`. Output comes out sorted, at the cost of
/// up to `n` draws.
pub fn selection<T>(
    n: T,
    k: T,
    draw_below: &mut dyn FnMut(T) -> T) -> Result<Vec<T>>
where
    T: SampleInt,
{
    let len = validate(n, k)?;

    let mut result = Vec::with_capacity(len);
    let mut needed = k;
    let mut remaining = n;
    let mut value = T::zero();

    while needed > T::zero() {
        if draw_below(remaining) < needed {
            result.push(value);
            needed = needed - T::one();
        }
        remaining = remaining - T::one();
        value = value + T::one();
    }

    Ok(result)
}
