use crate::{
    util::{validate, to_index, from_index},
    Error, Result, SampleInt,
};

/// Floyd's algorithm for sampling without replacement.
///
/// Draws exactly `k` values, the `i`th from `[0, t + i)` where
/// `t = n - k + 1`. Each draw lands in the compacted domain `[0, t)`; a draw
/// at or above `t` refers back to an earlier slot and reuses the value it
/// holds. The compacted values form a uniform multiset of size `k` over
/// `[0, t)`, which sorting and adding each position's index turns into a
/// strictly increasing subset of `[0, n)`.
///
/// Runs in O(k log k) time and O(k) space regardless of `n`.
pub fn floyd<T>(
    n: T,
    k: T,
    draw_below: &mut dyn FnMut(T) -> T) -> Result<Vec<T>>
where
    T: SampleInt,
{
    let len = validate(n, k)?;
    if len == 0 {
        return Ok(Vec::new());
    }

    let t = n - k + T::one();
    let mut compacted: Vec<T> = Vec::with_capacity(len);

    for i in 0..len {
        // t + i <= n, so this cannot overflow.
        let bound = t + from_index(i)?;
        let r = draw_below(bound);
        if r < t {
            compacted.push(r);
        }
        else {
            let displaced = compacted.get(to_index(r - t)?).copied()
                .ok_or_else(|| Error::InvalidArgument(format!(
                    "draw {:?} is outside [0, {:?})", r, bound)))?;
            compacted.push(displaced);
        }
    }

    compacted.sort_unstable();
    for (i, value) in compacted.iter_mut().enumerate() {
        *value = *value + from_index(i)?;
    }
    Ok(compacted)
}
