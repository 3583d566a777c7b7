use crate::{
    util::{validate, to_index, from_index},
    Result, SampleInt,
};

/// Partial Fisher-Yates shuffle of the whole domain. O(n) space.
pub fn fisher_yates<T>(
    n: T,
    k: T,
    draw_below: &mut dyn FnMut(T) -> T) -> Result<Vec<T>>
where
    T: SampleInt,
{
    let len = validate(n, k)?;

    let mut everything: Vec<T> = num::range(T::zero(), n).collect();
    for i in 0..len {
        let offset: T = from_index(i)?;
        let j = to_index(draw_below(n - offset) + offset)?;
        everything.swap(i, j);
    }

    everything.truncate(len);
    everything.sort_unstable();
    Ok(everything)
}
