use std::collections::{hash_map::Entry, HashMap};

use crate::{
    util::{validate, to_index, from_index},
    Result, SampleInt,
};

/// Fisher-Yates over a virtual `[0, n)` without materialising it.
///
/// Positions below `k` live in the output buffer; any position at or above
/// `k` that has been swapped keeps its current value in a hash map, so
/// untouched positions still hold their own index.
pub fn hash_selection<T>(
    n: T,
    k: T,
    draw_below: &mut dyn FnMut(T) -> T) -> Result<Vec<T>>
where
    T: SampleInt,
{
    let len = validate(n, k)?;

    let mut result = (0..len)
        .map(from_index::<T>)
        .collect::<Result<Vec<T>>>()?;
    let mut displaced: HashMap<T, T> = HashMap::new();

    for i in 0..len {
        let offset: T = from_index(i)?;
        let r = draw_below(n - offset) + offset;

        if r < k {
            result.swap(i, to_index(r)?);
        }
        else {
            match displaced.entry(r) {
                Entry::Vacant(slot) => {
                    slot.insert(result[i]);
                    result[i] = r;
                }
                Entry::Occupied(mut slot) => {
                    result[i] = slot.insert(result[i]);
                }
            }
        }
    }

    result.sort_unstable();
    Ok(result)
}
