use crate::{Error, Result, SampleInt};

/// Checks `0 <= k <= n` and returns `k` as a buffer length.
pub fn validate<T: SampleInt>(n: T, k: T) -> Result<usize> {
    if n < T::zero() {
        return Err(Error::InvalidArgument(
            format!("n must be non-negative, got n = {:?}", n)));
    }
    if k < T::zero() {
        return Err(Error::InvalidArgument(
            format!("k must be non-negative, got k = {:?}", k)));
    }
    if k > n {
        return Err(Error::InvalidArgument(
            format!("k must not exceed n, got n = {:?}, k = {:?}", n, k)));
    }
    to_index(k)
}

#[inline]
pub fn to_index<T: SampleInt>(value: T) -> Result<usize> {
    value.to_usize().ok_or_else(|| Error::InvalidArgument(
        format!("{:?} does not fit in usize", value)))
}

#[inline]
pub fn from_index<T: SampleInt>(index: usize) -> Result<T> {
    <T as num::NumCast>::from(index).ok_or_else(|| Error::InvalidArgument(
        format!("{} does not fit in the sample type", index)))
}
