mod floyd;
mod rejection;
mod hash_selection;
mod shuffle;
mod selection;

pub use {
    floyd::floyd,
    rejection::{rejection, quadratic_rejection},
    hash_selection::hash_selection,
    shuffle::fisher_yates,
    selection::selection,
};

use rand::Rng;

use crate::{Result, SampleInt};

/// A sampler returning `k` distinct sorted integers from `[0, n)`.
/// `draw_below(m)` must return a uniform value in `[0, m)`.
pub type SampleFn<T> =
    fn(n: T, k: T, draw_below: &mut dyn FnMut(T) -> T) -> Result<Vec<T>>;

/// Uniform sorted sample of `k` distinct integers from `[0, n)`.
pub fn sample<T, R>(rng: &mut R, n: T, k: T) -> Result<Vec<T>>
where
    T: SampleInt,
    R: Rng + ?Sized,
{
    run_with_rng(rng, n, k, floyd)
}

pub fn run_with_rng<T, R>(
    rng: &mut R,
    n: T,
    k: T,
    algorithm: SampleFn<T>) -> Result<Vec<T>>
where
    T: SampleInt,
    R: Rng + ?Sized,
{
    algorithm(n, k, &mut |bound: T| rng.gen_range(T::zero()..bound))
}

pub fn algorithms<T: SampleInt>() -> [(&'static str, SampleFn<T>); 6] {
    [
        ("floyd", floyd),
        ("rejection", rejection),
        ("quadratic_rejection", quadratic_rejection),
        ("hash_selection", hash_selection),
        ("fisher_yates", fisher_yates),
        ("selection", selection),
    ]
}

pub fn algorithm<T: SampleInt>(name: &str) -> Option<SampleFn<T>> {
    algorithms()
        .into_iter()
        .find(|(alg_name, _)| *alg_name == name)
        .map(|(_, alg)| alg)
}
