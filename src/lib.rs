pub mod error;
pub mod sample;
mod util;

pub use error::{Error, Result};
pub use sample::{sample, run_with_rng, SampleFn};

use std::{fmt::Debug, hash::Hash};

use num::PrimInt;
use rand::distributions::uniform::SampleUniform;

/// Integer types a sample can be drawn over.
pub trait SampleInt: PrimInt + SampleUniform + Hash + Debug {}

impl<T> SampleInt for T
where
    T: PrimInt + SampleUniform + Hash + Debug, {}
