pub mod properties;

use choose::{sample, SampleFn};
use quickcheck::Arbitrary;
use std::fmt;

// Arbitrary Parameters //
/// A valid `(n, k)` pair, kept small enough that O(n) samplers stay cheap.
#[derive(Debug, Clone, Copy)]
pub struct ValidParams {
    pub n: u32,
    pub k: u32,
}

impl quickcheck::Arbitrary for ValidParams {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let max_n = (g.size() * 8) as u32;
        let n = u32::arbitrary(g) % (max_n + 1);
        let k = u32::arbitrary(g) % (n + 1);
        Self { n, k }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let Self { n, k } = *self;
        Box::new(
            (n, k).shrink()
                .filter(|&(n, k)| k <= n)
                .map(|(n, k)| Self { n, k })
        )
    }
}

// Arbitrary Sampler //
#[derive(Clone)]
pub struct SampleAlgorithm(pub &'static str, pub SampleFn<u32>);

impl fmt::Debug for SampleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl quickcheck::Arbitrary for SampleAlgorithm {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let algorithms: Vec<SampleAlgorithm> = sample::algorithms::<u32>()
            .into_iter()
            .map(|(name, alg)| SampleAlgorithm(name, alg))
            .collect();

        g.choose(algorithms.as_slice())
            .unwrap()
            .clone()
    }
}

// Scripted random source //
/// Replays a fixed list of draws and records the bound each was asked for.
pub struct ScriptedDraws {
    draws: Vec<u32>,
    bounds: Vec<u32>,
}

impl ScriptedDraws {
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.to_vec(),
            bounds: Vec::new(),
        }
    }

    pub fn draw_below(&mut self, bound: u32) -> u32 {
        let step = self.bounds.len();
        assert!(step < self.draws.len(), "ran out of scripted draws at step {}", step);

        let draw = self.draws[step];
        assert!(draw < bound, "scripted draw {} not below bound {}", draw, bound);

        self.bounds.push(bound);
        draw
    }

    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }
}

pub fn run_scripted(
    algorithm: SampleFn<u32>,
    n: u32,
    k: u32,
    draws: &[u32]) -> (Vec<u32>, Vec<u32>)
{
    let mut script = ScriptedDraws::new(draws);
    let result = algorithm(n, k, &mut |bound| script.draw_below(bound))
        .expect("valid parameters");

    (result, script.bounds().to_vec())
}
