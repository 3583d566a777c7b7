use std::collections::HashMap;

use serde::{Serialize, Deserialize};

pub type AlgorithmId = String;

const DEFAULT_MAX_N: u64 = 1_000_000_000;
const DEFAULT_BUDGET_MS: u64 = 500;
const DEFAULT_CUTOFF_MS: u64 = 3000;

#[derive(Serialize, Deserialize, Debug)]
pub struct Experiment {
    pub experiment: Vec<ExperimentEntry>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ExperimentEntry {
    pub name: String,
    pub algorithms: Vec<AlgorithmId>,
    /// Sweeps stop before `n` or `k` reaches this value.
    #[serde(default = "default_max_n")]
    pub max_n: u64,
    /// Time spent measuring each `(n, k)` point.
    #[serde(default = "default_budget_ms")]
    pub budget_ms: u64,
    /// A single call slower than this ends the current `n` sweep.
    #[serde(default = "default_cutoff_ms")]
    pub cutoff_ms: u64,
}

fn default_max_n() -> u64 { DEFAULT_MAX_N }
fn default_budget_ms() -> u64 { DEFAULT_BUDGET_MS }
fn default_cutoff_ms() -> u64 { DEFAULT_CUTOFF_MS }

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Results {
    pub experiment: ExperimentEntry,
    pub algos: AlgorithmResults,
}

pub type AlgorithmResults = HashMap<AlgorithmId, Vec<ResultRun>>;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct ResultRun {
    pub n: u64,
    pub k: u64,
    // Nanoseconds per call
    pub time: u64,
}
