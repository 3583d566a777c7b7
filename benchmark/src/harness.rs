use std::{
    time::{Duration, Instant},
    hint,
};
use choose::SampleFn;
use rand::Rng;

use crate::schema::ResultRun;

// Grow the iteration count at most this much per round.
const MAX_GROWTH: f64 = 60.0;
const GROWTH: u32 = 3;

fn time<F: FnMut()>(iters: u32, mut run: F) -> Duration {
    let start = Instant::now();
    for _ in 0..iters {
        run();
    }
    start.elapsed()
}

/// Mean time of one call of `run`, repeating it until roughly `budget` has
/// been spent.
pub fn time_for<F: FnMut()>(budget: Duration, mut run: F) -> Duration {
    let mut iters: u32 = 1;
    let mut remaining = budget;
    loop {
        let elapsed = time(iters, &mut run);
        if remaining < elapsed {
            return elapsed / iters;
        }
        remaining -= elapsed;
        if remaining < elapsed {
            return elapsed / iters;
        }

        let ratio = remaining.as_secs_f64() / elapsed.as_secs_f64();
        iters = if ratio <= MAX_GROWTH {
            ((iters as f64 * ratio) as u32).max(1)
        }
        else {
            iters.saturating_mul(GROWTH)
        };
    }
}

pub fn time_sample<R: Rng>(
    rng: &mut R,
    budget: Duration,
    algorithm: SampleFn<u64>,
    n: u64,
    k: u64) -> Result<Duration, String>
{
    // Fail once up front rather than on every timed call.
    choose::run_with_rng(rng, n, k, algorithm)
        .map_err(|e| e.to_string())?;

    Ok(time_for(budget, || {
        hint::black_box(choose::run_with_rng(rng, n, k, algorithm).ok());
    }))
}

/// Sweeps `(n, k)` with both growing along Fibonacci sequences:
/// `k` takes 1, 2, 3, 5, 8, ... and for each `k`, `n` starts at `k`.
///
/// An `n` sweep ends once a measurement exceeds `cutoff`; if that happens
/// at `n == k` no larger `k` is tried either.
pub fn fib_sweep(
    max_n: u64,
    cutoff: Duration,
    mut measure: impl FnMut(u64, u64) -> Result<Duration, String>)
    -> Result<Vec<ResultRun>, String>
{
    let mut runs = Vec::new();

    let mut kk: (u64, u64) = (1, 1);
    'kk: while kk.1 < max_n {
        let mut nn = kk;
        while nn.1 < max_n {
            let elapsed = measure(nn.1, kk.1)?;
            runs.push(ResultRun {
                n: nn.1,
                k: kk.1,
                time: elapsed.as_nanos() as u64,
            });

            if elapsed > cutoff {
                if nn == kk {
                    break 'kk;
                }
                else {
                    break;
                }
            }
            nn = match next_fib(nn) {
                Some(next) => next,
                None => break,
            };
        }
        kk = match next_fib(kk) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(runs)
}

/// `None` once the next term no longer fits in a `u64`.
fn next_fib((a, b): (u64, u64)) -> Option<(u64, u64)> {
    a.checked_add(b).map(|next| (b, next))
}
