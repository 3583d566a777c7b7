use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};
use benchmark::{
    fmt_open_err, path_str, get_algorithm,
    select_experiments, results_path, write_results,
    format::format_run,
    harness::{fib_sweep, time_sample},
    schema::*,
};
use clap::Parser;
use colored::*;
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(default_value = "experiment.toml", long)]
    experiment: PathBuf,
    #[arg(default_value = "results/", long)]
    out: PathBuf,
    // Ignore --bench provided by cargo.
    #[arg(long, action)]
    bench: bool,
    experiments: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cfg!(debug_assertions) {
        println!("{}", "warning: running in debug mode".yellow().bold());
    }

    if let Err(e) = bench_from_files(&cli) {
        let msg = format!("error: {}", e);
        println!("{}", msg.red().bold());
        ExitCode::FAILURE
    }
    else {
        println!("{}", "Done".green().bold());
        ExitCode::SUCCESS
    }
}

fn bench_from_files(cli: &Cli) -> Result<(), String> {
    let experiment_toml = fs::read_to_string(&cli.experiment)
        .map_err(|e| fmt_open_err(e, &cli.experiment))?;

    let experiment: Experiment = toml::from_str(&experiment_toml)
        .map_err(|e| format!(
            "invalid toml file {}: {}",
            path_str(&cli.experiment), e
        ))?;

    let selected = select_experiments(&experiment, &cli.experiments)?;

    fs::create_dir_all(&cli.out)
        .map_err(|e| format!(
            "failed to create directory {}:\n{}",
            path_str(&cli.out), e
        ))?;

    for entry in selected {
        let results = run_experiment(entry)?;
        let path = results_path(&cli.out, entry);
        write_results(&results, &path)?;
        println!("{} {}", "Wrote".green().bold(), path_str(&path));
    }
    Ok(())
}

fn run_experiment(entry: &ExperimentEntry) -> Result<Results, String> {
    println!("{} {}", "Experiment".green().bold(), entry.name);

    let budget = Duration::from_millis(entry.budget_ms);
    let cutoff = Duration::from_millis(entry.cutoff_ms);
    let rng = &mut SmallRng::from_entropy();

    let mut algos: AlgorithmResults = HashMap::new();
    for name in &entry.algorithms {
        println!("  {}", name.bold());
        let algorithm = get_algorithm(name)?;

        let runs = fib_sweep(entry.max_n, cutoff, |n, k| {
            let elapsed = time_sample(rng, budget, algorithm, n, k)?;
            let run = ResultRun { n, k, time: elapsed.as_nanos() as u64 };
            println!("    {}", format_run(&run));
            Ok(elapsed)
        })?;

        algos.insert(name.clone(), runs);
    }

    Ok(Results {
        experiment: entry.clone(),
        algos,
    })
}
