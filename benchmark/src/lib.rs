pub mod format;
pub mod harness;
pub mod schema;

use std::{fs::File, path::PathBuf};

use choose::sample::{self, SampleFn};

use crate::schema::{Experiment, ExperimentEntry, Results};

pub fn fmt_open_err(e: impl ToString, path: &PathBuf) -> String {
    format!("Unable to open {}: {}", path_str(path), e.to_string())
}

pub fn path_str(path: &PathBuf) -> &str {
    path.to_str().unwrap_or("<unknown path>")
}

pub fn get_algorithm(name: &str) -> Result<SampleFn<u64>, String> {
    sample::algorithm(name)
        .ok_or_else(|| format!("unknown algorithm {}", name))
}

/// Experiments named in `names` (all of them if empty), with every algorithm
/// name checked before anything is measured.
pub fn select_experiments<'a>(
    experiment: &'a Experiment,
    names: &[String]) -> Result<Vec<&'a ExperimentEntry>, String>
{
    let selected: Vec<&ExperimentEntry> = experiment.experiment.iter()
        .filter(|e| names.is_empty() || names.contains(&e.name))
        .collect();

    if selected.is_empty() {
        return Err("no experiment matches found".to_string());
    }

    for entry in &selected {
        for name in &entry.algorithms {
            get_algorithm(name)
                .map_err(|e| format!("experiment {}: {}", entry.name, e))?;
        }
    }
    Ok(selected)
}

pub fn results_path(out: &PathBuf, entry: &ExperimentEntry) -> PathBuf {
    out.join(format!("{}.json", entry.name))
}

pub fn write_results(results: &Results, path: &PathBuf) -> Result<(), String> {
    let results_file = File::create(path)
        .map_err(|e| fmt_open_err(e, path))?;

    serde_json::to_writer(results_file, results)
        .map_err(|e| format!("Failed to write {}: {}", path_str(path), e))
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, fs};

    use super::*;
    use crate::schema::ResultRun;

    fn experiment() -> Experiment {
        toml::from_str(r#"
            [[experiment]]
            name = "sparse"
            algorithms = ["floyd", "rejection"]

            [[experiment]]
            name = "dense"
            algorithms = ["selection", "bogo"]
        "#).unwrap()
    }

    #[test]
    fn test_get_algorithm() {
        assert!(get_algorithm("floyd").is_ok());

        let err = get_algorithm("bogo").err().unwrap();
        assert!(err.contains("bogo"), "{}", err);
    }

    #[test]
    fn test_select_unknown_algorithm() {
        let experiment = experiment();

        let err = select_experiments(&experiment, &[]).unwrap_err();
        assert!(err.contains("dense") && err.contains("bogo"), "{}", err);

        let err = select_experiments(&experiment, &["dense".to_string()]).unwrap_err();
        assert!(err.contains("bogo"), "{}", err);
    }

    #[test]
    fn test_select_by_name() {
        let experiment = experiment();

        let selected = select_experiments(&experiment, &["sparse".to_string()]).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "sparse");

        let err = select_experiments(&experiment, &["missing".to_string()]).unwrap_err();
        assert_eq!(err, "no experiment matches found");
    }

    #[test]
    fn test_write_results() {
        let experiment = experiment();
        let entry = &experiment.experiment[0];

        let mut algos = HashMap::new();
        algos.insert("floyd".to_string(), vec![ResultRun { n: 8, k: 3, time: 42 }]);
        let results = Results { experiment: entry.clone(), algos };

        let out = std::env::temp_dir()
            .join(format!("choose-benchmark-{}", std::process::id()));
        fs::create_dir_all(&out).unwrap();

        let path = results_path(&out, entry);
        assert_eq!(path, out.join("sparse.json"));

        write_results(&results, &path).unwrap();
        let written: Results = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(written, results);

        fs::remove_dir_all(&out).unwrap();
    }

    #[test]
    fn test_write_results_bad_path() {
        let experiment = experiment();
        let results = Results {
            experiment: experiment.experiment[0].clone(),
            algos: HashMap::new(),
        };

        let path = std::env::temp_dir()
            .join(format!("choose-benchmark-missing-{}", std::process::id()))
            .join("sparse.json");
        let err = write_results(&results, &path).unwrap_err();
        assert!(err.starts_with("Unable to open"), "{}", err);
    }
}
