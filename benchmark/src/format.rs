use crate::schema::ResultRun;

pub fn format_size(size: u64) -> String {
    match size {
        0..=9_999 => size.to_string(),
        10_000..=9_999_999 => format!("{}K", size / 1_000),
        _ => format!("{}M", size / 1_000_000),
    }
}

pub fn format_time(nanos: u64) -> String {
    if nanos < 10u64.pow(3) {
        format!("{}ns", nanos)
    }
    else if nanos < 10u64.pow(6) {
        format!("{}µs", nanos as f64 / 10usize.pow(3) as f64)
    }
    else if nanos < 10u64.pow(9) {
        format!("{}ms", nanos as f64 / 10usize.pow(6) as f64)
    }
    else {
        format!("{}s", nanos as f64 / 10usize.pow(9) as f64)
    }
}

pub fn format_run(run: &ResultRun) -> String {
    format!("[n: {:>6}, k: {:>6}] {}",
        format_size(run.n), format_size(run.k), format_time(run.time))
}
