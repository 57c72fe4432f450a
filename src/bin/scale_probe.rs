use std::env;
use std::time::Instant;

use countdown_dp::consistency::{check_range, CheckConfig};
use countdown_dp::strategies::{Bfs, BottomUp, Memoized, Recursive};
use countdown_dp::validate::validate;
use countdown_dp::{PathSolver, Solution, StepCounter};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Countdown scaling probe");
    eprintln!("{}", "=".repeat(72));
    eprintln!("  wall_s        wall-clock seconds per run");
    eprintln!("  rss_delta_kib resident memory growth across the run");
    eprintln!("  status        passed / failed / not_checked (n > {})", options.verify_limit);
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/5] bottom-up DP");
    measurements.extend(run_bottom_up(&options, &mut sys));
    eprintln!("[2/5] breadth-first search");
    measurements.extend(run_bfs(&options, &mut sys));
    eprintln!("[3/5] memoized recursion");
    measurements.extend(run_memoized(&mut sys));
    eprintln!("[4/5] plain recursion");
    measurements.extend(run_recursive(&mut sys));
    eprintln!("[5/5] cross-check sweep 1..={}", options.verify_limit);
    measurements.push(run_sweep(&options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: u64,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 10_000u64;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --release --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest n cross-checked against a second engine (default: 10000)
  -h, --help                    Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<u64, String> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("verify limit must be a positive integer".to_string()),
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    strategy: &'static str,
    n: u64,
    steps: Option<u64>,
    wall_s: f64,
    rss_delta_kib: u64,
    status: Status,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Status {
    NotChecked,
    Passed,
    Failed,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::NotChecked => "not_checked",
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }
}

type Verdict = (Option<u64>, Status, Option<String>);

/// Check a produced solution by replay and, when `reference` is given,
/// against a second engine's count.
fn judge_solution(n: u64, solution: &Solution, reference: Option<u64>) -> Verdict {
    let steps = Some(solution.steps);
    if let Err(err) = validate(n, &solution.operations) {
        return (steps, Status::Failed, Some(err.to_string()));
    }
    match reference {
        Some(expected) if expected != solution.steps => (
            steps,
            Status::Failed,
            Some(format!("expected {expected}, got {}", solution.steps)),
        ),
        Some(_) => (steps, Status::Passed, None),
        None => (steps, Status::NotChecked, None),
    }
}

fn judge_count(actual: u64, expected: u64) -> Verdict {
    if actual == expected {
        (Some(actual), Status::Passed, None)
    } else {
        (
            Some(actual),
            Status::Failed,
            Some(format!("expected {expected}, got {actual}")),
        )
    }
}

fn run_bottom_up(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[u64] = &[1_000, 10_000, 100_000, 1_000_000, 10_000_000];
    SIZES
        .iter()
        .map(|&n| {
            let m = measure("bottom-up-dp", n, sys, || match BottomUp.solve(n) {
                Ok(solution) => {
                    let reference = (n <= options.verify_limit)
                        .then(|| Bfs.min_steps(n).ok())
                        .flatten();
                    judge_solution(n, &solution, reference)
                }
                Err(err) => (None, Status::Failed, Some(err.to_string())),
            });
            report_line(&m);
            m
        })
        .collect()
}

fn run_bfs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[u64] = &[1_000, 10_000, 100_000, 1_000_000];
    SIZES
        .iter()
        .map(|&n| {
            let m = measure("bfs", n, sys, || match Bfs.solve(n) {
                Ok(solution) => {
                    let reference = (n <= options.verify_limit)
                        .then(|| BottomUp.min_steps(n).ok())
                        .flatten();
                    judge_solution(n, &solution, reference)
                }
                Err(err) => (None, Status::Failed, Some(err.to_string())),
            });
            report_line(&m);
            m
        })
        .collect()
}

fn run_memoized(sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[u64] = &[100, 500, 1_000, 2_000, 4_000];
    SIZES
        .iter()
        .map(|&n| {
            let m = measure("memoized", n, sys, || {
                match (Memoized::new().min_steps(n), BottomUp.min_steps(n)) {
                    (Ok(actual), Ok(expected)) => judge_count(actual, expected),
                    (Err(err), _) | (_, Err(err)) => (None, Status::Failed, Some(err.to_string())),
                }
            });
            report_line(&m);
            m
        })
        .collect()
}

fn run_recursive(sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[u64] = &[5, 10, 15, 20];
    SIZES
        .iter()
        .map(|&n| {
            let m = measure("recursive", n, sys, || {
                match (Recursive::new().min_steps(n), BottomUp.min_steps(n)) {
                    (Ok(actual), Ok(expected)) => judge_count(actual, expected),
                    (Err(err), _) | (_, Err(err)) => (None, Status::Failed, Some(err.to_string())),
                }
            });
            report_line(&m);
            m
        })
        .collect()
}

fn run_sweep(options: &Options, sys: &mut System) -> Measurement {
    let limit = options.verify_limit;
    let m = measure("cross-check", limit, sys, || {
        let mismatches = check_range(1..=limit, &CheckConfig::default());
        match mismatches.first() {
            None => (None, Status::Passed, None),
            Some(first) => (
                None,
                Status::Failed,
                Some(format!("{} mismatches, first: {first:?}", mismatches.len())),
            ),
        }
    });
    report_line(&m);
    m
}

fn report_line(m: &Measurement) {
    let icon = match m.status {
        Status::Passed => "✓",
        Status::Failed => "✗",
        Status::NotChecked => "○",
    };
    eprintln!(
        "      {} n={} steps={} time={:.3}s status={}",
        icon,
        m.n,
        m.steps.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
        m.wall_s,
        m.status.label()
    );
}

fn print_summary(measurements: &[Measurement]) {
    let total = measurements.len();
    let count = |status: Status| measurements.iter().filter(|m| m.status == status).count();
    let (passed, failed, not_checked) = (
        count(Status::Passed),
        count(Status::Failed),
        count(Status::NotChecked),
    );

    eprintln!("{}", "=".repeat(72));
    eprintln!("Summary: {total} runs, {passed} passed, {failed} failed, {not_checked} not checked");
    for m in measurements.iter().filter(|m| m.status == Status::Failed) {
        eprintln!(
            "  ✗ {} n={}: {}",
            m.strategy,
            m.n,
            m.detail.as_deref().unwrap_or("no detail")
        );
    }
    eprintln!("{}", "=".repeat(72));
    eprintln!();
}

fn measure<F>(strategy: &'static str, n: u64, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> Verdict,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (steps, status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        strategy,
        n,
        steps,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        status,
        detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("strategy,n,steps,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.strategy,
            m.n,
            m.steps.map(|s| s.to_string()).unwrap_or_default(),
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.strategy.len())
        .chain(std::iter::once("strategy".len()))
        .max()
        .unwrap_or(8);

    println!(
        "{:<col1$}  {:>10}  {:>6}  {:>10}  {:>14}  {:>12}  detail",
        "strategy", "n", "steps", "wall_s", "rss_delta_kib", "status"
    );
    println!("{}", "-".repeat(col1 + 70));
    for m in measurements {
        println!(
            "{:<col1$}  {:>10}  {:>6}  {:>10.3}  {:>14}  {:>12}  {}",
            m.strategy,
            m.n,
            m.steps.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.detail.as_ref().map(|s| s.replace('"', "'")) {
            Some(d) => format!("\"{d}\""),
            None => "null".to_string(),
        };
        let steps = m
            .steps
            .map(|s| s.to_string())
            .unwrap_or_else(|| "null".to_string());
        println!(
            "  {{\"strategy\":\"{}\",\"n\":{},\"steps\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"status\":\"{}\",\"detail\":{}}}{}",
            m.strategy,
            m.n,
            steps,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
