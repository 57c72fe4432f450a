use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use countdown_dp::utils::{parse_sequence, positive_from_i64};
use countdown_dp::validate::validate;
use countdown_dp::{EngineBuilder, SolveError, Strategy};

/// Minimum number of -1, /2, /3 operations reducing n to 1.
#[derive(Parser, Debug)]
#[command(name = "countdown", version, about, long_about = None)]
struct Cli {
    /// Positive integer to reduce to 1
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Solving strategy: recursive (rec), memoized (memo), bottom-up-dp (dp) or bfs
    #[arg(short, long, default_value_t = Strategy::BottomUp, value_parser = Strategy::from_str)]
    method: Strategy,

    /// Also print one optimal operation sequence
    #[arg(short, long)]
    path: bool,

    /// Validate a space-separated sequence such as "-1 /3 /3" against n instead of solving
    #[arg(long, value_name = "OPS", allow_hyphen_values = true)]
    check: Option<String>,

    /// Emit debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    let n = match positive_from_i64(cli.n) {
        Ok(n) => n,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(text) = &cli.check {
        return check_sequence(n, text);
    }

    let engine = EngineBuilder::new().strategy(cli.method).build();
    if engine.strategy() == Strategy::Recursive && !engine.accepts(n) {
        eprintln!(
            "warning: n = {n} is too large for the recursive strategy (limit {}); use --method memoized or bottom-up-dp",
            engine.recursive_limit()
        );
        return ExitCode::FAILURE;
    }

    let report = match engine.run(n, cli.path) {
        Ok(report) => report,
        Err(err @ SolveError::RecursionLimit { .. }) => {
            eprintln!("error: recursion too deep: {err}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("error: unexpected failure: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("minimum steps: {}", report.steps);

    if cli.path {
        if let Some(tokens) = report.path_tokens() {
            println!("operations: {tokens}");
        }
        match report.validate() {
            Ok(()) => println!("sequence validated"),
            Err(err) => {
                eprintln!("error: sequence validation failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn check_sequence(n: u64, text: &str) -> ExitCode {
    let operations = match parse_sequence(text) {
        Ok(ops) => ops,
        Err(token) => {
            eprintln!("error: unknown operation '{token}' (expected -1, /2 or /3)");
            return ExitCode::FAILURE;
        }
    };
    match validate(n, &operations) {
        Ok(()) => {
            println!("sequence valid ({} steps)", operations.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: invalid sequence: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
