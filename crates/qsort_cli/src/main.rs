mod cli;
mod dataset;
mod error;

use std::fs::{self, File};
use std::io::BufWriter;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use log::{debug, info};
use par_quicksort::{sort_with, strategy_name};

use crate::cli::{Args, resolve};
use crate::dataset::{parse_input, write_output};
use crate::error::CliError;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let max_threads = thread::available_parallelism().map_or(1, |n| n.get());
    let plan = resolve(args.threads, args.mode, max_threads)?;
    let thresholds = args.thresholds();
    info!(
        "strategy={} threads={} thresholds={:?}",
        strategy_name(plan.strategy),
        plan.threads,
        thresholds
    );

    let bytes = fs::read(&args.input).map_err(|source| CliError::OpenInput {
        path: args.input.clone(),
        source,
    })?;
    let out = File::create(&args.output).map_err(|source| CliError::OpenOutput {
        path: args.output.clone(),
        source,
    })?;

    // Non-UTF-8 bytes become replacement characters and fail as bad tokens.
    let mut data = parse_input(&String::from_utf8_lossy(&bytes))?;
    debug!("read {} elements from {}", data.len(), args.input.display());

    let start = Instant::now();
    let stats = sort_with(plan.strategy, &mut data, plan.threads, &thresholds)?;
    let elapsed = start.elapsed();
    debug!("{stats:?}");

    println!(
        "Time ({} thread(s)): {} ms",
        plan.reported_threads(),
        elapsed.as_secs_f64() * 1000.0
    );

    write_output(BufWriter::new(out), &data).map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bench::{Pattern, generate_i32};

    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qsort_cli-{}-{name}", std::process::id()))
    }

    fn args_for(input: &PathBuf, output: &PathBuf, threads: i64, mode: i64) -> Args {
        Args::try_parse_from([
            "qsort_cli".to_string(),
            input.display().to_string(),
            output.display().to_string(),
            threads.to_string(),
            mode.to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn sorts_file_with_every_mode() {
        let data = generate_i32(Pattern::Random, 20_000, 0xC11_0001);
        let mut expected = data.clone();
        expected.sort_unstable();

        let mut text = format!("{}\n", data.len());
        for value in &data {
            text.push_str(&format!("{value}\n"));
        }

        for mode in 0..=2_i64 {
            let input = scratch_path(&format!("in-{mode}"));
            let output = scratch_path(&format!("out-{mode}"));
            fs::write(&input, &text).unwrap();

            run(&args_for(&input, &output, 0, mode)).unwrap();

            let written = fs::read_to_string(&output).unwrap();
            let sorted = written
                .split_whitespace()
                .map(|t| t.parse::<i32>().unwrap())
                .collect::<Vec<_>>();
            assert_eq!(sorted, expected, "mode={mode}");
            assert!(written.ends_with(" \n"));

            fs::remove_file(&input).unwrap();
            fs::remove_file(&output).unwrap();
        }
    }

    #[test]
    fn minus_one_threads_ignores_out_of_range_key() {
        let input = scratch_path("any-key-in");
        let output = scratch_path("any-key-out");
        fs::write(&input, "3 3 1 2").unwrap();

        run(&args_for(&input, &output, -1, 256)).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "1 2 3 \n");

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn non_utf8_input_is_a_parse_error() {
        let input = scratch_path("latin1-in");
        let output = scratch_path("latin1-out");

        fs::write(&input, b"\xff\xfe 1 2").unwrap();
        let err = run(&args_for(&input, &output, 1, 0)).unwrap_err();
        assert!(matches!(err, CliError::InvalidArraySize), "{err:?}");

        fs::write(&input, b"2 5 \xe9").unwrap();
        let err = run(&args_for(&input, &output, 1, 0)).unwrap_err();
        assert!(matches!(err, CliError::InvalidElement { index: 1 }), "{err:?}");

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn missing_input_is_reported() {
        let input = scratch_path("does-not-exist");
        let output = scratch_path("unused-out");
        let err = run(&args_for(&input, &output, 1, 0)).unwrap_err();
        assert!(matches!(err, CliError::OpenInput { .. }));
    }

    #[test]
    fn invalid_key_fails_before_any_io() {
        let input = scratch_path("never-read");
        let output = scratch_path("never-written");
        let err = run(&args_for(&input, &output, 1, 7)).unwrap_err();
        assert!(matches!(err, CliError::InvalidStrategy(7)));
        assert!(!output.exists());
    }
}
