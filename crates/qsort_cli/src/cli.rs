use std::path::PathBuf;

use clap::Parser;
use par_quicksort::{DEFAULT_THRESHOLDS, Strategy, Thresholds};

use crate::error::CliError;

/// Sort a file of integers with a sequential, fork-join or task-pool quicksort
#[derive(Parser, Debug)]
#[command(name = "qsort_cli", version, about)]
pub struct Args {
    /// Input file: element count followed by the elements
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for the sorted elements
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Worker threads. -1 forces sequential mode, 0 uses every available core
    #[arg(value_name = "THREADS", allow_negative_numbers = true)]
    pub threads: i64,

    /// Strategy key: 0 sequential, 1 fork-join, 2 task pool
    #[arg(value_name = "MODE", allow_negative_numbers = true)]
    pub mode: i64,

    /// Fork-join ranges below this size are sorted sequentially
    #[arg(long, default_value_t = DEFAULT_THRESHOLDS.section)]
    pub section_threshold: usize,

    /// Task-pool ranges below this size are sorted sequentially
    #[arg(long, default_value_t = DEFAULT_THRESHOLDS.task)]
    pub task_threshold: usize,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.section_threshold, self.task_threshold)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Plan {
    pub strategy: Strategy,
    pub threads: usize,
}

impl Plan {
    /// Thread count reported next to the timing; 0 for the sequential sorter.
    pub fn reported_threads(&self) -> usize {
        match self.strategy {
            Strategy::Sequential => 0,
            Strategy::ForkJoin | Strategy::TaskPool => self.threads,
        }
    }
}

/// Turns the raw `THREADS`/`MODE` pair into a strategy and a worker count.
///
/// `max_threads` is the machine's available parallelism, queried once by the
/// caller.
pub fn resolve(threads: i64, mode: i64, max_threads: usize) -> Result<Plan, CliError> {
    let max = i64::try_from(max_threads).unwrap_or(i64::MAX);
    if threads < -1 || threads > max {
        return Err(CliError::InvalidThreadCount {
            requested: threads,
            max: max_threads,
        });
    }

    // -1 threads overrides the key, whatever it is.
    let strategy = if threads == -1 {
        Strategy::Sequential
    } else {
        u8::try_from(mode)
            .ok()
            .and_then(|key| Strategy::try_from(key).ok())
            .ok_or(CliError::InvalidStrategy(mode))?
    };

    let threads = match threads {
        -1 => 1,
        0 => max_threads,
        n => n as usize,
    };

    Ok(Plan { strategy, threads })
}
