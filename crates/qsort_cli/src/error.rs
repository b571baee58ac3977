use std::io;
use std::path::PathBuf;

use par_quicksort::SortError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid number of threads: {requested} (allowed -1..={max})")]
    InvalidThreadCount { requested: i64, max: usize },
    #[error("Invalid key: {0}")]
    InvalidStrategy(i64),
    #[error("Failed to open input file {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to open out file {path}: {source}")]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid array size.")]
    InvalidArraySize,
    #[error("Invalid element value at position {index}.")]
    InvalidElement { index: usize },
    #[error("Failed to write output: {0}")]
    WriteOutput(#[source] io::Error),
    #[error(transparent)]
    Sort(#[from] SortError),
}
