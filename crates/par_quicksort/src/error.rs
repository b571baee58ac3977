#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("thread count must be at least 1")]
    ZeroThreads,
    #[error("unknown strategy selector: {0}")]
    UnknownStrategy(u8),
    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}
