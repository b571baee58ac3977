mod algorithms;
mod error;
mod stats;

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

pub use algorithms::partition::partition;
pub use algorithms::sequential::sort_with_depth;
pub use error::SortError;
pub use stats::{ExecutionCounters, SortStats};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    Sequential,
    ForkJoin,
    TaskPool,
}

const ALL_STRATEGIES: [Strategy; 3] = [
    Strategy::Sequential,
    Strategy::ForkJoin,
    Strategy::TaskPool,
];

pub fn all_strategies() -> &'static [Strategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Sequential => "sequential",
        Strategy::ForkJoin => "fork_join",
        Strategy::TaskPool => "task_pool",
    }
}

impl TryFrom<u8> for Strategy {
    type Error = SortError;

    fn try_from(key: u8) -> Result<Self, Self::Error> {
        match key {
            0 => Ok(Strategy::Sequential),
            1 => Ok(Strategy::ForkJoin),
            2 => Ok(Strategy::TaskPool),
            other => Err(SortError::UnknownStrategy(other)),
        }
    }
}

/// Range sizes below which the parallel sorters stop splitting work.
///
/// `section` applies to fork-join, `task` to the task pool. Submitting a task
/// is cheaper than opening a fork, so `task` is normally the smaller one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Thresholds {
    pub section: usize,
    pub task: usize,
}

pub const DEFAULT_THRESHOLDS: Thresholds = Thresholds {
    section: 9000,
    task: 1000,
};

impl Thresholds {
    pub const fn new(section: usize, task: usize) -> Self {
        Self { section, task }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        DEFAULT_THRESHOLDS
    }
}

pub fn build_pool(threads: usize) -> Result<ThreadPool, SortError> {
    if threads == 0 {
        return Err(SortError::ZeroThreads);
    }
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("qsort-worker-{i}"))
        .build()?;
    Ok(pool)
}

pub fn sort_sequential(data: &mut [i32]) {
    debug!("sequential sort: len={}", data.len());
    algorithms::sequential::sort(data);
}

/// Fork-join sort on a dedicated pool of `thread_budget` workers.
pub fn sort_fork_join(
    data: &mut [i32],
    thread_budget: usize,
    thresholds: &Thresholds,
) -> Result<SortStats, SortError> {
    let pool = build_pool(thread_budget)?;
    Ok(fork_join_in(&pool, data, thread_budget, thresholds))
}

/// Fork-join sort on a caller-owned pool. `thread_budget` still bounds forking.
pub fn fork_join_in(
    pool: &ThreadPool,
    data: &mut [i32],
    thread_budget: usize,
    thresholds: &Thresholds,
) -> SortStats {
    debug!(
        "fork-join sort: len={} budget={} section_threshold={}",
        data.len(),
        thread_budget,
        thresholds.section
    );
    let counters = ExecutionCounters::default();
    let budget = isize::try_from(thread_budget).unwrap_or(isize::MAX);
    algorithms::fork_join::sort(pool, data, budget, thresholds.section, &counters);

    let stats = counters.snapshot();
    debug!("fork-join done: {stats:?}");
    stats
}

/// Task-pool sort on a freshly built pool of `pool_size` workers.
pub fn sort_task_pool(
    data: &mut [i32],
    pool_size: usize,
    thresholds: &Thresholds,
) -> Result<SortStats, SortError> {
    let pool = build_pool(pool_size)?;
    Ok(task_pool_in(&pool, data, thresholds))
}

/// Task-pool sort on a caller-owned pool; returns after the pool drained
/// every task this call submitted.
pub fn task_pool_in(pool: &ThreadPool, data: &mut [i32], thresholds: &Thresholds) -> SortStats {
    debug!(
        "task-pool sort: len={} workers={} task_threshold={}",
        data.len(),
        pool.current_num_threads(),
        thresholds.task
    );
    let counters = ExecutionCounters::default();
    algorithms::task_pool::sort_in(pool, data, thresholds.task, &counters);

    let stats = counters.snapshot();
    debug!("task-pool done: {stats:?}");
    stats
}

/// Sorts `data` with `strategy`. `threads` is ignored by the sequential sorter.
pub fn sort_with(
    strategy: Strategy,
    data: &mut [i32],
    threads: usize,
    thresholds: &Thresholds,
) -> Result<SortStats, SortError> {
    match strategy {
        Strategy::Sequential => {
            sort_sequential(data);
            Ok(SortStats::default())
        }
        Strategy::ForkJoin => sort_fork_join(data, threads, thresholds),
        Strategy::TaskPool => sort_task_pool(data, threads, thresholds),
    }
}
