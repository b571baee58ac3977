use log::trace;
use rayon::ThreadPool;

use crate::ExecutionCounters;

use super::partition::partition;
use super::sequential;

/// Budgeted two-way fork-join quicksort, run inside `pool`.
///
/// Every fork point hands `thread_budget - 2` to both branches. The branches
/// only run concurrently while the budget at the current level is above 1.
pub fn sort(
    pool: &ThreadPool,
    data: &mut [i32],
    thread_budget: isize,
    threshold: usize,
    counters: &ExecutionCounters,
) {
    pool.install(|| sort_sections(data, thread_budget, threshold, counters));
}

fn sort_sections(
    data: &mut [i32],
    thread_budget: isize,
    threshold: usize,
    counters: &ExecutionCounters,
) {
    if data.len() < 2 {
        return;
    }

    let len = data.len();
    let split = partition(data);
    let (left, right) = data.split_at_mut(split);

    if len < threshold || (left.len() < threshold && right.len() < threshold) {
        trace!("fork-join fallback: len={len} split={split}");
        counters.record_fallback();
        sequential::sort(right);
        sequential::sort(left);
        return;
    }

    // Decremented even when the fork below runs inline; only `> 1` is checked.
    let budget = thread_budget - 2;
    if thread_budget > 1 {
        counters.record_fork();
        rayon::join(
            || sort_sections(right, budget, threshold, counters),
            || sort_sections(left, budget, threshold, counters),
        );
    } else {
        sort_sections(right, budget, threshold, counters);
        sort_sections(left, budget, threshold, counters);
    }
}
