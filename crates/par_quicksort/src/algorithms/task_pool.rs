use log::trace;
use rayon::{Scope, ThreadPool};

use crate::ExecutionCounters;

use super::partition::partition;
use super::sequential;

/// Task-spawning quicksort on an already built pool.
///
/// Returns once every submitted task has finished: the enclosing scope is the
/// only barrier, individual tasks are never joined.
pub fn sort_in(pool: &ThreadPool, data: &mut [i32], threshold: usize, counters: &ExecutionCounters) {
    pool.scope(|scope| sort_tasks(scope, data, threshold, counters));
}

fn sort_tasks<'scope>(
    scope: &Scope<'scope>,
    mut data: &'scope mut [i32],
    threshold: usize,
    counters: &'scope ExecutionCounters,
) {
    while data.len() > 1 {
        let len = data.len();
        let split = partition(data);
        let (left, right) = std::mem::take(&mut data).split_at_mut(split);

        if len < threshold || (left.len() < threshold && right.len() < threshold) {
            trace!("task fallback: len={len} split={split}");
            counters.record_fallback();
            sequential::sort(right);
            sequential::sort(left);
            return;
        }

        counters.record_task();
        scope.spawn(move |scope| sort_tasks(scope, right, threshold, counters));
        data = left;
    }
}
