use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters bumped by the parallel sorters. Never read by the algorithms.
#[derive(Debug, Default)]
pub struct ExecutionCounters {
    forks: AtomicUsize,
    tasks: AtomicUsize,
    fallbacks: AtomicUsize,
}

impl ExecutionCounters {
    #[inline]
    pub(crate) fn record_fork(&self) {
        self.forks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_task(&self) {
        self.tasks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SortStats {
        SortStats {
            forks: self.forks.load(Ordering::Relaxed),
            tasks: self.tasks.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Two-way forks that ran as concurrent branches.
    pub forks: usize,
    /// Ranges submitted to the pool as independent tasks.
    pub tasks: usize,
    /// Ranges handed to the sequential sorter.
    pub fallbacks: usize,
}
