pub(crate) mod fork_join;
pub(crate) mod partition;
pub(crate) mod sequential;
pub(crate) mod task_pool;
