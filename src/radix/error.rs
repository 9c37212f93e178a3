use std::collections::TryReserveError;

use thiserror::Error;

/// Contract violations reported by the strict entry point
/// [`sort_with_config`](super::sort_with_config).
#[derive(Debug, Error)]
pub enum RadixError {
    #[error("invalid base {0}: a radix needs at least 2 digit values")]
    InvalidBase(usize),
    #[error("base {base} needs {buckets} histogram buckets (limit {limit})", limit = super::MAX_BUCKETS)]
    TooManyBuckets { base: usize, buckets: usize },
    #[error("cannot allocate digit histogram: {0}")]
    HistogramAlloc(#[from] TryReserveError),
    #[error("worker count must be at least 1")]
    InvalidWorkers,
    #[error("failed to build counting thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
