/// Sharded digit counting across a fixed-size worker pool.
///
/// Each pass splits the working buffer into one contiguous, order-preserving
/// chunk per worker. Workers read only their chunk and fill a private
/// histogram, so no locking is needed; the pool's join is the only barrier.
use std::ops::Range;

use rayon::prelude::*;

use super::count::{Histogram, Radix, count_digits};
use super::error::RadixError;
use super::key::UnsignedKey;

/// Suggested `RadixConfig::parallel_threshold`. Below ~64K keys the
/// per-pass fork/join costs more than the counting it spreads out.
pub const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Number of hardware execution units, or 1 if it cannot be determined.
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Split `0..len` into exactly `workers` contiguous ranges in order.
/// Trailing ranges are empty when `len < workers`.
pub fn shard_bounds(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk_size = len.div_ceil(workers);
    (0..workers)
        .map(|i| {
            let start = (i * chunk_size).min(len);
            let end = (start + chunk_size).min(len);
            start..end
        })
        .collect()
}

/// Runs the counting step of every pass for one sort call.
/// The worker count is fixed when the coordinator is built.
pub struct CountingCoordinator {
    workers: usize,
    pool: Option<rayon::ThreadPool>,
}

impl CountingCoordinator {
    /// Count on the calling thread; no pool is created.
    pub fn sequential() -> Self {
        CountingCoordinator {
            workers: 1,
            pool: None,
        }
    }

    /// Build a coordinator with its own pool of exactly `workers` threads.
    pub fn new(workers: usize) -> Result<Self, RadixError> {
        match workers {
            0 => Err(RadixError::InvalidWorkers),
            1 => Ok(Self::sequential()),
            n => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("fradix-count-{}", i))
                    .build()?;
                Ok(CountingCoordinator {
                    workers: n,
                    pool: Some(pool),
                })
            }
        }
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// One histogram per shard, in shard order.
    pub fn count<U: UnsignedKey>(&self, keys: &[U], exp: U, radix: &Radix<U>) -> Vec<Histogram> {
        let Some(pool) = &self.pool else {
            return vec![count_digits(keys, exp, radix)];
        };
        let shards = shard_bounds(keys.len(), self.workers);
        pool.install(|| {
            shards
                .into_par_iter()
                .map(|range| count_digits(&keys[range], exp, radix))
                .collect()
        })
    }
}
