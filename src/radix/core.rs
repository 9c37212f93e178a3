/// LSD radix sort for signed integers.
///
/// Two interchangeable sign strategies share one pass driver:
/// - Partitioned: split out negatives as magnitudes, sort both sign groups
///   concurrently on a two-way fork/join, then stitch them back together.
/// - SignFlip: map every key through an order-preserving sign-bit flip, sort
///   the unsigned keys once with sharded parallel counting, then map back.
///
/// Both return identical output for identical input.
use log::{Level, debug, log_enabled, trace, warn};

use super::coordinator::{CountingCoordinator, available_workers};
use super::count::{MAX_BUCKETS, Radix, max_key, merge_histograms, scatter_pass};
use super::error::RadixError;
use super::key::{SignedKey, UnsignedKey};

/// How negative keys are brought into the unsigned domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignStrategy {
    /// Sort negatives (as magnitudes) and non-negatives independently.
    Partitioned,
    /// Flip the sign bit and sort all keys in one run.
    #[default]
    SignFlip,
}

/// Configuration for [`sort_with_config`].
#[derive(Debug, Clone)]
pub struct RadixConfig {
    pub base: usize,
    pub strategy: SignStrategy,
    /// Counting workers for [`SignStrategy::SignFlip`]. `None` picks the
    /// hardware parallelism. Partitioned sorts always fork exactly two
    /// tasks and ignore this.
    pub workers: Option<usize>,
    /// With `workers: None`, inputs shorter than this count on the calling
    /// thread. [`PARALLEL_THRESHOLD`](super::PARALLEL_THRESHOLD) is a
    /// reasonable value; `None` always uses every worker.
    pub parallel_threshold: Option<usize>,
}

impl Default for RadixConfig {
    fn default() -> Self {
        RadixConfig {
            base: 10,
            strategy: SignStrategy::default(),
            workers: None,
            parallel_threshold: None,
        }
    }
}

/// What one sort call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub len: usize,
    /// Digit passes of the longest pass-driver run.
    pub passes: usize,
    pub workers: usize,
    pub strategy: SignStrategy,
}

/// Output of [`sort_with_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted<T> {
    pub values: Vec<T>,
    pub stats: SortStats,
}

// ── Pass driver ──────────────────────────────────────────────────────────

/// Sort unsigned keys ascending, one digit position per pass.
///
/// Runs while `max / exp > 0`, i.e. `ceil(log_base(max + 1))` passes, and
/// stops early if the next place value would overflow `U`. Each pass counts,
/// merges and scatters into the spare buffer, which then becomes the working
/// buffer. Returns the sorted keys and the number of passes run.
///
/// Histograms hold `min(base, max + 1)` slots. If that still exceeds
/// [`MAX_BUCKETS`], the keys are sorted in base
/// [`FALLBACK_BASE`](super::FALLBACK_BASE) instead; the output is the same.
pub fn sort_unsigned<U: UnsignedKey>(
    keys: Vec<U>,
    radix: &Radix<U>,
    coordinator: &CountingCoordinator,
) -> (Vec<U>, usize) {
    if keys.len() <= 1 {
        return (keys, 0);
    }
    let Some(max) = max_key(&keys) else {
        return (keys, 0);
    };
    let mut radix = radix.fit_to(max);
    if radix.buckets() > MAX_BUCKETS {
        warn!(
            "base {} needs {} buckets; sorting in base {}",
            radix.base(),
            radix.buckets(),
            super::FALLBACK_BASE
        );
        radix = Radix::fallback().fit_to(max);
    }
    let radix = &radix;

    let mut work = keys;
    let mut spare = vec![U::ZERO; work.len()];
    let mut exp = U::ONE;
    let mut passes = 0;

    while max / exp > U::ZERO {
        let partials = coordinator.count(&work, exp, radix);
        let mut prefix = merge_histograms(&partials, radix.buckets());
        if log_enabled!(Level::Trace) {
            let occupied = prefix
                .iter()
                .scan(0, |prev, &end| {
                    let filled = end > *prev;
                    *prev = end;
                    Some(filled)
                })
                .filter(|&filled| filled)
                .count();
            trace!("pass {}: exp={:?}, {} occupied buckets", passes, exp, occupied);
        }
        scatter_pass(&work, &mut spare, exp, radix, &mut prefix);
        std::mem::swap(&mut work, &mut spare);
        passes += 1;

        match radix.next_exp(exp) {
            Some(next) => exp = next,
            None => break,
        }
    }

    (work, passes)
}

// ── Sign strategies ──────────────────────────────────────────────────────

/// `[MIN values] ++ [negatives] ++ [non-negatives]`, each group sorted.
///
/// `MIN` is kept verbatim since its magnitude does not fit the signed type.
/// Negatives sort ascending by magnitude, so reversing them and negating
/// gives ascending signed order.
fn sort_by_partition<T: SignedKey>(values: &[T], radix: &Radix<T::Unsigned>) -> (Vec<T>, usize) {
    let mut out = Vec::with_capacity(values.len());
    let mut magnitudes = Vec::new();
    let mut non_negatives = Vec::new();
    for &v in values {
        if v == T::MIN {
            out.push(v);
        } else if v.is_negative() {
            magnitudes.push(v.magnitude());
        } else {
            non_negatives.push(v.to_bits());
        }
    }

    let sequential = CountingCoordinator::sequential();
    let ((magnitudes, neg_passes), (non_negatives, pos_passes)) = rayon::join(
        || sort_unsigned(magnitudes, radix, &sequential),
        || sort_unsigned(non_negatives, radix, &sequential),
    );

    out.extend(magnitudes.into_iter().rev().map(T::from_magnitude));
    out.extend(non_negatives.into_iter().map(T::from_bits));
    (out, neg_passes.max(pos_passes))
}

fn sort_by_sign_flip<T: SignedKey>(
    values: &[T],
    radix: &Radix<T::Unsigned>,
    coordinator: &CountingCoordinator,
) -> (Vec<T>, usize) {
    let keys: Vec<T::Unsigned> = values.iter().map(|&v| v.flip_sign()).collect();
    let (keys, passes) = sort_unsigned(keys, radix, coordinator);
    (keys.into_iter().map(T::unflip_sign).collect(), passes)
}

/// Worker count for `workers: None`.
fn auto_workers(len: usize, parallel_threshold: Option<usize>) -> usize {
    match parallel_threshold {
        Some(threshold) if len < threshold => 1,
        _ => available_workers(),
    }
}

/// Histogram slots the strict path would need for `values`.
fn required_buckets<T: SignedKey>(
    values: &[T],
    radix: &Radix<T::Unsigned>,
    strategy: SignStrategy,
) -> usize {
    let max = match strategy {
        SignStrategy::SignFlip => values.iter().map(|&v| v.flip_sign()).max(),
        SignStrategy::Partitioned => values
            .iter()
            .filter(|&&v| v != T::MIN)
            .map(|&v| {
                if v.is_negative() {
                    v.magnitude()
                } else {
                    v.to_bits()
                }
            })
            .max(),
    };
    max.map_or(0, |m| radix.fit_to(m).buckets())
}

fn log_stats(stats: &SortStats, base: usize) {
    debug!(
        "{:?} radix sort: {} keys, base {}, {} workers, {} passes",
        stats.strategy, stats.len, base, stats.workers, stats.passes
    );
}

// ── Public entry points ──────────────────────────────────────────────────

/// Sort with the partition strategy.
///
/// Returns an unchanged copy of `values` when `values.len() <= 1` or
/// `base < 2`. Any larger base is accepted.
pub fn sort_partitioned<T: SignedKey>(values: &[T], base: usize) -> Vec<T> {
    let Some(radix) = Radix::new(base) else {
        return values.to_vec();
    };
    if values.len() <= 1 {
        return values.to_vec();
    }
    let (sorted, passes) = sort_by_partition(values, &radix);
    log_stats(
        &SortStats {
            len: values.len(),
            passes,
            workers: 2,
            strategy: SignStrategy::Partitioned,
        },
        base,
    );
    sorted
}

/// Sort with the sign-flip strategy, counting across the host's hardware
/// parallelism. Same no-op cases and output as [`sort_partitioned`].
pub fn sort_sign_flip<T: SignedKey>(values: &[T], base: usize) -> Vec<T> {
    sort_sign_flip_with_workers(values, base, auto_workers(values.len(), None))
}

/// [`sort_sign_flip`] with an explicit counting pool size. Zero is treated
/// as one. Output does not depend on `workers`.
pub fn sort_sign_flip_with_workers<T: SignedKey>(values: &[T], base: usize, workers: usize) -> Vec<T> {
    let Some(radix) = Radix::new(base) else {
        return values.to_vec();
    };
    if values.len() <= 1 {
        return values.to_vec();
    }
    let coordinator = CountingCoordinator::new(workers.max(1)).unwrap_or_else(|e| {
        warn!("{}; counting on the calling thread", e);
        CountingCoordinator::sequential()
    });
    let (sorted, passes) = sort_by_sign_flip(values, &radix, &coordinator);
    log_stats(
        &SortStats {
            len: values.len(),
            passes,
            workers: coordinator.workers(),
            strategy: SignStrategy::SignFlip,
        },
        base,
    );
    sorted
}

/// Strict entry point: rejects `base < 2` and a zero worker count instead of
/// treating them as a no-op, and rejects a base whose histogram would exceed
/// [`MAX_BUCKETS`] or cannot be allocated. Inputs of length 0 or 1 still
/// succeed unchanged.
pub fn sort_with_config<T: SignedKey>(
    values: &[T],
    config: &RadixConfig,
) -> Result<Sorted<T>, RadixError> {
    let radix = Radix::new(config.base).ok_or(RadixError::InvalidBase(config.base))?;
    if config.workers == Some(0) {
        return Err(RadixError::InvalidWorkers);
    }

    let len = values.len();
    if len <= 1 {
        return Ok(Sorted {
            values: values.to_vec(),
            stats: SortStats {
                len,
                passes: 0,
                workers: 1,
                strategy: config.strategy,
            },
        });
    }

    let buckets = required_buckets(values, &radix, config.strategy);
    if buckets > MAX_BUCKETS {
        return Err(RadixError::TooManyBuckets {
            base: config.base,
            buckets,
        });
    }
    let mut reserve: Vec<usize> = Vec::new();
    reserve.try_reserve_exact(buckets)?;
    drop(reserve);

    let (sorted, passes, workers) = match config.strategy {
        SignStrategy::Partitioned => {
            let (sorted, passes) = sort_by_partition(values, &radix);
            (sorted, passes, 2)
        }
        SignStrategy::SignFlip => {
            let workers = config
                .workers
                .unwrap_or_else(|| auto_workers(len, config.parallel_threshold));
            let coordinator = CountingCoordinator::new(workers)?;
            let (sorted, passes) = sort_by_sign_flip(values, &radix, &coordinator);
            (sorted, passes, coordinator.workers())
        }
    };

    let stats = SortStats {
        len,
        passes,
        workers,
        strategy: config.strategy,
    };
    log_stats(&stats, config.base);
    Ok(Sorted {
        values: sorted,
        stats,
    })
}

// ── Verification helpers ─────────────────────────────────────────────────

/// True if every adjacent pair is non-decreasing.
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// True if `a` and `b` hold the same multiset of values.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
