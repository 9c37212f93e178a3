/// Counting-sort primitives for one digit position.
///
/// A pass is count -> merge -> scatter. Counting is pure over its input
/// range and may run on disjoint chunks concurrently; merge and scatter run
/// on a single thread once every chunk histogram exists.
use super::key::UnsignedKey;

/// Histogram of digit occurrences, indexed by digit value `0..buckets`.
pub type Histogram = Vec<usize>;

/// Largest histogram a pass will allocate (8 MiB of counters per worker).
pub const MAX_BUCKETS: usize = 1 << 20;

/// Base used when the requested base would need more than [`MAX_BUCKETS`].
pub const FALLBACK_BASE: usize = 256;

/// A numeric base bound to one unsigned key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix<U> {
    base: usize,
    /// `None` when `base` exceeds every value of `U`: each key is a single digit.
    divisor: Option<U>,
    /// Histogram length. Equals `base` until narrowed by [`Radix::fit_to`].
    buckets: usize,
}

impl<U: UnsignedKey> Radix<U> {
    /// Returns `None` for `base < 2`.
    pub fn new(base: usize) -> Option<Self> {
        if base < 2 {
            return None;
        }
        Some(Radix {
            base,
            divisor: U::try_from_usize(base),
            buckets: base,
        })
    }

    /// Base 256, bounded to [`MAX_BUCKETS`].
    pub fn fallback() -> Self {
        Radix {
            base: FALLBACK_BASE,
            divisor: U::try_from_usize(FALLBACK_BASE),
            buckets: FALLBACK_BASE,
        }
    }

    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    #[inline]
    pub fn buckets(&self) -> usize {
        self.buckets
    }

    /// Narrow the histogram to `min(base, max + 1)` slots.
    ///
    /// No digit of a key `<= max` exceeds `max`, so digits and pass count
    /// are unchanged.
    pub fn fit_to(&self, max: U) -> Self {
        let below_base = match self.divisor {
            Some(b) => max < b,
            None => true,
        };
        let buckets = if below_base {
            max.as_usize() + 1
        } else {
            self.base
        };
        Radix { buckets, ..*self }
    }

    /// Digit of `value` at place value `exp`, always `< buckets` for keys
    /// covered by the last [`Radix::fit_to`].
    #[inline(always)]
    pub fn digit(&self, value: U, exp: U) -> usize {
        match self.divisor {
            Some(b) => ((value / exp) % b).as_usize(),
            None => (value / exp).as_usize(),
        }
    }

    /// Next place value, or `None` once it would overflow `U`.
    /// An overflowing place value cannot hold a nonzero digit of any key.
    #[inline]
    pub fn next_exp(&self, exp: U) -> Option<U> {
        self.divisor.and_then(|b| exp.checked_mul(b))
    }
}

/// Count digit occurrences at `exp` over `keys`. An empty range yields all zeros.
pub fn count_digits<U: UnsignedKey>(keys: &[U], exp: U, radix: &Radix<U>) -> Histogram {
    let mut counts = vec![0usize; radix.buckets()];
    for &k in keys {
        counts[radix.digit(k, exp)] += 1;
    }
    counts
}

/// Sum per-chunk histograms and turn the total into inclusive prefix sums.
///
/// `prefix[d]` is one past the last slot for keys whose digit is `<= d`.
/// Cost is O(buckets * chunks), independent of the number of keys.
pub fn merge_histograms(partials: &[Histogram], buckets: usize) -> Histogram {
    let mut prefix = vec![0usize; buckets];
    for hist in partials {
        debug_assert_eq!(hist.len(), buckets);
        for (total, &c) in prefix.iter_mut().zip(hist) {
            *total += c;
        }
    }
    for d in 1..buckets {
        prefix[d] += prefix[d - 1];
    }
    prefix
}

/// Stable scatter of `src` into `dst` by the digit at `exp`.
///
/// Walks `src` back to front, decrementing each bucket's bound before the
/// write, so equal digits keep their input order. Consumes `prefix`.
pub fn scatter_pass<U: UnsignedKey>(
    src: &[U],
    dst: &mut [U],
    exp: U,
    radix: &Radix<U>,
    prefix: &mut [usize],
) {
    debug_assert_eq!(src.len(), dst.len());
    debug_assert_eq!(prefix.last().copied().unwrap_or(0), src.len());
    for &k in src.iter().rev() {
        let d = radix.digit(k, exp);
        prefix[d] -= 1;
        dst[prefix[d]] = k;
    }
}

/// Largest key, or `None` for an empty slice.
#[inline]
pub fn max_key<U: UnsignedKey>(keys: &[U]) -> Option<U> {
    keys.iter().copied().max()
}
