//! Parallel LSD radix sort for fixed-width signed integers.
//!
//! See [`radix::sort_partitioned`] and [`radix::sort_sign_flip`].

#![allow(clippy::needless_range_loop)]

pub mod radix;
