/// Key representations for the radix sorter.
///
/// Every signed width is paired with its same-width unsigned partner. All
/// digit extraction happens on the unsigned side, so counting and scatter
/// never see a sign and never negate.
use std::fmt::Debug;
use std::ops::{BitXor, Div, Rem};

/// Unsigned working representation used by every digit pass.
pub trait UnsignedKey:
    Copy
    + Ord
    + Default
    + Debug
    + Send
    + Sync
    + Div<Output = Self>
    + Rem<Output = Self>
    + BitXor<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// Only the most significant bit set.
    const SIGN_BIT: Self;

    /// `None` when `n` exceeds the type's range.
    fn try_from_usize(n: usize) -> Option<Self>;

    /// Truncating conversion. Callers only pass values below a `usize` base.
    fn as_usize(self) -> usize;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

/// Fixed-width signed integer accepted by the public sort entry points.
pub trait SignedKey: Copy + Ord + Default + Debug + Send + Sync + 'static {
    type Unsigned: UnsignedKey;

    /// Smallest representable value. Its magnitude has no signed encoding.
    const MIN: Self;

    /// Two's-complement bit pattern, unchanged.
    fn to_bits(self) -> Self::Unsigned;

    fn from_bits(bits: Self::Unsigned) -> Self;

    fn is_negative(self) -> bool;

    /// Magnitude of a negative value other than [`SignedKey::MIN`].
    fn magnitude(self) -> Self::Unsigned;

    /// Inverse of [`SignedKey::magnitude`]: rebuilds `-m`.
    /// `m` must not exceed the type's `MAX`; the magnitude of `MIN` has no
    /// signed encoding.
    fn from_magnitude(m: Self::Unsigned) -> Self;

    /// Order-preserving map onto the unsigned domain.
    ///
    /// Flipping the sign bit moves negatives (sign bit set) below
    /// non-negatives, so `a < b` iff `a.flip_sign() < b.flip_sign()`.
    #[inline]
    fn flip_sign(self) -> Self::Unsigned {
        self.to_bits() ^ Self::Unsigned::SIGN_BIT
    }

    /// Inverse of [`SignedKey::flip_sign`].
    #[inline]
    fn unflip_sign(bits: Self::Unsigned) -> Self {
        Self::from_bits(bits ^ Self::Unsigned::SIGN_BIT)
    }
}

macro_rules! impl_keys {
    ($($s:ty => $u:ty),* $(,)?) => {$(
        impl UnsignedKey for $u {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const SIGN_BIT: Self = 1 << (<$u>::BITS - 1);

            #[inline]
            fn try_from_usize(n: usize) -> Option<Self> {
                <$u>::try_from(n).ok()
            }

            #[inline(always)]
            fn as_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$u>::checked_mul(self, rhs)
            }
        }

        impl SignedKey for $s {
            type Unsigned = $u;

            const MIN: Self = <$s>::MIN;

            #[inline(always)]
            fn to_bits(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn from_bits(bits: $u) -> Self {
                bits as $s
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn magnitude(self) -> $u {
                debug_assert!(self < 0 && self != <$s>::MIN);
                (-self) as $u
            }

            #[inline]
            fn from_magnitude(m: $u) -> Self {
                debug_assert!(m <= <$s>::MAX as $u);
                -(m as $s)
            }
        }
    )*};
}

impl_keys! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}
