//! Unsigned representation words and their double-width intermediates.
//!
//! Field elements are stored in a [`Word`]. Sums and products are formed in
//! [`Word::Wide`], which is exactly twice as wide, so `modulus²` always fits
//! and no intermediate result overflows before it is reduced.

use core::fmt;
use core::hash::Hash;
use core::ops::{Add, Mul, Rem, Sub};

/// An unsigned integer type usable as the representation of a field element.
pub trait Word:
    Copy + Eq + Ord + Hash + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Integer type holding any product of two `Self` values.
    type Wide: Copy
        + Ord
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>
        + Rem<Output = Self::Wide>;

    const ZERO: Self;
    const ONE: Self;
    const BITS: u32;

    fn widen(self) -> Self::Wide;

    /// Truncating conversion back from the wide type.
    ///
    /// Only called on values already reduced below the modulus.
    fn narrow(wide: Self::Wide) -> Self;

    fn to_u128(self) -> u128;

    /// Truncating conversion from `u128`.
    fn from_u128(value: u128) -> Self;
}

macro_rules! impl_word {
    ($($word:ty => $wide:ty),* $(,)?) => {
        $(
            impl Word for $word {
                type Wide = $wide;

                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$word>::BITS;

                #[inline]
                fn widen(self) -> $wide {
                    self as $wide
                }

                #[inline]
                fn narrow(wide: $wide) -> Self {
                    wide as $word
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_u128(value: u128) -> Self {
                    value as $word
                }
            }
        )*
    };
}

impl_word! {
    u8 => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
}
