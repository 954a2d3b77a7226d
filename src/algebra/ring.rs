use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity ZERO
/// - (R, ·) is a commutative monoid with identity ONE
/// - multiplication distributes over addition.
pub trait Ring:
    Sized
    + Copy
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Image of the integer `n` under the canonical map `Z -> R`.
    fn from_u64(n: u64) -> Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// `self^exp` by square-and-multiply, scanning `exp` from its lowest bit.
    ///
    /// `x^0` is `ONE` for every `x`, zero included.
    fn pow(self, exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::ONE;

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            e >>= 1;
            if e > 0 {
                base = base * base;
            }
        }
        result
    }
}
