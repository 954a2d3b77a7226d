use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::NttError;
use crate::structures::word::Word;

/// Compile-time modulus for [`Zmod`].
///
/// Implementors are zero-sized marker types naming one `(word, value)` pair.
/// Use [`define_modulus!`](crate::define_modulus) to declare one.
pub trait Modulus: Copy + Eq + core::hash::Hash + fmt::Debug + Send + Sync + 'static {
    /// Unsigned representation of field elements.
    type Rep: Word;
    /// The modulus itself; must be at least 2.
    const VALUE: Self::Rep;
}

/// Declare a zero-sized [`Modulus`] marker.
///
/// ```
/// use inplace_ntt::{define_modulus, Zmod};
///
/// define_modulus!(pub F17: u8 = 17);
///
/// let a = Zmod::<F17>::new(20);
/// assert_eq!(a.value(), 3);
/// ```
#[macro_export]
macro_rules! define_modulus {
    ($(#[$meta:meta])* $vis:vis $name:ident : $rep:ty = $value:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Modulus for $name {
            type Rep = $rep;
            const VALUE: $rep = $value;
        }
    };
}

/// Integers modulo `M::VALUE`.
///
/// The stored value is always reduced into `[0, M::VALUE)`. Additions and
/// products are formed in the double-width `Word::Wide` before reduction,
/// so every modulus that fits in `M::Rep` is valid. For [`Field`] behavior
/// the modulus must be prime; composite moduli still give a ring in which
/// only [`Zmod::try_inv`] can tell invertible elements apart.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zmod<M: Modulus> {
    val: M::Rep,
    _modulus: PhantomData<M>,
}

#[cfg(feature = "rand")]
impl<M: Modulus> rand::distributions::Distribution<Zmod<M>> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Zmod<M> {
        Zmod::from_u128(rng.gen_range(0..M::VALUE.to_u128()))
    }
}

#[cfg(feature = "serde")]
impl<M: Modulus> serde::Serialize for Zmod<M>
where
    M::Rep: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        <M::Rep as serde::Serialize>::serialize(&self.val, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, M: Modulus> serde::Deserialize<'de> for Zmod<M>
where
    M::Rep: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <M::Rep as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

impl<M: Modulus> Zmod<M> {
    /// Create an element from a representation-width integer, reducing it.
    #[inline]
    pub fn new(value: M::Rep) -> Self {
        debug_assert!(M::VALUE > M::Rep::ONE, "modulus {} is below 2", M::VALUE);
        if value < M::VALUE {
            Self::new_unchecked(value)
        } else {
            Self::new_unchecked(M::Rep::narrow(value.widen() % M::VALUE.widen()))
        }
    }

    /// Wrap a value the caller guarantees is already below the modulus.
    #[inline]
    const fn new_unchecked(val: M::Rep) -> Self {
        Self {
            val,
            _modulus: PhantomData,
        }
    }

    /// Create an element from any unsigned integer up to 128 bits.
    #[inline]
    pub fn from_u128(value: u128) -> Self {
        Self::new_unchecked(M::Rep::from_u128(value % M::VALUE.to_u128()))
    }

    /// Create an element from a signed integer; negative inputs map to their
    /// non-negative residue.
    ///
    /// ```
    /// use inplace_ntt::Zp16;
    ///
    /// assert_eq!(Zp16::from_i64(-1).value(), 40960);
    /// ```
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        let m = M::VALUE.to_u128() as i128;
        Self::new_unchecked(M::Rep::from_u128((value as i128).rem_euclid(m) as u128))
    }

    /// The representative in `[0, modulus)`.
    #[inline]
    pub fn value(self) -> M::Rep {
        self.val
    }

    /// The modulus.
    #[inline]
    pub fn modulus() -> M::Rep {
        M::VALUE
    }

    /// Extended Euclid on `(value, modulus)`.
    ///
    /// Returns `(gcd, s)` where `s` is the Bézout coefficient of `value`,
    /// normalized into `[0, modulus)`. Signed 128-bit coefficients keep
    /// every width free of overflow.
    fn egcd(self) -> (i128, i128) {
        let m = M::VALUE.to_u128() as i128;
        let (mut a, mut b) = (self.val.to_u128() as i128, m);
        let (mut s, mut t) = (1i128, 0i128);

        while b != 0 {
            let q = a / b;
            (a, b) = (b, a % b);
            (s, t) = (t, s - q * t);
        }

        (a, s.rem_euclid(m))
    }

    /// Multiplicative inverse without the coprimality check.
    ///
    /// For a non-invertible input the result is the last Bézout coefficient
    /// the algorithm produced; for zero that is zero.
    ///
    /// ```
    /// use inplace_ntt::{Ring, Zp16};
    ///
    /// let a = Zp16::new(12);
    /// assert_eq!(a * a.inv_unchecked(), Zp16::ONE);
    /// assert_eq!(Zp16::ZERO.inv_unchecked(), Zp16::ZERO);
    /// ```
    pub fn inv_unchecked(self) -> Self {
        let (_, s) = self.egcd();
        Self::new_unchecked(M::Rep::from_u128(s as u128))
    }

    /// Multiplicative inverse, failing with [`NttError::NonInvertible`] when
    /// the value and the modulus are not coprime.
    ///
    /// ```
    /// use inplace_ntt::{NttError, Ring, Zp16};
    ///
    /// assert_eq!(Zp16::new(3).try_inv().unwrap() * Zp16::new(3), Zp16::ONE);
    /// assert_eq!(Zp16::ZERO.try_inv(), Err(NttError::NonInvertible));
    /// ```
    pub fn try_inv(self) -> Result<Self, NttError> {
        let (g, s) = self.egcd();
        if g != 1 {
            return Err(NttError::NonInvertible);
        }
        Ok(Self::new_unchecked(M::Rep::from_u128(s as u128)))
    }

    /// Division reporting a non-invertible divisor instead of returning an
    /// unspecified value.
    pub fn checked_div(self, rhs: Self) -> Result<Self, NttError> {
        Ok(self * rhs.try_inv()?)
    }
}

impl<M: Modulus> Default for Zmod<M> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<M: Modulus> fmt::Debug for Zmod<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zmod<{}>({})", M::VALUE, self.val)
    }
}

impl<M: Modulus> fmt::Display for Zmod<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

/* ---- From/Into conversions ---- */

macro_rules! impl_from_unsigned {
    ($($int:ty),*) => {
        $(
            impl<M: Modulus> From<$int> for Zmod<M> {
                fn from(value: $int) -> Self {
                    Self::from_u128(value as u128)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl<M: Modulus> From<i64> for Zmod<M> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

/* ---- standard arithmetic operators ---- */

impl<M: Modulus> Add for Zmod<M> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let m = M::VALUE.widen();
        let mut sum = self.val.widen() + rhs.val.widen();
        if sum >= m {
            sum = sum - m;
        }
        Self::new_unchecked(M::Rep::narrow(sum))
    }
}

impl<M: Modulus> Sub for Zmod<M> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let mut lhs = self.val.widen();
        if self.val < rhs.val {
            lhs = lhs + M::VALUE.widen();
        }
        Self::new_unchecked(M::Rep::narrow(lhs - rhs.val.widen()))
    }
}

impl<M: Modulus> Mul for Zmod<M> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let prod = self.val.widen() * rhs.val.widen();
        Self::new_unchecked(M::Rep::narrow(prod % M::VALUE.widen()))
    }
}

impl<M: Modulus> Neg for Zmod<M> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        if self.val == M::Rep::ZERO {
            self
        } else {
            Self::new_unchecked(M::Rep::narrow(M::VALUE.widen() - self.val.widen()))
        }
    }
}

/// Division by the unchecked inverse of `rhs`.
///
/// Dividing by a non-invertible element does not panic; use
/// [`Zmod::checked_div`] to detect it.
impl<M: Modulus> Div for Zmod<M> {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inv_unchecked()
    }
}

/* ---- implement Ring ---- */

impl<M: Modulus> Ring for Zmod<M> {
    const ZERO: Self = Self::new_unchecked(<M::Rep as Word>::ZERO);
    const ONE: Self = Self::new_unchecked(<M::Rep as Word>::ONE);

    #[inline]
    fn from_u64(n: u64) -> Self {
        Self::from_u128(n as u128)
    }
}

/* ---- implement Field ---- */

impl<M: Modulus> Field for Zmod<M> {
    #[inline]
    fn inverse(self) -> Option<Self> {
        self.try_inv().ok()
    }

    #[inline]
    fn inverse_unchecked(self) -> Self {
        self.inv_unchecked()
    }

    #[inline]
    fn try_inverse(self) -> Result<Self, NttError> {
        self.try_inv()
    }
}

/* ---- basic tests ---- */
