//! FFT-friendly prime parameters.
//!
//! Each supported representation width gets one prime `p = k · 2^n + 1` and
//! an element `g` of multiplicative order exactly `2^n`, so every power of
//! two up to `2^n` is a valid transform length. The table is fixed
//! configuration; supporting a new width means adding a verified entry.
//!
//! | width | n  | k  | p                   | g  |
//! |-------|----|----|---------------------|----|
//! | u16   | 13 | 5  | 40961               | 12 |
//! | u32   | 30 | 3  | 3221225473          | 13 |
//! | u64   | 57 | 29 | 4179340454199820289 | 21 |

use tracing::debug;

use crate::algebra::ring::Ring;
use crate::error::NttError;
use crate::structures::word::Word;
use crate::structures::zmod::{Modulus, Zmod};
use crate::utils::{ceil_lg, is_2pow};

/// Parameters of an FFT-friendly prime field for the word type `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeParameters<W> {
    /// Exponent such that `2^n` divides `p - 1`.
    pub n: u32,
    /// Cofactor: `p = k · 2^n + 1`.
    pub k: u64,
    /// The prime modulus.
    pub p: W,
    /// An element of order `2^n` modulo `p`.
    pub g: W,
    /// Digit radix for reading sequences as big-integer digit vectors.
    /// The transform itself never uses it. A usable radix has `base² < p`;
    /// the 16-bit entry's `10^9` does not, so it is recorded table data only
    /// and not a digit radix for `Zp16`.
    pub base: u64,
}

/// 16-bit table entry: `40961 = 5 · 2^13 + 1`.
pub const FFT_PRIME_U16: PrimeParameters<u16> = PrimeParameters {
    n: 13,
    k: 5,
    p: 40961,
    g: 0xc,
    base: 1_000_000_000,
};

/// 32-bit table entry: `3221225473 = 3 · 2^30 + 1`.
pub const FFT_PRIME_U32: PrimeParameters<u32> = PrimeParameters {
    n: 30,
    k: 3,
    p: 3221225473,
    g: 13,
    base: 1 << 15,
};

/// 64-bit table entry: `4179340454199820289 = 29 · 2^57 + 1`.
pub const FFT_PRIME_U64: PrimeParameters<u64> = PrimeParameters {
    n: 57,
    k: 29,
    p: 4179340454199820289,
    g: 21,
    base: 100,
};

/// Words that have an entry in the prime table.
pub trait FftWord: Word {
    const FFT_PRIME: PrimeParameters<Self>;
}

impl FftWord for u16 {
    const FFT_PRIME: PrimeParameters<u16> = FFT_PRIME_U16;
}

impl FftWord for u32 {
    const FFT_PRIME: PrimeParameters<u32> = FFT_PRIME_U32;
}

impl FftWord for u64 {
    const FFT_PRIME: PrimeParameters<u64> = FFT_PRIME_U64;
}

crate::define_modulus!(
    /// Modulus marker for the 16-bit table prime.
    pub P16: u16 = FFT_PRIME_U16.p
);
crate::define_modulus!(
    /// Modulus marker for the 32-bit table prime.
    pub P32: u32 = FFT_PRIME_U32.p
);
crate::define_modulus!(
    /// Modulus marker for the 64-bit table prime.
    pub P64: u64 = FFT_PRIME_U64.p
);

/// Field of the 16-bit table prime.
pub type Zp16 = Zmod<P16>;
/// Field of the 32-bit table prime.
pub type Zp32 = Zmod<P32>;
/// Field of the 64-bit table prime.
pub type Zp64 = Zmod<P64>;

impl<W: Word> PrimeParameters<W> {
    /// Largest supported transform length, `2^n`.
    pub fn max_len(&self) -> u128 {
        1u128 << self.n
    }

    /// Fail with [`NttError::ModulusMismatch`] unless `M` uses this prime.
    pub fn check_modulus<M: Modulus<Rep = W>>(&self) -> Result<(), NttError> {
        if M::VALUE != self.p {
            return Err(NttError::ModulusMismatch {
                expected: self.p.to_u128(),
                found: M::VALUE.to_u128(),
            });
        }
        Ok(())
    }

    /// `g` as an element of the field `M`, after checking the modulus.
    pub fn generator<M: Modulus<Rep = W>>(&self) -> Result<Zmod<M>, NttError> {
        self.check_modulus::<M>()?;
        Ok(Zmod::new(self.g))
    }

    /// Primitive root of unity of order `len`, derived as
    /// `g^(2^(n - ceil_lg(len)))`.
    ///
    /// Fails with [`NttError::InvalidLength`] unless `len` is a power of two
    /// no larger than `2^n`, and with [`NttError::InvalidRootOrder`] if the
    /// entry's `n` is too large to derive the root with a `u64` exponent.
    ///
    /// # Example
    ///
    /// ```
    /// use inplace_ntt::{Ring, Zp16, FFT_PRIME_U16, P16};
    ///
    /// let omega = FFT_PRIME_U16.root_of_unity::<P16>(16).unwrap();
    /// assert_eq!(omega.pow(16), Zp16::ONE);
    /// assert_ne!(omega.pow(8), Zp16::ONE);
    /// ```
    pub fn root_of_unity<M: Modulus<Rep = W>>(&self, len: usize) -> Result<Zmod<M>, NttError> {
        let g = self.generator::<M>()?;
        let lg = ceil_lg(len);
        if !is_2pow(len) || lg > self.n {
            return Err(NttError::InvalidLength { len });
        }
        let exp = 1u64
            .checked_shl(self.n - lg)
            .ok_or(NttError::InvalidRootOrder { len })?;
        Ok(g.pow(exp))
    }

    /// Check the table entry: `p = k · 2^n + 1`, `p` prime, and `g` of
    /// order exactly `2^n`.
    ///
    /// A malformed prime is reported as [`NttError::ModulusMismatch`] with
    /// `expected` set to `k · 2^n + 1`; a bad generator, or an `n` outside
    /// `1..64`, as [`NttError::InvalidRootOrder`].
    pub fn verify<M: Modulus<Rep = W>>(&self) -> Result<(), NttError> {
        self.check_modulus::<M>()?;

        if self.n == 0 || self.n >= u64::BITS {
            debug!(n = self.n, "table exponent out of range");
            return Err(NttError::InvalidRootOrder {
                len: 1usize.checked_shl(self.n).unwrap_or(0),
            });
        }

        let expected = (self.k as u128) << self.n;
        let expected = expected + 1;
        let p = self.p.to_u128();
        if expected != p || p > u64::MAX as u128 || !primality_test::is_prime(p as u64) {
            debug!(p = %self.p, k = self.k, n = self.n, "malformed prime table entry");
            return Err(NttError::ModulusMismatch { expected, found: p });
        }

        // g^(2^(n-1)) = -1 pins the order of g to exactly 2^n.
        let g = Zmod::<M>::new(self.g);
        let half = g.pow(1u64 << (self.n - 1));
        if half != -Zmod::<M>::ONE {
            debug!(g = %self.g, n = self.n, "table generator has wrong order");
            return Err(NttError::InvalidRootOrder {
                len: 1usize << self.n.min(usize::BITS - 1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::define_modulus!(Small: u16 = 17);
    crate::define_modulus!(FakeP16: u16 = 40963);

    #[test]
    fn table_entries_verify() {
        assert!(FFT_PRIME_U16.verify::<P16>().is_ok());
        assert!(FFT_PRIME_U32.verify::<P32>().is_ok());
        assert!(FFT_PRIME_U64.verify::<P64>().is_ok());
    }

    #[test]
    fn width_selection() {
        assert_eq!(<u16 as FftWord>::FFT_PRIME, FFT_PRIME_U16);
        assert_eq!(<u32 as FftWord>::FFT_PRIME.p, 3221225473);
        assert_eq!(<u64 as FftWord>::FFT_PRIME.g, 21);
    }

    #[test]
    fn digit_radix_fits_wide_entries_only() {
        let fits = |base: u64, p: u128| (base as u128) * (base as u128) < p;
        assert!(fits(FFT_PRIME_U32.base, FFT_PRIME_U32.p as u128));
        assert!(fits(FFT_PRIME_U64.base, FFT_PRIME_U64.p as u128));
        assert!(!fits(FFT_PRIME_U16.base, FFT_PRIME_U16.p as u128));
    }

    #[test]
    fn max_len() {
        assert_eq!(FFT_PRIME_U16.max_len(), 8192);
        assert_eq!(FFT_PRIME_U64.max_len(), 1u128 << 57);
    }

    #[test]
    fn modulus_mismatch() {
        assert_eq!(
            FFT_PRIME_U16.check_modulus::<Small>(),
            Err(NttError::ModulusMismatch {
                expected: 40961,
                found: 17
            })
        );
        assert!(FFT_PRIME_U16.root_of_unity::<Small>(16).is_err());
    }

    #[test]
    fn verify_rejects_bad_entries() {
        let bad_k = PrimeParameters { k: 7, ..FFT_PRIME_U16 };
        assert!(matches!(
            bad_k.verify::<P16>(),
            Err(NttError::ModulusMismatch { .. })
        ));

        // 3^(2^12) is not -1 mod 40961.
        let bad_g = PrimeParameters { g: 3, ..FFT_PRIME_U16 };
        assert!(matches!(
            bad_g.verify::<P16>(),
            Err(NttError::InvalidRootOrder { .. })
        ));

        // 40963 = 13 * 23 * 137 is not prime.
        let composite = PrimeParameters {
            p: 40963,
            ..FFT_PRIME_U16
        };
        assert!(composite.verify::<FakeP16>().is_err());

        // 40961 = 40960 * 2^0 + 1, but no element has order 2^0 other than 1.
        let zero_n = PrimeParameters {
            n: 0,
            k: 40960,
            ..FFT_PRIME_U16
        };
        assert_eq!(
            zero_n.verify::<P16>(),
            Err(NttError::InvalidRootOrder { len: 1 })
        );

        let huge_n = PrimeParameters { n: 64, ..FFT_PRIME_U16 };
        assert_eq!(
            huge_n.verify::<P16>(),
            Err(NttError::InvalidRootOrder { len: 0 })
        );
    }

    #[test]
    fn root_of_unity_rejects_oversized_exponent() {
        let huge_n = PrimeParameters { n: 70, ..FFT_PRIME_U16 };
        assert_eq!(
            huge_n.root_of_unity::<P16>(2),
            Err(NttError::InvalidRootOrder { len: 2 })
        );
        let zero_n = PrimeParameters { n: 0, ..FFT_PRIME_U16 };
        assert!(zero_n.root_of_unity::<P16>(1).is_ok());
        assert_eq!(
            zero_n.root_of_unity::<P16>(2),
            Err(NttError::InvalidLength { len: 2 })
        );
    }

    #[test]
    fn roots_have_exact_order() {
        for lg in 1..=FFT_PRIME_U16.n {
            let len = 1usize << lg;
            let omega = FFT_PRIME_U16.root_of_unity::<P16>(len).unwrap();
            assert_eq!(omega.pow(len as u64), Zp16::ONE);
            assert_ne!(omega.pow(len as u64 / 2), Zp16::ONE);
        }
    }

    #[test]
    fn root_of_unity_known_value() {
        // 12^(2^9) mod 40961
        let omega = FFT_PRIME_U16.root_of_unity::<P16>(16).unwrap();
        assert_eq!(omega.value(), 302);
    }

    #[test]
    fn root_of_unity_rejects_bad_lengths() {
        assert_eq!(
            FFT_PRIME_U16.root_of_unity::<P16>(12),
            Err(NttError::InvalidLength { len: 12 })
        );
        assert_eq!(
            FFT_PRIME_U16.root_of_unity::<P16>(1 << 14),
            Err(NttError::InvalidLength { len: 1 << 14 })
        );
        assert!(FFT_PRIME_U16.root_of_unity::<P16>(0).is_err());
    }

    #[test]
    fn length_one_root_is_one() {
        assert_eq!(FFT_PRIME_U32.root_of_unity::<P32>(1).unwrap(), Zp32::ONE);
    }
}
