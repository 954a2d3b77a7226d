//! In-place Number Theoretic Transform (NTT).
//!
//! NTT is the finite field analog of FFT: with a primitive `n`-th root of
//! unity `ω` in a field, the transform of `x` is `X[i] = Σ x[j] ω^(ij)`, and
//! pointwise products of transforms invert to exact cyclic convolutions.
//!
//! The engine is radix-2 decimation-in-time Cooley–Tukey: a bit-reversal
//! permutation followed by `log2(n)` butterfly stages, all in place. It is
//! generic over any [`Field`] and works on any `&mut [F]`, including a
//! [`Sequence`].
//!
//! Two forward variants compute identical results with different loop
//! orders:
//!
//! - [`ntt`] walks (stage, twiddle position, block), forming each twiddle
//!   factor once per stage and reusing it across blocks.
//! - [`ntt_blocked`] walks (stage, block, twiddle position), rebuilding the
//!   twiddle factors per block so each block is visited with unit stride.
//!
//! The inverse transform [`intt_with`] takes either variant as a parameter.
//!
//! # Example
//!
//! ```
//! use inplace_ntt::ntt::{intt, ntt};
//! use inplace_ntt::{Sequence, Zp16, FFT_PRIME_U16, P16};
//!
//! let omega = FFT_PRIME_U16.root_of_unity::<P16>(8).unwrap();
//! let original: Sequence<Zp16> = Sequence::from_digits(&[1u16, 2, 3, 4], 8);
//!
//! let mut x = original.clone();
//! ntt(&mut x, omega, true).unwrap();
//! intt(&mut x, omega, true).unwrap();
//! assert_eq!(x, original);
//! ```

use tracing::{debug, trace};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::NttError;
use crate::structures::prime::PrimeParameters;
use crate::structures::sequence::Sequence;
use crate::structures::word::Word;
use crate::structures::zmod::{Modulus, Zmod};
use crate::utils::{bit_reverse, ceil_lg, is_2pow};

/// Check that `len` is a power of two and that `omega` has the matching
/// root order: `omega^(len/2) != 1` while `(omega^(len/2))^2 == 1`.
///
/// This is the only validation the transforms perform. Over a prime
/// modulus it pins the order of `omega` to exactly `len`; over a composite
/// modulus `omega^(len/2)` may be some other square root of one.
pub fn check_parameters<F: Field>(len: usize, omega: F) -> Result<(), NttError> {
    if !is_2pow(len) {
        debug!(len, "transform length is not a power of two");
        return Err(NttError::InvalidLength { len });
    }

    let half = omega.pow((len / 2) as u64);
    if half == F::ONE || half * half != F::ONE {
        debug!(len, "root of unity has wrong order");
        return Err(NttError::InvalidRootOrder { len });
    }
    Ok(())
}

/// In-place bit-reversal permutation.
///
/// With `t = ceil_lg(n)`, slot `k` is swapped with `bit_reverse(k, t)`
/// whenever that index is larger than `k`, so every pair is swapped once.
/// On power-of-two lengths this is an involution. On other lengths, partner
/// indices past the end are left alone.
pub fn bit_reverse_permutation<T>(x: &mut [T]) {
    let n = x.len();
    let t = ceil_lg(n);

    for k in 0..n {
        let j = bit_reverse(k, t);
        if j > k && j < n {
            x.swap(j, k);
        }
    }
}

/// Forward NTT in place, twiddle-major loop order.
///
/// `omega` must be a primitive `x.len()`-th root of unity. With
/// `check = true` the length and root are validated first; on error `x`
/// is untouched.
///
/// After the call `x[i]` holds the evaluation of `Σ x[j] X^j` at `omega^i`.
pub fn ntt<F: Field>(x: &mut [F], omega: F, check: bool) -> Result<(), NttError> {
    let n = x.len();
    let t = ceil_lg(n);
    if check {
        check_parameters(n, omega)?;
    }
    debug!(len = n, check, "forward transform, twiddle-major");

    bit_reverse_permutation(x);

    for q in 1..=t {
        let l = 1usize << q;
        let half = l / 2;
        let r = n / l;
        let omega_step = omega.pow(r as u64);
        trace!(stage = q, blocks = r, "butterfly stage");

        let mut omega_pow = F::ONE;
        for j in 0..half {
            if j > 0 {
                omega_pow = omega_pow * omega_step;
            }
            for k in 0..r {
                let lo = k * l + j;
                let tau = omega_pow * x[lo + half];
                x[lo + half] = x[lo] - tau;
                x[lo] = x[lo] + tau;
            }
        }
    }
    Ok(())
}

/// Forward NTT in place, block-major loop order.
///
/// Same contract and same output as [`ntt`]. Each block recomputes its
/// twiddle factors, trading a few multiplications for unit-stride access
/// within the block.
pub fn ntt_blocked<F: Field>(x: &mut [F], omega: F, check: bool) -> Result<(), NttError> {
    let n = x.len();
    let t = ceil_lg(n);
    if check {
        check_parameters(n, omega)?;
    }
    debug!(len = n, check, "forward transform, block-major");

    bit_reverse_permutation(x);

    for q in 1..=t {
        let l = 1usize << q;
        let half = l / 2;
        let r = n / l;
        trace!(stage = q, blocks = r, "butterfly stage");

        for block in x.chunks_exact_mut(l).take(r) {
            let omega_step = omega.pow(r as u64);
            let mut omega_pow = F::ONE;
            let (lo, hi) = block.split_at_mut(half);
            for (j, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                if j > 0 {
                    omega_pow = omega_pow * omega_step;
                }
                let tau = omega_pow * *b;
                *b = *a - tau;
                *a = *a + tau;
            }
        }
    }
    Ok(())
}

/// Inverse NTT in place, built on any forward variant.
///
/// Runs `forward` with `omega⁻¹` and scales every slot by `n⁻¹`. With
/// `check = true` the length and root are validated as in [`ntt`] before
/// either inverse is taken, so bad input reports the same error in both
/// directions; otherwise unchecked inverses are used.
///
/// ```
/// use inplace_ntt::ntt::{intt_with, ntt_blocked};
/// use inplace_ntt::{Ring, Zp32, FFT_PRIME_U32, P32};
///
/// let omega = FFT_PRIME_U32.root_of_unity::<P32>(4).unwrap();
/// let mut x = vec![Zp32::ONE; 4];
/// ntt_blocked(&mut x, omega, true).unwrap();
/// assert_eq!(x[0].value(), 4);
///
/// intt_with(ntt_blocked, &mut x, omega, true).unwrap();
/// assert_eq!(x, vec![Zp32::ONE; 4]);
/// ```
pub fn intt_with<F, T>(forward: T, x: &mut [F], omega: F, check: bool) -> Result<(), NttError>
where
    F: Field,
    T: Fn(&mut [F], F, bool) -> Result<(), NttError>,
{
    let n = x.len();
    let (omega_inv, n_inv) = if check {
        check_parameters(n, omega)?;
        (omega.try_inverse()?, F::from_u64(n as u64).try_inverse()?)
    } else {
        (
            omega.inverse_unchecked(),
            F::from_u64(n as u64).inverse_unchecked(),
        )
    };

    forward(x, omega_inv, check)?;

    for v in x.iter_mut() {
        *v = n_inv * *v;
    }
    Ok(())
}

/// Inverse of [`ntt`].
pub fn intt<F: Field>(x: &mut [F], omega: F, check: bool) -> Result<(), NttError> {
    intt_with(ntt, x, omega, check)
}

/// Inverse of [`ntt_blocked`].
pub fn intt_blocked<F: Field>(x: &mut [F], omega: F, check: bool) -> Result<(), NttError> {
    intt_with(ntt_blocked, x, omega, check)
}

/// Pointwise product `acc[i] *= other[i]`.
///
/// Fails with [`NttError::InvalidLength`] if the lengths differ.
pub fn pointwise_mul<F: Ring>(acc: &mut [F], other: &[F]) -> Result<(), NttError> {
    if acc.len() != other.len() {
        return Err(NttError::InvalidLength { len: other.len() });
    }
    for (a, &b) in acc.iter_mut().zip(other) {
        *a = *a * b;
    }
    Ok(())
}

/// Cyclic convolution of `a` and `b` through the transform domain.
///
/// Both inputs must have the same power-of-two length and `omega` must be a
/// primitive root of that order. The inputs are not modified.
pub fn cyclic_convolution<F: Field>(
    a: &[F],
    b: &[F],
    omega: F,
    check: bool,
) -> Result<Sequence<F>, NttError> {
    if a.len() != b.len() {
        return Err(NttError::InvalidLength { len: b.len() });
    }

    let mut fa = Sequence::from(a.to_vec());
    let mut fb = Sequence::from(b.to_vec());
    ntt(&mut fa, omega, check)?;
    ntt(&mut fb, omega, check)?;
    pointwise_mul(&mut fa, &fb)?;
    intt(&mut fa, omega, check)?;
    Ok(fa)
}

/// Ordinary (acyclic) convolution of two integer digit vectors.
///
/// Digits are lifted into `Zmod<M>`, zero-padded to the smallest power of
/// two holding all `a.len() + b.len() - 1` product terms, transformed with
/// the root derived from `params`, and transformed back. The result has
/// exactly that padded length; coefficients are exact whenever the true
/// convolution terms are below the modulus.
///
/// Fails with [`NttError::ModulusMismatch`] if `M` is not the prime of
/// `params`, or [`NttError::InvalidLength`] if the padded length exceeds
/// `2^n`.
///
/// # Example
///
/// ```
/// use inplace_ntt::ntt::convolve_digits;
/// use inplace_ntt::{FFT_PRIME_U16, P16};
///
/// // (3 + 2x)(1 + 4x) = 3 + 14x + 8x^2
/// let c = convolve_digits::<P16, u16>(&FFT_PRIME_U16, &[3, 2], &[1, 4]).unwrap();
/// assert_eq!(c.values(), vec![3, 14, 8, 0]);
/// ```
pub fn convolve_digits<M, D>(
    params: &PrimeParameters<M::Rep>,
    a: &[D],
    b: &[D],
) -> Result<Sequence<Zmod<M>>, NttError>
where
    M: Modulus,
    D: Copy + Into<Zmod<M>>,
{
    params.check_modulus::<M>()?;

    let terms = (a.len() + b.len()).saturating_sub(1).max(1);
    let len = terms
        .checked_next_power_of_two()
        .ok_or(NttError::InvalidLength { len: terms })?;
    let omega = params.root_of_unity::<M>(len)?;
    debug!(
        len,
        modulus = %M::VALUE.to_u128(),
        "digit convolution"
    );

    let mut fa = Sequence::from_digits(a, len);
    let mut fb = Sequence::from_digits(b, len);
    ntt(&mut fa, omega, false)?;
    ntt(&mut fb, omega, false)?;
    pointwise_mul(&mut fa, &fb)?;
    intt(&mut fa, omega, false)?;
    Ok(fa)
}
