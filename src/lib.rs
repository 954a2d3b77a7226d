//! Exact in-place number theoretic transforms.
//!
//! Sequences of residues modulo an FFT-friendly prime are transformed in
//! place by radix-2 Cooley–Tukey butterflies. Forward transform, pointwise
//! product and inverse transform give exact cyclic convolutions, which is
//! the core of big-integer and polynomial multiplication.
//!
//! ```
//! use inplace_ntt::ntt::convolve_digits;
//! use inplace_ntt::{FFT_PRIME_U32, P32};
//!
//! // 12 * 34 as base-10 digit vectors, least significant first.
//! let c = convolve_digits::<P32, u32>(&FFT_PRIME_U32, &[2, 1], &[4, 3]).unwrap();
//! assert_eq!(c.values(), vec![8, 10, 3, 0]);
//! ```

pub mod algebra;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::field::Field;
pub use algebra::ring::Ring;

pub use error::NttError;
pub use structures::ntt;
pub use structures::prime::{
    FftWord, PrimeParameters, Zp16, Zp32, Zp64, FFT_PRIME_U16, FFT_PRIME_U32, FFT_PRIME_U64, P16,
    P32, P64,
};
pub use structures::sequence::Sequence;
pub use structures::word::Word;
pub use structures::zmod::{Modulus, Zmod};
pub use utils::{bit_reverse, ceil_lg, is_2pow};
