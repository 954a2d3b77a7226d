//! Multiply two digit vectors in each table field and print every stage.
//!
//! Run with: cargo run --example digit_convolution

use inplace_ntt::ntt::{intt, intt_blocked, ntt, ntt_blocked, pointwise_mul};
use inplace_ntt::{
    Modulus, NttError, PrimeParameters, Sequence, Zmod, FFT_PRIME_U16, FFT_PRIME_U32,
    FFT_PRIME_U64, P16, P32, P64,
};

fn run<M: Modulus>(
    label: &str,
    params: &PrimeParameters<M::Rep>,
    in1: &[M::Rep],
    in2: &[M::Rep],
    len: usize,
    blocked: bool,
) -> Result<(), NttError>
where
    M::Rep: Into<Zmod<M>>,
{
    params.verify::<M>()?;
    let omega = params.root_of_unity::<M>(len)?;

    println!("== {} (p = {}, n = {}, len = {}) ==", label, params.p, params.n, len);
    println!("omega = {}", omega);

    let mut a: Sequence<Zmod<M>> = Sequence::from_digits(in1, len);
    let mut b: Sequence<Zmod<M>> = Sequence::from_digits(in2, len);
    println!("in1   = {:?}", a);
    println!("in2   = {:?}", b);

    if blocked {
        ntt_blocked(&mut a, omega, true)?;
        ntt_blocked(&mut b, omega, true)?;
    } else {
        ntt(&mut a, omega, true)?;
        ntt(&mut b, omega, true)?;
    }
    println!("fft1  = {:?}", a);
    println!("fft2  = {:?}", b);

    pointwise_mul(&mut a, &b)?;
    if blocked {
        intt_blocked(&mut a, omega, true)?;
    } else {
        intt(&mut a, omega, true)?;
    }
    println!("out   = {:?}", a);
    println!();
    Ok(())
}

fn main() -> Result<(), NttError> {
    run::<P16>(
        "16-bit",
        &FFT_PRIME_U16,
        &[38, 0, 44, 87, 6, 45, 22, 93],
        &[80, 18, 62, 90, 17, 96, 27, 97],
        16,
        false,
    )?;

    run::<P32>(
        "32-bit",
        &FFT_PRIME_U32,
        &[11400, 28374, 23152, 9576, 29511, 20787, 13067, 14015],
        &[30268, 20788, 8033, 15446, 26275, 11619, 2494, 7016],
        16,
        true,
    )?;

    let in1: Vec<u64> = (0..32u64).map(|i| (i * 104729 + 7) % 1_000_000_000).collect();
    let in2: Vec<u64> = (0..32u64).map(|i| (i * 7919 + 3) % 1_000_000_000).collect();
    run::<P64>("64-bit", &FFT_PRIME_U64, &in1, &in2, 64, false)?;

    Ok(())
}
