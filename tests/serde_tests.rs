//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use inplace_ntt::ntt::ntt;
use inplace_ntt::{PrimeParameters, Sequence, Zp16, Zp64, FFT_PRIME_U16, FFT_PRIME_U64, P16};

#[test]
fn zmod_roundtrip() {
    let a = Zp16::new(40000);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "40000");
    let b: Zp16 = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zmod_deserialize_reduces() {
    let a: Zp16 = serde_json::from_str("40962").unwrap();
    assert_eq!(a.value(), 1);
}

#[test]
fn zmod_wrong_width_fails() {
    // Does not fit in the 16-bit representation.
    let result: Result<Zp16, _> = serde_json::from_str("70000");
    assert!(result.is_err());
}

#[test]
fn zmod_64bit_roundtrip() {
    let a = Zp64::new(4179340454199820288);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "4179340454199820288");
    let b: Zp64 = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sequence_roundtrip() {
    let s: Sequence<Zp16> = Sequence::from_digits(&[3u16, 2, 1], 4);
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, "[3,2,1,0]");
    let t: Sequence<Zp16> = serde_json::from_str(&json).unwrap();
    assert_eq!(s, t);
}

#[test]
fn sequence_empty_roundtrip() {
    let s = Sequence::<Zp16>::zeroed(0);
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, "[]");
    let t: Sequence<Zp16> = serde_json::from_str(&json).unwrap();
    assert_eq!(s, t);
}

#[test]
fn transformed_sequence_survives_roundtrip() {
    let omega = FFT_PRIME_U16.root_of_unity::<P16>(8).unwrap();
    let mut s: Sequence<Zp16> = Sequence::from_digits(&[1u16, 2, 3, 4, 5], 8);
    ntt(&mut s, omega, true).unwrap();

    let json = serde_json::to_string(&s).unwrap();
    let t: Sequence<Zp16> = serde_json::from_str(&json).unwrap();
    assert_eq!(s, t);
}

#[test]
fn prime_parameters_roundtrip() {
    let json = serde_json::to_string(&FFT_PRIME_U16).unwrap();
    assert_eq!(
        json,
        r#"{"n":13,"k":5,"p":40961,"g":12,"base":1000000000}"#
    );
    let params: PrimeParameters<u16> = serde_json::from_str(&json).unwrap();
    assert_eq!(params, FFT_PRIME_U16);
}

#[test]
fn prime_parameters_preserve_64bit_prime() {
    let json = serde_json::to_string(&FFT_PRIME_U64).unwrap();
    assert!(json.contains("4179340454199820289"));
    let params: PrimeParameters<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(params, FFT_PRIME_U64);
}
