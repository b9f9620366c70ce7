//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use polyr::Polynomial;

#[test]
fn poly_roundtrip() {
    // 3 + 2x + x^2
    let p = Polynomial::new(vec![3.0, 2.0, 1.0]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[3.0,2.0,1.0]");
    let q: Polynomial = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_zero_roundtrip() {
    let p = Polynomial::zero();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[]");
    let q: Polynomial = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn deserialize_canonicalizes() {
    let p: Polynomial = serde_json::from_str("[1.5, 0, 0]").unwrap();
    assert_eq!(p.coefficients(), &[1.5]);

    let z: Polynomial = serde_json::from_str("[0.0, 0.0]").unwrap();
    assert!(z.is_zero());
}

#[test]
fn deserialize_rejects_non_numbers() {
    let result: Result<Polynomial, _> = serde_json::from_str(r#"[1, "x"]"#);
    assert!(result.is_err());
}
