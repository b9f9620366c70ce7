//! Lagrange Interpolation
//!
//! Fits the unique polynomial through a set of sample points and checks
//! the fit.
//!
//! Run with: cargo run --example interpolation

use polyr::{approx_eq, InterpolationError, Polynomial};

fn main() -> Result<(), InterpolationError> {
    println!("=== Lagrange Interpolation ===\n");

    // Samples of f(x) = x^3 - 2x + 1
    let f = Polynomial::new(vec![1.0, -2.0, 0.0, 1.0]);
    let points: Vec<(f64, f64)> = [-2.0, -0.5, 1.0, 3.0]
        .iter()
        .map(|&x| (x, f.eval(x)))
        .collect();

    println!("Points:");
    for (x, y) in &points {
        println!("  ({}, {})", x, y);
    }

    let p = Polynomial::interpolate(&points)?;
    println!("\nInterpolating polynomial: {:.6}", p);
    println!("Matches f within 1e-9? {}", p.approx_eq(&f, 1e-9));

    println!("\nVerification at new points:");
    for x in [0.0, 2.0, 10.0] {
        let (got, want) = (p.eval(x), f.eval(x));
        println!("  p({}) = {:.6}, f({}) = {} (close: {})", x, got, x, want, approx_eq(got, want, 1e-9));
    }

    println!("\nDuplicate nodes are rejected:");
    match Polynomial::interpolate(&[(1.0, 2.0), (1.0, 3.0)]) {
        Ok(p) => println!("  unexpected fit: {}", p),
        Err(e) => println!("  error: {}", e),
    }

    Ok(())
}
