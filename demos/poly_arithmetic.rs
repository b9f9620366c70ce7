//! Polynomial Arithmetic
//!
//! This example demonstrates `Polynomial` operations including:
//! - Basic arithmetic (add, sub, mul, scalar mul)
//! - Canonical form and equality
//! - Evaluation and powers
//!
//! Run with: cargo run --example poly_arithmetic

use polyr::{Polynomial, Ring};

fn main() {
    println!("=== Polynomial Arithmetic over the reals ===\n");

    basic_operations();
    canonical_form();
    evaluation();
}

/// Demonstrate basic polynomial operations
fn basic_operations() {
    println!("--- Basic Operations ---\n");

    // p(x) = 3x^2 + 2x + 1, q(x) = 4x^3 + 5
    let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
    let q = Polynomial::new(vec![5.0, 0.0, 0.0, 4.0]);

    println!("p(x) = {}", p);
    println!("q(x) = {}", q);
    println!("degree(p) = {:?}", p.degree());
    println!("degree(q) = {:?}", q.degree());
    println!();

    println!("p + q = {}", &p + &q);
    println!("p - q = {}", &p - &q);
    println!("p * q = {}", &p * &q);
    println!("2.5 * p = {}", &p * 2.5);
    println!("-p = {}", -&p);

    println!("\nSpecial polynomials:");
    println!("  zero = {}", Polynomial::zero());
    println!("  x = {}", Polynomial::x());
    println!("  constant(5) = {}", Polynomial::constant(5.0));
    println!("  monomial(3, 2) = {}", Polynomial::monomial(3.0, 2));
    println!("  from_roots(1, -1) = {}", Polynomial::from_roots(&[1.0, -1.0]));

    println!();
}

/// Show that results are always canonical
fn canonical_form() {
    println!("--- Canonical Form ---\n");

    let direct = Polynomial::new(vec![1.0, 0.0, 0.0]);
    let derived = Polynomial::new(vec![1.0, 2.0, 3.0]) - Polynomial::new(vec![0.0, 2.0, 3.0]);

    println!("new([1, 0, 0])          = {:?}", direct);
    println!("(1 + 2x + 3x^2) - (2x + 3x^2) = {:?}", derived);
    println!("Equal? {}", direct == derived);

    let p = Polynomial::new(vec![1.0, 2.0]);
    println!("p - p = {:?} renders as \"{}\"", &p - &p, &p - &p);
    println!("p * 0 = {:?}", &p * &Polynomial::zero());

    println!();
}

/// Demonstrate evaluation
fn evaluation() {
    println!("--- Evaluation ---\n");

    // p(x) = (x + 1)^3
    let p = Polynomial::new(vec![1.0, 1.0]).pow(3);
    println!("p(x) = (x + 1)^3 = {}", p);

    for x in [-1.0, 0.0, 0.5, 2.0] {
        println!("  p({}) = {}", x, p.eval(x));
    }

    println!("\nRendered with 3 decimals: {:.3}", p * (1.0 / 3.0));
}
