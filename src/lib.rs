#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod algebra;
pub mod structures;
pub mod utils;

pub use algebra::ring::Ring;

pub use structures::poly::{InterpolationError, Polynomial};
pub use utils::approx_eq;
