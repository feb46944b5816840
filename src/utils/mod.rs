/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Shared utilities for the scattering kernels
//!
//! Small helpers, unit constants and the removable-singularity-safe special
//! functions that every geometry kernel is built from.

pub mod constants;
pub mod errors;
pub mod special;

pub use errors::{Result, UtilsError};
pub use special::{bessel_2j1c, bessel_j1, langevin, langevin_over_x, sinc, sph_j1c};

/// x²
#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}

/// x³
#[inline]
pub fn cube(x: f64) -> f64 {
    x * x * x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_powers() {
        assert_relative_eq!(square(-3.0), 9.0, epsilon = 1e-15);
        assert_relative_eq!(cube(-3.0), -27.0, epsilon = 1e-15);
    }
}
