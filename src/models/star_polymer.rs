/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Benoit star polymer with Gaussian arms
//!
//! Dimensionless form factor for a star of `arms` Gaussian chains,
//! parameterized by the radius of gyration of the whole star. The kernel is
//! written against expm1 so the two exponential terms share one evaluation.

use serde::{Deserialize, Serialize};

use crate::utils::square;

/// Star polymer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarPolymer {
    /// Radius of gyration of the star in Å
    pub rg: f64,
    /// Number of arms
    pub arms: f64,
}

impl StarPolymer {
    /// The model is dimensionless, normalization volume is unity
    pub fn form_volume(&self) -> f64 {
        1.0
    }

    /// Form factor at `q` (Å⁻¹), with I(0) = 1
    pub fn iq(&self, q: f64) -> f64 {
        let u_2 = square(self.rg * q);
        let v = u_2 * self.arms / (3.0 * self.arms - 2.0);
        if v == 0.0 {
            return 1.0;
        }

        let term1 = (-v).exp_m1();
        let term2 = ((self.arms - 1.0) / 2.0) * square(term1);

        2.0 * (v + term1 + term2) / (self.arms * v * v)
    }
}
