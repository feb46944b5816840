/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Nanodisc with a solvated polymer belt and lipid head groups
//!
//! A lipid tail bilayer disc capped by head-group faces and wrapped by a
//! polymer belt. Belt and head SLDs are mixed with the solvent SLD by their
//! fractional solvation before the three-level telescoping amplitude is
//! formed.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::quadrature::{SymmetricOrientation, GAUSS_76};
use crate::utils::constants::SLD_SQUARED_TO_CM;
use crate::utils::special::{bessel_2j1c, sinc};
use crate::utils::square;

/// Nanodisc parameters
///
/// SLDs in 1e-6 Å⁻², lengths in Å, solvation fractions in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nanodisc {
    /// Radius of the lipid core
    pub lipid_radius: f64,
    /// Total thickness of the lipid tail bilayer
    pub tails_thick: f64,
    /// Thickness of the polymer belt
    pub belt_thick: f64,
    /// Thickness of the lipid head layer on each face
    pub heads_thick: f64,
    /// Lipid tail scattering length density
    pub tails_sld: f64,
    /// Dry polymer belt scattering length density
    pub belt_sld: f64,
    /// Fractional solvation of the belt
    pub belt_solv: f64,
    /// Dry lipid head scattering length density
    pub heads_sld: f64,
    /// Fractional solvation of the heads
    pub heads_solv: f64,
    /// Solvent scattering length density
    pub solvent_sld: f64,
}

impl Nanodisc {
    /// Total particle volume in Å³
    pub fn form_volume(&self) -> f64 {
        PI * square(self.lipid_radius + self.belt_thick)
            * (self.tails_thick + 2.0 * self.heads_thick)
    }

    /// Amplitude for equatorial and axial components (qab, qc) of q
    fn fq(&self, qab: f64, qc: f64) -> f64 {
        let halflength = 0.5 * self.tails_thick;
        let heads_sld_hy =
            self.heads_solv * self.solvent_sld + (1.0 - self.heads_solv) * self.heads_sld;
        let belt_sld_hy =
            self.belt_solv * self.solvent_sld + (1.0 - self.belt_solv) * self.belt_sld;

        let dr1 = self.tails_sld - heads_sld_hy;
        let dr2 = belt_sld_hy - self.solvent_sld;
        let dr3 = heads_sld_hy - belt_sld_hy;
        let vol1 = PI * square(self.lipid_radius) * 2.0 * halflength;
        let vol2 = PI * square(self.lipid_radius + self.belt_thick)
            * 2.0 * (halflength + self.heads_thick);
        let vol3 = PI * square(self.lipid_radius) * 2.0 * (halflength + self.heads_thick);

        let be1 = bessel_2j1c(self.lipid_radius * qab);
        let be2 = bessel_2j1c((self.lipid_radius + self.belt_thick) * qab);
        let si1 = sinc(halflength * qc);
        let si2 = sinc((halflength + self.heads_thick) * qc);

        vol1 * dr1 * si1 * be1 + vol2 * dr2 * si2 * be2 + vol3 * dr3 * si2 * be1
    }

    /// Orientation-averaged intensity kernel at `q` (Å⁻¹), in
    /// 1e-4 Å⁶ cm⁻¹ units
    pub fn iq(&self, q: f64) -> f64 {
        let integral = GAUSS_76.integrate(0.0, FRAC_PI_2, |theta| {
            let (sin_theta, cos_theta) = theta.sin_cos();
            let fq = self.fq(q * sin_theta, q * cos_theta);
            fq * fq * sin_theta
        });
        SLD_SQUARED_TO_CM * integral
    }

    /// Fixed-orientation intensity kernel for the resolved components
    /// (qab, qc) of the scattering vector
    pub fn iqac(&self, qab: f64, qc: f64) -> f64 {
        let fq = self.fq(qab, qc);
        SLD_SQUARED_TO_CM * fq * fq
    }

    /// Fixed-orientation intensity kernel at detector point (qx, qy) for
    /// view angles `theta`, `phi` in degrees
    pub fn iqxy(&self, qx: f64, qy: f64, theta: f64, phi: f64) -> f64 {
        let o = SymmetricOrientation::from_angles(qx, qy, theta, phi);
        let (qc, qab) = o.resolved();
        self.iqac(qab, qc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> Nanodisc {
        Nanodisc {
            lipid_radius: 80.0,
            tails_thick: 50.0,
            belt_thick: 10.0,
            heads_thick: 10.0,
            tails_sld: 1.0,
            belt_sld: 4.0,
            belt_solv: 0.0,
            heads_sld: 4.0,
            heads_solv: 0.0,
            solvent_sld: 1.0,
        }
    }

    #[test]
    fn test_form_volume() {
        let m = reference();
        assert_relative_eq!(m.form_volume(), PI * 8100.0 * 70.0, max_relative = 1e-12);
    }

    #[test]
    fn test_low_q_limit_matches_contrast_volume() {
        let m = reference();
        let f0 = m.fq(0.0, 0.0);
        assert_relative_eq!(m.iq(1e-7), 1e-4 * f0 * f0, max_relative = 1e-6);
    }

    #[test]
    fn test_full_solvation_erases_belt_and_heads() {
        // fully solvated belt and heads leave only the tail contrast
        let mut m = reference();
        m.belt_solv = 1.0;
        m.heads_solv = 1.0;
        let halflength = 0.5 * m.tails_thick;
        let vol1 = PI * square(m.lipid_radius) * 2.0 * halflength;
        let f0 = (m.tails_sld - m.solvent_sld) * vol1;
        assert_relative_eq!(m.fq(0.0, 0.0), f0, max_relative = 1e-12);
    }

    #[test]
    fn test_iqac_matches_iqxy_on_axis() {
        // theta = 0 puts the disc axis along the beam, q entirely equatorial
        let m = reference();
        let q = 0.03;
        assert_relative_eq!(
            m.iqxy(q, 0.0, 0.0, 0.0),
            m.iqac(q, 0.0),
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_iq_nonnegative() {
        let m = reference();
        for i in 1..40 {
            assert!(m.iq(i as f64 * 0.005) >= 0.0);
        }
    }
}
