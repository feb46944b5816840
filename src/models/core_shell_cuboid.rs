/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Orientationally averaged form factor for a monodisperse core-shell cuboid
//!
//! A cubic core of edge `length` wrapped by a uniform shell of thickness
//! `thick_rim`. The 1-D intensity averages the squared amplitude over the
//! octant of orientations, the 2-D intensity evaluates a single orientation
//! fixed by the view angles.
//!
//! Mittelbach and Porod, Acta Physica Austriaca 14 (1961) 185-211.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::quadrature::{AsymmetricOrientation, GAUSS_76};
use crate::utils::constants::SLD_SQUARED_TO_CM;
use crate::utils::special::sinc;

/// Core-shell cuboid model parameters
///
/// SLDs in 1e-6 Å⁻², lengths in Å.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreShellCuboid {
    /// Core scattering length density
    pub sld_core: f64,
    /// Shell scattering length density
    pub sld_shell: f64,
    /// Solvent scattering length density
    pub sld_solvent: f64,
    /// Edge length of the cubic core
    pub length: f64,
    /// Shell thickness
    pub thick_rim: f64,
}

impl CoreShellCuboid {
    /// Total particle volume in Å³
    pub fn form_volume(&self) -> f64 {
        let edge = self.length + 2.0 * self.thick_rim;
        edge * edge * edge
    }

    /// Squared amplitude for the direction cosines (ca, cb, cc) of q̂
    fn fq(&self, q: f64, cos_a: f64, cos_b: f64, cos_c: f64) -> f64 {
        let l2 = 0.5 * self.length;
        let l2d = 0.5 * self.length + self.thick_rim;
        let muc = q * l2;
        let mucs = q * l2d;

        let drho_core_shell = self.sld_core - self.sld_shell;
        let drho_shell_solvent = self.sld_shell - self.sld_solvent;

        let sic = |arg: f64| 2.0 * l2 * sinc(muc * arg);
        let sics = |arg: f64| 2.0 * l2d * sinc(mucs * arg);

        let f = drho_core_shell * sic(cos_a) * sic(cos_b) * sic(cos_c)
            + drho_shell_solvent * sics(cos_a) * sics(cos_b) * sics(cos_c);
        f * f
    }

    /// Orientation-averaged intensity kernel at scattering vector `q` (Å⁻¹)
    ///
    /// Returns the unnormalized kernel in 1e-4 Å⁶ cm⁻¹ units; divide by
    /// [`form_volume`](Self::form_volume) for intensity per unit volume.
    pub fn iq(&self, q: f64) -> f64 {
        let nodes = GAUSS_76.nodes();
        let weights = GAUSS_76.weights();

        // outer average over cos(theta) on [0, 1]
        let mut outer_total = 0.0;
        for (zi, wi) in nodes.iter().zip(weights) {
            let cos_theta = 0.5 * (zi + 1.0);
            let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

            // inner average over phi on [0, pi/2]
            let mut inner_total = 0.0;
            for (zj, wj) in nodes.iter().zip(weights) {
                let phi = FRAC_PI_2 * 0.5 * (zj + 1.0);
                let (sin_phi, cos_phi) = phi.sin_cos();
                inner_total +=
                    wj * self.fq(q, sin_theta * cos_phi, sin_theta * sin_phi, cos_theta);
            }
            // the weights sum to 2 over [-1, 1]
            inner_total *= 0.5;

            outer_total += wi * inner_total;
        }
        outer_total *= 0.5;

        SLD_SQUARED_TO_CM * outer_total
    }

    /// Fixed-orientation intensity kernel at detector point (qx, qy) for the
    /// view angles `theta`, `phi`, `psi` in degrees
    pub fn iqxy(&self, qx: f64, qy: f64, theta: f64, phi: f64, psi: f64) -> f64 {
        let o = AsymmetricOrientation::from_angles(qx, qy, theta, phi, psi);
        SLD_SQUARED_TO_CM * self.fq(o.q, o.cos_a, o.cos_b, o.cos_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> CoreShellCuboid {
        CoreShellCuboid {
            sld_core: 1.0,
            sld_shell: 2.0,
            sld_solvent: 6.34,
            length: 700.0,
            thick_rim: 150.0,
        }
    }

    #[test]
    fn test_form_volume() {
        let m = reference();
        assert_relative_eq!(m.form_volume(), 1000.0_f64.powi(3), epsilon = 1e-3);
    }

    #[test]
    fn test_iq_regression() {
        let m = reference();
        let p = m.iq(0.2) / m.form_volume();
        assert_relative_eq!(p, 0.020734494011496, max_relative = 1e-9);
    }

    #[test]
    fn test_iqxy_regression() {
        let m = reference();
        let (qx, qy) = (0.2 * 2.5_f64.cos(), 0.2 * 2.5_f64.sin());
        let p = m.iqxy(qx, qy, 10.0, 10.0, 0.0) / m.form_volume();
        assert_relative_eq!(p, 7.14255461637677e-5, max_relative = 1e-9);
    }

    #[test]
    fn test_low_q_limit_matches_contrast_volume() {
        // F(q->0) -> sum of contrast * volume over the two levels
        let m = reference();
        let v_core = m.length.powi(3);
        let v_total = m.form_volume();
        let f0 = (m.sld_core - m.sld_shell) * v_core + (m.sld_shell - m.sld_solvent) * v_total;
        assert_relative_eq!(m.iq(1e-6), 1e-4 * f0 * f0, max_relative = 1e-6);
    }

    #[test]
    fn test_iq_nonnegative() {
        let m = reference();
        for i in 1..50 {
            let q = i as f64 * 0.01;
            assert!(m.iq(q) >= 0.0, "negative intensity at q={q}");
        }
    }
}
