/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Five-layer core-shell bicelle
//!
//! A disc with a methyl core slab, methylene slabs on either side,
//! phospholipid head-group faces and a rim shell. The amplitude telescopes
//! over four contrast levels, each a cylinder form factor with its own
//! radius, half-height and contrast.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::quadrature::{SymmetricOrientation, GAUSS_76};
use crate::utils::constants::SLD_SQUARED_TO_CM;
use crate::utils::special::{bessel_2j1c, sinc};

/// Five-layer bicelle parameters
///
/// SLDs in 1e-6 Å⁻², lengths in Å. `methylene_length` is per side, the
/// methyl slab length is total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiveLayerBicelle {
    /// Core radius, not counting head groups
    pub radius: f64,
    /// Rim shell thickness
    pub thick_rim: f64,
    /// Face thickness
    pub thick_face: f64,
    /// Methylene slab length on one side
    pub methylene_length: f64,
    /// Total methyl core length
    pub methyl_length: f64,
    /// Methylene scattering length density
    pub sld_methylene: f64,
    /// Methyl core scattering length density
    pub sld_methyl: f64,
    /// Face scattering length density
    pub sld_face: f64,
    /// Rim scattering length density
    pub sld_rim: f64,
    /// Solvent scattering length density
    pub sld_solvent: f64,
}

impl FiveLayerBicelle {
    /// Total particle volume in Å³
    pub fn form_volume(&self) -> f64 {
        let r = self.radius + self.thick_rim;
        PI * r * r * (2.0 * self.methylene_length + self.methyl_length + 2.0 * self.thick_face)
    }

    /// Squared amplitude times sin(alpha) at polar angle alpha off the disc axis
    fn kernel(&self, q: f64, sin_alpha: f64, cos_alpha: f64) -> f64 {
        let rad = self.radius;
        let half_core = self.methylene_length + 0.5 * self.methyl_length;

        let dr1 = self.sld_methylene - self.sld_face;
        let dr2 = self.sld_rim - self.sld_solvent;
        let dr3 = self.sld_face - self.sld_rim;
        let dr4 = self.sld_methyl - self.sld_methylene;

        let vol1 = PI * rad * rad * 2.0 * half_core;
        let vol2 = PI * (rad + self.thick_rim) * (rad + self.thick_rim)
            * 2.0 * (half_core + self.thick_face);
        let vol3 = PI * rad * rad * 2.0 * (half_core + self.thick_face);
        let vol4 = PI * rad * rad * self.methyl_length;

        let be1 = bessel_2j1c(q * rad * sin_alpha);
        let be2 = bessel_2j1c(q * (rad + self.thick_rim) * sin_alpha);
        let si1 = sinc(q * half_core * cos_alpha);
        let si2 = sinc(q * (half_core + self.thick_face) * cos_alpha);
        let si3 = sinc(q * 0.5 * self.methyl_length * cos_alpha);

        let t = vol1 * dr1 * si1 * be1
            + vol2 * dr2 * si2 * be2
            + vol3 * dr3 * si2 * be1
            + vol4 * dr4 * si3 * be1;

        t * t * sin_alpha
    }

    /// Orientation-averaged intensity kernel at `q` (Å⁻¹), in
    /// 1e-4 Å⁶ cm⁻¹ units
    pub fn iq(&self, q: f64) -> f64 {
        let integral = GAUSS_76.integrate(0.0, FRAC_PI_2, |alpha| {
            let (sin_alpha, cos_alpha) = alpha.sin_cos();
            self.kernel(q, sin_alpha, cos_alpha)
        });
        SLD_SQUARED_TO_CM * integral
    }

    /// Fixed-orientation intensity kernel at detector point (qx, qy) for
    /// view angles `theta`, `phi` in degrees
    pub fn iqxy(&self, qx: f64, qy: f64, theta: f64, phi: f64) -> f64 {
        let o = SymmetricOrientation::from_angles(qx, qy, theta, phi);
        SLD_SQUARED_TO_CM * self.kernel(o.q, o.sin_alpha, o.cos_alpha) / o.sin_alpha.abs()
    }
}
