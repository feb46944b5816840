/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Core-shell sphere filled with a single centered cylinder
//!
//! A spherical core-shell particle whose core carries a coaxial circular
//! cylinder. The composite amplitude telescopes the cylinder contrast
//! against the core and the spherical shells against each other and the
//! solvent, then averages over the cylinder orientation.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::quadrature::{SymmetricOrientation, GAUSS_76};
use crate::utils::constants::{M_4PI_3, SLD_SQUARED_TO_CM};
use crate::utils::cube;
use crate::utils::special::{bessel_2j1c, sinc, sph_j1c};

/// Core-shell sphere with embedded cylinder parameters
///
/// SLDs in 1e-6 Å⁻², lengths in Å.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreShellSphereCylinder {
    /// Sphere core scattering length density
    pub sld_core: f64,
    /// Sphere shell scattering length density
    pub sld_shell: f64,
    /// Cylinder scattering length density
    pub sld_cyl: f64,
    /// Solvent scattering length density
    pub sld_solvent: f64,
    /// Sphere core radius
    pub sphere_core_radius: f64,
    /// Sphere shell thickness
    pub sphere_shell_thickness: f64,
    /// Cylinder radius
    pub cyl_radius: f64,
    /// Cylinder length
    pub cyl_length: f64,
}

/// Cylinder form amplitude for axis components (sn, cn) of q̂, normalized
/// so that the q -> 0 limit is 1
pub(crate) fn cylinder_amplitude(q: f64, sn: f64, cn: f64, radius: f64, length: f64) -> f64 {
    bessel_2j1c(q * radius * sn) * sinc(q * 0.5 * length * cn)
}

impl CoreShellSphereCylinder {
    /// Total particle volume in Å³
    pub fn form_volume(&self) -> f64 {
        M_4PI_3 * cube(self.sphere_core_radius + self.sphere_shell_thickness)
    }

    /// Composite amplitude at polar components (sn, cn) of q̂ relative to
    /// the cylinder axis
    fn fq(&self, q: f64, sn: f64, cn: f64) -> f64 {
        let radius_sphere = self.sphere_core_radius + self.sphere_shell_thickness;
        let volume_cylinder = PI * self.cyl_radius * self.cyl_radius * self.cyl_length;

        (self.sld_cyl - self.sld_core)
            * volume_cylinder
            * cylinder_amplitude(q, sn, cn, self.cyl_radius, self.cyl_length)
            + (self.sld_core - self.sld_shell)
                * (M_4PI_3 * cube(self.sphere_core_radius))
                * sph_j1c(q * self.sphere_core_radius)
            + (self.sld_shell - self.sld_solvent)
                * (M_4PI_3 * cube(radius_sphere))
                * sph_j1c(q * radius_sphere)
    }

    /// Orientation-averaged intensity kernel at `q` (Å⁻¹), in
    /// 1e-4 Å⁶ cm⁻¹ units
    pub fn iq(&self, q: f64) -> f64 {
        let integral = GAUSS_76.integrate(0.0, FRAC_PI_2, |alpha| {
            let (sn, cn) = alpha.sin_cos();
            let f = self.fq(q, sn, cn);
            f * f * sn
        });
        SLD_SQUARED_TO_CM * integral
    }

    /// Fixed-orientation intensity kernel at detector point (qx, qy) for
    /// view angles `theta`, `phi` in degrees
    pub fn iqxy(&self, qx: f64, qy: f64, theta: f64, phi: f64) -> f64 {
        let o = SymmetricOrientation::from_angles(qx, qy, theta, phi);
        let f = self.fq(o.q, o.sin_alpha, o.cos_alpha);
        SLD_SQUARED_TO_CM * f * f
    }
}
