/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Core-double-shell sphere filled with many cylinders in the core
//!
//! The cylinders share one orientation per particle and sit at random
//! positions inside a centering sphere of radius `cyl_avgsph_radius`, which
//! enters the amplitude as an extra spherical smearing factor. Their amount
//! is set by the relative core volume fraction `volfract_cyl`.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::models::core_shell_sphere_cylinder::cylinder_amplitude;
use crate::quadrature::{SymmetricOrientation, GAUSS_76};
use crate::utils::constants::{M_4PI_3, SLD_SQUARED_TO_CM};
use crate::utils::cube;
use crate::utils::special::sph_j1c;

/// Core-double-shell sphere with embedded cylinders parameters
///
/// SLDs in 1e-6 Å⁻², lengths in Å.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreDoubleShellSphereCylinders {
    /// Relative volume fraction of cylinders in the core
    pub volfract_cyl: f64,
    /// Sphere core scattering length density
    pub sld_core: f64,
    /// Inner shell scattering length density
    pub sld_shell: f64,
    /// Outer shell scattering length density
    pub sld_shell_2: f64,
    /// Cylinder scattering length density
    pub sld_cyl: f64,
    /// Solvent scattering length density
    pub sld_solvent: f64,
    /// Sphere core radius
    pub sphere_core_radius: f64,
    /// Inner shell thickness
    pub sphere_shell_thickness: f64,
    /// Outer shell thickness
    pub sphere_shell_thickness_2: f64,
    /// Cylinder radius
    pub cyl_radius: f64,
    /// Cylinder length
    pub cyl_length: f64,
    /// Radius of the centering sphere for cylinder positions
    pub cyl_avgsph_radius: f64,
}

impl CoreDoubleShellSphereCylinders {
    /// Total particle volume in Å³
    pub fn form_volume(&self) -> f64 {
        M_4PI_3
            * cube(
                self.sphere_core_radius
                    + self.sphere_shell_thickness
                    + self.sphere_shell_thickness_2,
            )
    }

    fn fq(&self, q: f64, sn: f64, cn: f64) -> f64 {
        let r_inner = self.sphere_core_radius + self.sphere_shell_thickness;
        let r_outer = r_inner + self.sphere_shell_thickness_2;
        let v_core = M_4PI_3 * cube(self.sphere_core_radius);

        (self.sld_shell_2 - self.sld_solvent) * (M_4PI_3 * cube(r_outer)) * sph_j1c(q * r_outer)
            + (self.sld_shell - self.sld_shell_2)
                * (M_4PI_3 * cube(r_inner))
                * sph_j1c(q * r_inner)
            + (self.sld_core - self.sld_shell) * v_core * sph_j1c(q * self.sphere_core_radius)
            + (self.sld_cyl - self.sld_core)
                * sph_j1c(q * self.cyl_avgsph_radius)
                * self.volfract_cyl
                * v_core
                * cylinder_amplitude(q, sn, cn, self.cyl_radius, self.cyl_length)
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
