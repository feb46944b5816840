/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Specular neutron reflectivity of a slab stack on a substrate
//!
//! Parratt recursion from the substrate up to the capping medium, with
//! Nevot-Croce roughness damping on every Fresnel coefficient. Each medium
//! carries a z wavevector k = sqrt(k0^2 - 4 pi rho) that goes imaginary
//! below its critical edge, so the recursion runs in Complex64 and the
//! returned reflectivity is |r0|^2.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::square;

/// One slab of the stack: SLD in 1e-6/Å², thickness and the roughness of
/// its top interface in Å
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slab {
    pub sld: f64,
    pub thickness: f64,
    pub roughness: f64,
}

/// Semi-infinite substrate: SLD in 1e-6/Å² and top-interface roughness in Å
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    pub sld: f64,
    pub roughness: f64,
}

/// Nevot-Croce damped Fresnel coefficient of the interface between media
/// with z wavevectors `k1` (above) and `k2` (below)
fn fresnel(k1: Complex64, k2: Complex64, roughness: f64) -> Complex64 {
    (k1 - k2) / (k1 + k2) * (-2.0 * k1 * k2 * square(roughness)).exp()
}

/// External wavevector inside the capping medium
///
/// The published kernel feeds the cap SLD in unscaled and with a plus sign
/// under the root, then takes the modulus; kept as is for parity. With the
/// usual zero-SLD cap this is exactly k0 = q/2.
fn cap_wavevector(q: f64, sld_cap: f64) -> f64 {
    let k0 = q / 2.0;
    Complex64::new(k0 * k0 + 4.0 * PI * sld_cap, 0.0).sqrt().norm()
}

/// z wavevector in a medium of scattering length density `sld` (Å⁻²,
/// already 1e-6 scaled), imaginary below the critical edge
fn medium_wavevector(kcap: f64, sld: f64) -> Complex64 {
    Complex64::new(kcap * kcap - 4.0 * PI * sld, 0.0).sqrt()
}

/// Specular reflectivity |r|² of `slabs` (top slab first) between a capping
/// medium of SLD `sld_cap` and a semi-infinite substrate
///
/// All SLDs in 1e-6/Å², q in Å⁻¹. An empty slice reduces to the bare
/// Fresnel reflectivity of the cap/substrate interface.
pub fn reflectivity(q: f64, sld_cap: f64, slabs: &[Slab], substrate: Substrate) -> f64 {
    let kcap = cap_wavevector(q, sld_cap);
    let k_cap = medium_wavevector(kcap, sld_cap * 1.0e-6);
    let k_sub = medium_wavevector(kcap, substrate.sld * 1.0e-6);
    let k_slab: Vec<Complex64> = slabs
        .iter()
        .map(|s| medium_wavevector(kcap, s.sld * 1.0e-6))
        .collect();

    // wavevector above the substrate interface
    let k_last = *k_slab.last().unwrap_or(&k_cap);
    let mut r = fresnel(k_last, k_sub, substrate.roughness);

    // Parratt recursion from the deepest interface up to the cap
    for i in (0..slabs.len()).rev() {
        let k_above = if i == 0 { k_cap } else { k_slab[i - 1] };
        let k_below = k_slab[i];
        let rn = fresnel(k_above, k_below, slabs[i].roughness);
        let propagated = r * (Complex64::i() * 2.0 * k_below * slabs[i].thickness).exp();
        r = (rn + propagated) / (1.0 + rn * propagated);
    }

    r.norm_sqr()
}

/// Fixed four-slab stack matching the published parameter list
///
/// Unused slabs are left at zero SLD and thickness, which drops out of the
/// recursion (zero Fresnel coefficient, unit propagation phase).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FourLayerStack {
    /// Capping medium SLD (1e-6/Å²)
    pub sld_cap: f64,
    /// The four slabs, top first
    pub slabs: [Slab; 4],
    /// Substrate below the last slab
    pub substrate: Substrate,
}

impl FourLayerStack {
    /// Reflectivity at q, dimensionless
    pub fn iq(&self, q: f64) -> f64 {
        reflectivity(q, self.sld_cap, &self.slabs, self.substrate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn empty() -> Slab {
        Slab {
            sld: 0.0,
            thickness: 0.0,
            roughness: 0.0,
        }
    }

    fn reference() -> FourLayerStack {
        FourLayerStack {
            sld_cap: 0.0,
            slabs: [
                empty(),
                empty(),
                empty(),
                Slab {
                    sld: 2.0,
                    thickness: 100.0,
                    roughness: 10.0,
                },
            ],
            substrate: Substrate {
                sld: 2.07,
                roughness: 10.0,
            },
        }
    }

    #[test]
    fn test_fresnel_identical_media_vanishes() {
        let k = Complex64::new(0.01, 0.0);
        assert_abs_diff_eq!(fresnel(k, k, 0.0).norm(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_total_reflection_below_critical_edge() {
        // qc = 2 sqrt(4 pi rho) ~ 0.0102 1/Ang for silicon
        let substrate = Substrate {
            sld: 2.07,
            roughness: 0.0,
        };
        for q in [0.002, 0.005, 0.009] {
            assert_relative_eq!(
                reflectivity(q, 0.0, &[], substrate),
                1.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_zero_contrast_reflects_nothing() {
        // every interface has a vanishing Fresnel coefficient
        let slabs = [Slab {
            sld: 2.07,
            thickness: 50.0,
            roughness: 0.0,
        }];
        let substrate = Substrate {
            sld: 2.07,
            roughness: 0.0,
        };
        assert_eq!(reflectivity(0.05, 2.07, &slabs, substrate), 0.0);
    }

    #[test]
    fn test_four_layer_regression() {
        let stack = reference();
        assert_relative_eq!(stack.iq(0.02), 0.004983777073898648, max_relative = 1e-9);
        assert_relative_eq!(stack.iq(0.05), 8.360584674186525e-5, max_relative = 1e-9);
        assert_relative_eq!(stack.iq(0.1), 2.218052067094301e-6, max_relative = 1e-9);
    }

    #[test]
    fn test_empty_slabs_drop_out() {
        // three zero slabs contribute nothing next to the explicit stack
        let stack = reference();
        let one_slab = [stack.slabs[3]];
        for q in [0.02, 0.05, 0.2] {
            assert_relative_eq!(
                stack.iq(q),
                reflectivity(q, 0.0, &one_slab, stack.substrate),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_reflectivity_bounded_above_critical_edge() {
        let stack = reference();
        let mut q = 0.012;
        while q < 0.5 {
            let r = stack.iq(q);
            assert!(r >= 0.0 && r <= 1.0, "R({q}) = {r} out of range");
            q += 0.004;
        }
    }

    #[test]
    fn test_kinematic_falloff_at_large_q() {
        let stack = reference();
        assert!(stack.iq(0.5) < 1e-15);
    }
}
