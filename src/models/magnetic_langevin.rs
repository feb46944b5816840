/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Superparamagnetic core-multishell spheres with spin-resolved cross sections
//!
//! Nuclear scattering follows the usual telescoping core-multishell sphere
//! amplitude. The magnetization of every region responds to the applied
//! field through its Langevin parameter eta: the longitudinal component
//! carries L(eta), its square 1 - 2 L(eta)/eta, and the transversal
//! fluctuations L(eta)/eta, split by `delta` into a part coaligned with the
//! core transversal moment (coherent) and a perpendicular part that adds
//! incoherently. The four POLARIS cross sections are combined with beam
//! polarization weights; the field sits horizontal in the detector plane
//! and theta is the angle from the field to q.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::models::errors::{ModelError, Result};
use crate::quadrature::GAUSS_76;
use crate::utils::constants::{M_4PI_3, SLD_SQUARED_TO_CM, SLD_TO_SQRT_CM};
use crate::utils::special::{langevin, langevin_over_x, sph_j1c};
use crate::utils::{cube, square};

/// Polarization weights for the four spin-resolved cross sections
///
/// `norm` rescales the outgoing analyzer efficiency so the weighted sum of
/// spin-resolved measurements reproduces the unpolarised or half-polarised
/// cross section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinChannelWeights {
    /// Weight of the non-spin-flip uu channel
    pub uu: f64,
    /// Weight of the spin-flip du channel
    pub du: f64,
    /// Weight of the spin-flip ud channel
    pub ud: f64,
    /// Weight of the non-spin-flip dd channel
    pub dd: f64,
}

impl SpinChannelWeights {
    /// Build channel weights from incoming polarizer and outgoing analyzer
    /// spin fractions
    ///
    /// Fractions are clipped to [0, 1] by absolute value; the norm keeps
    /// the raw `out_spin` when the clipped value is at least 0.5.
    pub fn new(in_spin: f64, out_spin: f64) -> Self {
        let mut norm = out_spin;

        let in_spin = in_spin.abs().clamp(0.0, 1.0);
        let out_spin = out_spin.abs().clamp(0.0, 1.0);

        if out_spin < 0.5 {
            norm = 1.0 - out_spin;
        }

        Self {
            uu: (1.0 - in_spin) * (1.0 - out_spin) / norm,
            du: (1.0 - in_spin) * out_spin / norm,
            ud: in_spin * (1.0 - out_spin) / norm,
            dd: in_spin * out_spin / norm,
        }
    }
}

/// Superparamagnetic core-multishell sphere parameters
///
/// SLDs in 1e-6 Å⁻², lengths in Å, eta dimensionless, delta in [0, 1].
/// The per-shell vectors must share one length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagneticLangevinSpheres {
    /// Nuclear SLD of the core
    pub nuc_sld_core: f64,
    /// Magnetic SLD of the core at saturation
    pub magnetic_sld_core: f64,
    /// Langevin parameter of the core
    pub eta_core: f64,
    /// Core radius
    pub radius: f64,
    /// Nuclear SLD of the solvent
    pub nuc_sld_solvent: f64,
    /// Magnetic SLD of the solvent at saturation
    pub magnetic_sld_solvent: f64,
    /// Langevin parameter of the solvent
    pub eta_solvent: f64,
    /// Coaligned fraction of the solvent transversal magnetization
    pub delta_solvent: f64,
    /// Nuclear SLD per shell
    pub sld: Vec<f64>,
    /// Magnetic SLD per shell at saturation
    pub magnetic_sld: Vec<f64>,
    /// Langevin parameter per shell
    pub eta: Vec<f64>,
    /// Coaligned fraction of the transversal magnetization per shell
    pub delta: Vec<f64>,
    /// Thickness per shell
    pub thickness: Vec<f64>,
}

/// Spin-resolved cross sections at one q, before the theta dependence
struct CrossSectionParts {
    nuc: f64,
    mz: f64,
    mzsq: f64,
    mtranssq: f64,
}

impl CrossSectionParts {
    fn idd(&self, cos_theta: f64, sin_theta: f64) -> f64 {
        self.nuc * self.nuc - 2.0 * self.nuc * self.mz * square(sin_theta)
            + self.mzsq * square(square(sin_theta))
            + self.mtranssq * square(sin_theta * cos_theta)
    }

    fn iuu(&self, cos_theta: f64, sin_theta: f64) -> f64 {
        self.nuc * self.nuc + 2.0 * self.nuc * self.mz * square(sin_theta)
            + self.mzsq * square(square(sin_theta))
            + self.mtranssq * square(sin_theta * cos_theta)
    }

    fn idu(&self, cos_theta: f64, sin_theta: f64) -> f64 {
        self.mtranssq * (1.0 + square(square(cos_theta)))
            + self.mzsq * square(sin_theta * cos_theta)
    }

    fn combined(&self, w: &SpinChannelWeights, cos_theta: f64, sin_theta: f64) -> f64 {
        let sf = self.idu(cos_theta, sin_theta);
        w.uu * self.iuu(cos_theta, sin_theta)
            + (w.du + w.ud) * sf
            + w.dd * self.idd(cos_theta, sin_theta)
    }
}

impl MagneticLangevinSpheres {
    /// Number of shells
    pub fn shell_count(&self) -> usize {
        self.sld.len()
    }

    fn validate(&self) -> Result<()> {
        let n = self.sld.len();
        for (name, len) in [
            ("magnetic_sld", self.magnetic_sld.len()),
            ("eta", self.eta.len()),
            ("delta", self.delta.len()),
            ("thickness", self.thickness.len()),
        ] {
            if len != n {
                return Err(ModelError::ShellCountMismatch {
                    name,
                    got: len,
                    expected: n,
                });
            }
        }
        Ok(())
    }

    /// Outer radius of the full particle
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.thickness.iter().sum::<f64>()
    }

    /// Total particle volume in Å³
    pub fn form_volume(&self) -> f64 {
        M_4PI_3 * cube(self.outer_radius())
    }

    /// Telescoping multishell sphere amplitude for per-region scattering
    /// lengths produced by `density`
    fn telescoped(&self, q: f64, density: impl Fn(Region) -> f64) -> f64 {
        let mut r = self.radius;
        let mut last = density(Region::Core);
        let mut f = 0.0;
        for i in 0..self.sld.len() {
            let d = density(Region::Shell(i));
            f += M_4PI_3 * cube(r) * (d - last) * sph_j1c(q * r);
            last = d;
            r += self.thickness[i];
        }
        f + M_4PI_3 * cube(r) * (density(Region::Solvent) - last) * sph_j1c(q * r)
    }

    /// Nuclear amplitude in 1e-2 sqrt(cm) units
    fn fq_nuc(&self, q: f64) -> f64 {
        SLD_TO_SQRT_CM
            * self.telescoped(q, |region| match region {
                Region::Core => self.nuc_sld_core,
                Region::Shell(i) => self.sld[i],
                Region::Solvent => self.nuc_sld_solvent,
            })
    }

    /// Longitudinal magnetic amplitude, Langevin weighted
    fn fq_mz(&self, q: f64) -> f64 {
        SLD_TO_SQRT_CM
            * self.telescoped(q, |region| match region {
                Region::Core => self.magnetic_sld_core * langevin(self.eta_core),
                Region::Shell(i) => self.magnetic_sld[i] * langevin(self.eta[i]),
                Region::Solvent => self.magnetic_sld_solvent * langevin(self.eta_solvent),
            })
    }

    /// Mean squared longitudinal magnetization contrast
    fn fq_mzsq(&self, q: f64) -> f64 {
        let f = self.telescoped(q, |region| {
            let (sld, eta) = match region {
                Region::Core => (self.magnetic_sld_core, self.eta_core),
                Region::Shell(i) => (self.magnetic_sld[i], self.eta[i]),
                Region::Solvent => (self.magnetic_sld_solvent, self.eta_solvent),
            };
            sld * (1.0 - 2.0 * langevin_over_x(eta)).sqrt()
        });
        SLD_SQUARED_TO_CM * f * f
    }

    /// Mean squared transversal magnetization: a coherent telescoped part
    /// coaligned with the core moment plus incoherent perpendicular terms
    fn fq_mtranssq(&self, q: f64) -> f64 {
        let coaligned = |region: Region| match region {
            Region::Core => self.magnetic_sld_core * langevin_over_x(self.eta_core).sqrt(),
            Region::Shell(i) => {
                self.magnetic_sld[i] * (langevin_over_x(self.eta[i]) * self.delta[i]).sqrt()
            }
            Region::Solvent => {
                self.magnetic_sld_solvent
                    * (langevin_over_x(self.eta_solvent) * self.delta_solvent).sqrt()
            }
        };
        let f = self.telescoped(q, coaligned);

        let mut fsq_perp = 0.0;
        let mut r = self.radius;
        for i in 0..self.sld.len() {
            fsq_perp += square(
                M_4PI_3
                    * cube(r)
                    * self.magnetic_sld[i]
                    * (langevin_over_x(self.eta[i]) * (1.0 - self.delta[i])).sqrt()
                    * sph_j1c(q * r),
            );
            r += self.thickness[i];
        }
        fsq_perp += square(
            M_4PI_3
                * cube(r)
                * self.magnetic_sld_solvent
                * (langevin_over_x(self.eta_solvent) * (1.0 - self.delta_solvent)).sqrt()
                * sph_j1c(q * r),
        );

        SLD_SQUARED_TO_CM * (f * f + fsq_perp)
    }

    fn parts(&self, q: f64) -> CrossSectionParts {
        CrossSectionParts {
            nuc: self.fq_nuc(q),
            mz: self.fq_mz(q),
            mzsq: self.fq_mzsq(q),
            mtranssq: self.fq_mtranssq(q),
        }
    }

    /// Intensity kernel at `q` (Å⁻¹), averaged over the detector angle, for
    /// beam polarization fractions `up_i` (polarizer) and `up_f` (analyzer)
    pub fn iq(&self, q: f64, up_i: f64, up_f: f64) -> Result<f64> {
        self.validate()?;
        let weights = SpinChannelWeights::new(up_i, up_f);
        let parts = self.parts(q);

        let nodes = GAUSS_76.nodes();
        let gauss_weights = GAUSS_76.weights();
        let mut total = 0.0;
        for (z, w) in nodes.iter().zip(gauss_weights) {
            let theta = PI * (z + 1.0);
            let (sin_theta, cos_theta) = theta.sin_cos();
            total += w * parts.combined(&weights, cos_theta, sin_theta);
        }

        Ok(0.5 * total)
    }

    /// Intensity kernel at detector point (qx, qy) with the field along qx
    pub fn iqxy(&self, qx: f64, qy: f64, up_i: f64, up_f: f64) -> Result<f64> {
        self.validate()?;
        let weights = SpinChannelWeights::new(up_i, up_f);

        let q = (qx * qx + qy * qy).sqrt();
        let cos_theta = qx / q;
        let sin_theta = qy / q;

        Ok(self.parts(q).combined(&weights, cos_theta, sin_theta))
    }
}

#[derive(Clone, Copy)]
enum Region {
    Core,
    Shell(usize),
    Solvent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> MagneticLangevinSpheres {
        MagneticLangevinSpheres {
            nuc_sld_core: 6.0,
            magnetic_sld_core: 1.4,
            eta_core: 5.0,
            radius: 50.0,
            nuc_sld_solvent: 6.4,
            magnetic_sld_solvent: 0.0,
            eta_solvent: 0.0,
            delta_solvent: 1.0,
            sld: vec![3.0],
            magnetic_sld: vec![0.5],
            eta: vec![2.0],
            delta: vec![1.0],
            thickness: vec![20.0],
        }
    }

    #[test]
    fn test_spin_weights_unpolarized() {
        let w = SpinChannelWeights::new(0.0, 0.0);
        assert_eq!(w.uu, 1.0);
        assert_eq!(w.du, 0.0);
        assert_eq!(w.ud, 0.0);
        assert_eq!(w.dd, 0.0);
    }

    #[test]
    fn test_spin_weights_fully_polarized() {
        let w = SpinChannelWeights::new(1.0, 1.0);
        assert_eq!(w.dd, 1.0);
        assert_eq!(w.uu, 0.0);
    }

    #[test]
    fn test_spin_weights_norm_switch() {
        // out_spin below 0.5 normalizes by 1 - out_spin instead
        let w = SpinChannelWeights::new(0.0, 0.3);
        assert_relative_eq!(w.uu, 0.7 / 0.7, max_relative = 1e-12);
        assert_relative_eq!(w.du, 0.3 / 0.7, max_relative = 1e-12);
        let w2 = SpinChannelWeights::new(0.0, 0.7);
        assert_relative_eq!(w2.uu, 0.3 / 0.7, max_relative = 1e-12);
    }

    #[test]
    fn test_shell_count_mismatch() {
        let mut m = reference();
        m.eta = vec![2.0, 3.0];
        let err = m.iq(0.01, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShellCountMismatch { name: "eta", .. }
        ));
    }

    #[test]
    fn test_nonmagnetic_reduces_to_core_shell_sphere() {
        // with all magnetic SLDs zero only the nuclear term survives and
        // the theta average is trivial
        let mut m = reference();
        m.magnetic_sld_core = 0.0;
        m.magnetic_sld = vec![0.0];
        m.magnetic_sld_solvent = 0.0;

        let q = 0.02;
        let f = M_4PI_3 * cube(50.0) * (m.sld[0] - m.nuc_sld_core) * sph_j1c(q * 50.0)
            + M_4PI_3 * cube(70.0) * (m.nuc_sld_solvent - m.sld[0]) * sph_j1c(q * 70.0);
        let expected = 1e-4 * f * f;
        assert_relative_eq!(m.iq(q, 0.0, 0.0).unwrap(), expected, max_relative = 1e-10);
    }

    #[test]
    fn test_spin_flip_channel_is_purely_magnetic() {
        // spin-flip scattering carries no nuclear contrast
        let m = reference();
        let parts = m.parts(0.01);
        let sf = parts.idu(0.6, 0.8);
        let mut nonmag = m.clone();
        nonmag.nuc_sld_core = 0.0;
        nonmag.sld = vec![0.0];
        nonmag.nuc_sld_solvent = 0.0;
        let sf2 = nonmag.parts(0.01).idu(0.6, 0.8);
        assert_relative_eq!(sf, sf2, max_relative = 1e-12);
    }

    #[test]
    fn test_saturated_langevin_limits() {
        // eta -> infinity drives L -> 1 and L/x -> 0, so the longitudinal
        // amplitude approaches the full magnetic contrast and the
        // transversal term vanishes
        let mut m = reference();
        m.eta_core = 1e9;
        m.eta = vec![1e9];
        m.eta_solvent = 1e9;
        let q = 0.015;
        let full = SLD_TO_SQRT_CM
            * (M_4PI_3 * cube(50.0) * (m.magnetic_sld[0] - m.magnetic_sld_core)
                * sph_j1c(q * 50.0)
                + M_4PI_3 * cube(70.0) * (m.magnetic_sld_solvent - m.magnetic_sld[0])
                    * sph_j1c(q * 70.0));
        assert_relative_eq!(m.fq_mz(q), full, max_relative = 1e-6);
        // transversal fluctuations scale with L(eta)/eta ~ 1/eta
        assert!(m.fq_mtranssq(q) < 1e-7 * reference().fq_mtranssq(q));
    }

    #[test]
    fn test_iq_regression() {
        let m = reference();
        assert_relative_eq!(
            m.iq(0.02, 0.0, 0.0).unwrap(),
            502772633.02,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_iq_nonnegative() {
        let m = reference();
        for i in 1..30 {
            let v = m.iq(i as f64 * 0.004, 0.0, 0.95).unwrap();
            assert!(v >= 0.0, "negative intensity at index {i}");
        }
    }
}
