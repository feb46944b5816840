/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Core-shell sphere chains oriented about the detector x axis
//!
//! Chains of up to five core-shell spheres, preferentially aligned with the
//! x direction under a discretized Gaussian orientation distribution. The
//! scattering is the incoherent sum over chain lengths of the single-sphere
//! amplitude times a lattice factor accumulated sphere by sphere along the
//! chain axis. Nuclear and magnetic contributions add incoherently; the
//! magnetic moments can be random, locked to the chain axis, or locked to
//! the field (x) axis.

use serde::{Deserialize, Serialize};

use crate::quadrature::GaussianOrientationGrid;
use crate::utils::constants::{M_4PI_3, PER_VOLUME_TO_CM};
use crate::utils::special::sph_j1c;
use crate::utils::{cube, square};

/// How the magnetic moments of the spheres are aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MagneticOrientation {
    /// Each particle magnetized along its own random direction, core and
    /// shell sharing that direction. Averages to 2/3 of the moment squared
    /// and contributes no inter-particle magnetic interference.
    Random,
    /// Moments locked to the chain axis
    AlongChain,
    /// Moments locked to the field (x) axis regardless of chain orientation
    AlongField,
}

/// Oriented chains of magnetic core-shell spheres
///
/// Chain-length fractions are renormalized so they sum to one; the
/// `normalization_radius` sets the per-particle volume the scale refers to,
/// so a fit scale reads as the volume fraction of material of that radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrientedMagneticChains {
    /// Radius (Å) whose volume normalizes the intensity
    pub normalization_radius: f64,
    /// Core scattering length density (1e-6/Å²)
    pub sld_core: f64,
    /// Core magnetic scattering length density (1e-6/Å²)
    pub sld_magcore: f64,
    /// Shell scattering length density (1e-6/Å²)
    pub sld_shell: f64,
    /// Shell magnetic scattering length density (1e-6/Å²)
    pub sld_magshell: f64,
    /// Solvent scattering length density (1e-6/Å²)
    pub sld_solvent: f64,
    /// Core radius (Å)
    pub radius_core: f64,
    /// Shell thickness (Å)
    pub thickness_shell: f64,
    /// Magnetic alignment mode
    pub magnetic_orientation: MagneticOrientation,
    /// Center-to-center sphere spacing along the chain (Å)
    pub length: f64,
    /// Angle of the 1-D q cut with respect to the x axis (degrees)
    pub viewing_angle: f64,
    /// Gaussian width of the chain orientation about x (degrees)
    pub sigma: f64,
    /// Relative fraction of single spheres
    pub singlets: f64,
    /// Relative fraction of two-sphere chains
    pub doublets: f64,
    /// Relative fraction of three-sphere chains
    pub trimers: f64,
    /// Relative fraction of four-sphere chains
    pub quadramers: f64,
    /// Relative fraction of five-sphere chains
    pub pentamers: f64,
}

impl OrientedMagneticChains {
    /// Volume of one core-shell sphere in Å³
    pub fn form_volume(&self) -> f64 {
        M_4PI_3 * cube(self.radius_core + self.thickness_shell)
    }

    /// Nuclear and magnetic single-sphere amplitudes at q
    fn amplitudes(&self, q: f64) -> (f64, f64) {
        let volume_core = M_4PI_3 * cube(self.radius_core);
        let total_radius = self.radius_core + self.thickness_shell;
        let volume_shell = M_4PI_3 * cube(total_radius) - volume_core;

        let amp_core = sph_j1c(q * self.radius_core) * volume_core / 3.0;
        let amp_total = sph_j1c(q * total_radius) * volume_shell / 3.0;

        let amp = (self.sld_core - self.sld_solvent) * amp_core
            + (self.sld_shell - self.sld_solvent) * (amp_total - amp_core);
        let mamp = self.sld_magcore * amp_core + self.sld_magshell * (amp_total - amp_core);
        (amp, mamp)
    }

    /// Orientation-averaged chain intensity at (qx, qy)
    ///
    /// `viewing_angle` (radians) only matters for the magnetic term: it is
    /// the direction the q cut makes with the x axis, which the AlongChain
    /// and AlongField modes project the moments against.
    fn kernel(&self, q: f64, qx: f64, qy: f64, viewing_angle: f64) -> f64 {
        let (amp, mamp) = self.amplitudes(q);
        let amp_sq = square(amp);
        let mamp_sq = square(mamp);

        let mut volume = M_4PI_3 * cube(self.normalization_radius);
        if volume == 0.0 {
            volume = 1e-10;
        }

        // per-chain-length accumulators, nuclear and magnetic
        let mut nuclear = [0.0_f64; 5];
        let mut magnetic = [0.0_f64; 5];

        let grid = GaussianOrientationGrid::new(self.sigma);
        for point in grid.points() {
            let chain_x = point.polar.cos();
            let chain_y = point.polar.sin() * point.azimuth.cos();

            // projection of the moment direction onto the scattering plane
            // normal; None marks the random mode with its 2/3 average
            let moment = match self.magnetic_orientation {
                MagneticOrientation::Random => None,
                MagneticOrientation::AlongChain => Some((point.polar - viewing_angle).sin()),
                MagneticOrientation::AlongField => Some(viewing_angle.sin()),
            };

            nuclear[0] += point.weight * amp_sq / volume;
            magnetic[0] += match moment {
                None => (2.0 / 3.0) * point.weight * mamp_sq / volume,
                Some(m) => square(m) * point.weight * mamp_sq / volume,
            };

            // structure factor built up one sphere at a time; the k-th
            // partial sum is the k+1 sphere chain
            let mut real_phase = 1.0;
            let mut img_phase = 0.0;
            let mut mreal_phase = moment.unwrap_or(1.0);
            let mut mimg_phase = 0.0;

            for k in 1..5 {
                let arg = k as f64 * self.length * (qx * chain_x + qy * chain_y);
                let (sin_arg, cos_arg) = arg.sin_cos();
                real_phase += cos_arg;
                img_phase += sin_arg;
                if let Some(m) = moment {
                    mreal_phase += m * cos_arg;
                    mimg_phase += m * sin_arg;
                }
                let spheres = (k + 1) as f64;
                nuclear[k] += point.weight
                    * (amp_sq * (square(real_phase) + square(img_phase)))
                    / (spheres * volume);
                magnetic[k] += point.weight
                    * (mamp_sq * (square(mreal_phase) + square(mimg_phase)))
                    / (spheres * volume);
            }
        }

        let fractions = [
            self.singlets,
            self.doublets,
            self.trimers,
            self.quadramers,
            self.pentamers,
        ];
        let mut fraction_scale: f64 = fractions.iter().sum();
        if fraction_scale == 0.0 {
            fraction_scale = 1.0;
        }

        let nuclear_total: f64 = fractions
            .iter()
            .zip(nuclear.iter())
            .map(|(f, i)| f * i)
            .sum();
        // random moments carry no inter-particle interference, so every
        // chain length shares the singlet magnetic term
        let magnetic_total = match self.magnetic_orientation {
            MagneticOrientation::Random => magnetic[0] * fractions.iter().sum::<f64>(),
            _ => fractions
                .iter()
                .zip(magnetic.iter())
                .map(|(f, i)| f * i)
                .sum(),
        };

        (nuclear_total + magnetic_total) * PER_VOLUME_TO_CM / fraction_scale
    }

    /// 1-D intensity along the configured viewing angle, in 1/cm
    pub fn iq(&self, q: f64) -> f64 {
        let viewing_angle = self.viewing_angle.to_radians();
        let (sin_va, cos_va) = viewing_angle.sin_cos();
        self.kernel(q, q * cos_va, q * sin_va, viewing_angle)
    }

    /// 2-D intensity at (qx, qy), in 1/cm
    ///
    /// The configured viewing angle is ignored; it is recomputed from the
    /// detector point as atan(qy/qx), which folds quadrants II and III onto
    /// the first quadrant and is kept for parity with the published kernel.
    pub fn iqxy(&self, qx: f64, qy: f64) -> f64 {
        let q = (qx * qx + qy * qy).sqrt();
        self.kernel(q, qx, qy, (qy / qx).atan())
    }
}
