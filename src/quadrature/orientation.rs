/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Orientation handling for 2-D (fixed-orientation) evaluation
//!
//! Anisometric kernels take the scattering vector resolved onto the particle
//! frame. For 2-D evaluation the detector-plane vector (qx, qy) is rotated
//! by the particle orientation angles (degrees, the `Rz(φ)Ry(θ)Rz(ψ)`
//! convention of the host application) into either one polar angle for
//! rotationally symmetric shapes or three direction cosines for fully
//! asymmetric ones. The chain kernel instead averages over a discretized
//! Gaussian orientation distribution on a fixed 45×3 grid.

use std::f64::consts::PI;

/// Projection of (qx, qy) for a rotationally symmetric particle
///
/// `cos_alpha` is the cosine of the angle between q and the symmetry axis;
/// `sin_alpha` spans the equatorial plane.
#[derive(Debug, Clone, Copy)]
pub struct SymmetricOrientation {
    /// |q| in Å⁻¹
    pub q: f64,
    /// Component of q̂ in the equatorial plane
    pub sin_alpha: f64,
    /// Component of q̂ along the symmetry axis
    pub cos_alpha: f64,
}

impl SymmetricOrientation {
    /// Resolve (qx, qy) onto the symmetry axis of a particle oriented by
    /// `theta`, `phi` (degrees)
    pub fn from_angles(qx: f64, qy: f64, theta: f64, phi: f64) -> Self {
        let q = (qx * qx + qy * qy).sqrt();
        let norm = 1.0 / if q == 0.0 { 1.0 } else { q };
        let sin_theta = theta.to_radians().sin();
        let (sin_phi, cos_phi) = phi.to_radians().sin_cos();
        let cos_alpha = sin_theta * (qx * cos_phi + qy * sin_phi) * norm;
        let sin_alpha = (1.0 - cos_alpha * cos_alpha).sqrt();
        Self {
            q,
            sin_alpha,
            cos_alpha,
        }
    }

    /// The axial and equatorial components (q_c, q_ab) of q
    pub fn resolved(&self) -> (f64, f64) {
        (self.q * self.cos_alpha, self.q * self.sin_alpha)
    }
}

/// Projection of (qx, qy) for a fully asymmetric particle
///
/// Direction cosines of q̂ along the particle a, b and c axes after the
/// `Rz(φ)Ry(θ)Rz(ψ)` view rotation.
#[derive(Debug, Clone, Copy)]
pub struct AsymmetricOrientation {
    /// |q| in Å⁻¹
    pub q: f64,
    /// Direction cosine along the particle a axis
    pub cos_a: f64,
    /// Direction cosine along the particle b axis
    pub cos_b: f64,
    /// Direction cosine along the particle c axis
    pub cos_c: f64,
}

impl AsymmetricOrientation {
    /// Resolve (qx, qy) onto the particle axes for orientation
    /// `theta`, `phi`, `psi` (degrees)
    pub fn from_angles(qx: f64, qy: f64, theta: f64, phi: f64, psi: f64) -> Self {
        let q = (qx * qx + qy * qy).sqrt();
        let norm = 1.0 / if q == 0.0 { 1.0 } else { q };
        let (sin_theta, cos_theta) = theta.to_radians().sin_cos();
        let (sin_phi, cos_phi) = phi.to_radians().sin_cos();
        let (sin_psi, cos_psi) = psi.to_radians().sin_cos();

        // rows of Rz(phi)·Ry(theta)·Rz(psi) applied to (qx, qy, 0)
        let cos_a = norm
            * ((-sin_psi * sin_phi + cos_theta * cos_psi * cos_phi) * qx
                + (sin_psi * cos_phi + cos_theta * cos_psi * sin_phi) * qy);
        let cos_b = norm
            * ((-cos_psi * sin_phi - cos_theta * sin_psi * cos_phi) * qx
                + (cos_psi * cos_phi - cos_theta * sin_psi * sin_phi) * qy);
        let cos_c = norm * (sin_theta * cos_phi * qx + sin_theta * sin_phi * qy);

        Self {
            q,
            cos_a,
            cos_b,
            cos_c,
        }
    }
}

/// One node of the discretized Gaussian orientation distribution
#[derive(Debug, Clone, Copy)]
pub struct OrientationGridPoint {
    /// Polar angle from the alignment axis, radians
    pub polar: f64,
    /// Azimuthal angle about the alignment axis, radians
    pub azimuth: f64,
    /// Normalized distribution weight (all weights sum to 1)
    pub weight: f64,
}

/// Discretized Gaussian orientation distribution on a fixed 45×3 grid
///
/// Polar steps sit at (2a+1)° for a = 0..44 and azimuthal steps at 0°, 45°
/// and 90°. The Gaussian polar weight is normalized by the running sum over
/// the whole grid, so each polar weight enters the normalization once per
/// azimuthal step exactly as the discrete distribution defines it.
#[derive(Debug, Clone)]
pub struct GaussianOrientationGrid {
    sigma: f64,
    norm: f64,
}

impl GaussianOrientationGrid {
    /// Number of polar steps (2° spacing over 0..90°)
    pub const POLAR_STEPS: usize = 45;
    /// Number of azimuthal steps (45° spacing over 0..90°)
    pub const AZIMUTHAL_STEPS: usize = 3;

    /// Build the grid for a Gaussian of width `sigma` (degrees) about the
    /// alignment axis
    pub fn new(sigma: f64) -> Self {
        let mut norm = 0.0;
        for a in 0..Self::POLAR_STEPS {
            for _ in 0..Self::AZIMUTHAL_STEPS {
                norm += Self::raw_weight(sigma, a);
            }
        }
        Self { sigma, norm }
    }

    fn raw_weight(sigma: f64, a: usize) -> f64 {
        let deviate = (a as f64 * 2.0 + 1.0) / sigma;
        (-0.5 * deviate * deviate).exp() / ((2.0 * PI).sqrt() * sigma)
    }

    /// Gaussian width in degrees
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Iterate over every (polar, azimuth, weight) node of the grid
    pub fn points(&self) -> impl Iterator<Item = OrientationGridPoint> + '_ {
        (0..Self::POLAR_STEPS).flat_map(move |a| {
            (0..Self::AZIMUTHAL_STEPS).map(move |b| OrientationGridPoint {
                polar: (a as f64 * 2.0 + 1.0).to_radians(),
                azimuth: (b as f64 * 45.0).to_radians(),
                weight: Self::raw_weight(self.sigma, a) / self.norm,
            })
        })
    }
}
