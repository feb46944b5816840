/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Fixed-order Gauss-Legendre quadrature on the canonical domain [-1, 1]
//!
//! The orientation averages in the model kernels all run over fixed-order
//! node/weight tables. Rather than transcribing the tables, the nodes are
//! found once at startup by Newton iteration on the Legendre three-term
//! recurrence; the 20- and 76-point schemes used by the kernels are exposed
//! as process-wide immutable statics and never mutated afterwards.

use crate::utils::errors::{Result, UtilsError};
use once_cell::sync::Lazy;
use std::f64::consts::PI;

/// Convergence threshold for the Newton refinement of each node
const NODE_EPS: f64 = 1e-15;

/// A fixed-order Gauss-Legendre scheme: paired nodes and weights on [-1, 1]
///
/// Invariants: the weights sum to 2, nodes are in ascending order and
/// antisymmetric (`nodes[n-1-i] == -nodes[i]`), and the scheme integrates
/// polynomials up to degree 2n−1 exactly.
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

/// The 20-point scheme, used by the lower-resolution kernels
pub static GAUSS_20: Lazy<GaussLegendre> =
    Lazy::new(|| GaussLegendre::new(20).expect("order 20 is valid"));

/// The 76-point scheme shared by all orientation-averaged kernels
pub static GAUSS_76: Lazy<GaussLegendre> =
    Lazy::new(|| GaussLegendre::new(76).expect("order 76 is valid"));

impl GaussLegendre {
    /// Build the n-point scheme
    ///
    /// # Arguments
    ///
    /// * `n` - Number of nodes (must be at least 1)
    ///
    /// # Returns
    ///
    /// The scheme, or an error for a zero-point request
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(UtilsError::Math(
                "Gauss-Legendre quadrature requires at least one node".to_string(),
            ));
        }

        let mut nodes = vec![0.0; n];
        let mut weights = vec![0.0; n];

        // Nodes come in ± pairs, so only the upper half is solved for.
        let m = n.div_ceil(2);
        for i in 0..m {
            // Chebyshev-based starting guess for the i-th root of P_n
            let mut z = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
            let mut dp = 0.0;

            for _ in 0..100 {
                // Evaluate P_n(z) and P_{n-1}(z) by the three-term recurrence
                let mut p1 = 1.0;
                let mut p2 = 0.0;
                for j in 0..n {
                    let p3 = p2;
                    p2 = p1;
                    p1 = ((2 * j + 1) as f64 * z * p2 - j as f64 * p3) / (j + 1) as f64;
                }
                dp = n as f64 * (z * p1 - p2) / (z * z - 1.0);
                let z_prev = z;
                z -= p1 / dp;
                if (z - z_prev).abs() <= NODE_EPS {
                    break;
                }
            }

            let w = 2.0 / ((1.0 - z * z) * dp * dp);
            nodes[i] = -z;
            nodes[n - 1 - i] = z;
            weights[i] = w;
            weights[n - 1 - i] = w;
        }

        Ok(Self { nodes, weights })
    }

    /// Number of nodes in the scheme
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the scheme holds no nodes (never the case for a built scheme)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes on [-1, 1], ascending
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Weights paired with [`nodes`](Self::nodes); they sum to 2
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterate over (node, weight) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().copied().zip(self.weights.iter().copied())
    }

    /// Integrate `f` over [lo, hi] by the affine substitution
    /// `x = ½(hi−lo)·z + ½(hi+lo)`, scaling the weighted sum by the
    /// Jacobian ½(hi−lo)
    ///
    /// # Arguments
    ///
    /// * `lo` - Lower integration bound
    /// * `hi` - Upper integration bound
    /// * `f` - Integrand evaluated at the mapped nodes
    ///
    /// # Returns
    ///
    /// The fixed-order approximation to ∫f dx over [lo, hi]
    pub fn integrate<F>(&self, lo: f64, hi: f64, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let half_width = 0.5 * (hi - lo);
        let center = 0.5 * (hi + lo);
        let mut total = 0.0;
        for (z, w) in self.points() {
            total += w * f(half_width * z + center);
        }
        total * half_width
    }
}
