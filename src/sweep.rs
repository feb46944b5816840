/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Parallel evaluation of a scalar kernel over a q grid
//!
//! The kernels are per-point scalar functions; evaluating a resolution curve
//! or a 2-D detector image is the embarrassingly parallel outer loop a host
//! application runs. These drivers fan that loop out over rayon's thread
//! pool.

use log::debug;
use rayon::prelude::*;

/// Evaluate `kernel` at every q in `grid`, in parallel
///
/// `name` only labels the trace output.
///
/// # Arguments
///
/// * `name` - Label for the kernel being swept
/// * `grid` - Scattering vector magnitudes in Å⁻¹
/// * `kernel` - Scalar evaluator, e.g. a model's `iq`
pub fn sweep_iq<F>(name: &str, grid: &[f64], kernel: F) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    debug!("sweeping {} over {} q points", name, grid.len());
    grid.par_iter().map(|&q| kernel(q)).collect()
}

/// Evaluate `kernel` at every (qx, qy) detector point, in parallel
pub fn sweep_iqxy<F>(name: &str, grid: &[(f64, f64)], kernel: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    debug!("sweeping {} over {} detector points", name, grid.len());
    grid.par_iter().map(|&(qx, qy)| kernel(qx, qy)).collect()
}
