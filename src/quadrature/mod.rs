/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Numerical integration and orientation infrastructure
//!
//! Fixed-order Gauss-Legendre rules drive the orientational averages of the
//! anisometric form factors, and the orientation types map detector-plane
//! (qx, qy) points into the particle frame for 2-D evaluation.

pub mod gauss;
pub mod orientation;

pub use gauss::{GaussLegendre, GAUSS_20, GAUSS_76};
pub use orientation::{
    AsymmetricOrientation, GaussianOrientationGrid, OrientationGridPoint, SymmetricOrientation,
};
