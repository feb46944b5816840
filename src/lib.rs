/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! # sasff-rs
//!
//! Small-angle scattering form-factor kernels in Rust.
//!
//! Each model is a plain parameter struct with scalar evaluators: `iq(q)`
//! for the 1-D orientation-averaged intensity and, for anisometric shapes,
//! `iqxy(qx, qy)` for a fixed-orientation detector point. The kernels are
//! pure math with no I/O or shared state; orientational averages run on
//! fixed-order Gauss-Legendre rules and the amplitudes are built from a
//! small set of guarded special functions.
//!
//! ```
//! use sasff_rs::models::StarPolymer;
//!
//! let star = StarPolymer { rg: 100.0, arms: 5.0 };
//! assert!((star.iq(0.0) - 1.0).abs() < 1e-12);
//! ```

pub mod models;
pub mod quadrature;
pub mod sweep;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
