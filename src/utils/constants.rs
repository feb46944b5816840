/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Numeric constants shared by the model kernels
//!
//! SLDs are supplied in units of 10⁻⁶ Å⁻² and lengths in Å, so a squared
//! contrast-times-volume amplitude carries (10⁻⁶ Å⁻²)² Å⁶ = 10⁻¹² Å²,
//! which is 10⁻⁴ cm⁻¹ once divided by the particle volume downstream.

/// 4π/3, the sphere volume prefactor
pub const M_4PI_3: f64 = 4.188_790_204_786_390_8;

/// Converts a squared (contrast × volume) amplitude to cm⁻¹
pub const SLD_SQUARED_TO_CM: f64 = 1.0e-4;

/// Converts a single (contrast × volume) amplitude to √(cm⁻¹):
/// the square root of [`SLD_SQUARED_TO_CM`], applied when an unsquared
/// amplitude is returned and squared by the caller
pub const SLD_TO_SQRT_CM: f64 = 1.0e-2;

/// Scale applied when an intensity is already divided by a volume in Å³
/// (10⁻¹² Å⁻¹ → cm⁻¹ leaves a net factor of 10⁴)
pub const PER_VOLUME_TO_CM: f64 = 1.0e4;
