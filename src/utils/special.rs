/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

//! Special-function primitives for the scattering kernels
//!
//! Every function here is a total ℝ→ℝ map with the removable singularity at
//! x = 0 filled in by its series limit, so the kernels can evaluate them at
//! arbitrary projections of q without guarding against division by zero.
//! Accuracy targets follow the original single-file C kernels: full double
//! precision near zero, ~1e-8 absolute from the rational J1 approximation.

/// Normalized sinc, sin(x)/x with sinc(0) = 1
///
/// This is the axial form factor of a uniform slab of unit half-thickness.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Normalized spherical Bessel function, 3(sin x − x cos x)/x³
///
/// The form factor amplitude of a uniform sphere, with limit 1 at x = 0.
/// Uses the Taylor expansion below |x| = 0.1 where the closed form loses
/// precision to cancellation.
pub fn sph_j1c(x: f64) -> f64 {
    if x.abs() < 0.1 {
        let x2 = x * x;
        1.0 + x2 * (-3.0 / 30.0 + x2 * (3.0 / 840.0 + x2 * (-3.0 / 45360.0)))
    } else {
        let (sin_x, cos_x) = x.sin_cos();
        3.0 * (sin_x / x - cos_x) / (x * x)
    }
}

/// Bessel function of the first kind, order one
///
/// Rational approximation below |x| = 8 and the phase-amplitude asymptotic
/// form above, with static coefficient tables. Odd in x; absolute accuracy
/// about 1e-8 over the real line.
pub fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let num = x
            * (72362614232.0
                + y * (-7895059235.0
                    + y * (242396853.1
                        + y * (-2972611.439 + y * (15704.48260 + y * (-30.16036606))))));
        let den = 144725228442.0
            + y * (2300535178.0
                + y * (18583304.74 + y * (99447.43394 + y * (376.9991397 + y))));
        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 2.356194491;
        let p = 1.0
            + y * (0.183105e-2
                + y * (-0.3516396496e-4 + y * (0.2457520174e-5 + y * (-0.240337019e-6))));
        let q = 0.04687499995
            + y * (-0.2002690873e-3
                + y * (0.8449199096e-5 + y * (-0.88228987e-6 + y * 0.105787412e-6)));
        let ans = (0.636619772 / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q);
        if x < 0.0 {
            -ans
        } else {
            ans
        }
    }
}

/// Normalized cylindrical Bessel term, 2 J1(x)/x with limit 1 at x = 0
///
/// The radial form factor of a uniform disc. The series branch keeps full
/// double precision through the x → 0 limit.
pub fn bessel_2j1c(x: f64) -> f64 {
    if x.abs() < 0.05 {
        let x2 = x * x;
        1.0 + x2 * (-1.0 / 8.0 + x2 * (1.0 / 192.0 + x2 * (-1.0 / 9216.0)))
    } else {
        2.0 * bessel_j1(x) / x
    }
}

/// Langevin function, coth(x) − 1/x
///
/// Mean alignment of a thermally agitated magnetic moment. The small-x
/// branch uses the leading series term x/3, matching the 1e-5 cutoff of the
/// original kernel.
pub fn langevin(x: f64) -> f64 {
    if x < 1e-5 {
        x / 3.0
    } else {
        1.0 / x.tanh() - 1.0 / x
    }
}

/// Langevin function over its argument, L(x)/x, with limit 1/3 at x = 0
pub fn langevin_over_x(x: f64) -> f64 {
    if x < 1e-5 {
        1.0 / 3.0
    } else {
        langevin(x) / x
    }
}
