/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::rstest;
use sasff_rs::utils::{bessel_2j1c, bessel_j1, langevin, langevin_over_x, sinc, sph_j1c};

#[rstest]
#[case(sinc as fn(f64) -> f64)]
#[case(sph_j1c as fn(f64) -> f64)]
#[case(bessel_2j1c as fn(f64) -> f64)]
fn test_normalized_primitives_are_one_at_zero(#[case] f: fn(f64) -> f64) {
    assert_relative_eq!(f(0.0), 1.0, epsilon = 1e-15);
}

#[rstest]
#[case(1e-9)]
#[case(1e-8)]
#[case(-1e-8)]
fn test_primitives_finite_near_zero(#[case] x: f64) {
    for f in [sinc, sph_j1c, bessel_2j1c, langevin, langevin_over_x] {
        assert!(f(x).is_finite());
    }
}

#[test]
fn test_sinc_against_closed_form() {
    for x in [0.3, 1.0, 2.5, 10.0] {
        assert_relative_eq!(sinc(x), x.sin() / x, epsilon = 1e-15);
    }
}

#[test]
fn test_sph_j1c_first_zero() {
    // first zero of 3 j1(x)/x sits at tan x = x, about 4.4934
    let x = 4.493409457909064;
    assert_abs_diff_eq!(sph_j1c(x), 0.0, epsilon = 1e-12);
}

#[test]
fn test_bessel_2j1c_consistent_with_j1() {
    for x in [0.1, 0.5, 2.0, 7.0, 12.0] {
        assert_relative_eq!(bessel_2j1c(x), 2.0 * bessel_j1(x) / x, epsilon = 1e-12);
    }
}

#[test]
fn test_bessel_j1_is_odd() {
    for x in [0.2, 1.7, 6.0, 20.0] {
        assert_relative_eq!(bessel_j1(-x), -bessel_j1(x), epsilon = 1e-15);
    }
}

#[test]
fn test_langevin_saturates() {
    // L(x) -> 1 - 1/x for large argument
    assert_relative_eq!(langevin(100.0), 1.0 - 0.01, max_relative = 1e-10);
    // L(x)/x -> 1/3 for small argument
    assert_relative_eq!(langevin_over_x(1e-6), 1.0 / 3.0, max_relative = 1e-10);
}

#[test]
fn test_langevin_relations() {
    for x in [0.5, 1.0, 3.0] {
        assert_relative_eq!(langevin(x) / x, langevin_over_x(x), epsilon = 1e-14);
        assert_relative_eq!(langevin(x), 1.0 / x.tanh() - 1.0 / x, epsilon = 1e-14);
    }
}
