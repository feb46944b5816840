/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::rstest;
use sasff_rs::quadrature::{GaussLegendre, GaussianOrientationGrid, GAUSS_20, GAUSS_76};
use std::f64::consts::PI;

#[rstest]
#[case(&*GAUSS_20)]
#[case(&*GAUSS_76)]
fn test_tables_integrate_constants_and_squares(#[case] rule: &GaussLegendre) {
    let weight_sum: f64 = rule.weights().iter().sum();
    assert_relative_eq!(weight_sum, 2.0, epsilon = 1e-12);

    let second_moment: f64 = rule.points().map(|(z, w)| w * z * z).sum();
    assert_relative_eq!(second_moment, 2.0 / 3.0, epsilon = 1e-12);
}

#[rstest]
#[case(&*GAUSS_20)]
#[case(&*GAUSS_76)]
fn test_tables_are_antisymmetric(#[case] rule: &GaussLegendre) {
    let n = rule.len();
    for i in 0..n / 2 {
        assert_abs_diff_eq!(rule.nodes()[i], -rule.nodes()[n - 1 - i], epsilon = 1e-14);
        assert_relative_eq!(rule.weights()[i], rule.weights()[n - 1 - i], epsilon = 1e-12);
    }
}

#[test]
fn test_high_degree_polynomial_is_exact() {
    // an n point rule integrates polynomials up to degree 2n - 1
    let rule = GaussLegendre::new(5).unwrap();
    let moment: f64 = rule.points().map(|(z, w)| w * z.powi(8)).sum();
    assert_relative_eq!(moment, 2.0 / 9.0, epsilon = 1e-13);
}

#[test]
fn test_integrate_sine_over_half_period() {
    let integral = GAUSS_20.integrate(0.0, PI, |x| x.sin());
    assert_relative_eq!(integral, 2.0, epsilon = 1e-12);
}

#[test]
fn test_integrate_respects_interval_orientation() {
    let forward = GAUSS_20.integrate(0.0, 1.0, |x| x * x);
    let backward = GAUSS_20.integrate(1.0, 0.0, |x| x * x);
    assert_relative_eq!(forward, 1.0 / 3.0, epsilon = 1e-13);
    assert_relative_eq!(forward, -backward, epsilon = 1e-15);
}

#[test]
fn test_orientation_grid_is_normalized() {
    for sigma in [0.5, 10.0, 200.0] {
        let grid = GaussianOrientationGrid::new(sigma);
        let total: f64 = grid.points().map(|p| p.weight).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert_eq!(grid.points().count(), 135);
    }
}

#[test]
fn test_orientation_grid_concentrates_for_narrow_sigma() {
    let narrow = GaussianOrientationGrid::new(1.0);
    let first_band: f64 = narrow.points().take(3).map(|p| p.weight).sum();
    // nearly all the weight sits in the first polar step at sigma = 1 degree
    assert!(first_band > 0.8);

    let wide = GaussianOrientationGrid::new(5000.0);
    let spread: Vec<f64> = wide.points().map(|p| p.weight).collect();
    assert_abs_diff_eq!(spread[0], spread[134], epsilon = 1e-5);
}
