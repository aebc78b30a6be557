//! Tests for the numerical backbone (special functions, quantiles,
//! the bounded minimizer).

use BinomialStatistics::errors::BinomStatError;
use BinomialStatistics::euclid::*;
use assert_approx_eq::assert_approx_eq;

#[test]
fn ln_gamma_literals() {
    // Gamma(5) = 24
    assert_approx_eq!(ln_gamma(5.0), 24.0_f64.ln(), 1e-12_f64);
    // Gamma(1/2) = sqrt(pi)
    assert_approx_eq!(ln_gamma(0.5), 0.5723649429247001, 1e-12_f64);
    assert_approx_eq!(ln_gamma(1.0), 0.0, 1e-12_f64);
    assert_approx_eq!(ln_gamma(2.0), 0.0, 1e-12_f64);
    // non-positive arguments are outside the domain
    assert_eq!(ln_gamma(0.0), f64::INFINITY);
}

#[test]
fn incomplete_gamma_literals() {
    // P(1, x) = 1 - e^-x
    assert_approx_eq!(regularized_lower_gamma(1.0, 1.0), 0.6321205588285577, 1e-12_f64);
    assert_approx_eq!(regularized_upper_gamma(1.0, 1.0), 0.36787944117144233, 1e-12_f64);

    // chi-square upper tail with 3 degrees of freedom at statistic 20
    assert_approx_eq!(
        regularized_upper_gamma(1.5, 10.0),
        0.00016974243555278878,
        1e-12_f64
    );

    // complementarity
    for x in [0.1, 0.5, 2.0, 8.0, 25.0] {
        let total: f64 = regularized_lower_gamma(2.5, x) + regularized_upper_gamma(2.5, x);
        assert_approx_eq!(total, 1.0, 1e-12_f64);
    }

    assert!(regularized_lower_gamma(0.0, 1.0).is_nan());
    assert!(regularized_upper_gamma(1.0, f64::NAN).is_nan());
}

#[test]
fn incomplete_beta_literals() {
    // I_x(1, 1) = x
    assert_approx_eq!(regularized_incomplete_beta(0.3, 1.0, 1.0), 0.3, 1e-12_f64);
    // I_x(2, 1) = x^2
    assert_approx_eq!(regularized_incomplete_beta(0.3, 2.0, 1.0), 0.09, 1e-12_f64);
    // symmetry at the center
    assert_approx_eq!(regularized_incomplete_beta(0.5, 2.0, 2.0), 0.5, 1e-12_f64);
    // bounds
    assert_approx_eq!(regularized_incomplete_beta(0.0, 3.0, 4.0), 0.0, 1e-15_f64);
    assert_approx_eq!(regularized_incomplete_beta(1.0, 3.0, 4.0), 1.0, 1e-15_f64);
}

#[test]
fn incomplete_beta_inversion_round_trip() {
    struct Round {
        a: f64,
        b: f64,
    }

    let rounds = [
        Round { a: 1.0, b: 1.0 },
        Round { a: 2.0, b: 5.0 },
        Round { a: 72.0, b: 29.0 },
        Round { a: 0.5, b: 0.5 },
    ];

    for round in rounds {
        for q in [0.025, 0.25, 0.5, 0.75, 0.975] {
            let x: f64 = inverse_incomplete_beta(q, round.a, round.b);
            assert_approx_eq!(regularized_incomplete_beta(x, round.a, round.b), q, 1e-9_f64);
        }
    }

    assert!(inverse_incomplete_beta(0.5, 0.0, 1.0).is_nan());
}

#[test]
fn std_normal_cdf_literals() {
    assert_approx_eq!(std_normal_cdf(0.0), 0.5, 1e-15_f64);
    assert_approx_eq!(std_normal_cdf(1.0), 0.8413447460685429, 1e-12_f64);
    assert_approx_eq!(std_normal_cdf(-1.0), 0.15865525393145705, 1e-12_f64);
    assert_approx_eq!(std_normal_cdf(1.959963984540054), 0.975, 1e-12_f64);
    // far tail: ~6.22e-16, must stay positive and tiny
    let far_tail: f64 = std_normal_cdf(-8.0);
    assert!(0.0 < far_tail && far_tail < 1e-14);
}

#[test]
fn std_normal_quantile_literals() {
    assert_approx_eq!(std_normal_quantile(0.5), 0.0, 1e-12_f64);
    assert_approx_eq!(std_normal_quantile(0.975), 1.959963984540054, 1e-9_f64);
    assert_approx_eq!(std_normal_quantile(0.8), 0.8416212335729143, 1e-9_f64);
    assert_approx_eq!(std_normal_quantile(0.99), 2.326347874040841, 1e-9_f64);
    assert_approx_eq!(std_normal_quantile(0.995), 2.5758293035489004, 1e-9_f64);

    assert_eq!(std_normal_quantile(0.0), f64::NEG_INFINITY);
    assert_eq!(std_normal_quantile(1.0), f64::INFINITY);
    assert!(std_normal_quantile(f64::NAN).is_nan());
}

#[test]
fn std_normal_quantile_round_trip() {
    for x in [-3.0, -1.5, -0.2, 0.0, 0.7, 2.2, 3.5] {
        assert_approx_eq!(std_normal_quantile(std_normal_cdf(x)), x, 1e-8_f64);
    }
}

#[test]
fn combinatorics_exact_and_logarithmic_agree() {
    assert_approx_eq!(
        combinatorics::ln_binomial_coefficient(10, 5),
        252.0_f64.ln(),
        1e-10_f64
    );
    assert_approx_eq!(combinatorics::ln_factorial(10), 3628800.0_f64.ln(), 1e-10_f64);

    // C(200, 100) does not fit in a u128, the ln version still works
    assert!(matches!(
        combinatorics::binomial_coefficient(200, 100),
        Err(BinomStatError::NumericalError)
    ));
    assert!(combinatorics::ln_binomial_coefficient(200, 100).is_finite());
}

#[test]
fn brent_finds_bounded_minima() {
    // interior minimum
    let x: f64 = brent_minimize(|x| (x - 0.3) * (x - 0.3), 0.0, 1.0);
    assert_approx_eq!(x, 0.3, 1e-7_f64);

    // minimum at the boundary: the optimizer must get arbitrarily close
    let x: f64 = brent_minimize(|x| x, 0.0, 1.0);
    assert!(x < 1e-4);

    // non-quadratic shape
    let x: f64 = brent_minimize(|x| (x - 0.72) * (x - 0.72) * (x - 0.72) * (x - 0.72), 0.0, 1.0);
    assert_approx_eq!(x, 0.72, 1e-2_f64);
}
