use BinomialStatistics::errors::BinomStatError;
use BinomialStatistics::probability::*;
use assert_approx_eq::assert_approx_eq;

#[test]
fn factorial_literals() {
    assert_eq!(factorial(0).unwrap(), 1);
    assert_eq!(factorial(1).unwrap(), 1);
    assert_eq!(factorial(5).unwrap(), 120);
    assert_eq!(factorial(10).unwrap(), 3628800);
}

#[test]
fn factorial_overflow() {
    // 34! still fits in a u128, 35! does not
    assert!(factorial(34).is_ok());
    assert!(matches!(factorial(35), Err(BinomStatError::NumericalError)));
}

#[test]
fn binomial_coefficient_literals() {
    assert_eq!(binomial_coefficient(10, 5).unwrap(), 252);
    assert_eq!(binomial_coefficient(10, 0).unwrap(), 1);
    assert_eq!(binomial_coefficient(10, 10).unwrap(), 1);
    assert_eq!(binomial_coefficient(22, 17).unwrap(), 26334);
    assert_eq!(binomial_coefficient(0, 0).unwrap(), 1);
}

#[test]
fn binomial_coefficient_symmetry() {
    for n in 0..=30_u64 {
        for k in 0..=n {
            assert_eq!(
                binomial_coefficient(n, k).unwrap(),
                binomial_coefficient(n, n - k).unwrap()
            );
        }
    }
}

#[test]
fn binomial_coefficient_invalid() {
    assert!(matches!(
        binomial_coefficient(5, 6),
        Err(BinomStatError::InvalidParameter)
    ));
}

#[test]
fn pmf_literal() {
    // C(10, 5) / 2^10 = 252 / 1024
    assert_approx_eq!(pmf(5, 10, 0.5).unwrap(), 0.24609375, 1e-12_f64);
}

#[test]
fn pmf_mass_sums_to_one() {
    struct Round {
        n: u64,
        p: f64,
    }

    let rounds = [
        Round { n: 10, p: 0.5 },
        Round { n: 22, p: 0.17 },
        Round { n: 1, p: 0.99 },
        Round { n: 0, p: 0.3 },
        Round { n: 64, p: 0.75 },
    ];

    for round in rounds {
        let mut total: f64 = 0.0;
        for k in 0..=round.n {
            total += pmf(k, round.n, round.p).unwrap();
        }
        assert_approx_eq!(total, 1.0, 1e-10_f64);
    }
}

#[test]
fn pmf_degenerate_p() {
    assert_approx_eq!(pmf(0, 10, 0.0).unwrap(), 1.0, 1e-15_f64);
    assert_approx_eq!(pmf(3, 10, 0.0).unwrap(), 0.0, 1e-15_f64);
    assert_approx_eq!(pmf(10, 10, 1.0).unwrap(), 1.0, 1e-15_f64);
    assert_approx_eq!(pmf(9, 10, 1.0).unwrap(), 0.0, 1e-15_f64);
}

#[test]
fn pmf_invalid_inputs() {
    assert!(matches!(
        pmf(5, 10, 1.5),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        pmf(5, 10, -0.1),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        pmf(5, 10, f64::NAN),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        pmf(11, 10, 0.5),
        Err(BinomStatError::InvalidParameter)
    ));
}

#[test]
fn pmf_wide_distribution_stays_finite() {
    // C(1000, 500) overflows a u128: the ln-space fallback kicks in.
    let mass: f64 = pmf(500, 1000, 0.5).unwrap();
    assert!(mass.is_finite());
    // central mass: 1/sqrt(500*pi) * (1 - 1/4000 + O(n^-2))
    assert_approx_eq!(mass, 0.02522502, 1e-6_f64);
}

#[test]
fn cdf_full_range_is_one() {
    for p in [0.0, 0.17, 0.5, 0.99, 1.0] {
        assert_approx_eq!(cdf(10, 10, p).unwrap(), 1.0, 1e-12_f64);
    }
}

#[test]
fn cdf_is_monotone() {
    let mut previous: f64 = -1.0;
    for x in 0..=20_u64 {
        let value: f64 = cdf(x, 20, 0.3).unwrap();
        assert!(previous <= value);
        previous = value;
    }
}

#[test]
fn cdf_literal() {
    // P(X <= 4) of Binomial(10, 0.5) = (2^10/2 - 252/2) / 2^10
    assert_approx_eq!(cdf(4, 10, 0.5).unwrap(), 0.376953125, 1e-12_f64);
}

#[test]
fn cdf_invalid_inputs() {
    assert!(matches!(
        cdf(11, 10, 0.5),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        cdf(5, 10, 1.5),
        Err(BinomStatError::InvalidParameter)
    ));
}
