//! Descriptive statistics of the theoretical binomial distribution.
//!
//! Every function here is a closed form expression of `(n, p)`: they describe
//! the distribution itself, **not** sample data. (For sample data see
//! [crate::samples]).
//!
//! All the functions share the validation contract of
//! [crate::probability::validate].
//!

use crate::errors::BinomStatError;
use crate::probability::{pmf, validate};

/// The [mean](https://en.wikipedia.org/wiki/Expected_value) of a binomial
/// distribution: `n * p`.
pub fn mean(n: u64, p: f64) -> Result<f64, BinomStatError> {
    validate(n, p)?;
    return Ok(n as f64 * p);
}

/// The [variance](https://en.wikipedia.org/wiki/Variance) of a binomial
/// distribution: `n * p * (1 - p)`.
pub fn variance(n: u64, p: f64) -> Result<f64, BinomStatError> {
    validate(n, p)?;
    let q: f64 = 1.0 - p;
    return Ok(n as f64 * p * q);
}

/// The [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation)
/// of a binomial distribution: `sqrt(n * p * (1 - p))`.
pub fn standard_deviation(n: u64, p: f64) -> Result<f64, BinomStatError> {
    return Ok(variance(n, p)?.sqrt());
}

/// The [mode](https://en.wikipedia.org/wiki/Mode_(statistics)) of a binomial
/// distribution: `floor((n + 1) * p)`.
///
/// The boundary `p = 1` is special cased to `n` (the floor formula would
/// give the out of range value `n + 1`).
pub fn mode(n: u64, p: f64) -> Result<u64, BinomStatError> {
    validate(n, p)?;

    if p == 1.0 {
        return Ok(n);
    }

    return Ok(((n + 1) as f64 * p).floor() as u64);
}

/// The [skewness](https://en.wikipedia.org/wiki/Skewness) of a binomial
/// distribution.
///
/// `skewness = (1 - 2*p) / sqrt(n * p * (1 - p))`
///
/// Note that for degenerate distributions (`n = 0` or `p` in `{0, 1}`) the
/// denominator is 0 and the result is not finite.
pub fn skewness(n: u64, p: f64) -> Result<f64, BinomStatError> {
    validate(n, p)?;

    let numerator: f64 = 1.0 - 2.0 * p;
    let denomiantor: f64 = (p * (1.0 - p) * (n as f64)).sqrt();
    return Ok(numerator / denomiantor);
}

/// The excess [kurtosis](https://en.wikipedia.org/wiki/Kurtosis) of a
/// binomial distribution.
///
/// `kurtosis = (1 - 6*p*(1 - p)) / (n * p * (1 - p))`
///
/// Note that for degenerate distributions (`n = 0` or `p` in `{0, 1}`) the
/// denominator is 0 and the result is not finite.
pub fn kurtosis(n: u64, p: f64) -> Result<f64, BinomStatError> {
    validate(n, p)?;

    let numerator: f64 = 1.0 - 6.0 * p * (1.0 - p);
    let denomiantor: f64 = p * (1.0 - p) * (n as f64);
    return Ok(numerator / denomiantor);
}

/// The [entropy](https://en.wikipedia.org/wiki/Entropy_(information_theory))
/// (in bits) of a binomial distribution.
///
/// `entropy = -sum_{k = 0}^{n} pmf(k, n, p) * log2(pmf(k, n, p))`
///
/// Terms with `pmf = 0` are skipped (their limit contribution is 0 and
/// evaluating `log2(0)` directly would poison the sum). A degenerate `p`
/// (numerically 0 or 1) concentrates all the mass on one point, wich has
/// zero uncertainty, so the entropy is 0.
pub fn entropy(n: u64, p: f64) -> Result<f64, BinomStatError> {
    validate(n, p)?;

    if p == 0.0 || p == 1.0 {
        return Ok(0.0);
    }

    let mut entropy_sum: f64 = 0.0;
    for k in 0..=n {
        let prob: f64 = pmf(k, n, p)?;
        if 0.0 < prob {
            entropy_sum += prob * prob.log2();
        }
    }

    return Ok(-entropy_sum);
}
