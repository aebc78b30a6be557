//! Probability core of the [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
//!
//! The distribution models the number of successes of `n` independent
//! [Bernoulli trials](https://en.wikipedia.org/wiki/Bernoulli_trial) with
//! succes probability `p`.
//!
//! For example, if you whant to know the probability to get exacly 5 heads
//! in 10 throws of a coin, we can model this as a binomial distribution with
//! parameters `n = 10` and `p = 0.5` and evaluate the [pmf] at `5`. To get
//! the probability of getting 4 heads or less we can compute the [cdf] at `4`.
//!

use crate::errors::BinomStatError;
use crate::euclid::combinatorics;

pub use crate::euclid::combinatorics::{binomial_coefficient, factorial};

/// Checks that `(n, p)` are valid parameters for a binomial distribution.
///
/// `n` is unsigned, so only `p` can actually be malformed: it must be finite
/// and belong to the interval `[0.0, 1.0]`. Otherwise
/// [BinomStatError::InvalidParameter] is returned.
///
/// Every function in this module and in [crate::descriptive] calls this
/// before computing anything.
pub const fn validate(_n: u64, p: f64) -> Result<(), BinomStatError> {
    if !(0.0 <= p && p <= 1.0) {
        // also catches NaN (all comparisons with NaN are false)
        return Err(BinomStatError::InvalidParameter);
    }

    return Ok(());
}

/// The [probability mass function](https://en.wikipedia.org/wiki/Probability_mass_function)
/// of a binomial distribution: the probability of observing exacly `k`
/// successes in `n` trials.
///
/// `pmf(k, n, p) = C(n, k) * p^k * (1 - p)^(n - k)`
///
/// ## Inputs:
///
/// 1. `k`: the number of successes. Must fullfill `k <= n`.
/// 2. `n`: the number of trials.
/// 3. `p`: the probability of success of each trial.
///
/// ## Results
///
/// The probability, or [BinomStatError::InvalidParameter] if `(n, p)` fail
/// [validate] or `n < k`.
///
/// When the exact binomial coefficient does not fit in a `u128` the value is
/// computed in logarithmic space instead, so very wide distributions stay
/// finite.
pub fn pmf(k: u64, n: u64, p: f64) -> Result<f64, BinomStatError> {
    validate(n, p)?;
    if n < k {
        return Err(BinomStatError::InvalidParameter);
    }

    // Degenerate trials put all the mass on a single point.
    if p == 0.0 {
        return Ok(if k == 0 { 1.0 } else { 0.0 });
    }
    if p == 1.0 {
        return Ok(if k == n { 1.0 } else { 0.0 });
    }

    let q: f64 = 1.0 - p;
    let fits_powi: bool = k <= i32::MAX as u64 && (n - k) <= i32::MAX as u64;

    if fits_powi {
        if let Ok(binomial_coef) = combinatorics::binomial_coefficient(n, k) {
            let prob_p: f64 = p.powi(k as i32);
            let prob_q: f64 = q.powi((n - k) as i32);
            return Ok((binomial_coef as f64) * prob_p * prob_q);
        }
    }

    // The coefficient overflows u128: evaluate in ln space.
    let ln_mass: f64 = combinatorics::ln_binomial_coefficient(n, k)
        + (k as f64) * p.ln()
        + ((n - k) as f64) * q.ln();
    return Ok(ln_mass.exp());
}

/// The [cumulative distribution function](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
/// of a binomial distribution: the probability of observing at most `x`
/// successes in `n` trials.
///
/// The mass terms are summed directly, wich is fine for moderate `n`. (For
/// very large `n` a regularized incomplete beta formulation would be
/// cheaper, but it is not needed at the scales this library targets.)
///
/// ## Inputs:
///
/// 1. `x`: the maximum number of successes. Must fullfill `x <= n`.
/// 2. `n`: the number of trials.
/// 3. `p`: the probability of success of each trial.
///
/// ## Results
///
/// The cumulative probability, or [BinomStatError::InvalidParameter] if
/// `(n, p)` fail [validate] or `n < x`.
pub fn cdf(x: u64, n: u64, p: f64) -> Result<f64, BinomStatError> {
    validate(n, p)?;
    if n < x {
        return Err(BinomStatError::InvalidParameter);
    }

    let mut cumulative_probability: f64 = 0.0;
    for k in 0..=x {
        cumulative_probability += pmf(k, n, p)?;
    }

    return Ok(cumulative_probability);
}
