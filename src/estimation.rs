//! # Parameter estimation
//!
//! Estimators for the parameters `(n, p)` of a binomial distribution given
//! a sample of observed success counts, plus confidence intervals for `p`.
//!
//! Two point estimators are provided:
//!
//!  - [estimate_parameters]: [method of moments](https://en.wikipedia.org/wiki/Method_of_moments_(statistics)).
//!     Fast, closed form, but can be fooled by overdispersed data.
//!  - [mle_estimate_parameters]: [maximum likelihood](https://en.wikipedia.org/wiki/Maximum_likelihood_estimation).
//!     Fixes `n` to the sample maximum and optimizes the
//!     [log likelihood](log_likelihood) over `p` numerically.
//!
//! And three confidence interval constructions for `p`, from cheapest to
//! most exact:
//!
//!  - [confidence_interval_normal_approximation]
//!  - [confidence_interval_agresti_coull]
//!  - [confidence_interval_clopper_pearson]
//!
//! All of them fail with [BinomStatError::InvalidParameter] on an empty
//! sample or a confidence level outside `[0, 1]`.
//!

use crate::configuration;
use crate::errors::BinomStatError;
use crate::euclid;
use crate::probability::pmf;
use crate::samples::Samples;

/// Estimates `(n, p)` with the [method of moments](https://en.wikipedia.org/wiki/Method_of_moments_(statistics)).
///
/// Matching the theoretical mean `n*p` and variance `n*p*(1-p)` against the
/// sample mean and (population) variance gives:
///
/// `p = 1 - variance/mean` and `n = round(mean/p)`
///
/// `p` is clamped to at most `0.99`: when the sample variance is tiny
/// relative to the mean, the raw estimator pushes `p` towards 1 and
/// `n = mean/p` would blow up.
///
/// ## Inputs:
///
/// 1. `sample`: observed success counts, all drawn with the same (unknown)
///    `n` and `p`.
///
/// ## Results
///
/// The estimated `(n, p)`, or:
///  - [BinomStatError::InvalidParameter] if `sample` is empty.
///  - [BinomStatError::DegenerateInput] if the sample variance is exactly 0
///    (all counts equal: `n` and `p` cannot be separated) or the variance
///    exceeds the mean (no binomial distribution has that shape).
pub fn estimate_parameters(sample: &[u64]) -> Result<(u64, f64), BinomStatError> {
    let mut samples: Samples = Samples::new(sample)?;

    let sample_mean: f64 = samples.mean();
    let sample_variance: f64 = samples.variance();

    if sample_variance == 0.0 {
        return Err(BinomStatError::DegenerateInput);
    }

    let mut p_estimate: f64 = 1.0 - sample_variance / sample_mean;
    if 0.99 < p_estimate {
        p_estimate = 0.99;
    }

    if p_estimate <= 0.0 {
        // variance > mean: overdispersed, not expressible as a binomial
        return Err(BinomStatError::DegenerateInput);
    }

    let n_estimate: u64 = (sample_mean / p_estimate).round() as u64;

    return Ok((n_estimate, p_estimate));
}

/// The log likelihood of the sample given a succes probability `p`.
///
/// `sum log( pmf(x, max(sample), p) )` over every `x` in the sample.
///
/// The number of trials is taken to be `max(sample)` on **every call** (it
/// is not estimated elsewhere and passed in). [mle_estimate_parameters]
/// relies on this exact convention.
///
/// Returns [BinomStatError::InvalidParameter] if the sample is empty or `p`
/// does not belong to `[0, 1]`. The result is `-inf` whenever any sample
/// point has zero mass under `p` (for example `p = 0` with a nonzero
/// count).
pub fn log_likelihood(p: f64, sample: &[u64]) -> Result<f64, BinomStatError> {
    if sample.is_empty() {
        return Err(BinomStatError::InvalidParameter);
    }

    // non-empty: unwrap is safe
    let n: u64 = *sample.iter().max().unwrap();

    let mut log_likelihood_value: f64 = 0.0;
    for &x in sample {
        log_likelihood_value += pmf(x, n, p)?.ln();
    }

    return Ok(log_likelihood_value);
}

/// Estimates `(n, p)` with [maximum likelihood](https://en.wikipedia.org/wiki/Maximum_likelihood_estimation).
///
/// `n` is fixed to `max(sample)` and `p` maximizes [log_likelihood] over
/// `[0, 1]`, found with the bounded Brent minimizer
/// ([euclid::brent_minimize]) on the negated likelihood.
///
/// ## Results
///
/// The estimated `(n, p)`, or [BinomStatError::InvalidParameter] if the
/// sample is empty.
pub fn mle_estimate_parameters(sample: &[u64]) -> Result<(u64, f64), BinomStatError> {
    if sample.is_empty() {
        return Err(BinomStatError::InvalidParameter);
    }

    // non-empty: unwrap is safe
    let n_estimate: u64 = *sample.iter().max().unwrap();

    let negated_log_likelihood = |p: f64| -> f64 {
        // p always belongs to [0, 1] inside the optimizer and the sample is
        // non-empty, so the only failure mode left is a zero-mass point,
        // wich ln() already maps to -inf.
        return -log_likelihood(p, sample).unwrap_or(f64::INFINITY);
    };

    let p_estimate: f64 = euclid::brent_minimize(negated_log_likelihood, 0.0, 1.0);

    return Ok((n_estimate, p_estimate));
}

/// Confidence interval for `p` using the normal aproximation.
///
/// The point estimate comes from [estimate_parameters] and the interval is
/// `p_hat +- z * sqrt(p_hat * (1 - p_hat) / len)`, clamped to `[0, 1]`,
/// where `z` is the standard normal quantile at `1 - (1 - cl)/2`.
///
/// Please note that the normal aproximation might not be accurate for small
/// sample sizes or extreme probabilities (close to 0 or 1): prefer
/// [confidence_interval_clopper_pearson] there.
///
/// ## Inputs:
///
/// 1. `sample`: observed success counts.
/// 2. `confidence_level`: (optional) the desired confidence level.
///      - The default is `0.95`.
///      - It must belong to `[0, 1]`.
///
/// ## Results
///
/// The `(lower, upper)` bounds, or [BinomStatError::InvalidParameter] /
/// [BinomStatError::DegenerateInput] under the same conditions as
/// [estimate_parameters].
#[bon::builder]
pub fn confidence_interval_normal_approximation(
    sample: &[u64],
    #[builder(default = configuration::DEFAULT_CONFIDENCE_LEVEL)] confidence_level: f64,
) -> Result<(f64, f64), BinomStatError> {
    if sample.is_empty() || !(0.0 <= confidence_level && confidence_level <= 1.0) {
        return Err(BinomStatError::InvalidParameter);
    }

    let (_, p_estimate): (u64, f64) = estimate_parameters(sample)?;

    let len: f64 = sample.len() as f64;
    let standard_error: f64 = (p_estimate * (1.0 - p_estimate) / len).sqrt();

    let z_score: f64 = euclid::std_normal_quantile(1.0 - (1.0 - confidence_level) * 0.5);
    let margin_of_error: f64 = z_score * standard_error;

    let lower_bound: f64 = (p_estimate - margin_of_error).max(0.0);
    let upper_bound: f64 = (p_estimate + margin_of_error).min(1.0);

    return Ok((lower_bound, upper_bound));
}

/// Confidence interval for `p` using the
/// [Clopper-Pearson](https://en.wikipedia.org/wiki/Binomial_proportion_confidence_interval#Clopper%E2%80%93Pearson_interval)
/// (exact) method.
///
/// The total number of successes `s` over the total number of trials
/// `N = len * n_trials` (with `n_trials` taken from the moment estimate) is
/// treated as a single binomial observation, and the bounds come from the
/// Beta quantile function:
///
///  - `lower = BetaQuantile(alpha/2; s, N - s + 1)`
///  - `upper = BetaQuantile(1 - alpha/2; s + 1, N - s)`
///
/// When `s = 0` (or `s = N`) the corresponding Beta parameter degenerates
/// to 0 and that bound is NaN.
///
/// ## Inputs:
///
/// 1. `sample`: observed success counts.
/// 2. `confidence_level`: (optional) the desired confidence level.
///      - The default is `0.95`.
///      - It must belong to `[0, 1]`.
///
/// ## Results
///
/// The `(lower, upper)` bounds, or [BinomStatError::InvalidParameter] /
/// [BinomStatError::DegenerateInput] under the same conditions as
/// [estimate_parameters].
#[bon::builder]
pub fn confidence_interval_clopper_pearson(
    sample: &[u64],
    #[builder(default = configuration::DEFAULT_CONFIDENCE_LEVEL)] confidence_level: f64,
) -> Result<(f64, f64), BinomStatError> {
    if sample.is_empty() || !(0.0 <= confidence_level && confidence_level <= 1.0) {
        return Err(BinomStatError::InvalidParameter);
    }

    let (n_trials, _): (u64, f64) = estimate_parameters(sample)?;

    let total_successes: f64 = sample.iter().sum::<u64>() as f64;
    let total_trials: f64 = (sample.len() as u64 * n_trials) as f64;

    let alpha: f64 = 1.0 - confidence_level;

    let lower_bound: f64 = euclid::inverse_incomplete_beta(
        alpha * 0.5,
        total_successes,
        total_trials - total_successes + 1.0,
    );
    let upper_bound: f64 = euclid::inverse_incomplete_beta(
        1.0 - alpha * 0.5,
        total_successes + 1.0,
        total_trials - total_successes,
    );

    return Ok((lower_bound, upper_bound));
}

/// Confidence interval for `p` using the
/// [Agresti-Coull](https://en.wikipedia.org/wiki/Binomial_proportion_confidence_interval#Agresti%E2%80%93Coull_interval)
/// method.
///
/// Note that this method uses a different parameterization than the other
/// two: each sample entry is treated as a single binary outcome, so the
/// successes are `sum(sample)` and the trials are `len(sample)`. The count
/// is adjusted by `z^2` (`z^2 / 2` successes added), the proportion and
/// standard error are recomputed on the adjusted counts, and the interval
/// is clamped to `[0, 1]`.
///
/// ## Inputs:
///
/// 1. `sample`: observed binary outcomes.
/// 2. `confidence_level`: (optional) the desired confidence level.
///      - The default is `0.95`.
///      - It must belong to `[0, 1]`.
///
/// ## Results
///
/// The `(lower, upper)` bounds, or [BinomStatError::InvalidParameter] if
/// the sample is empty or the confidence level is invalid.
#[bon::builder]
pub fn confidence_interval_agresti_coull(
    sample: &[u64],
    #[builder(default = configuration::DEFAULT_CONFIDENCE_LEVEL)] confidence_level: f64,
) -> Result<(f64, f64), BinomStatError> {
    if sample.is_empty() || !(0.0 <= confidence_level && confidence_level <= 1.0) {
        return Err(BinomStatError::InvalidParameter);
    }

    let len: f64 = sample.len() as f64;
    let successes: f64 = sample.iter().sum::<u64>() as f64;

    let z_score: f64 = euclid::std_normal_quantile(1.0 - (1.0 - confidence_level) * 0.5);
    let z_squared: f64 = z_score * z_score;

    let adjusted_n: f64 = len + z_squared;
    let adjusted_p: f64 = (successes + z_squared * 0.5) / adjusted_n;

    let standard_error: f64 = (adjusted_p * (1.0 - adjusted_p) / adjusted_n).sqrt();
    let margin_of_error: f64 = z_score * standard_error;

    let lower_bound: f64 = (adjusted_p - margin_of_error).max(0.0);
    let upper_bound: f64 = (adjusted_p + margin_of_error).min(1.0);

    return Ok((lower_bound, upper_bound));
}
