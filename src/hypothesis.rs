//! # Hypothesys testing
//!
//! This module contains the definition for [Alternative] and the
//! statistical tests for binomial proportions.
//!
//! ## Introduction:
//!
//! *This section is a brief introduction to statistical concepts*
//!
//! In statistics, when we want to make a claim about reality, we perform
//! an hypotesys test.
//!
//! ***
//!
//! We generate 2 hypothesys:
//!  - The null hypothesys (`H0`)
//!  - The alternative hypothesys (`Ha` or `H1`)
//!
//! The **null hypothesys** claims that there does not exist any effect (here:
//! the two proportions are equal, or the groups follow the expected
//! proportions). Under this hypothesys anything we observe is just a product
//! of random chance.
//!
//! The **alternative hypothesys** claims that there is an effect and is
//! usually the one that we want to prove it's true. The [Alternative] enum
//! selects its direction: [Alternative::Greater], [Alternative::Less] or the
//! deafult [Alternative::TwoSided].
//!
//! Each test function returns the corresponding
//! [P value](https://en.wikipedia.org/wiki/P-value):
//!  - The probability of the null distribution generating a statistic
//!     as extreme or more than the one obtained.
//!  - If the P value is **very small** (for example `P < 0.01`) => reject `H0`.
//!  - If the P value is **very large** (for example `0.1 < p`) => fail to reject `H0`.
//!
//! ## Implementation
//!
//! There are assumptions of the tests that we cannot check (IID samples, in
//! the z-tests a large enough sample for the normal aproximation to hold
//! trough the [CLT](https://en.wikipedia.org/wiki/Central_limit_theorem)).
//! If the conditions for a test are **not** fullfilled, then the result is
//! meaningless: the user needs to make sure the necessary assumprions hold.
//!

use crate::configuration;
use crate::errors::BinomStatError;
use crate::euclid;
use crate::euclid::combinatorics::ln_binomial_coefficient;

/// Defines Wich kind of alternative hypothesys are we testing against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Alternative {
    /// Tests if the proportion of group 1 is *significantly* bigger than the
    /// proportion of group 2. (`p_2 < p_1`)
    Greater,
    /// Tests if the proportion of group 1 is *significantly* smaller than the
    /// proportion of group 2. (`p_1 < p_2`)
    Less,
    /// Tests if the 2 proportions are *significantly* different. (`p_1 != p_2`)
    ///
    /// Divides the probability evenly between both sides.
    #[default]
    TwoSided,
}

/// Maps a z statistic to a P value trough the standard normal distribution.
fn normal_p_value(z_statistic: f64, alternative: Alternative) -> f64 {
    return match alternative {
        Alternative::TwoSided => 2.0 * (1.0 - euclid::std_normal_cdf(z_statistic.abs())),
        Alternative::Greater => 1.0 - euclid::std_normal_cdf(z_statistic),
        Alternative::Less => euclid::std_normal_cdf(z_statistic),
    };
}

/// Performs a [two proportion Z-test](https://en.wikipedia.org/wiki/Two-proportion_Z-test)
/// to compare two binomial proportions.
///
/// The statistic is the difference of the observed proportions over the
/// pooled standard error:
///
/// `z = (p_1 - p_2) / sqrt( pooled * (1 - pooled) * (1/t_1 + 1/t_2) )`
///
/// where `pooled = (s_1 + s_2) / (t_1 + t_2)`.
///
/// ## Assumptions of the test
///
/// 1. [IID samples](https://en.wikipedia.org/wiki/Independent_and_identically_distributed_random_variables)
/// 2. Both groups are large enough for the normal aproximation of the
///     proportion to hold (as a rule of thumb, at least 10 successes and 10
///     failures per group). For small groups use [fishers_exact_test].
///
/// ## Inputs:
///
/// 1. `successes_1`, `trials_1`: the counts of group 1.
/// 2. `successes_2`, `trials_2`: the counts of group 2.
/// 3. `alternative`: (optional) the direction of the test.
///      - The default is [Alternative::TwoSided].
///
/// ## Results
///
/// The P value, or [BinomStatError::InvalidParameter] if any trial count is
/// 0 or a success count exceeds its trial count.
#[bon::builder]
pub fn proportion_z_test(
    successes_1: u64,
    trials_1: u64,
    successes_2: u64,
    trials_2: u64,
    #[builder(default)] alternative: Alternative,
) -> Result<f64, BinomStatError> {
    if trials_1 == 0 || trials_2 == 0 {
        return Err(BinomStatError::InvalidParameter);
    }
    if trials_1 < successes_1 || trials_2 < successes_2 {
        return Err(BinomStatError::InvalidParameter);
    }

    let p_1: f64 = successes_1 as f64 / trials_1 as f64;
    let p_2: f64 = successes_2 as f64 / trials_2 as f64;

    let pooled_p: f64 = (successes_1 + successes_2) as f64 / (trials_1 + trials_2) as f64;
    let standard_error: f64 =
        (pooled_p * (1.0 - pooled_p) * (1.0 / trials_1 as f64 + 1.0 / trials_2 as f64)).sqrt();

    let z_statistic: f64 = (p_1 - p_2) / standard_error;

    return Ok(normal_p_value(z_statistic, alternative));
}

/// Performs a [two proportion Z-test](https://en.wikipedia.org/wiki/Two-proportion_Z-test)
/// with the [Yates continuity correction](https://en.wikipedia.org/wiki/Continuity_correction).
///
/// The observed difference is shrunk towards 0 by
/// `(1/t_1 + 1/t_2) / 2` (but never past 0) before standardizing. This
/// compensates the error of aproximating the discrete counts with a
/// continuous distribution and makes the test more conservative on small
/// groups.
///
/// Same inputs, validation and P value semantics as [proportion_z_test].
#[bon::builder]
pub fn continuity_corrected_proportion_z_test(
    successes_1: u64,
    trials_1: u64,
    successes_2: u64,
    trials_2: u64,
    #[builder(default)] alternative: Alternative,
) -> Result<f64, BinomStatError> {
    if trials_1 == 0 || trials_2 == 0 {
        return Err(BinomStatError::InvalidParameter);
    }
    if trials_1 < successes_1 || trials_2 < successes_2 {
        return Err(BinomStatError::InvalidParameter);
    }

    let p_1: f64 = successes_1 as f64 / trials_1 as f64;
    let p_2: f64 = successes_2 as f64 / trials_2 as f64;

    let pooled_p: f64 = (successes_1 + successes_2) as f64 / (trials_1 + trials_2) as f64;
    let standard_error: f64 =
        (pooled_p * (1.0 - pooled_p) * (1.0 / trials_1 as f64 + 1.0 / trials_2 as f64)).sqrt();

    let difference: f64 = p_1 - p_2;
    let correction: f64 = 0.5 * (1.0 / trials_1 as f64 + 1.0 / trials_2 as f64);
    let corrected_difference: f64 = difference.signum() * (difference.abs() - correction).max(0.0);

    let z_statistic: f64 = corrected_difference / standard_error;

    return Ok(normal_p_value(z_statistic, alternative));
}

/// Power analysis for the [two proportion Z-test](proportion_z_test):
/// solves the required sample size of group 1.
///
/// From the normal aproximation to the power of the test:
///
/// `n_1 = ceil( ((z_alpha + z_power) * se / (p_1 - p_2))^2 )`
///
/// where `se = sqrt( pooled * (1 - pooled) * (1 + 1/ratio) )` and
/// `pooled = (p_1 + ratio * p_2) / (1 + ratio)`. For a two sided test
/// `z_alpha` is taken at `1 - alpha/2`, otherwise at `1 - alpha`.
///
/// ## Inputs:
///
/// 1. `p_1`, `p_2`: the true proportions of the two groups. Must be
///    different (the formula divides by their difference).
/// 2. `alpha`: the desired significance level (`0 < alpha < 1`).
/// 3. `power`: the desired statistical power (`0 < power < 1`).
/// 4. `alternative`: (optional) the direction of the test.
///      - The default is [Alternative::TwoSided].
/// 5. `ratio`: (optional) the ratio of sample sizes between group 2 and
///    group 1. The default is `1.0`.
///
/// ## Results
///
/// The required sample size for group 1 (rounded up), or
/// [BinomStatError::InvalidParameter] on any invalid probability,
/// `p_1 == p_2` or a non-positive ratio.
#[bon::builder]
pub fn power_analysis_binomial_proportions(
    p_1: f64,
    p_2: f64,
    alpha: f64,
    power: f64,
    #[builder(default)] alternative: Alternative,
    #[builder(default = 1.0)] ratio: f64,
) -> Result<u64, BinomStatError> {
    #[allow(clippy::nonminimal_bool)]
    if !(0.0 <= p_1 && p_1 <= 1.0) || !(0.0 <= p_2 && p_2 <= 1.0) {
        return Err(BinomStatError::InvalidParameter);
    }
    #[allow(clippy::nonminimal_bool)]
    if !(0.0 < alpha && alpha < 1.0) || !(0.0 < power && power < 1.0) {
        return Err(BinomStatError::InvalidParameter);
    }
    if p_1 == p_2 || !(0.0 < ratio) || ratio.is_infinite() {
        return Err(BinomStatError::InvalidParameter);
    }

    let pooled_p: f64 = (p_1 + ratio * p_2) / (1.0 + ratio);
    let standard_error: f64 = (pooled_p * (1.0 - pooled_p) * (1.0 + 1.0 / ratio)).sqrt();

    let z_alpha: f64 = match alternative {
        Alternative::TwoSided => euclid::std_normal_quantile(1.0 - alpha * 0.5),
        Alternative::Greater | Alternative::Less => euclid::std_normal_quantile(1.0 - alpha),
    };
    let z_power: f64 = euclid::std_normal_quantile(power);

    let root: f64 = (z_alpha + z_power) * standard_error / (p_1 - p_2);
    let sample_size_1: f64 = (root * root).ceil();

    return Ok(sample_size_1 as u64);
}

/// Performs [Fisher's exact test](https://en.wikipedia.org/wiki/Fisher%27s_exact_test)
/// for the equality of two binomial proportions.
///
/// The test works on the 2x2 contingency table
///
/// ```text
/// [ s_1    t_1 - s_1 ]
/// [ s_2    t_2 - s_2 ]
/// ```
///
/// Conditioning on the margins, the count in the top-left cell follows a
/// [hypergeometric distribution](https://en.wikipedia.org/wiki/Hypergeometric_distribution),
/// wich gives exact tail probabilities (no large-sample aproximation, so
/// the test stays valid on small groups where [proportion_z_test] does not).
/// The point masses are evaluated in logarithmic space so large tables do
/// not overflow.
///
/// For [Alternative::TwoSided] the P value is the total mass of all the
/// tables that are as extreme or more than the observed one, i.e. with
/// `pmf(k) <= pmf(observed)` up to a relative tolerance of
/// [configuration::FISHER_RELATIVE_TOLERANCE].
///
/// ## Inputs:
///
/// 1. `successes_1`, `trials_1`: the counts of group 1.
/// 2. `successes_2`, `trials_2`: the counts of group 2.
/// 3. `alternative`: (optional) the direction of the test.
///      - The default is [Alternative::TwoSided].
///
/// ## Results
///
/// The P value, or:
///  - `NaN` when either trial count is 0 (the table is empty: there is
///     nothing to test).
///  - [BinomStatError::InvalidParameter] if a success count exceeds its
///     trial count.
#[bon::builder]
pub fn fishers_exact_test(
    successes_1: u64,
    trials_1: u64,
    successes_2: u64,
    trials_2: u64,
    #[builder(default)] alternative: Alternative,
) -> Result<f64, BinomStatError> {
    if trials_1 < successes_1 || trials_2 < successes_2 {
        return Err(BinomStatError::InvalidParameter);
    }
    if trials_1 == 0 || trials_2 == 0 {
        return Ok(f64::NAN);
    }

    let total_successes: u64 = successes_1 + successes_2;

    // support of the hypergeometric: the top-left cell can range from
    // `max(0, s - t_2)` to `min(t_1, s)`
    let k_min: u64 = total_successes.saturating_sub(trials_2);
    let k_max: u64 = total_successes.min(trials_1);

    let ln_denominator: f64 = ln_binomial_coefficient(trials_1 + trials_2, total_successes);
    let point_mass = |k: u64| -> f64 {
        let ln_mass: f64 = ln_binomial_coefficient(trials_1, k)
            + ln_binomial_coefficient(trials_2, total_successes - k)
            - ln_denominator;
        return ln_mass.exp();
    };

    let observed_mass: f64 = point_mass(successes_1);

    let p_value: f64 = match alternative {
        Alternative::Greater => (successes_1..=k_max).map(point_mass).sum::<f64>(),
        Alternative::Less => (k_min..=successes_1).map(point_mass).sum::<f64>(),
        Alternative::TwoSided => {
            let threshold: f64 = observed_mass * (1.0 + configuration::FISHER_RELATIVE_TOLERANCE);
            (k_min..=k_max)
                .map(point_mass)
                .filter(|&mass| mass <= threshold)
                .sum::<f64>()
        }
    };

    // the summed masses can exceed 1 by a few ulps
    return Ok(p_value.min(1.0));
}

/// Shared body of [chi_square_test] and [g_test_goodness_of_fit]: computes
/// the expected successes per group and maps the statistic produced by
/// `statistic_fn` trough the upper tail of the chi-square distribution with
/// `k - 1` degrees of freedom.
fn goodness_of_fit<F>(
    data: &[(u64, u64)],
    expected_proportions: Option<&[f64]>,
    statistic_fn: F,
) -> Result<f64, BinomStatError>
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    if data.is_empty() {
        return Err(BinomStatError::InvalidParameter);
    }
    if let Some(proportions) = expected_proportions {
        if proportions.len() != data.len() {
            return Err(BinomStatError::InvalidParameter);
        }
    }

    let group_count: usize = data.len();
    let observed_successes: Vec<f64> = data.iter().map(|&(s, _)| s as f64).collect();

    let total_successes: f64 = observed_successes.iter().sum::<f64>();
    let uniform: f64 = 1.0 / group_count as f64;
    let expected_successes: Vec<f64> = match expected_proportions {
        Some(proportions) => proportions
            .iter()
            .map(|&proportion| total_successes * proportion)
            .collect(),
        None => vec![total_successes * uniform; group_count],
    };

    let statistic: f64 = statistic_fn(&observed_successes, &expected_successes);

    let degrees_of_freedom: f64 = (group_count - 1) as f64;

    // Zero-trial tables make the statistic NaN (0/0), wich propagates to
    // the P value instead of erroring.
    return Ok(euclid::regularized_upper_gamma(
        degrees_of_freedom * 0.5,
        statistic * 0.5,
    ));
}

/// Performs a [chi-square test](https://en.wikipedia.org/wiki/Pearson%27s_chi-squared_test)
/// for the equality of multiple binomial proportions.
///
/// The statistic is `sum (O - E)^2 / E` over the groups, where `O` are the
/// observed successes and `E` the expected successes under the null
/// hypothesys. Its null distribution is a chi-square with `k - 1` degrees
/// of freedom.
///
/// ## Inputs:
///
/// 1. `data`: the `(successes, trials)` pair of each group.
/// 2. `expected_proportions`: (optional) the expected share of the total
///    successes of each group. The default is uniform (`1/k` each).
///
/// ## Results
///
/// The P value, or [BinomStatError::InvalidParameter] if `data` is empty or
/// the length of `expected_proportions` does not match. All-zero tables
/// produce a NaN P value.
#[bon::builder]
pub fn chi_square_test(
    data: &[(u64, u64)],
    expected_proportions: Option<&[f64]>,
) -> Result<f64, BinomStatError> {
    return goodness_of_fit(data, expected_proportions, |observed, expected| {
        let mut statistic: f64 = 0.0;
        for (&o, &e) in observed.iter().zip(expected.iter()) {
            let residual: f64 = o - e;
            statistic += residual * residual / e;
        }
        statistic
    });
}

/// Performs a [G-test](https://en.wikipedia.org/wiki/G-test) of goodness of
/// fit: the likelihood-ratio analog of [chi_square_test].
///
/// The statistic is `2 * sum O * ln(O / E)`, with the same null
/// distribution (chi-square, `k - 1` degrees of freedom) and the same
/// inputs, validation and NaN semantics as [chi_square_test].
#[bon::builder]
pub fn g_test_goodness_of_fit(
    data: &[(u64, u64)],
    expected_proportions: Option<&[f64]>,
) -> Result<f64, BinomStatError> {
    return goodness_of_fit(data, expected_proportions, |observed, expected| {
        let mut statistic: f64 = 0.0;
        for (&o, &e) in observed.iter().zip(expected.iter()) {
            statistic += o * (o / e).ln();
        }
        2.0 * statistic
    });
}

/// The plain [Wald confidence interval](https://en.wikipedia.org/wiki/Binomial_proportion_confidence_interval#Normal_approximation_interval)
/// for a single observed proportion.
///
/// `p_hat +- z * sqrt(p_hat * (1 - p_hat) / trials)` with `z` at
/// `1 - alpha/2`, clamped to `[0, 1]`.
///
/// ## Inputs:
///
/// 1. `successes`, `trials`: the observed counts. `trials` must be nonzero
///    and `successes <= trials`.
/// 2. `alpha`: (optional) the significance level. The default is `0.05`.
///    It must belong to `[0, 1]`.
///
/// ## Results
///
/// The `(lower, upper)` bounds, or [BinomStatError::InvalidParameter].
#[bon::builder]
pub fn proportion_confidence_interval(
    successes: u64,
    trials: u64,
    #[builder(default = configuration::DEFAULT_SIGNIFICANCE_LEVEL)] alpha: f64,
) -> Result<(f64, f64), BinomStatError> {
    if trials == 0 || trials < successes {
        return Err(BinomStatError::InvalidParameter);
    }
    #[allow(clippy::nonminimal_bool)]
    if !(0.0 <= alpha && alpha <= 1.0) {
        return Err(BinomStatError::InvalidParameter);
    }

    let p_hat: f64 = successes as f64 / trials as f64;
    let z_score: f64 = euclid::std_normal_quantile(1.0 - alpha * 0.5);
    let margin_of_error: f64 = z_score * (p_hat * (1.0 - p_hat) / trials as f64).sqrt();

    let lower_bound: f64 = (p_hat - margin_of_error).max(0.0);
    let upper_bound: f64 = (p_hat + margin_of_error).min(1.0);

    return Ok((lower_bound, upper_bound));
}

/// [Cohen's h](https://en.wikipedia.org/wiki/Cohen%27s_h) effect size for
/// the difference of two proportions.
///
/// `h = 2*asin(sqrt(p_1)) - 2*asin(sqrt(p_2))`
///
/// The arcsine transform stabilizes the variance of a proportion, so equal
/// values of `h` represent comparable effects anywhere in `[0, 1]`. As a
/// rule of thumb `0.2` is a small effect, `0.5` medium and `0.8` large.
///
/// Returns [BinomStatError::InvalidParameter] if either proportion does not
/// belong to `[0, 1]`.
pub fn cohen_h_effect_size(p_1: f64, p_2: f64) -> Result<f64, BinomStatError> {
    #[allow(clippy::nonminimal_bool)]
    if !(0.0 <= p_1 && p_1 <= 1.0) || !(0.0 <= p_2 && p_2 <= 1.0) {
        return Err(BinomStatError::InvalidParameter);
    }

    let phi_1: f64 = 2.0 * p_1.sqrt().asin();
    let phi_2: f64 = 2.0 * p_2.sqrt().asin();

    return Ok(phi_1 - phi_2);
}
