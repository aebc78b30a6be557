
//! This file contains the deafult values and other value choices used trough the library.
//!

/// The maximum likelihood estimator maximizes the log-likelihood over
/// `p` in `[0, 1]` with a bounded [Brent](https://en.wikipedia.org/wiki/Brent%27s_method)
/// minimizer. The search stops when the bracket around the optimum is
/// smaller than [BRENT_TOLERANCE] (or after [BRENT_MAXIMUM_ITERATIONS]).
///
/// There is no perfect value that will work for every dataset. Increasing the
/// precision comes with an extra computational cost. This values are just a
/// mere recomendation.
pub static BRENT_TOLERANCE: f64 = 1e-10;

/// Iteration cap for the bounded Brent minimizer. With a golden-section
/// fallback the bracket shrinks by at least ~0.38 per iteration, so 128
/// iterations are far more than needed for [BRENT_TOLERANCE].
pub static BRENT_MAXIMUM_ITERATIONS: usize = 128;

/// Absolute tolerance when inverting the regularized incomplete beta
/// function (used for the [Clopper-Pearson](https://en.wikipedia.org/wiki/Binomial_proportion_confidence_interval#Clopper%E2%80%93Pearson_interval)
/// interval).
pub static BETA_INVERSION_TOLERANCE: f64 = 1e-12;

/// Iteration cap when inverting the regularized incomplete beta function.
pub static BETA_INVERSION_MAXIMUM_ITERATIONS: usize = 200;

/// Determines if a Newton's method iteration is used in the
/// standard normal quantile function.
///
/// It generally improves precision, but you may want to disable it
/// if it leads to errors.
pub static QUANTILE_USE_NEWTONS_ITER: bool = true;

/// The deafult confidence level for the parameter estimation
/// confidence intervals (`0.95` = 95%).
pub static DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// The deafult significance level for the plain proportion
/// confidence interval.
pub static DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Relative tolerance when comparing point masses in the two-sided
/// [Fisher's exact test](https://en.wikipedia.org/wiki/Fisher%27s_exact_test).
/// A table counts as "as extreme" as the observed one when its mass is
/// `<= observed_mass * (1 + FISHER_RELATIVE_TOLERANCE)`.
pub static FISHER_RELATIVE_TOLERANCE: f64 = 1e-7;

/// The deafult number of folds for the simulation fold metrics.
pub static DEFAULT_NUMBER_OF_FOLDS: usize = 5;

/// The deafult sliding window size for the success probability
/// evolution chart.
pub static DEFAULT_MOVING_AVERAGE_WINDOW: usize = 10;

/// The width (in characters) of the bars on the text charts.
pub static CHART_BAR_WIDTH: usize = 50;
