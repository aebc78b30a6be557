#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `BinomialStatistics` should have a snake case name convert the identifier to snake case: `binomial_statistics`"
// The rest of the names will follow the snake_case convention.

//! # Binomial Statistics
//!
//!
//! This library is a collection of statistics helpers for the
//! [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution):
//!
//! - [x] Probability core (factorial, binomial coefficient, [pmf](probability::pmf), [cdf](probability::cdf))
//! - [x] Descriptive statistics of the theoretical distribution (mean, variance, mode, skewness, kurtosis, entropy)
//! - [x] Random sampling (Bernoulli trials, binomial draws, reproducible batch generation)
//! - [x] Parameter estimation (method of moments, MLE)
//! - [x] Confidence intervals (normal approximation, [Clopper-Pearson](https://en.wikipedia.org/wiki/Binomial_proportion_confidence_interval#Clopper%E2%80%93Pearson_interval), Agresti-Coull)
//! - [x] Hypothesis testing (two-proportion Z-test, [Fisher's exact test](https://en.wikipedia.org/wiki/Fisher%27s_exact_test), chi-square and G goodness of fit, power analysis)
//! - [x] Monte Carlo simulation wrapper with fold metrics
//! - [x] Text charts for the pmf/cdf and simulation results
//! - [x] Flat file readers for observed success counts
//! - [ ] Multidimensional data support
//! - [ ] Bayesian estimation
//! - [x] Updated to rust 2024 version
//!
//! ## Probability and descriptive statistics
//!
//! All of the core functions are parameterized over `(n, p)` where `n` is the
//! number of trials and `p` the probability of success of each trial. The pair
//! is validated (`p` must belong to `[0, 1]`) before any computation and the
//! functions return [InvalidParameter](errors::BinomStatError::InvalidParameter)
//! otherwise.
//!
//! ## Estimation and tests
//!
//! Collected data (sequences of observed success counts) can be stored in
//! [Samples](samples::Samples), wich also allows effitient computation of
//! common statistics (mean, variance, median...).
//!
//! We also provide an implemetation of common tests and estimators:
//!
//!  - [x] [Two proportion Z-test](hypothesis::proportion_z_test) ([Wiki](https://en.wikipedia.org/wiki/Two-proportion_Z-test))
//!  - [x] [Continuity corrected Z-test](hypothesis::continuity_corrected_proportion_z_test) ([Wiki](https://en.wikipedia.org/wiki/Continuity_correction))
//!  - [x] [Fisher's exact test](hypothesis::fishers_exact_test) ([Wiki](https://en.wikipedia.org/wiki/Fisher%27s_exact_test))
//!  - [x] [Chi-square goodness of fit](hypothesis::chi_square_test) ([Wiki](https://en.wikipedia.org/wiki/Pearson%27s_chi-squared_test))
//!  - [x] [G-test goodness of fit](hypothesis::g_test_goodness_of_fit) ([Wiki](https://en.wikipedia.org/wiki/G-test))
//!  - [x] [Power analysis](hypothesis::power_analysis_binomial_proportions) ([Wiki](https://en.wikipedia.org/wiki/Power_(statistics)))
//!  - [x] [Method of moments](estimation::estimate_parameters) ([Wiki](https://en.wikipedia.org/wiki/Method_of_moments_(statistics)))
//!  - [x] [Maximum likelihood](estimation::mle_estimate_parameters) ([Wiki](https://en.wikipedia.org/wiki/Maximum_likelihood_estimation))
//!
//! The functions with optional arguments are [bon](https://docs.rs/bon) builders:
//!
//! ```rust
//! use BinomialStatistics::hypothesis::{proportion_z_test, Alternative};
//!
//! let p_value: f64 = proportion_z_test()
//!     .successes_1(50)
//!     .trials_1(100)
//!     .successes_2(40)
//!     .trials_2(100)
//!     .alternative(Alternative::Greater)
//!     .call()
//!     .unwrap();
//! ```
//!
//! ## Simulation
//!
//! [BinomialSimulation](simulation::BinomialSimulation) draws `n_experiments`
//! samples from `Binomial(n_trials, p_success)` and exposes the hypothesis
//! tests plus descriptive fold metrics over the generated results. The random
//! generator is always passed in explicitly, so seeding and reproducibility
//! are part of the function signatures instead of ambient process state.
//!
//! ***
//!

pub mod configuration;
pub mod dataio;
pub mod descriptive;
pub mod errors;
pub mod estimation;
pub mod euclid;
pub mod hypothesis;
pub mod plot;
pub mod probability;
pub mod samples;
pub mod sampling;
pub mod simulation;
