//! Monte Carlo simulation of repeated binomial experiments.
//!
//! [BinomialSimulation] is a small state machine:
//!
//! ```text
//! new() -> READY --run_simulation()--> RUN
//! ```
//!
//! Construction validates the parameters; [BinomialSimulation::run_simulation]
//! draws `n_experiments` samples from `Binomial(n_trials, p_success)` exactly
//! once, and every accessor ([get_results](BinomialSimulation::get_results),
//! the plots, the hypothesis test dispatch and the fold metrics) fails with
//! [BinomStatError::InvalidState] until the simulation has been run.
//!
//! The hypothesis tests are dispatched trough the closed [TestKind] enum:
//! each variant carries exactly the fields its test needs, so a missing
//! argument is a compile error instead of a runtime one.

use rand::Rng;

use crate::configuration;
use crate::errors::BinomStatError;
use crate::hypothesis::{self, Alternative};
use crate::plot;
use crate::samples::Samples;
use crate::sampling;

/// Selects wich hypothesis test [BinomialSimulation::perform_hypothesis_testing]
/// runs, together with its required inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum TestKind {
    /// [hypothesis::proportion_z_test]
    ProportionZTest {
        successes_1: u64,
        trials_1: u64,
        successes_2: u64,
        trials_2: u64,
        alternative: Alternative,
    },
    /// [hypothesis::fishers_exact_test]
    FishersExactTest {
        successes_1: u64,
        trials_1: u64,
        successes_2: u64,
        trials_2: u64,
        alternative: Alternative,
    },
    /// [hypothesis::chi_square_test]
    ChiSquareTest {
        data: Vec<(u64, u64)>,
        expected_proportions: Option<Vec<f64>>,
    },
}

/// The averaged descriptive metrics returned by
/// [BinomialSimulation::cross_validate_hypothesis_testing].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FoldMetrics {
    /// across-fold average of the per-fold means
    pub mean: f64,
    /// across-fold average of the per-fold medians
    pub median: f64,
    /// across-fold average of the per-fold (population) standard deviations
    pub standard_deviation: f64,
}

/// A simulation of `n_experiments` binomial experiments with `n_trials`
/// trials of succes probability `p_success` each.
pub struct BinomialSimulation {
    n_trials: u64,
    p_success: f64,
    n_experiments: usize,
    /// `None` until [BinomialSimulation::run_simulation]; immutable afterwards.
    results: Option<Vec<u64>>,
}

impl BinomialSimulation {
    /// Creates a new simulation.
    ///
    /// ## Inputs:
    ///
    /// 1. `n_trials`: the number of trials of each experiment.
    /// 2. `p_success`: the probability of success of each trial. Must
    ///    belong to `[0, 1]`, otherwise
    ///    [BinomStatError::InvalidParameter] is returned.
    /// 3. `n_experiments`: how many experiments to simulate.
    pub const fn new(
        n_trials: u64,
        p_success: f64,
        n_experiments: usize,
    ) -> Result<BinomialSimulation, BinomStatError> {
        if !(0.0 <= p_success && p_success <= 1.0) {
            // also catches NaN
            return Err(BinomStatError::InvalidParameter);
        }

        return Ok(BinomialSimulation {
            n_trials,
            p_success,
            n_experiments,
            results: None,
        });
    }

    /// Return `n_trials` (trials per experiment).
    #[must_use]
    pub const fn get_n_trials(&self) -> u64 {
        return self.n_trials;
    }

    /// Return `p_success` (probability of success of each trial).
    #[must_use]
    pub const fn get_p_success(&self) -> f64 {
        return self.p_success;
    }

    /// Return `n_experiments` (number of experiments to simulate).
    #[must_use]
    pub const fn get_n_experiments(&self) -> usize {
        return self.n_experiments;
    }

    /// Draws the `n_experiments` results from `Binomial(n_trials, p_success)`
    /// and transitions the simulation to its RUN state.
    ///
    /// The generator is explicit: pass a seeded one (for example
    /// `StdRng::seed_from_u64(seed)`) for a reproducible simulation.
    ///
    /// Running again redraws the whole result set (the previous one is
    /// dropped).
    pub fn run_simulation<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BinomStatError> {
        let mut results: Vec<u64> = Vec::with_capacity(self.n_experiments);
        for _ in 0..self.n_experiments {
            results.push(sampling::binomial_sample(self.n_trials, self.p_success, rng)?);
        }

        self.results = Some(results);
        return Ok(());
    }

    /// The simulated results.
    ///
    /// Fails with [BinomStatError::InvalidState] if
    /// [run_simulation](BinomialSimulation::run_simulation) has not been
    /// called yet.
    pub fn get_results(&self) -> Result<&[u64], BinomStatError> {
        return match &self.results {
            Some(results) => Ok(results),
            None => Err(BinomStatError::InvalidState),
        };
    }

    /// Renders a text histogram of the simulated results, with the
    /// theoretical mean `n_trials * p_success` marked on its row.
    ///
    /// ## Inputs:
    ///
    /// 1. `bins`: (optional) the number of equal-width bins. The default is
    ///    one bin per distinct result value (discrete binning).
    ///
    /// ## Results
    ///
    /// The rendered chart, or [BinomStatError::InvalidState] before the
    /// simulation has been run, or [BinomStatError::InvalidParameter] for
    /// `bins == Some(0)`.
    pub fn plot_histogram(&self, bins: Option<usize>) -> Result<String, BinomStatError> {
        let results: &[u64] = self.get_results()?;

        if bins == Some(0) {
            return Err(BinomStatError::InvalidParameter);
        }

        let mut chart: String = String::from("Histogram of Successes in Binomial Experiments\n");
        if results.is_empty() {
            return Ok(chart);
        }

        // unwraps are safe: results is non-empty
        let minimum: u64 = *results.iter().min().unwrap();
        let maximum: u64 = *results.iter().max().unwrap();

        // Discrete binning by default: one bin per integer value.
        let bin_count: usize = match bins {
            Some(b) => b,
            None => (maximum - minimum) as usize + 1,
        };
        let bin_width: f64 = ((maximum - minimum) as f64 + 1.0) / bin_count as f64;

        let mut counts: Vec<usize> = vec![0; bin_count];
        for &value in results {
            let index: usize = (((value - minimum) as f64) / bin_width).floor() as usize;
            counts[index.min(bin_count - 1)] += 1;
        }

        let tallest: usize = counts.iter().copied().max().unwrap_or(0);
        let mean: f64 = self.n_trials as f64 * self.p_success;

        for (index, &count) in counts.iter().enumerate() {
            let low: f64 = minimum as f64 + index as f64 * bin_width;
            let high: f64 = low + bin_width;
            let bar: String = plot::horizontal_bar(
                count as f64,
                tallest as f64,
                configuration::CHART_BAR_WIDTH,
            );
            let mean_marker: &str = if low <= mean && mean < high {
                " <- mean"
            } else {
                ""
            };
            chart.push_str(&format!(
                "[{low:>7.2}, {high:>7.2}) | {bar:<width$} {count}{mean_marker}\n",
                width = configuration::CHART_BAR_WIDTH
            ));
        }

        return Ok(chart);
    }

    /// Renders the evolution of the observed success probability
    /// (`result / n_trials`) as a moving average over a sliding window.
    ///
    /// ## Inputs:
    ///
    /// 1. `window_size`: (optional) the size of the sliding window. The
    ///    default is [configuration::DEFAULT_MOVING_AVERAGE_WINDOW]. Must
    ///    be nonzero.
    ///
    /// ## Results
    ///
    /// The rendered chart (one row per window position; empty when there
    /// are fewer results than the window), or
    /// [BinomStatError::InvalidState] before the simulation has been run,
    /// or [BinomStatError::InvalidParameter] for a zero window.
    pub fn plot_success_probability_evolution(
        &self,
        window_size: Option<usize>,
    ) -> Result<String, BinomStatError> {
        let results: &[u64] = self.get_results()?;

        let window: usize = window_size.unwrap_or(configuration::DEFAULT_MOVING_AVERAGE_WINDOW);
        if window == 0 {
            return Err(BinomStatError::InvalidParameter);
        }

        let success_probabilities: Vec<f64> = results
            .iter()
            .map(|&r| r as f64 / self.n_trials as f64)
            .collect();

        let mut chart: String =
            String::from("Evolution of Success Probabilities in Binomial Experiments\n");

        for (index, window_values) in success_probabilities.windows(window).enumerate() {
            let moving_average: f64 = window_values.iter().sum::<f64>() / window as f64;
            let bar: String =
                plot::horizontal_bar(moving_average, 1.0, configuration::CHART_BAR_WIDTH);
            chart.push_str(&format!(
                "{index:>5} | {bar:<width$} {moving_average:.4}\n",
                width = configuration::CHART_BAR_WIDTH
            ));
        }

        return Ok(chart);
    }

    /// Runs the hypothesis test selected by `test` (see [TestKind]).
    ///
    /// The tests compare externally provided counts; the simulation only
    /// gates them behind its RUN state so ad-hoc comparisons happen next to
    /// the generated results they are about.
    ///
    /// ## Results
    ///
    /// The P value of the test, [BinomStatError::InvalidState] before the
    /// simulation has been run, or whatever validation error the underlying
    /// test returns.
    pub fn perform_hypothesis_testing(&self, test: &TestKind) -> Result<f64, BinomStatError> {
        let _ = self.get_results()?;

        return match test {
            TestKind::ProportionZTest {
                successes_1,
                trials_1,
                successes_2,
                trials_2,
                alternative,
            } => hypothesis::proportion_z_test()
                .successes_1(*successes_1)
                .trials_1(*trials_1)
                .successes_2(*successes_2)
                .trials_2(*trials_2)
                .alternative(*alternative)
                .call(),
            TestKind::FishersExactTest {
                successes_1,
                trials_1,
                successes_2,
                trials_2,
                alternative,
            } => hypothesis::fishers_exact_test()
                .successes_1(*successes_1)
                .trials_1(*trials_1)
                .successes_2(*successes_2)
                .trials_2(*trials_2)
                .alternative(*alternative)
                .call(),
            TestKind::ChiSquareTest {
                data,
                expected_proportions,
            } => hypothesis::chi_square_test()
                .data(data)
                .maybe_expected_proportions(expected_proportions.as_deref())
                .call(),
        };
    }

    /// Splits the simulated results into `n_folds` contiguous folds and
    /// returns the across-fold average of the per-fold descriptive metrics
    /// (mean, median, population standard deviation).
    ///
    /// Note: despite taking a [TestKind], **no hypothesis test is evaluated
    /// per fold** — the selected test does not influence the metrics in any
    /// way. This mirrors the historical behavior of the procedure; treat it
    /// as descriptive bookkeeping over the folds rather than genuine
    /// cross-validation.
    ///
    /// The fold size is `len / n_folds` (integer division); when the
    /// results do not divide evenly, the trailing remainder is not part of
    /// any fold.
    ///
    /// ## Results
    ///
    /// The averaged [FoldMetrics], [BinomStatError::InvalidState] before
    /// the simulation has been run, or [BinomStatError::InvalidParameter]
    /// if `n_folds < 2` or there are fewer results than folds.
    pub fn cross_validate_hypothesis_testing(
        &self,
        _test: &TestKind,
        n_folds: usize,
    ) -> Result<FoldMetrics, BinomStatError> {
        let results: &[u64] = self.get_results()?;

        if n_folds < 2 {
            return Err(BinomStatError::InvalidParameter);
        }

        let fold_size: usize = results.len() / n_folds;
        if fold_size == 0 {
            return Err(BinomStatError::InvalidParameter);
        }

        let mut total: FoldMetrics = FoldMetrics::default();

        for fold in results.chunks(fold_size).take(n_folds) {
            let mut fold_samples: Samples = Samples::new(fold)?;
            total.mean += fold_samples.mean();
            total.median += fold_samples.median();
            total.standard_deviation += fold_samples.standard_deviation();
        }

        let fold_count: f64 = n_folds as f64;
        return Ok(FoldMetrics {
            mean: total.mean / fold_count,
            median: total.median / fold_count,
            standard_deviation: total.standard_deviation / fold_count,
        });
    }
}
