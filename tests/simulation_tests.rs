use BinomialStatistics::errors::BinomStatError;
use BinomialStatistics::hypothesis::{Alternative, proportion_z_test};
use BinomialStatistics::samples::Samples;
use BinomialStatistics::simulation::*;
use assert_approx_eq::assert_approx_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn any_test() -> TestKind {
    return TestKind::ProportionZTest {
        successes_1: 50,
        trials_1: 100,
        successes_2: 40,
        trials_2: 100,
        alternative: Alternative::TwoSided,
    };
}

#[test]
fn construction_validates_parameters() {
    assert!(BinomialSimulation::new(10, 0.5, 100).is_ok());
    assert!(matches!(
        BinomialSimulation::new(10, 1.5, 100),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        BinomialSimulation::new(10, -0.5, 100),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        BinomialSimulation::new(10, f64::NAN, 100),
        Err(BinomStatError::InvalidParameter)
    ));
}

#[test]
fn everything_fails_before_the_simulation_runs() {
    let simulation: BinomialSimulation = BinomialSimulation::new(10, 0.5, 100).unwrap();

    assert!(matches!(
        simulation.get_results(),
        Err(BinomStatError::InvalidState)
    ));
    assert!(matches!(
        simulation.plot_histogram(None),
        Err(BinomStatError::InvalidState)
    ));
    assert!(matches!(
        simulation.plot_success_probability_evolution(None),
        Err(BinomStatError::InvalidState)
    ));
    assert!(matches!(
        simulation.perform_hypothesis_testing(&any_test()),
        Err(BinomStatError::InvalidState)
    ));
    assert!(matches!(
        simulation.cross_validate_hypothesis_testing(&any_test(), 5),
        Err(BinomStatError::InvalidState)
    ));
}

#[test]
fn run_simulation_produces_the_result_set() {
    let mut simulation: BinomialSimulation = BinomialSimulation::new(10, 0.5, 200).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(42);
    simulation.run_simulation(&mut rng).unwrap();

    let results: &[u64] = simulation.get_results().unwrap();
    assert_eq!(results.len(), 200);
    assert!(results.iter().all(|&r| r <= 10));
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut first: BinomialSimulation = BinomialSimulation::new(10, 0.5, 50).unwrap();
    let mut second: BinomialSimulation = BinomialSimulation::new(10, 0.5, 50).unwrap();

    let mut rng_1: StdRng = StdRng::seed_from_u64(7);
    let mut rng_2: StdRng = StdRng::seed_from_u64(7);
    first.run_simulation(&mut rng_1).unwrap();
    second.run_simulation(&mut rng_2).unwrap();

    assert_eq!(first.get_results().unwrap(), second.get_results().unwrap());
}

#[test]
fn hypothesis_dispatch_matches_the_direct_call() {
    let mut simulation: BinomialSimulation = BinomialSimulation::new(10, 0.5, 10).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(1);
    simulation.run_simulation(&mut rng).unwrap();

    let dispatched: f64 = simulation
        .perform_hypothesis_testing(&any_test())
        .expect("The inputs should be valid. ");
    let direct: f64 = proportion_z_test()
        .successes_1(50)
        .trials_1(100)
        .successes_2(40)
        .trials_2(100)
        .call()
        .unwrap();

    assert_approx_eq!(dispatched, direct, 1e-15_f64);

    let chi: f64 = simulation
        .perform_hypothesis_testing(&TestKind::ChiSquareTest {
            data: vec![(10, 100), (20, 100), (30, 100), (40, 100)],
            expected_proportions: None,
        })
        .unwrap();
    assert_approx_eq!(chi, 0.00016974243555278878, 1e-8_f64);

    // validation errors of the underlying test propagate
    assert!(matches!(
        simulation.perform_hypothesis_testing(&TestKind::ProportionZTest {
            successes_1: 0,
            trials_1: 0,
            successes_2: 0,
            trials_2: 0,
            alternative: Alternative::TwoSided,
        }),
        Err(BinomStatError::InvalidParameter)
    ));
}

#[test]
fn fold_metrics_average_the_folds() {
    let mut simulation: BinomialSimulation = BinomialSimulation::new(20, 0.3, 100).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(13);
    simulation.run_simulation(&mut rng).unwrap();

    let n_folds: usize = 5;
    let metrics: FoldMetrics = simulation
        .cross_validate_hypothesis_testing(&any_test(), n_folds)
        .unwrap();

    // recompute by hand from the published results
    let results: &[u64] = simulation.get_results().unwrap();
    let fold_size: usize = results.len() / n_folds;

    let mut expected: FoldMetrics = FoldMetrics::default();
    for fold in results.chunks(fold_size).take(n_folds) {
        let mut samples: Samples = Samples::new(fold).unwrap();
        expected.mean += samples.mean();
        expected.median += samples.median();
        expected.standard_deviation += samples.standard_deviation();
    }

    assert_approx_eq!(metrics.mean, expected.mean / 5.0, 1e-12_f64);
    assert_approx_eq!(metrics.median, expected.median / 5.0, 1e-12_f64);
    assert_approx_eq!(
        metrics.standard_deviation,
        expected.standard_deviation / 5.0,
        1e-12_f64
    );

    // sanity: the averaged mean is near the theoretical one (6.0)
    assert!((metrics.mean - 6.0).abs() < 1.5);
}

#[test]
fn fold_metrics_invalid_fold_counts() {
    let mut simulation: BinomialSimulation = BinomialSimulation::new(10, 0.5, 10).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(2);
    simulation.run_simulation(&mut rng).unwrap();

    assert!(matches!(
        simulation.cross_validate_hypothesis_testing(&any_test(), 1),
        Err(BinomStatError::InvalidParameter)
    ));
    // more folds than results
    assert!(matches!(
        simulation.cross_validate_hypothesis_testing(&any_test(), 11),
        Err(BinomStatError::InvalidParameter)
    ));
}

#[test]
fn histogram_renders_after_run() {
    let mut simulation: BinomialSimulation = BinomialSimulation::new(10, 0.5, 500).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(5);
    simulation.run_simulation(&mut rng).unwrap();

    let chart: String = simulation.plot_histogram(None).unwrap();
    assert!(chart.contains("Histogram of Successes"));
    assert!(chart.contains("<- mean"));

    let binned: String = simulation.plot_histogram(Some(4)).unwrap();
    // header + 4 bins
    assert_eq!(binned.lines().count(), 5);

    assert!(matches!(
        simulation.plot_histogram(Some(0)),
        Err(BinomStatError::InvalidParameter)
    ));
}

#[test]
fn evolution_chart_has_one_row_per_window_position() {
    let mut simulation: BinomialSimulation = BinomialSimulation::new(10, 0.5, 30).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(5);
    simulation.run_simulation(&mut rng).unwrap();

    let chart: String = simulation.plot_success_probability_evolution(Some(10)).unwrap();
    // header + (30 - 10 + 1) moving average points
    assert_eq!(chart.lines().count(), 22);

    assert!(matches!(
        simulation.plot_success_probability_evolution(Some(0)),
        Err(BinomStatError::InvalidParameter)
    ));
}
