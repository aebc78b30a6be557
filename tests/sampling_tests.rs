use BinomialStatistics::errors::BinomStatError;
use BinomialStatistics::sampling::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn seeded_generation_is_deterministic() {
    let first: Vec<u64> = generate_binomial_samples()
        .sample_size(5)
        .n(10)
        .p(0.5)
        .seed(42)
        .call()
        .expect("The inputs should be valid. ");

    let second: Vec<u64> = generate_binomial_samples()
        .sample_size(5)
        .n(10)
        .p(0.5)
        .seed(42)
        .call()
        .expect("The inputs should be valid. ");

    assert_eq!(first, second);
}

#[test]
fn different_seeds_give_different_sequences() {
    // 50 draws of Binomial(20, 0.5) colliding across seeds is (basically) impossible
    let first: Vec<u64> = generate_binomial_samples()
        .sample_size(50)
        .n(20)
        .p(0.5)
        .seed(1)
        .call()
        .unwrap();
    let second: Vec<u64> = generate_binomial_samples()
        .sample_size(50)
        .n(20)
        .p(0.5)
        .seed(2)
        .call()
        .unwrap();

    assert_ne!(first, second);
}

#[test]
fn draws_stay_in_range() {
    let samples: Vec<u64> = generate_binomial_samples()
        .sample_size(200)
        .n(10)
        .p(0.5)
        .seed(7)
        .call()
        .unwrap();

    assert_eq!(samples.len(), 200);
    assert!(samples.iter().all(|&s| s <= 10));
}

#[test]
fn degenerate_probabilities() {
    let mut rng: StdRng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        assert_eq!(bernoulli_trial(0.0, &mut rng).unwrap(), 0);
        assert_eq!(bernoulli_trial(1.0, &mut rng).unwrap(), 1);
    }

    assert_eq!(binomial_sample(10, 0.0, &mut rng).unwrap(), 0);
    assert_eq!(binomial_sample(10, 1.0, &mut rng).unwrap(), 10);
    assert_eq!(binomial_sample(0, 0.5, &mut rng).unwrap(), 0);
}

#[test]
fn invalid_inputs_are_rejected() {
    let mut rng: StdRng = StdRng::seed_from_u64(3);

    assert!(matches!(
        bernoulli_trial(1.5, &mut rng),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        binomial_sample(10, -0.1, &mut rng),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        generate_binomial_samples()
            .sample_size(0)
            .n(10)
            .p(0.5)
            .call(),
        Err(BinomStatError::InvalidParameter)
    ));
    assert!(matches!(
        generate_binomial_samples()
            .sample_size(5)
            .n(10)
            .p(f64::NAN)
            .call(),
        Err(BinomStatError::InvalidParameter)
    ));
}

#[test]
fn injected_generator_matches_seeded_builder() {
    let mut rng: StdRng = StdRng::seed_from_u64(42);
    let with_rng: Vec<u64> = generate_binomial_samples_with(5, 10, 0.5, &mut rng).unwrap();

    let with_seed: Vec<u64> = generate_binomial_samples()
        .sample_size(5)
        .n(10)
        .p(0.5)
        .seed(42)
        .call()
        .unwrap();

    assert_eq!(with_rng, with_seed);
}

#[test]
fn sample_mean_is_near_n_p() {
    let samples: Vec<u64> = generate_binomial_samples()
        .sample_size(2000)
        .n(100)
        .p(0.3)
        .seed(11)
        .call()
        .unwrap();

    let mean: f64 = samples.iter().sum::<u64>() as f64 / samples.len() as f64;
    // std error of the mean is sqrt(100*0.3*0.7/2000) ~ 0.1: 30 +- 1 is ~10 sigma
    assert!((mean - 30.0).abs() < 1.0);
}
