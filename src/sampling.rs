//! Random sampling from the binomial distribution.
//!
//! The random generator is always an explicit argument (or, for the batch
//! generator, derived from an explicit seed). There is no process-global
//! generator state in this library: a call's output is reproducible
//! regardless of what ran before it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::BinomStatError;
use crate::probability::validate;

/// Simulates a single [Bernoulli trial](https://en.wikipedia.org/wiki/Bernoulli_trial):
/// returns `1` with probability `p` and `0` otherwise.
///
/// Draws one uniform value in `[0, 1)` from `rng` and compares it with `p`.
///
/// Returns [BinomStatError::InvalidParameter] if `p` does not belong
/// to `[0, 1]`.
pub fn bernoulli_trial<R: Rng + ?Sized>(p: f64, rng: &mut R) -> Result<u64, BinomStatError> {
    if !(0.0 <= p && p <= 1.0) {
        // also catches NaN
        return Err(BinomStatError::InvalidParameter);
    }

    let uniform: f64 = rng.random::<f64>();
    return Ok(if uniform < p { 1 } else { 0 });
}

/// Simulates a single binomial experiment: the number of successes of `n`
/// independent Bernoulli trials with succes probability `p`.
///
/// Returns [BinomStatError::InvalidParameter] if `p` does not belong
/// to `[0, 1]`.
pub fn binomial_sample<R: Rng + ?Sized>(
    n: u64,
    p: f64,
    rng: &mut R,
) -> Result<u64, BinomStatError> {
    validate(n, p)?;

    let mut count: u64 = 0;
    for _ in 0..n {
        // p was already validated: the unwrap never triggers
        count += bernoulli_trial(p, rng).unwrap_or(0);
    }

    return Ok(count);
}

/// Generates `sample_size` independent binomial draws with parameters
/// `(n, p)`.
///
/// ## Inputs:
///
/// 1. `sample_size`: how many draws to generate. Must be at least 1.
/// 2. `n`: the number of trials of each draw.
/// 3. `p`: the probability of success of each trial.
/// 4. `seed`: (optional) seeds a deterministic generator
///    ([StdRng]). Repeated calls with the same seed produce identical
///    sequences. If left empty, the thread local generator is used and the
///    output is not reproducible.
///
/// ## Results
///
/// The vector of draws, or [BinomStatError::InvalidParameter] if
/// `sample_size == 0` or `p` does not belong to `[0, 1]`.
///
/// ```rust
/// use BinomialStatistics::sampling::generate_binomial_samples;
///
/// let a: Vec<u64> = generate_binomial_samples()
///     .sample_size(5)
///     .n(10)
///     .p(0.5)
///     .seed(42)
///     .call()
///     .unwrap();
/// let b: Vec<u64> = generate_binomial_samples()
///     .sample_size(5)
///     .n(10)
///     .p(0.5)
///     .seed(42)
///     .call()
///     .unwrap();
/// assert_eq!(a, b);
/// ```
#[bon::builder]
pub fn generate_binomial_samples(
    sample_size: usize,
    n: u64,
    p: f64,
    seed: Option<u64>,
) -> Result<Vec<u64>, BinomStatError> {
    return match seed {
        Some(s) => {
            let mut rng: StdRng = StdRng::seed_from_u64(s);
            generate_binomial_samples_with(sample_size, n, p, &mut rng)
        }
        None => {
            let mut rng: rand::rngs::ThreadRng = rand::rng();
            generate_binomial_samples_with(sample_size, n, p, &mut rng)
        }
    };
}

/// Generates `sample_size` independent binomial draws from the given
/// generator.
///
/// This is the generator-injected core of [generate_binomial_samples]: use
/// it when you already own a generator (for example to interleave draws
/// with other random operations while keeping a single seed).
pub fn generate_binomial_samples_with<R: Rng + ?Sized>(
    sample_size: usize,
    n: u64,
    p: f64,
    rng: &mut R,
) -> Result<Vec<u64>, BinomStatError> {
    if sample_size == 0 {
        return Err(BinomStatError::InvalidParameter);
    }
    validate(n, p)?;

    let mut samples: Vec<u64> = Vec::with_capacity(sample_size);
    for _ in 0..sample_size {
        samples.push(binomial_sample(n, p, rng)?);
    }

    return Ok(samples);
}
