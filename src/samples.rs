//! Storage for collected binomial data: sequences of observed success
//! counts. [Samples] also allows effitient computation of the common
//! sample statistics (mean, variance, median...), caching every result
//! so repeated queries are constant time.

use crate::errors::BinomStatError;

/// A non-empty sequence of observed success counts.
///
/// The non-empty invariant is enforced at construction, so the statistics
/// methods can return plain values instead of options.
pub struct Samples {
    // non-empty
    data: Vec<u64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, Default)]
pub struct SampleProperties {
    /// the average of the sample
    pub mean: Option<f64>,
    /// the population variance of the sample (divide-by-n)
    pub variance: Option<f64>,
    /// the median of the sample
    pub median: Option<f64>,
    /// The maximum value of the sample
    pub maximum: Option<u64>,
    /// The minimum value of the sample
    pub minimum: Option<u64>,
    /// Determines if the data is sorted
    pub is_sorted: bool,
}

impl Samples {
    /// Creates a new instance of [Samples] with a copy of the given `data`.
    ///
    /// `data` must not be empty, otherwise
    /// [BinomStatError::InvalidParameter] is returned.
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[u64]) -> Result<Samples, BinomStatError> {
        return Samples::new_move(Vec::from(data));
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not be empty, otherwise
    /// [BinomStatError::InvalidParameter] is returned.
    ///
    /// If you don't want to move the data (to keep ownership of it),
    /// use [Samples::new].
    pub fn new_move(data: Vec<u64>) -> Result<Samples, BinomStatError> {
        if data.is_empty() {
            return Err(BinomStatError::InvalidParameter);
        }

        return Ok(Samples {
            data,
            properties: SampleProperties::default(),
        });
    }

    /// Gives a reference to the contained data.
    ///
    /// Note that the data may be sorted or not (depending on
    /// calls to other methods).
    #[must_use]
    pub fn peek_data(&self) -> &[u64] {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    ///
    /// If you do not want to drop self, use [Samples::peek_data]
    #[must_use]
    pub fn get_data(self) -> Vec<u64> {
        return self.data;
    }

    /// The number of samples.
    #[must_use]
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// Returns a reference to the internal field that contains
    /// all computed statistics ([SampleProperties]).
    #[must_use]
    pub fn peek_properties(&self) -> &SampleProperties {
        return &self.properties;
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean)
    /// and returns it.
    ///
    /// If the mean was already computed, it just returns the value
    /// stored in [SampleProperties] and the operation is constant time.
    pub fn mean(&mut self) -> f64 {
        // If it is already computed, just return it.
        if let Some(m) = self.properties.mean {
            return m;
        }

        let mut mean: f64 = 0.0;
        for &s in &self.data {
            mean += s as f64;
        }
        mean = mean / self.data.len() as f64;

        // Store for use in the future.
        self.properties.mean = Some(mean);
        return mean;
    }

    /// Computes the **population** [variance](https://en.wikipedia.org/wiki/Variance)
    /// (divide-by-n, not the unbiased divide-by-(n-1)) and returns it.
    ///
    /// The population convention is the one the method of moments estimator
    /// is defined with, so it is the one used troughout the library.
    ///
    /// If the variance was already computed, it just returns the value
    /// stored in [SampleProperties] and the operation is constant time.
    pub fn variance(&mut self) -> f64 {
        // If it is already computed, just return it.
        if let Some(v) = self.properties.variance {
            return v;
        }

        let mean: f64 = self.mean();
        let mut variance: f64 = 0.0;

        for &s in &self.data {
            let centered_value: f64 = s as f64 - mean;
            variance += centered_value * centered_value;
        }

        variance = variance / self.data.len() as f64;

        self.properties.variance = Some(variance);
        return variance;
    }

    /// The population [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation):
    /// the square root of [Samples::variance].
    pub fn standard_deviation(&mut self) -> f64 {
        return self.variance().sqrt();
    }

    /// Computes the sample [median](https://en.wikipedia.org/wiki/Median)
    /// and returns it.
    ///
    /// On an even number of samples the median is the mean of the two
    /// middle values. Sorts the data if it is not sorted already.
    pub fn median(&mut self) -> f64 {
        if let Some(m) = self.properties.median {
            return m;
        }

        self.sort_data();

        let n: usize = self.data.len();
        let median: f64 = if n % 2 == 1 {
            self.data[n / 2] as f64
        } else {
            (self.data[n / 2 - 1] as f64 + self.data[n / 2] as f64) * 0.5
        };

        self.properties.median = Some(median);
        return median;
    }

    /// Returns the minimum among the data.
    ///
    /// If the data is already sorted, returns in constant time.
    /// Otherwise it's `O(n)` (does not sort the data).
    pub fn minimum(&mut self) -> u64 {
        if let Some(m) = self.properties.minimum {
            return m;
        }

        let min: u64 = if self.properties.is_sorted {
            self.data[0]
        } else {
            // non-empty invariant: unwrap is safe
            *self.data.iter().min().unwrap()
        };

        self.properties.minimum = Some(min);
        return min;
    }

    /// Returns the maximum among the data.
    ///
    /// If the data is already sorted, returns in constant time.
    /// Otherwise it's `O(n)` (does not sort the data).
    pub fn maximum(&mut self) -> u64 {
        if let Some(m) = self.properties.maximum {
            return m;
        }

        let max: u64 = if self.properties.is_sorted {
            self.data[self.data.len() - 1]
        } else {
            // non-empty invariant: unwrap is safe
            *self.data.iter().max().unwrap()
        };

        self.properties.maximum = Some(max);
        return max;
    }

    /// Forces to sort the internal data if it is not sorted already.
    #[inline]
    pub fn sort_data(&mut self) {
        if self.properties.is_sorted {
            return;
        }

        self.data.sort_unstable();
        self.properties.is_sorted = true;
    }
}
