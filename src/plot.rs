//! Text charts for the theoretical binomial distribution.
//!
//! There is no plotting backend in this library: every chart renders to a
//! plain multi-line `String` (one horizontal bar per value of `k`), wich is
//! enough to eyeball a distribution in a terminal or a log and keeps the
//! plotting surface fully testable.

use crate::configuration;
use crate::descriptive;
use crate::errors::BinomStatError;
use crate::probability;

/// Renders one horizontal bar scaled against `maximum`.
///
/// `value` and `maximum` must be non-negative. A zero `maximum` renders an
/// empty bar (instead of dividing by 0).
pub(crate) fn horizontal_bar(value: f64, maximum: f64, width: usize) -> String {
    if maximum <= 0.0 || !value.is_finite() {
        return String::new();
    }

    let filled: usize = ((value / maximum) * width as f64).round() as usize;
    return "#".repeat(filled.min(width));
}

/// Renders the [pmf](probability::pmf) of `Binomial(n, p)` as a bar chart
/// over `k` in `0..=n`.
///
/// Rows whose `k` falls within one standard deviation of the mean are
/// marked with a trailing `*`, wich overlays the `mean +- 1 std_dev` band
/// on the chart.
///
/// Fails with [BinomStatError::InvalidParameter] under the same validation
/// contract as the probability core.
pub fn pmf_chart(n: u64, p: f64) -> Result<String, BinomStatError> {
    let masses: Vec<f64> = (0..=n)
        .map(|k| probability::pmf(k, n, p))
        .collect::<Result<Vec<f64>, BinomStatError>>()?;

    let mean: f64 = descriptive::mean(n, p)?;
    let std_dev: f64 = descriptive::standard_deviation(n, p)?;

    // non-empty: 0..=n always holds at least k = 0
    let maximum: f64 = masses.iter().copied().fold(0.0, f64::max);

    let mut chart: String = format!("Binomial PMF (n = {n}, p = {p})\n");
    for (k, &mass) in masses.iter().enumerate() {
        let bar: String = horizontal_bar(mass, maximum, configuration::CHART_BAR_WIDTH);
        let band: &str = if (k as f64 - mean).abs() <= std_dev {
            " *"
        } else {
            ""
        };
        chart.push_str(&format!("{k:>5} | {bar:<width$} {mass:.6}{band}\n",
            width = configuration::CHART_BAR_WIDTH));
    }

    return Ok(chart);
}

/// Renders the [cdf](probability::cdf) of `Binomial(n, p)` as a bar chart
/// over `k` in `0..=n`.
///
/// Fails with [BinomStatError::InvalidParameter] under the same validation
/// contract as the probability core.
pub fn cdf_chart(n: u64, p: f64) -> Result<String, BinomStatError> {
    let mut chart: String = format!("Binomial CDF (n = {n}, p = {p})\n");

    // running accumulation instead of n calls to cdf (wich would be O(n^2))
    let mut accumulator: f64 = 0.0;
    for k in 0..=n {
        accumulator += probability::pmf(k, n, p)?;
        let bar: String = horizontal_bar(accumulator, 1.0, configuration::CHART_BAR_WIDTH);
        chart.push_str(&format!("{k:>5} | {bar:<width$} {accumulator:.6}\n",
            width = configuration::CHART_BAR_WIDTH));
    }

    return Ok(chart);
}
