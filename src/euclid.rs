//! Euclid contains uscefull math functions.
//!
//! Everything the statistical formulas need that is not distribution
//! specific lives here: the special functions ([ln_gamma], the regularized
//! [incomplete gamma](regularized_lower_gamma) and
//! [incomplete beta](regularized_incomplete_beta) functions and the inverse
//! of the latter), the standard normal pdf/cdf/quantile, exact integer
//! [combinatorics] and a bounded 1-D [minimizer](brent_minimize).
//!

use crate::configuration;

/// `sqrt(2 * pi)`, the normalization constant of the standard normal pdf.
const SQRT_2_PI: f64 = 2.50662827463100050242;

// coefitients for the (aprox) computation of 1 - cdf of the std normal
const B_ZERO_COEFITIENT: f64 = 2.92678600515804815402;
const B_ONE_COEFITIENTS: [f64; 5] = [
    8.97280659046817350354,
    10.27157061171363078863,
    12.72323261907760928036,
    16.88639562007936907786,
    24.12333774572479110372,
];

const B_TWO_COEFITIENTS: [f64; 5] = [
    5.81582518933527390512,
    5.70347935898051436684,
    5.51862483025707963145,
    5.26184239579604207321,
    4.92081346632882032881,
];

const C_ONE_COEFITIENTS: [f64; 5] = [
    11.61511226260603247078,
    18.25323235347346524796,
    18.38871225773938486923,
    18.61193318971775795045,
    24.14804072812762821134,
];

const C_TWO_COEFITIENTS: [f64; 5] = [
    3.83362947800146179416,
    7.30756258553673541139,
    8.42742300458043240405,
    5.66479518878470764762,
    4.91396098895240075156,
];

// coefitients for the rational initial guess of the std normal quantile
const QUANTILE_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const QUANTILE_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const QUANTILE_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const QUANTILE_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Lower break point of the central region of the quantile approximation.
const QUANTILE_P_LOW: f64 = 0.02425;

pub mod combinatorics {
    //! Exact integer combinatorics with checked arithmetic plus their
    //! logarithmic counterparts for when the exact values do not fit
    //! in a `u128`.

    use crate::errors::BinomStatError;

    /// Computes the [factorial](https://en.wikipedia.org/wiki/Factorial)
    /// of `n` exactly with an iterative product.
    ///
    /// Returns [BinomStatError::NumericalError] if the result does not fit
    /// in a `u128` (this happens for `34 < n`).
    pub fn factorial(n: u64) -> Result<u128, BinomStatError> {
        let mut result: u128 = 1;
        for i in 2..=u128::from(n) {
            result = match result.checked_mul(i) {
                Some(v) => v,
                None => return Err(BinomStatError::NumericalError),
            };
        }
        return Ok(result);
    }

    /// Computes the [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient)
    /// `n choose k` exactly.
    ///
    /// Uses the multiplicative formula after reducing `k` to `min(k, n - k)`,
    /// wich needs far fewer multiplications than the factorial definition.
    /// Every intermediate value of the multiplicative formula is itself a
    /// binomial coefficient, so the divisions are always exact.
    ///
    /// Returns [BinomStatError::InvalidParameter] if `n < k` and
    /// [BinomStatError::NumericalError] if an intermediate value overflows
    /// a `u128`.
    pub fn binomial_coefficient(n: u64, mut k: u64) -> Result<u128, BinomStatError> {
        if n < k {
            return Err(BinomStatError::InvalidParameter);
        }

        if n - k < k {
            k = n - k;
        }

        let mut result: u128 = 1;
        for i in 1..=u128::from(k) {
            let factor: u128 = u128::from(n - k) + i;
            result = match result.checked_mul(factor) {
                Some(v) => v,
                None => return Err(BinomStatError::NumericalError),
            };
            result = result / i;
        }

        return Ok(result);
    }

    /// Natural logarithm of `n!`, computed trough [ln_gamma](super::ln_gamma).
    #[must_use]
    pub fn ln_factorial(n: u64) -> f64 {
        return super::ln_gamma(n as f64 + 1.0);
    }

    /// Natural logarithm of the binomial coefficient `n choose k`.
    ///
    /// Unlike [binomial_coefficient] this never overflows, at the cost of
    /// being approximate. Used for the pmf of very wide distributions and
    /// for the hypergeometric masses of Fisher's exact test.
    #[must_use]
    pub fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
        debug_assert!(k <= n);
        return ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k);
    }
}

/// Natural logarithm of the [Gamma function](https://en.wikipedia.org/wiki/Gamma_function)
/// for strictly positive arguments.
///
/// Uses the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// with `g = 7` and 9 coefficients. The relative error is below `~1e-13`
/// over the whole positive axis.
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    if x <= 0.0 || x.is_nan() {
        return f64::INFINITY;
    }

    const G: f64 = 7.0;
    const LANCZOS_COEFITIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];

    let x: f64 = x - 1.0;
    let mut sum: f64 = LANCZOS_COEFITIENTS[0];
    for (i, &coefitient) in LANCZOS_COEFITIENTS.iter().enumerate().skip(1) {
        sum += coefitient / (x + i as f64);
    }

    let t: f64 = x + G + 0.5;
    return 0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln();
}

/// The regularized [lower incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function)
/// `P(a, x)`.
///
/// `P(a, x)` is the cdf of a Gamma distribution with shape `a` and scale 1,
/// and `P(k/2, x/2)` is the cdf of a [chi-square](https://en.wikipedia.org/wiki/Chi-squared_distribution)
/// distribution with `k` degrees of freedom.
///
/// For `x < a + 1` the series representation converges fast; otherwise the
/// continued fraction of the complement does.
#[must_use]
pub fn regularized_lower_gamma(a: f64, x: f64) -> f64 {
    if x.is_nan() || a.is_nan() || x < 0.0 || a <= 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 0.0;
    }

    if x < a + 1.0 {
        return lower_gamma_series(a, x);
    }
    return 1.0 - upper_gamma_continued_fraction(a, x);
}

/// The regularized upper incomplete gamma function `Q(a, x) = 1 - P(a, x)`.
///
/// This is the upper tail used to map a chi-square/G statistic to a P value.
/// Computing it directly (instead of `1 - P`) keeps precision for the very
/// small tail probabilities tests care about.
#[must_use]
pub fn regularized_upper_gamma(a: f64, x: f64) -> f64 {
    if x.is_nan() || a.is_nan() || x < 0.0 || a <= 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 1.0;
    }

    if x < a + 1.0 {
        return 1.0 - lower_gamma_series(a, x);
    }
    return upper_gamma_continued_fraction(a, x);
}

fn lower_gamma_series(a: f64, x: f64) -> f64 {
    let maximum_iterations: usize = 512;

    let mut ap: f64 = a;
    let mut sum: f64 = 1.0 / a;
    let mut del: f64 = sum;

    for _ in 0..maximum_iterations {
        ap += 1.0;
        del = del * x / ap;
        sum += del;
        if del.abs() < sum.abs() * f64::EPSILON {
            break;
        }
    }

    return sum * (-x + a * x.ln() - ln_gamma(a)).exp();
}

fn upper_gamma_continued_fraction(a: f64, x: f64) -> f64 {
    // Modified Lentz evaluation of the continued fraction.
    let maximum_iterations: usize = 512;
    let tiny: f64 = 1e-300;

    let mut b: f64 = x + 1.0 - a;
    let mut c: f64 = 1.0 / tiny;
    let mut d: f64 = 1.0 / b;
    let mut h: f64 = d;

    for i in 1..=maximum_iterations {
        let an: f64 = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < tiny {
            d = tiny;
        }
        c = b + an / c;
        if c.abs() < tiny {
            c = tiny;
        }
        d = 1.0 / d;
        let del: f64 = d * c;
        h = h * del;
        if (del - 1.0).abs() < f64::EPSILON {
            break;
        }
    }

    return (-x + a * x.ln() - ln_gamma(a)).exp() * h;
}

/// The regularized [incomplete beta function](https://en.wikipedia.org/wiki/Beta_function#Incomplete_beta_function)
/// `I_x(a, b)`, the cdf of a Beta distribution at `x`.
///
/// Evaluated with the continued fraction (modified Lentz), applied on the
/// side where it converges fast and reflected (`I_x(a,b) = 1 - I_{1-x}(b,a)`)
/// on the other.
#[must_use]
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    if x.is_nan() || a.is_nan() || b.is_nan() || a <= 0.0 || b <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if 1.0 <= x {
        return 1.0;
    }

    // ln of the prefactor x^a * (1-x)^b * Gamma(a+b)/(Gamma(a)*Gamma(b))
    let ln_prefactor: f64 =
        ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();

    if x < (a + 1.0) / (a + b + 2.0) {
        return ln_prefactor.exp() * beta_continued_fraction(x, a, b) / a;
    }
    return 1.0 - ln_prefactor.exp() * beta_continued_fraction(1.0 - x, b, a) / b;
}

fn beta_continued_fraction(x: f64, a: f64, b: f64) -> f64 {
    let maximum_iterations: usize = 300;
    let tiny: f64 = 1e-30;

    let qab: f64 = a + b;
    let qap: f64 = a + 1.0;
    let qam: f64 = a - 1.0;

    let mut c: f64 = 1.0;
    let mut d: f64 = 1.0 - qab * x / qap;
    if d.abs() < tiny {
        d = tiny;
    }
    d = 1.0 / d;
    let mut h: f64 = d;

    for m in 1..=maximum_iterations {
        let m_f: f64 = m as f64;
        let m2: f64 = 2.0 * m_f;

        // even step
        let aa: f64 = m_f * (b - m_f) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < tiny {
            d = tiny;
        }
        c = 1.0 + aa / c;
        if c.abs() < tiny {
            c = tiny;
        }
        d = 1.0 / d;
        h = h * d * c;

        // odd step
        let aa: f64 = -(a + m_f) * (qab + m_f) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < tiny {
            d = tiny;
        }
        c = 1.0 + aa / c;
        if c.abs() < tiny {
            c = tiny;
        }
        d = 1.0 / d;
        let del: f64 = d * c;
        h = h * del;

        if (del - 1.0).abs() < 1e-14 {
            break;
        }
    }

    return h;
}

/// Inverse of [regularized_incomplete_beta] in its first argument: returns
/// the `x` with `I_x(a, b) = q`. This is the quantile function of the Beta
/// distribution, wich the [Clopper-Pearson](https://en.wikipedia.org/wiki/Binomial_proportion_confidence_interval#Clopper%E2%80%93Pearson_interval)
/// interval is defined in terms of.
///
/// `I_x(a, b)` is monotone in `x`, so a plain bisection is enough. The
/// tolerance and the iteration cap come from [crate::configuration].
#[must_use]
pub fn inverse_incomplete_beta(q: f64, a: f64, b: f64) -> f64 {
    if q.is_nan() || a.is_nan() || b.is_nan() || a <= 0.0 || b <= 0.0 {
        return f64::NAN;
    }
    if q <= 0.0 {
        return 0.0;
    }
    if 1.0 <= q {
        return 1.0;
    }

    let mut low: f64 = 0.0;
    let mut high: f64 = 1.0;
    let mut mid: f64 = 0.5;

    for _ in 0..configuration::BETA_INVERSION_MAXIMUM_ITERATIONS {
        mid = 0.5 * (low + high);
        let value: f64 = regularized_incomplete_beta(mid, a, b);

        if value < q {
            low = mid;
        } else {
            high = mid;
        }

        if high - low < configuration::BETA_INVERSION_TOLERANCE {
            break;
        }
    }

    return mid;
}

/// The pdf of the standard normal distribution.
#[must_use]
pub fn std_normal_pdf(x: f64) -> f64 {
    return (-0.5 * x * x).exp() / SQRT_2_PI;
}

/// The cdf of the standard normal distribution.
///
/// We use the aproximation by:
/// Dia, Yaya D. (2023). "Approximate Incomplete Integrals, Application to
/// Complementary Error Function". SSRN. doi:10.2139/ssrn.4487559.
///
/// The precision of this method is extremly high: an error of less than
/// `~1.1 * 10^-16 ~= 2^-53`. Considering that
/// `f64::EPSILON = 2.220446049250313e-16`, this solution may as well be
/// considered exact if we are working with `f64`.
#[must_use]
pub fn std_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    let (point, flipped): (f64, bool) = if x < 0.0 { (-x, true) } else { (x, false) };

    /*
       To evaluate the second degree polynomials we use Horner's rule:
       https://en.wikipedia.org/wiki/Polynomial_evaluation#Horner's_rule

       x^2 + a_1 * x + a_2 = (x + a_1) * x + a_2

       For better efficiency we use `f64::mul_add`.
    */

    let mut numerator: f64 = 1.0;
    let mut denominator: f64 = 1.0;
    for i in 0..5 {
        numerator = numerator * (point + C_TWO_COEFITIENTS[i]).mul_add(point, C_ONE_COEFITIENTS[i]);
        denominator =
            denominator * (point + B_TWO_COEFITIENTS[i]).mul_add(point, B_ONE_COEFITIENTS[i]);
    }

    let m: f64 = numerator / (denominator * (point + B_ZERO_COEFITIENT));
    // `upper_tail` = `1 - cdf(point)`
    let upper_tail: f64 = m * std_normal_pdf(point);

    return if flipped { upper_tail } else { 1.0 - upper_tail };
}

/// The quantile function (inverse cdf) of the standard normal distribution.
///
/// Returns `-inf` for `q <= 0`, `+inf` for `1 <= q` and NaN for NaN.
///
/// A piecewise rational aproximation (relative error `~1.15e-9`) provides
/// the initial guess. If [configuration::QUANTILE_USE_NEWTONS_ITER] is set,
/// a Newton iteration against the (effectively exact) [std_normal_cdf]
/// polishes the result down to full `f64` precision.
#[must_use]
pub fn std_normal_quantile(q: f64) -> f64 {
    if q.is_nan() {
        return f64::NAN;
    }
    if q <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if 1.0 <= q {
        return f64::INFINITY;
    }

    let q_high: f64 = 1.0 - QUANTILE_P_LOW;

    let mut x: f64 = if q < QUANTILE_P_LOW {
        // lower tail
        let r: f64 = (-2.0 * q.ln()).sqrt();
        (((((QUANTILE_C[0] * r + QUANTILE_C[1]) * r + QUANTILE_C[2]) * r + QUANTILE_C[3]) * r
            + QUANTILE_C[4])
            * r
            + QUANTILE_C[5])
            / ((((QUANTILE_D[0] * r + QUANTILE_D[1]) * r + QUANTILE_D[2]) * r + QUANTILE_D[3]) * r
                + 1.0)
    } else if q <= q_high {
        // central region
        let r: f64 = q - 0.5;
        let t: f64 = r * r;
        (((((QUANTILE_A[0] * t + QUANTILE_A[1]) * t + QUANTILE_A[2]) * t + QUANTILE_A[3]) * t
            + QUANTILE_A[4])
            * t
            + QUANTILE_A[5])
            * r
            / (((((QUANTILE_B[0] * t + QUANTILE_B[1]) * t + QUANTILE_B[2]) * t + QUANTILE_B[3])
                * t
                + QUANTILE_B[4])
                * t
                + 1.0)
    } else {
        // upper tail, by symmetry
        let r: f64 = (-2.0 * (1.0 - q).ln()).sqrt();
        -(((((QUANTILE_C[0] * r + QUANTILE_C[1]) * r + QUANTILE_C[2]) * r + QUANTILE_C[3]) * r
            + QUANTILE_C[4])
            * r
            + QUANTILE_C[5])
            / ((((QUANTILE_D[0] * r + QUANTILE_D[1]) * r + QUANTILE_D[2]) * r + QUANTILE_D[3]) * r
                + 1.0)
    };

    if configuration::QUANTILE_USE_NEWTONS_ITER {
        // One Newton step multiplies the number of correct digits by ~2,
        // wich takes the initial guess to full f64 precision.
        let error: f64 = std_normal_cdf(x) - q;
        x = x - error / std_normal_pdf(x);
    }

    return x;
}

/// Minimizes `f` over the closed interval `[a, b]` and returns the position
/// of the minimum.
///
/// Bounded [Brent](https://en.wikipedia.org/wiki/Brent%27s_method) method:
/// a parabolic interpolation step when it is trustworthy, otherwise a
/// golden-section step. Tolerances come from [crate::configuration].
///
/// Used by [crate::estimation::mle_estimate_parameters] to maximize the
/// log-likelihood (by minimizing its negation) over `p` in `[0, 1]`.
pub fn brent_minimize<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let golden: f64 = 0.381966011250105;

    let (mut a, mut b): (f64, f64) = (a.min(b), a.max(b));

    let mut x: f64 = a + golden * (b - a);
    let mut w: f64 = x;
    let mut v: f64 = x;
    let mut fx: f64 = f(x);
    let mut fw: f64 = fx;
    let mut fv: f64 = fx;

    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    for _ in 0..configuration::BRENT_MAXIMUM_ITERATIONS {
        let xm: f64 = 0.5 * (a + b);
        let tol1: f64 = configuration::BRENT_TOLERANCE * x.abs() + 1e-12;
        let tol2: f64 = 2.0 * tol1;

        if (x - xm).abs() <= tol2 - 0.5 * (b - a) {
            break;
        }

        let mut use_golden: bool = true;

        if tol1 < e.abs() {
            // try a parabolic interpolation step trough (v, w, x)
            let r: f64 = (x - w) * (fx - fv);
            let mut q: f64 = (x - v) * (fx - fw);
            let mut p: f64 = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);

            if 0.0 < q {
                p = -p;
            } else {
                q = -q;
            }

            let r_old: f64 = e;
            e = d;

            if p.abs() < (0.5 * q * r_old).abs() && q * (a - x) < p && p < q * (b - x) {
                // parabolic step is acceptable
                d = p / q;
                let u: f64 = x + d;
                if (u - a) < tol2 || (b - u) < tol2 {
                    d = if x < xm { tol1 } else { -tol1 };
                }
                use_golden = false;
            }
        }

        if use_golden {
            e = if x < xm { b - x } else { a - x };
            d = golden * e;
        }

        let u: f64 = if tol1 <= d.abs() {
            x + d
        } else if 0.0 < d {
            x + tol1
        } else {
            x - tol1
        };

        let fu: f64 = f(u);

        if fu <= fx {
            if u < x {
                b = x;
            } else {
                a = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    return x;
}
