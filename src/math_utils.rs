/// Mathematical utility functions for the cooling-model evaluators
///
/// This module provides the shared numeric building blocks: linear
/// interpolation, inclusive linear sampling, the error function, and a
/// percentage-deviation helper used by the test suites.

/// Assert that the deviation between two values is less than a threshold
///
/// This macro combines deviation calculation with assertion for cleaner test code.
/// It calculates the percentage deviation between `actual` and `expected`, then
/// asserts that this deviation is less than the specified `max_deviation`.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `a` - Start value
/// * `b` - End value
/// * `ratio` - Interpolation ratio (0.0 = a, 1.0 = b)
///
/// # Examples
/// ```
/// use litho_cooling_rust::math_utils::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(100.0, 200.0, 0.25), 125.0);
/// ```
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Linear interpolation with index-based ratio calculation
///
/// Convenience function for interpolating based on array indices.
/// Automatically calculates the ratio as index / total_count.
///
/// # Examples
/// ```
/// use litho_cooling_rust::math_utils::lerp_indexed;
///
/// // Depth at 25% through a 120 km column
/// assert_eq!(lerp_indexed(0.0, 120.0, 30, 120), 30.0);
/// ```
pub fn lerp_indexed(a: f64, b: f64, index: usize, total_count: usize) -> f64 {
    let ratio = index as f64 / total_count as f64;
    lerp(a, b, ratio)
}

/// Inclusive evenly spaced samples from `start` to `end`
///
/// Both endpoints are included. `n == 1` yields just `start`; `n == 0`
/// yields an empty vector.
///
/// # Examples
/// ```
/// use litho_cooling_rust::math_utils::linspace;
///
/// let depths = linspace(0.0, 120.0, 121);
/// assert_eq!(depths.len(), 121);
/// assert_eq!(depths[0], 0.0);
/// assert_eq!(depths[120], 120.0);
/// assert!((depths[1] - 1.0).abs() < 1e-12); // one sample per km
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..n).map(|i| lerp_indexed(start, end, i, n - 1)).collect(),
    }
}

// Horner-form coefficients for the erf rational approximation (A&S 7.1.26).
const ERF_P: f64 = 0.327_591_1;
const ERF_A1: f64 = 0.254_829_592;
const ERF_A2: f64 = -0.284_496_736;
const ERF_A3: f64 = 1.421_413_741;
const ERF_A4: f64 = -1.453_152_027;
const ERF_A5: f64 = 1.061_405_429;

/// Error function, erf(x) = (2/√π) ∫₀ˣ e^(−t²) dt
///
/// Rational approximation from Abramowitz & Stegun 7.1.26, max absolute
/// error ~1.5e-7 — well below the tolerances meaningful for temperature
/// fields in °C. Odd symmetry is applied explicitly so erf(-x) == -erf(x).
///
/// # Examples
/// ```
/// use litho_cooling_rust::math_utils::erf;
///
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.8427008).abs() < 1e-6);
/// ```
pub fn erf(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + ERF_P * x);
    let poly = t * (ERF_A1 + t * (ERF_A2 + t * (ERF_A3 + t * (ERF_A4 + t * ERF_A5))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// Calculate the percentage deviation between two values
///
/// Returns the percentage difference of `actual` from `expected`.
/// Uses the expected value as the reference (base) for the percentage calculation.
///
/// # Examples
/// ```
/// use litho_cooling_rust::math_utils::deviation;
///
/// // 105 is 5% higher than 100
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        // Avoid division by zero - if expected is 0, return 0 if actual is also 0
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}
