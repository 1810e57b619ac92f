use nalgebra::Complex;
/// Replace an exact negative zero with positive zero, leaving every other value untouched.
#[inline]
pub fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Round to a number of significant digits.
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits as i32 - 1 - magnitude);
    (value * scale).round() / scale
}

/// Natural frequency of an eigenvalue, `|λ|`.
#[inline]
pub fn natural_frequency(lambda: Complex<f64>) -> f64 {
    (lambda.re * lambda.re + lambda.im * lambda.im).sqrt()
}

/// Damping ratio of an eigenvalue, `-Re(λ)/|λ|`.
#[inline]
pub fn damping_ratio(lambda: Complex<f64>) -> f64 {
    -lambda.re / natural_frequency(lambda)
}
