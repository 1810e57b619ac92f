use nalgebra::{Complex, DMatrix};
use serde::{Deserialize, Serialize};

use crate::utils::constants::MAX_SCHUR_ITERATIONS;
use crate::utils::errors::{Result, StabilityError};
use crate::utils::math::round_significant;

/// Real polynomial in the Laplace variable `s`, coefficients stored lowest
/// degree first: `c[0] + c[1]·s + c[2]·s² + …`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        let mut poly = Self { coefficients };
        poly.trim_exact();
        poly
    }

    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    /// Monic polynomial whose roots are `roots`. Imaginary residue of
    /// conjugate pairs is discarded.
    pub fn from_roots(roots: &[Complex<f64>]) -> Self {
        let mut acc = vec![Complex::new(1.0, 0.0)];
        for &root in roots {
            let mut next = vec![Complex::new(0.0, 0.0); acc.len() + 1];
            for (k, &c) in acc.iter().enumerate() {
                next[k] -= c * root;
                next[k + 1] += c;
            }
            acc = next;
        }
        Self::new(acc.into_iter().map(|c| c.re).collect())
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficients highest degree first.
    pub fn coefficients_descending(&self) -> Vec<f64> {
        self.coefficients.iter().rev().copied().collect()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree of the polynomial; the zero polynomial reports degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn leading(&self) -> f64 {
        self.coefficients.last().copied().unwrap_or(0.0)
    }

    pub fn eval(&self, s: Complex<f64>) -> Complex<f64> {
        self.coefficients
            .iter()
            .rev()
            .fold(Complex::new(0.0, 0.0), |acc, &c| acc * s + c)
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.coefficients.iter().map(|c| c * factor).collect())
    }

    /// Zeroes coefficients whose magnitude is below `tolerance` times the
    /// largest coefficient of `reference`.
    pub fn drop_negligible(&self, tolerance: f64, reference: f64) -> Self {
        let threshold = tolerance * reference.abs();
        Self::new(
            self.coefficients
                .iter()
                .map(|&c| if c.abs() <= threshold { 0.0 } else { c })
                .collect(),
        )
    }

    pub fn max_abs_coefficient(&self) -> f64 {
        self.coefficients.iter().fold(0.0, |m, c| m.max(c.abs()))
    }

    /// Roots via the eigenvalues of the companion matrix.
    pub fn roots(&self) -> Result<Vec<Complex<f64>>> {
        let n = self.degree();
        if self.is_zero() || n == 0 {
            return Ok(Vec::new());
        }
        let lead = self.leading();
        let mut companion = DMatrix::<f64>::zeros(n, n);
        for i in 1..n {
            companion[(i, i - 1)] = 1.0;
        }
        for i in 0..n {
            companion[(i, n - 1)] = -self.coefficients[i] / lead;
        }
        if companion.iter().any(|x| !x.is_finite()) {
            return Err(StabilityError::NumericDegeneracy(
                "polynomial has non-finite coefficients".to_string(),
            ));
        }
        let schur = companion.try_schur(f64::EPSILON, MAX_SCHUR_ITERATIONS).ok_or_else(|| {
            StabilityError::NumericDegeneracy("polynomial root finding did not converge".into())
        })?;
        Ok(schur.complex_eigenvalues().iter().copied().collect())
    }

    /// Renders the polynomial highest power first, e.g. `2.5*s^2 - s + 0.3`.
    pub fn to_expression(&self, significant_digits: u32) -> String {
        let mut out = String::new();
        for (power, &raw) in self.coefficients.iter().enumerate().rev() {
            let c = round_significant(raw, significant_digits);
            if c == 0.0 {
                continue;
            }
            let magnitude = c.abs();
            let body = match power {
                0 => format!("{}", magnitude),
                _ => {
                    let var = if power == 1 {
                        "s".to_string()
                    } else {
                        format!("s^{}", power)
                    };
                    if magnitude == 1.0 {
                        var
                    } else {
                        format!("{}*{}", magnitude, var)
                    }
                }
            };
            if out.is_empty() {
                if c < 0.0 {
                    out.push('-');
                }
            } else {
                out.push_str(if c < 0.0 { " - " } else { " + " });
            }
            out.push_str(&body);
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }

    fn trim_exact(&mut self) {
        while matches!(self.coefficients.last(), Some(&c) if c == 0.0) {
            self.coefficients.pop();
        }
    }
}
