use nalgebra::{Complex, ComplexField, Matrix4, Matrix4x2};
use std::f64::consts::PI;
use tracing::debug;

use crate::components::{
    Polynomial, RationalFunction, StateSpaceModel, TransferChannel, TransferFunctionSet,
};
use crate::resources::AnalysisSettings;
use crate::utils::constants::{CONTROL_COUNT, STATE_COUNT};
use crate::utils::errors::{Result, StabilityError};

/// Produces `(sI - A)⁻¹B` of a model as rational functions of `s`.
pub trait SymbolicLinearSystem {
    fn transfer_functions(&self, model: &StateSpaceModel) -> Result<TransferFunctionSet>;
}

/// Clean-up applied to every raw `N(s)/D(s)` entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplification {
    /// Relative distance under which a numerator and a denominator root cancel.
    pub root_tolerance: f64,
    /// Relative size under which a coefficient is dropped.
    pub coefficient_tolerance: f64,
}

impl Simplification {
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self {
            root_tolerance: settings.root_tolerance,
            coefficient_tolerance: settings.coefficient_tolerance,
        }
    }

    /// Cancels shared roots, makes the denominator monic and drops
    /// coefficients that are negligible. `numerator_scale` is the largest
    /// numerator coefficient of the whole set, so round-off residue of
    /// structurally zero entries collapses to the zero polynomial.
    pub fn apply(
        &self,
        numerator: &Polynomial,
        denominator: &Polynomial,
        numerator_scale: f64,
    ) -> Result<RationalFunction> {
        let lead = denominator.leading();
        if lead == 0.0 || !lead.is_finite() {
            return Err(StabilityError::NumericDegeneracy(
                "transfer function has a vanishing denominator".to_string(),
            ));
        }
        let mut den = denominator.scale(1.0 / lead);
        let mut num = numerator
            .drop_negligible(self.coefficient_tolerance, numerator_scale)
            .scale(1.0 / lead);
        if num.is_zero() {
            return Ok(RationalFunction::new(Polynomial::zero(), den));
        }

        let mut poles = den.roots()?;
        let mut zeros = Vec::new();
        let mut cancelled = 0;
        for zero in num.roots()? {
            let shared = poles.iter().position(|&p| {
                (p - zero).modulus() <= self.root_tolerance * p.modulus().max(1.0)
            });
            match shared {
                Some(k) => {
                    poles.swap_remove(k);
                    cancelled += 1;
                }
                None => zeros.push(zero),
            }
        }
        if cancelled > 0 {
            debug!("cancelled {} common root(s)", cancelled);
            num = Polynomial::from_roots(&zeros).scale(num.leading());
            den = Polynomial::from_roots(&poles);
        }

        let num_reference = num.max_abs_coefficient();
        let den_reference = den.max_abs_coefficient();
        Ok(RationalFunction::new(
            num.drop_negligible(self.coefficient_tolerance, num_reference),
            den.drop_negligible(self.coefficient_tolerance, den_reference),
        ))
    }
}

impl Default for Simplification {
    fn default() -> Self {
        Self::from_settings(&AnalysisSettings::default())
    }
}

/// Exact coefficients through the Faddeev-LeVerrier recursion:
/// `adj(sI - A) = Σ Mₖ s^(n-k)` and `det(sI - A) = Σ cₖ sᵏ`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolventExpansion {
    pub simplification: Simplification,
}

impl ResolventExpansion {
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self {
            simplification: Simplification::from_settings(settings),
        }
    }
}

impl SymbolicLinearSystem for ResolventExpansion {
    fn transfer_functions(&self, model: &StateSpaceModel) -> Result<TransferFunctionSet> {
        let (terms, denominator) = resolvent_terms(&model.system);
        let products: Vec<Matrix4x2<f64>> = terms.iter().map(|m| m * model.control).collect();

        // Term k multiplies s^(n-1-k)
        let numerators = entry_grid(|i, j| {
            Polynomial::new(
                (0..STATE_COUNT)
                    .map(|power| products[STATE_COUNT - 1 - power][(i, j)])
                    .collect(),
            )
        });
        build_set(model, &numerators, &denominator, &self.simplification)
    }
}

/// Numerators recovered from samples of `D(s)·(sI - A)⁻¹B` on the unit circle
/// by a discrete Fourier transform. Fails when a pole lies on a sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySampling {
    pub samples: usize,
    pub simplification: Simplification,
}

impl FrequencySampling {
    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self {
            samples: 2 * STATE_COUNT,
            simplification: Simplification::from_settings(settings),
        }
    }
}

impl Default for FrequencySampling {
    fn default() -> Self {
        Self::from_settings(&AnalysisSettings::default())
    }
}

impl SymbolicLinearSystem for FrequencySampling {
    fn transfer_functions(&self, model: &StateSpaceModel) -> Result<TransferFunctionSet> {
        let n = self.samples.max(STATE_COUNT);
        let (_, denominator) = resolvent_terms(&model.system);

        let a = model.system.map(|x| Complex::new(x, 0.0));
        let b = model.control.map(|x| Complex::new(x, 0.0));
        let mut sums = vec![[[Complex::new(0.0, 0.0); STATE_COUNT]; CONTROL_COUNT]; STATE_COUNT];

        for k in 0..n {
            // Half-step offset keeps the samples off the real axis
            let angle = PI * (2 * k + 1) as f64 / n as f64;
            let s = Complex::new(angle.cos(), angle.sin());
            let mut shifted = -a;
            for i in 0..STATE_COUNT {
                shifted[(i, i)] += s;
            }
            let resolvent = shifted.try_inverse().ok_or_else(|| {
                StabilityError::NumericDegeneracy(format!("sI - A is singular at s = {}", s))
            })?;
            let response = resolvent * b * denominator.eval(s);
            for i in 0..STATE_COUNT {
                for j in 0..CONTROL_COUNT {
                    for (power, acc) in sums[i][j].iter_mut().enumerate() {
                        *acc += response[(i, j)] * s.conj().powi(power as i32);
                    }
                }
            }
        }

        let numerators = entry_grid(|i, j| {
            Polynomial::new(sums[i][j].iter().map(|c| c.re / n as f64).collect())
        });
        build_set(model, &numerators, &denominator, &self.simplification)
    }
}

/// Adjugate terms `M₁..Mₙ` and the characteristic polynomial of `a`.
pub fn resolvent_terms(a: &Matrix4<f64>) -> (Vec<Matrix4<f64>>, Polynomial) {
    let n = STATE_COUNT;
    let mut coefficients = vec![0.0; n + 1];
    coefficients[n] = 1.0;

    let mut terms = Vec::with_capacity(n);
    let mut m = Matrix4::<f64>::identity();
    for k in 1..=n {
        if k > 1 {
            m = a * m + Matrix4::<f64>::identity() * coefficients[n - k + 1];
        }
        coefficients[n - k] = -(a * m).trace() / k as f64;
        terms.push(m);
    }
    (terms, Polynomial::new(coefficients))
}

fn entry_grid<F>(mut entry: F) -> Vec<Vec<Polynomial>>
where
    F: FnMut(usize, usize) -> Polynomial,
{
    (0..STATE_COUNT)
        .map(|i| (0..CONTROL_COUNT).map(|j| entry(i, j)).collect())
        .collect()
}

/// Row-major entry `(i, j)` of the 4×2 result goes to channel `j`.
fn build_set(
    model: &StateSpaceModel,
    numerators: &[Vec<Polynomial>],
    denominator: &Polynomial,
    simplification: &Simplification,
) -> Result<TransferFunctionSet> {
    let scale = numerators
        .iter()
        .flatten()
        .fold(0.0, |m: f64, p| m.max(p.max_abs_coefficient()));

    let channels = model
        .axis
        .control_names()
        .iter()
        .enumerate()
        .map(|(j, control)| -> Result<TransferChannel> {
            let functions = numerators
                .iter()
                .map(|row| simplification.apply(&row[j], denominator, scale))
                .collect::<Result<Vec<_>>>()?;
            debug!(
                "{} channel: {} non-zero transfer functions",
                control,
                functions.iter().filter(|tf| !tf.is_zero()).count()
            );
            Ok(TransferChannel {
                control: control.to_string(),
                functions,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TransferFunctionSet {
        axis: model.axis,
        channels,
    })
}
