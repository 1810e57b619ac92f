use tracing::debug;

use crate::components::{ModalSet, Mode, ModeResponse, ResponseSeries};
use crate::resources::AnalysisSettings;
use crate::utils::math::linspace;

/// Decay rates below this are treated as neutrally stable (1/s).
const NEGLIGIBLE_DECAY_RATE: f64 = 1e-9;

/// Time window for a mode: a multiple of its time constant, the mode's
/// default horizon when it barely decays, never beyond `max_horizon`.
pub fn response_horizon(mode: &Mode, settings: &AnalysisSettings) -> f64 {
    let horizon = if mode.eigenvalue.re.abs() > NEGLIGIBLE_DECAY_RATE {
        settings.horizon_time_constants * mode.time_constant()
    } else {
        mode.kind.default_horizon()
    };
    horizon.min(settings.max_horizon)
}

/// Free response of the four states when only `mode` is excited, starting
/// from the real part of its eigenvector.
pub fn mode_response(modal: &ModalSet, mode: &Mode, settings: &AnalysisSettings) -> ModeResponse {
    let horizon = response_horizon(mode, settings);
    let time = linspace(0.0, horizon, settings.samples);
    let vector = modal.eigenvector(mode.index);
    let axis = mode.kind.axis();

    debug!(
        "{} response over {:.3} s ({} samples)",
        mode.kind,
        horizon,
        time.len()
    );

    let series = axis
        .state_names()
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let x0 = vector[i].re;
            let values = time
                .iter()
                .map(|&t| {
                    if mode.kind.is_real() {
                        real_response(x0, mode.eigenvalue.re, t)
                    } else {
                        oscillatory_response(x0, mode.damping_ratio(), mode.natural_frequency(), t)
                    }
                })
                .collect();
            ResponseSeries {
                state: state.to_string(),
                label: state_label(state),
                values,
            }
        })
        .collect();

    ModeResponse {
        mode: mode.kind,
        time,
        series,
    }
}

/// First-order mode, `x₀·e^(λt)`.
pub fn real_response(x0: f64, lambda: f64, t: f64) -> f64 {
    x0 * (lambda * t).exp()
}

/// Second-order mode released from rest at `x₀`.
///
/// Underdamped: `e^(-ζωₙt)·x₀·[cos(ωd t) + ζωₙ·sin(ωd t)/ωd]`. At critical
/// damping `sin(ωd t)/ωd` is replaced by its limit `t`, and above it the
/// hyperbolic functions take over.
pub fn oscillatory_response(x0: f64, zeta: f64, omega_n: f64, t: f64) -> f64 {
    if !(zeta.is_finite() && omega_n > 0.0) {
        return x0;
    }
    let sigma = zeta * omega_n;
    let discriminant = 1.0 - zeta * zeta;

    let (even, odd) = if discriminant.abs() <= f64::EPSILON {
        (1.0, t)
    } else if discriminant > 0.0 {
        let omega_d = omega_n * discriminant.sqrt();
        ((omega_d * t).cos(), (omega_d * t).sin() / omega_d)
    } else {
        let omega_h = omega_n * (-discriminant).sqrt();
        ((omega_h * t).cosh(), (omega_h * t).sinh() / omega_h)
    };

    (-sigma * t).exp() * x0 * (even + sigma * odd)
}

fn state_label(state: &str) -> String {
    let symbol = match state {
        "theta" => "θ",
        "phi" => "φ",
        other => other,
    };
    format!("Δ{}", symbol)
}
