use nalgebra::Complex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::components::{Axis, Polynomial};

/// `N(s) / D(s)` for one state output and one control input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationalFunction {
    pub numerator: Polynomial,
    pub denominator: Polynomial,
}

impl RationalFunction {
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn eval(&self, s: Complex<f64>) -> Complex<f64> {
        self.numerator.eval(s) / self.denominator.eval(s)
    }

    /// Renders the fraction as three lines: numerator, a dash rule as wide
    /// as the denominator, denominator. A zero numerator renders as `0`.
    pub fn format(&self, significant_digits: u32) -> String {
        let num = self.numerator.to_expression(significant_digits);
        if num == "0" {
            return num;
        }
        let den = self.denominator.to_expression(significant_digits);
        format!("{}\n{}\n{}", num, "-".repeat(den.chars().count()), den)
    }
}

/// Transfer functions of one control channel, one per state output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferChannel {
    pub control: String,
    pub functions: Vec<RationalFunction>,
}

/// All transfer functions of a model, grouped by control channel in the
/// column order of the control matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunctionSet {
    pub axis: Axis,
    pub channels: Vec<TransferChannel>,
}

impl TransferFunctionSet {
    pub fn channel(&self, control: &str) -> Option<&TransferChannel> {
        self.channels.iter().find(|c| c.control == control)
    }

    /// Channel name to rendered fractions.
    pub fn formatted(&self, significant_digits: u32) -> BTreeMap<String, Vec<String>> {
        self.channels
            .iter()
            .map(|channel| {
                (
                    channel.control.clone(),
                    channel
                        .functions
                        .iter()
                        .map(|tf| tf.format(significant_digits))
                        .collect(),
                )
            })
            .collect()
    }

    /// Labels such as `q(s)/delta_e(s)` in channel then state order.
    pub fn labels(&self) -> Vec<Vec<String>> {
        let states = self.axis.state_names();
        self.axis
            .control_symbols()
            .iter()
            .map(|control| {
                states
                    .iter()
                    .map(|state| format!("{}(s)/{}(s)", state, control))
                    .collect()
            })
            .collect()
    }
}
