use std::path::{Path, PathBuf};
use tracing::info;

use crate::components::{
    Axis, DimensionalDerivativeSet, FlightCase, IdentifiedModes, ModalSet, ModeKind, ModeResponse,
    Polynomial, StateSpaceModel, TransferFunctionSet,
};
use crate::rendering::render_base64;
use crate::resources::AnalysisSettings;
use crate::systems::{
    assemble_model, calculate_derivatives, decompose, identify_modes, mode_response,
    ResolventExpansion, SymbolicLinearSystem,
};
use crate::utils::errors::Result;

/// Runs the full chain for one flight case: derivatives, state-space model,
/// eigen-decomposition, mode naming and transfer functions.
pub struct StabilityAnalysis;

impl StabilityAnalysis {
    pub fn run(case: &FlightCase, settings: &AnalysisSettings) -> Result<StabilityReport> {
        Self::run_with(case, settings, &ResolventExpansion::from_settings(settings))
    }

    /// As [`StabilityAnalysis::run`], with a chosen transfer-function backend.
    pub fn run_with(
        case: &FlightCase,
        settings: &AnalysisSettings,
        backend: &dyn SymbolicLinearSystem,
    ) -> Result<StabilityReport> {
        let axis = case.axis();
        info!("Analysing {} {} dynamics", case.name, axis);

        let derivatives = calculate_derivatives(&case.cruise, &case.coefficients, &case.geometry)?;
        let model = assemble_model(&derivatives, &case.cruise);
        let modal = decompose(&model.system, settings)?;
        let modes = identify_modes(axis, &modal)?;
        for mode in &modes.modes {
            info!(
                "{}: wn = {:.6} rad/s, zeta = {:.6}",
                mode.kind,
                mode.natural_frequency(),
                mode.damping_ratio()
            );
        }
        let transfer_functions = backend.transfer_functions(&model)?;

        Ok(StabilityReport {
            case_name: case.name.clone(),
            characteristic_polynomial: modal.characteristic_polynomial(),
            derivatives,
            model,
            modal,
            modes,
            transfer_functions,
        })
    }
}

/// Results of one analysis run.
#[derive(Debug, Clone)]
pub struct StabilityReport {
    pub case_name: String,
    pub derivatives: DimensionalDerivativeSet,
    pub model: StateSpaceModel,
    pub modal: ModalSet,
    /// Monic, rebuilt from the eigenvalues.
    pub characteristic_polynomial: Polynomial,
    pub modes: IdentifiedModes,
    pub transfer_functions: TransferFunctionSet,
}

impl StabilityReport {
    pub fn axis(&self) -> Axis {
        self.model.axis
    }

    /// Fails with `UnknownMode` when `kind` belongs to the other axis.
    pub fn mode_response(&self, kind: ModeKind, settings: &AnalysisSettings) -> Result<ModeResponse> {
        let mode = self.modes.get(kind)?;
        Ok(mode_response(&self.modal, mode, settings))
    }

    /// Base64 PNG of a mode response.
    pub fn render_mode(&self, kind: ModeKind, settings: &AnalysisSettings) -> Result<String> {
        let response = self.mode_response(kind, settings)?;
        render_base64(&response, &settings.plot)
    }

    /// e.g. `s^4 + 2.55483*s^3 + 10.5442*s^2 + 0.285165*s + 0.10699 = 0`
    pub fn characteristic_equation(&self, significant_digits: u32) -> String {
        format!(
            "{} = 0",
            self.characteristic_polynomial
                .to_expression(significant_digits)
        )
    }

    /// Looks up a dimensional derivative by name, e.g. `"Mq"`.
    pub fn derivative(&self, name: &str) -> Result<f64> {
        self.derivatives.get(name)
    }

    /// Writes the model to `dir` under the axis' default file name.
    pub fn write_matrices<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.axis().matrix_file_name());
        self.model.write_json(&path)?;
        Ok(path)
    }
}
