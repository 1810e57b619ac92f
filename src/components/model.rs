use nalgebra::{Matrix4, Matrix4x2};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::components::Axis;
use crate::utils::constants::{CONTROL_COUNT, STATE_COUNT};
use crate::utils::errors::{Result, StabilityError};
use crate::utils::math::normalize_zero;

/// Linear model `ẋ = A x + B δ` of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpaceModel {
    pub axis: Axis,
    /// System (aircraft) matrix A.
    pub system: Matrix4<f64>,
    /// Control matrix B, columns ordered as [`Axis::control_names`].
    pub control: Matrix4x2<f64>,
}

/// On-disk layout of a model: nested row arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRecord {
    pub aircraft_matrix: Vec<Vec<f64>>,
    pub control_matrix: Vec<Vec<f64>>,
}

impl StateSpaceModel {
    /// Builds a model, replacing any `-0.0` entry by `0.0`.
    pub fn new(axis: Axis, system: Matrix4<f64>, control: Matrix4x2<f64>) -> Self {
        Self {
            axis,
            system: system.map(normalize_zero),
            control: control.map(normalize_zero),
        }
    }

    /// True when the last row of A is the kinematic row of the axis.
    pub fn has_kinematic_row(&self) -> bool {
        let expected = self.axis.kinematic_row();
        (0..STATE_COUNT).all(|j| self.system[(STATE_COUNT - 1, j)] == expected[j])
    }

    pub fn to_record(&self) -> MatrixRecord {
        MatrixRecord {
            aircraft_matrix: (0..STATE_COUNT)
                .map(|i| (0..STATE_COUNT).map(|j| self.system[(i, j)]).collect())
                .collect(),
            control_matrix: (0..STATE_COUNT)
                .map(|i| (0..CONTROL_COUNT).map(|j| self.control[(i, j)]).collect())
                .collect(),
        }
    }

    pub fn from_record(axis: Axis, record: &MatrixRecord) -> Result<Self> {
        let system = read_rows(&record.aircraft_matrix, STATE_COUNT, "aircraft_matrix")?;
        let control = read_rows(&record.control_matrix, CONTROL_COUNT, "control_matrix")?;
        Ok(Self {
            axis,
            system: Matrix4::from_row_slice(&system),
            control: Matrix4x2::from_row_slice(&control),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    pub fn from_json(axis: Axis, json: &str) -> Result<Self> {
        let record: MatrixRecord = serde_json::from_str(json)?;
        Self::from_record(axis, &record)
    }

    /// Writes both matrices to `path` as `{"aircraft_matrix": .., "control_matrix": ..}`.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.to_record())?;
        writer.flush()?;
        info!("{} matrices saved to {}", self.axis, path.as_ref().display());
        Ok(())
    }

    pub fn read_json<P: AsRef<Path>>(axis: Axis, path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let record: MatrixRecord = serde_json::from_reader(reader)?;
        Self::from_record(axis, &record)
    }
}

fn read_rows(rows: &[Vec<f64>], columns: usize, key: &str) -> Result<Vec<f64>> {
    if rows.len() != STATE_COUNT || rows.iter().any(|row| row.len() != columns) {
        return Err(StabilityError::InvalidConfiguration(format!(
            "'{}' must be a {}x{} nested array",
            key, STATE_COUNT, columns
        )));
    }
    Ok(rows.iter().flatten().copied().collect())
}
