mod common;

use aerostab::components::{Axis, FlightCase, StateSpaceModel};
use aerostab::resources::AnalysisSettings;
use aerostab::systems::StabilityAnalysis;
use aerostab::StabilityError;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

use crate::common::business_jet_dir;

#[test]
fn test_matrix_round_trip_is_exact() {
    let dir = tempdir().unwrap();
    for axis in [Axis::Longitudinal, Axis::Lateral] {
        let report =
            StabilityAnalysis::run(&FlightCase::business_jet(axis), &AnalysisSettings::default())
                .unwrap();

        let path = report.write_matrices(dir.path()).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(axis.matrix_file_name())
        );

        let restored = StateSpaceModel::read_json(axis, &path).unwrap();
        assert_eq!(restored, report.model);
        for (a, b) in restored.system.iter().zip(report.model.system.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
    assert!(dir.path().join("longMatrix.json").exists());
    assert!(dir.path().join("latMatrix.json").exists());
}

#[test]
fn test_matrix_file_layout() {
    let dir = tempdir().unwrap();
    let report = StabilityAnalysis::run(
        &FlightCase::business_jet(Axis::Longitudinal),
        &AnalysisSettings::default(),
    )
    .unwrap();
    let path = report.write_matrices(dir.path()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let a = value["aircraft_matrix"].as_array().unwrap();
    let b = value["control_matrix"].as_array().unwrap();
    assert_eq!(a.len(), 4);
    assert_eq!(b.len(), 4);
    assert_eq!(a[3], serde_json::json!([0.0, 0.0, 1.0, 0.0]));
    assert_eq!(b[0].as_array().unwrap().len(), 2);
}

#[test]
fn test_wrong_shape_is_rejected() {
    let json = r#"{"aircraft_matrix": [[1.0, 2.0]], "control_matrix": [[0.0, 0.0]]}"#;
    assert!(matches!(
        StateSpaceModel::from_json(Axis::Lateral, json),
        Err(StabilityError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_malformed_input_file() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("cruise.json");
    fs::write(&broken, "{\"V\": {\"value\": 206.0,").unwrap();
    let data = business_jet_dir();

    let result = FlightCase::from_files(
        Axis::Longitudinal,
        broken,
        data.join("longitudinal.json"),
        data.join("geometry.json"),
    );
    assert!(matches!(result, Err(StabilityError::ConfigurationFormat(_))));
}

#[test]
fn test_missing_key_in_input_file() {
    let dir = tempdir().unwrap();
    let data = business_jet_dir();
    let geometry = dir.path().join("geometry.json");
    fs::write(&geometry, r#"{"S": {"value": 21.55}, "AR": {"value": 5.09}}"#).unwrap();

    let result = FlightCase::from_files(
        Axis::Longitudinal,
        data.join("cruise.json"),
        data.join("longitudinal.json"),
        geometry,
    );
    match result {
        Err(StabilityError::MissingInput(message)) => assert!(message.contains("'b'")),
        other => panic!("expected a missing input error, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let data = business_jet_dir();
    let result = FlightCase::from_files(
        Axis::Lateral,
        data.join("cruise.json"),
        data.join("does_not_exist.json"),
        data.join("geometry.json"),
    );
    assert!(matches!(result, Err(StabilityError::Io(_))));
}

#[test]
fn test_bundled_settings_are_defaults() {
    let path = business_jet_dir().join("..").join("settings.yaml");
    let settings = AnalysisSettings::from_file(path).unwrap();
    assert_eq!(settings, AnalysisSettings::default());
}
