use aerostab::components::{ModalSet, ModeResponse, StateSpaceModel};
use approx::assert_relative_eq;
use nalgebra::{Complex, Matrix4};

/// Assert that a state-space model is finite and ends in its kinematic row
#[track_caller]
pub fn assert_model_valid(model: &StateSpaceModel) {
    assert!(
        model.system.iter().all(|x| x.is_finite()),
        "System matrix contains non-finite values"
    );
    assert!(
        model.control.iter().all(|x| x.is_finite()),
        "Control matrix contains non-finite values"
    );
    assert!(
        model.has_kinematic_row(),
        "Last row of A is not the {} kinematic row",
        model.axis
    );
}

/// Assert that every column of the eigenvector matrix satisfies A·v = λ·v
#[track_caller]
pub fn assert_eigenpairs(system: &Matrix4<f64>, modal: &ModalSet, tolerance: f64) {
    let a = system.map(|x| Complex::new(x, 0.0));
    for i in 0..4 {
        let v = modal.eigenvector(i);
        let residual = (a * v - v * modal.eigenvalues[i]).norm();
        assert!(
            residual <= tolerance,
            "Eigenpair {} residual {} exceeds {}",
            i,
            residual,
            tolerance
        );
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-10);
    }
}

/// Assert that two coefficient lists agree entry by entry
#[track_caller]
pub fn assert_coefficients_close(actual: &[f64], expected: &[f64], max_relative: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Coefficient count differs: {:?} vs {:?}",
        actual,
        expected
    );
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, max_relative = max_relative);
    }
}

/// Assert that a mode response is sampled consistently and finite
#[track_caller]
pub fn assert_response_valid(response: &ModeResponse, samples: usize) {
    assert_eq!(response.time.len(), samples);
    assert_eq!(response.time[0], 0.0);
    assert_eq!(response.series.len(), 4);
    for series in &response.series {
        assert_eq!(series.values.len(), samples, "{} series length", series.state);
        assert!(
            series.values.iter().all(|x| x.is_finite()),
            "{} series contains non-finite values",
            series.state
        );
    }
}
