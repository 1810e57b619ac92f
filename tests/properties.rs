mod common;

use aerostab::components::{Axis, FlightCase, StateSpaceModel};
use aerostab::resources::AnalysisSettings;
use aerostab::systems::{
    assemble_model, calculate_derivatives, decompose, FrequencySampling, ResolventExpansion,
    SymbolicLinearSystem,
};
use approx::assert_relative_eq;
use nalgebra::{Complex, ComplexField, Matrix4x2};
use rand::Rng;

use crate::common::{assert_eigenpairs, longitudinal_system, perturb_model, seeded_rng};

const TRIALS: usize = 25;

fn business_jet_model(axis: Axis) -> StateSpaceModel {
    let case = FlightCase::business_jet(axis);
    let derivatives =
        calculate_derivatives(&case.cruise, &case.coefficients, &case.geometry).unwrap();
    assemble_model(&derivatives, &case.cruise)
}

fn direct_response(model: &StateSpaceModel, s: Complex<f64>) -> Matrix4x2<Complex<f64>> {
    let mut shifted = -model.system.map(|x| Complex::new(x, 0.0));
    for i in 0..4 {
        shifted[(i, i)] += s;
    }
    shifted.try_inverse().unwrap() * model.control.map(|x| Complex::new(x, 0.0))
}

#[test]
fn test_trace_and_determinant_match_spectrum() {
    let settings = AnalysisSettings::default();
    let mut rng = seeded_rng(7);

    for axis in [Axis::Longitudinal, Axis::Lateral] {
        let base = business_jet_model(axis);
        for _ in 0..TRIALS {
            let model = perturb_model(&base, &mut rng, 0.05);
            let modal = decompose(&model.system, &settings).unwrap();

            let sum: Complex<f64> = modal.eigenvalues.iter().sum();
            let product = modal
                .eigenvalues
                .iter()
                .fold(Complex::new(1.0, 0.0), |acc, l| acc * l);

            assert_relative_eq!(sum.re, model.system.trace(), max_relative = 1e-9);
            assert_relative_eq!(product.re, model.system.determinant(), max_relative = 1e-6);
            assert!(product.im.abs() <= 1e-9 * product.modulus());
            assert_eigenpairs(&model.system, &modal, 1e-7);
        }
    }
}

#[test]
fn test_characteristic_polynomial_vanishes_at_eigenvalues() {
    let settings = AnalysisSettings::default();
    let mut rng = seeded_rng(11);
    let base = StateSpaceModel::new(Axis::Longitudinal, longitudinal_system(), Matrix4x2::zeros());

    for _ in 0..TRIALS {
        let model = perturb_model(&base, &mut rng, 0.1);
        let modal = decompose(&model.system, &settings).unwrap();
        let poly = modal.characteristic_polynomial();
        let scale = poly.max_abs_coefficient();
        for lambda in modal.eigenvalues.iter() {
            let magnitude = lambda.modulus().max(1.0).powi(4);
            assert!(poly.eval(*lambda).modulus() <= 1e-9 * scale * magnitude);
        }
    }
}

#[test]
fn test_transfer_functions_match_resolvent() {
    let mut rng = seeded_rng(3);
    let exact = ResolventExpansion::default();
    let sampled = FrequencySampling::default();

    for axis in [Axis::Longitudinal, Axis::Lateral] {
        let base = business_jet_model(axis);
        for _ in 0..TRIALS {
            let model = perturb_model(&base, &mut rng, 0.05);
            let s = Complex::new(rng.gen_range(-0.5..0.5), rng.gen_range(0.2..5.0));
            let direct = direct_response(&model, s);

            for backend in [&exact as &dyn SymbolicLinearSystem, &sampled] {
                let set = backend.transfer_functions(&model).unwrap();
                for (j, channel) in set.channels.iter().enumerate() {
                    for (i, tf) in channel.functions.iter().enumerate() {
                        let expected = direct[(i, j)];
                        let error = (tf.eval(s) - expected).modulus();
                        assert!(
                            error <= 1e-6 * expected.modulus().max(1e-9),
                            "{} entry ({}, {}) off by {}",
                            axis,
                            i,
                            j,
                            error
                        );
                    }
                }
            }
        }
    }
}
