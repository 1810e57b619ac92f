use nalgebra::{Matrix4, Matrix4x2};

use crate::components::{
    Axis, CruiseCondition, DimensionalDerivativeSet, LateralDerivatives, LongitudinalDerivatives,
    StateSpaceModel,
};

/// Builds the state-space model of the axis the derivative set belongs to.
pub fn assemble_model(
    derivatives: &DimensionalDerivativeSet,
    cruise: &CruiseCondition,
) -> StateSpaceModel {
    match derivatives {
        DimensionalDerivativeSet::Longitudinal(d) => assemble_longitudinal(d, cruise),
        DimensionalDerivativeSet::Lateral(d) => assemble_lateral(d, cruise),
    }
}

/// State (u, w, q, θ), controls (elevator, throttle).
///
/// The third row folds the ẇ dependence of the pitching moment back into the
/// u, w and q columns.
pub fn assemble_longitudinal(
    d: &LongitudinalDerivatives,
    cruise: &CruiseCondition,
) -> StateSpaceModel {
    let g = cruise.gravity;
    let v = cruise.airspeed;
    let theta = cruise.theta_deg.to_radians();

    #[rustfmt::skip]
    let system = Matrix4::new(
        d.x_u,                   d.x_w,                   0.0,                   -g * theta.cos(),
        d.z_u,                   d.z_w,                   v,                     -g * theta.sin(),
        d.m_u + d.z_u * d.m_w_dot, d.m_w + d.z_w * d.m_w_dot, d.m_q + v * d.m_w_dot, 0.0,
        0.0,                     0.0,                     1.0,                   0.0,
    );

    #[rustfmt::skip]
    let control = Matrix4x2::new(
        d.x_delta_e,                           d.x_delta_t,
        d.z_delta_e,                           d.z_delta_t,
        d.m_delta_e + d.m_w_dot * d.z_delta_e, d.m_delta_t + d.m_w_dot * d.z_delta_t,
        0.0,                                   0.0,
    );

    StateSpaceModel::new(Axis::Longitudinal, system, control)
}

/// State (v, p, r, φ), controls (aileron, rudder).
pub fn assemble_lateral(d: &LateralDerivatives, cruise: &CruiseCondition) -> StateSpaceModel {
    let g = cruise.gravity;
    let v = cruise.airspeed;
    let theta = cruise.theta_deg.to_radians();

    #[rustfmt::skip]
    let system = Matrix4::new(
        d.y_v, d.y_p, -(v - d.y_r), g * theta.cos(),
        d.l_v, d.l_p, d.l_r,        0.0,
        d.n_v, d.n_p, d.n_r,        0.0,
        0.0,   1.0,   0.0,          0.0,
    );

    #[rustfmt::skip]
    let control = Matrix4x2::new(
        d.y_delta_a, d.y_delta_r,
        d.l_delta_a, d.l_delta_r,
        d.n_delta_a, d.n_delta_r,
        0.0,         0.0,
    );

    StateSpaceModel::new(Axis::Lateral, system, control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Geometry, LateralCoefficients, LongitudinalCoefficients};
    use crate::systems::derivatives::{
        calculate_lateral_derivatives, calculate_longitudinal_derivatives,
    };
    use approx::assert_relative_eq;

    fn longitudinal_model(theta_deg: f64) -> StateSpaceModel {
        let mut cruise = CruiseCondition::business_jet();
        cruise.theta_deg = theta_deg;
        let d = calculate_longitudinal_derivatives(
            &cruise,
            &LongitudinalCoefficients::business_jet(),
            &Geometry::business_jet(),
        )
        .unwrap();
        assemble_longitudinal(&d, &cruise)
    }

    #[test]
    fn test_longitudinal_structure() {
        let model = longitudinal_model(0.0);
        let a = &model.system;

        assert!(model.has_kinematic_row());
        assert_eq!(a[(0, 2)], 0.0);
        assert_eq!(a[(1, 2)], 206.0);
        assert_relative_eq!(a[(0, 3)], -9.81);
        // -g·sin(0) is -0.0 before normalisation
        assert_eq!(a[(1, 3)], 0.0);
        assert!(a[(1, 3)].is_sign_positive());
        assert_eq!(model.control[(3, 0)], 0.0);
        assert_eq!(model.control[(3, 1)], 0.0);
    }

    #[test]
    fn test_theta_in_degrees() {
        let model = longitudinal_model(90.0);
        assert_relative_eq!(model.system[(0, 3)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(model.system[(1, 3)], -9.81);
    }

    #[test]
    fn test_pitch_row_couples_w_dot() {
        let cruise = CruiseCondition::business_jet();
        let d = calculate_longitudinal_derivatives(
            &cruise,
            &LongitudinalCoefficients::business_jet(),
            &Geometry::business_jet(),
        )
        .unwrap();
        let model = assemble_longitudinal(&d, &cruise);

        assert_relative_eq!(model.system[(2, 0)], d.m_u + d.z_u * d.m_w_dot);
        assert_relative_eq!(model.system[(2, 2)], d.m_q + cruise.airspeed * d.m_w_dot);
        assert_relative_eq!(
            model.control[(2, 0)],
            d.m_delta_e + d.m_w_dot * d.z_delta_e
        );
    }

    #[test]
    fn test_lateral_structure() {
        let cruise = CruiseCondition::business_jet();
        let d = calculate_lateral_derivatives(
            &cruise,
            &LateralCoefficients::business_jet(),
            &Geometry::business_jet(),
        )
        .unwrap();
        let model = assemble_lateral(&d, &cruise);

        assert!(model.has_kinematic_row());
        assert_eq!(model.axis, Axis::Lateral);
        assert_relative_eq!(model.system[(0, 2)], -(206.0 - d.y_r));
        assert_relative_eq!(model.system[(0, 3)], 9.81);
        // Zero side-force derivatives arrive as exact zeros
        assert_eq!(model.system[(0, 1)], 0.0);
        assert_eq!(model.control[(0, 0)], 0.0);
        assert!(model.control[(1, 0)] > 0.0);
        assert!(model.control[(2, 1)] < 0.0);
    }
}
