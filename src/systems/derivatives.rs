use std::f64::consts::PI;
use tracing::debug;

use crate::components::{
    AerodynamicCoefficients, CruiseCondition, DimensionalDerivativeSet, Geometry,
    LateralCoefficients, LateralDerivatives, LongitudinalCoefficients, LongitudinalDerivatives,
};
use crate::utils::errors::Result;

/// Dimensionalises the coefficient table of whichever axis it belongs to.
pub fn calculate_derivatives(
    cruise: &CruiseCondition,
    coefficients: &AerodynamicCoefficients,
    geometry: &Geometry,
) -> Result<DimensionalDerivativeSet> {
    let set = match coefficients {
        AerodynamicCoefficients::Longitudinal(c) => DimensionalDerivativeSet::Longitudinal(
            calculate_longitudinal_derivatives(cruise, c, geometry)?,
        ),
        AerodynamicCoefficients::Lateral(c) => {
            DimensionalDerivativeSet::Lateral(calculate_lateral_derivatives(cruise, c, geometry)?)
        }
    };
    for (name, value) in set.entries() {
        debug!("{} = {:.6e}", name, value);
    }
    Ok(set)
}

/// Longitudinal derivatives for the state (u, w, q, θ).
pub fn calculate_longitudinal_derivatives(
    cruise: &CruiseCondition,
    coef: &LongitudinalCoefficients,
    geometry: &Geometry,
) -> Result<LongitudinalDerivatives> {
    let q_s = cruise.dynamic_pressure * geometry.wing_area;
    let v = cruise.airspeed;
    let m = cruise.mass;
    let c = geometry.mean_chord;
    let iyy = cruise.inertia.iyy()?;
    let c_d_0 = cruise.c_d_0()?;
    let c_l_0 = cruise.c_l_0()?;

    // Force derivatives scale with q̄S/(mV), moment derivatives with q̄Sc̄/(Iyy V)
    let force = q_s / (m * v);
    let force_rate = (q_s * c) / (2.0 * m * v.powi(2));
    let moment = (q_s * c) / (iyy * v);

    let induced = 2.0 / (PI * geometry.aspect_ratio * geometry.oswald);

    Ok(LongitudinalDerivatives {
        x_u: -force * (2.0 * c_d_0 + coef.c_d_u),
        x_w: force * (c_l_0 * (1.0 - induced * coef.c_l_alpha)),
        z_u: -force * (2.0 * c_l_0 + coef.c_l_u),
        z_w: -force * (c_d_0 + coef.c_l_alpha),
        z_w_dot: force_rate * (c_d_0 * coef.c_l_alpha_dot),
        z_q: force_rate * coef.c_l_q,
        m_u: moment * coef.c_m_u,
        m_w: moment * coef.c_m_alpha,
        m_w_dot: (q_s * c.powi(2)) / (2.0 * iyy * v.powi(2)) * coef.c_m_alpha_dot,
        m_q: (q_s * c.powi(2)) / (2.0 * iyy * v) * coef.c_m_q,
        x_delta_e: force * coef.c_d_delta_e,
        z_delta_e: force * coef.c_l_delta_e,
        m_delta_e: moment * coef.c_m_delta_e,
        x_delta_t: force * coef.c_d_delta_t,
        z_delta_t: force * coef.c_l_delta_t,
        m_delta_t: moment * coef.c_m_delta_t,
    })
}

/// Lateral-directional derivatives for the state (v, p, r, φ).
pub fn calculate_lateral_derivatives(
    cruise: &CruiseCondition,
    coef: &LateralCoefficients,
    geometry: &Geometry,
) -> Result<LateralDerivatives> {
    let q_s = cruise.dynamic_pressure * geometry.wing_area;
    let q_sb = q_s * geometry.wing_span;
    let q_sb2 = q_sb * geometry.wing_span;
    let v = cruise.airspeed;
    let m = cruise.mass;
    let ixx = cruise.inertia.ixx()?;
    let izz = cruise.inertia.izz()?;

    Ok(LateralDerivatives {
        y_v: q_s * coef.c_y_beta / (m * v),
        y_p: q_sb * coef.c_y_p / (2.0 * m * v),
        y_r: q_sb * coef.c_y_r / (2.0 * m * v),
        l_v: q_sb * coef.c_l_beta / (ixx * v),
        l_p: q_sb2 * coef.c_l_p / (2.0 * ixx * v),
        l_r: q_sb2 * coef.c_l_r / (2.0 * ixx * v),
        n_v: q_sb * coef.c_n_beta / (izz * v),
        n_p: q_sb2 * coef.c_n_p / (2.0 * izz * v),
        n_r: q_sb2 * coef.c_n_r / (2.0 * izz * v),
        y_delta_a: q_s * coef.c_y_delta_a / m,
        y_delta_r: q_s * coef.c_y_delta_r / m,
        l_delta_a: q_sb * coef.c_l_delta_a / ixx,
        l_delta_r: q_sb * coef.c_l_delta_r / ixx,
        n_delta_a: q_sb * coef.c_n_delta_a / izz,
        n_delta_r: q_sb * coef.c_n_delta_r / izz,
    })
}
