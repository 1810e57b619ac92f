use nalgebra::Matrix4;

/// Business jet longitudinal system matrix, rounded to seven decimals.
#[rustfmt::skip]
pub fn longitudinal_system() -> Matrix4<f64> {
    Matrix4::new(
        -0.0240957, 0.0128808, 0.0, -9.81,
        -0.1719112, -0.8276395, 206.0, 0.0,
        0.0040306, -0.0440364, -1.7030902, 0.0,
        0.0, 0.0, 1.0, 0.0,
    )
}

/// det(sI - A) of the business jet longitudinal model, highest power first.
pub const LONGITUDINAL_CHARACTERISTIC: [f64; 5] =
    [1.0, 2.5548254, 10.5442444, 0.2851653, 0.1069904];

/// Short period (ωn, ζ).
pub const SHORT_PERIOD: (f64, f64) = (3.23595, 0.39093);
/// Phugoid (ωn, ζ).
pub const PHUGOID: (f64, f64) = (0.101081, 0.122496);

/// det(sI - A) of the business jet lateral model, highest power first.
pub const LATERAL_CHARACTERISTIC: [f64; 5] = [1.0, 2.9607, 9.28649, 23.98276, 0.119388];

pub const ROLL_EIGENVALUE: f64 = -2.749676;
pub const SPIRAL_EIGENVALUE: f64 = -0.0049877;
/// Dutch roll eigenvalue with positive imaginary part.
pub const DUTCH_ROLL_EIGENVALUE: (f64, f64) = (-0.103018, 2.948661);
/// Dutch roll (ωn, ζ).
pub const DUTCH_ROLL: (f64, f64) = (2.95046, 0.034916);
