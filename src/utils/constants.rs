/// Reserved `q_mean` value meaning "derive dynamic pressure from rho and V".
pub const UNSET_DYNAMIC_PRESSURE: f64 = -1111.0;

/// Taper ratio used when a geometry table does not carry one.
pub const DEFAULT_TAPER_RATIO: f64 = 0.5;

pub const STATE_COUNT: usize = 4; // rows/cols of the system matrix
pub const CONTROL_COUNT: usize = 2; // columns of the control matrix

// Default output filenames for persisted matrices
pub const LONGITUDINAL_MATRIX_FILE: &str = "longMatrix.json";
pub const LATERAL_MATRIX_FILE: &str = "latMatrix.json";

/// Iteration cap for the real Schur decomposition.
pub const MAX_SCHUR_ITERATIONS: usize = 1000;

/// Relative imaginary magnitude under which an eigenvalue counts as real.
pub const REAL_EIGENVALUE_TOLERANCE: f64 = 1e-9;

/// Relative separation under which eigenvalues are grouped as one repeated root.
/// Also the smallest singular value the eigenvector matrix may have.
pub const REPEATED_EIGENVALUE_TOLERANCE: f64 = 1e-6;
