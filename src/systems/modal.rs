use nalgebra::{Complex, ComplexField, Matrix4, Vector4};
use std::cmp::Ordering;
use tracing::{debug, warn};

use crate::components::{Axis, IdentifiedModes, ModalSet, Mode, ModeKind};
use crate::resources::AnalysisSettings;
use crate::utils::constants::{
    REAL_EIGENVALUE_TOLERANCE, REPEATED_EIGENVALUE_TOLERANCE, STATE_COUNT,
};
use crate::utils::errors::{Result, StabilityError};

/// Eigenvalues and unit eigenvectors of the system matrix.
///
/// Eigenvalues come from the real Schur form. Eigenvalues that coincide are
/// grouped, and a group of `k` takes the `k` right singular vectors of
/// `A - λI` with the smallest singular values. Each vector is scaled to unit
/// norm and rotated so that its largest entry is real and positive.
///
/// A matrix that is not diagonalizable has no full set of eigenvectors and
/// is reported as `NumericDegeneracy`.
pub fn decompose(system: &Matrix4<f64>, settings: &AnalysisSettings) -> Result<ModalSet> {
    if system.iter().any(|x| !x.is_finite()) {
        return Err(StabilityError::NumericDegeneracy(
            "system matrix has non-finite entries".to_string(),
        ));
    }

    let schur = (*system)
        .try_schur(settings.eigen_tolerance, settings.max_iterations)
        .ok_or_else(|| {
            StabilityError::NumericDegeneracy("Schur decomposition did not converge".to_string())
        })?;
    let eigenvalues: Vector4<Complex<f64>> = schur.complex_eigenvalues();
    for (i, lambda) in eigenvalues.iter().enumerate() {
        debug!("lambda[{}] = {:.6} {:+.6}i", i, lambda.re, lambda.im);
    }

    let scale = eigenvalues.iter().fold(1.0_f64, |m, l| m.max(l.modulus()));
    let null_tolerance = REPEATED_EIGENVALUE_TOLERANCE * system.norm().max(1.0);

    let mut columns = vec![Vector4::<Complex<f64>>::zeros(); STATE_COUNT];
    for group in repeated_roots(&eigenvalues, REPEATED_EIGENVALUE_TOLERANCE * scale) {
        let shift = group.iter().map(|&i| eigenvalues[i]).sum::<Complex<f64>>()
            / group.len() as f64;
        if group.len() > 1 {
            debug!("{} has multiplicity {}", shift, group.len());
        }
        let basis = eigenspace(system, shift, group.len(), null_tolerance, settings)?;
        for (&i, vector) in group.iter().zip(basis) {
            columns[i] = vector;
        }
    }

    let eigenvectors = Matrix4::from_columns(&columns);
    check_independent(&eigenvectors, settings)?;

    Ok(ModalSet {
        eigenvalues,
        eigenvectors,
    })
}

/// Indices of eigenvalues lying within `tolerance` of the first member of a group.
fn repeated_roots(eigenvalues: &Vector4<Complex<f64>>, tolerance: f64) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (i, &lambda) in eigenvalues.iter().enumerate() {
        match groups
            .iter_mut()
            .find(|g| (eigenvalues[g[0]] - lambda).modulus() <= tolerance)
        {
            Some(group) => group.push(i),
            None => groups.push(vec![i]),
        }
    }
    groups
}

/// `multiplicity` orthonormal vectors spanning the null space of `A - λI`.
fn eigenspace(
    system: &Matrix4<f64>,
    lambda: Complex<f64>,
    multiplicity: usize,
    tolerance: f64,
    settings: &AnalysisSettings,
) -> Result<Vec<Vector4<Complex<f64>>>> {
    let mut shifted: Matrix4<Complex<f64>> = system.map(|x| Complex::new(x, 0.0));
    for i in 0..STATE_COUNT {
        shifted[(i, i)] -= lambda;
    }

    let svd = shifted
        .try_svd(false, true, settings.eigen_tolerance, settings.max_iterations)
        .ok_or_else(|| {
            StabilityError::NumericDegeneracy(format!(
                "null space of A - ({})I did not converge",
                lambda
            ))
        })?;
    let v_t = svd.v_t.ok_or_else(|| {
        StabilityError::NumericDegeneracy("right singular vectors were not computed".to_string())
    })?;

    let mut order: Vec<usize> = (0..STATE_COUNT).collect();
    order.sort_by(|&a, &b| {
        svd.singular_values[a]
            .partial_cmp(&svd.singular_values[b])
            .unwrap_or(Ordering::Equal)
    });

    // A defective root has fewer eigenvectors than its multiplicity
    let weakest = svd.singular_values[order[multiplicity - 1]];
    if !(weakest <= tolerance) {
        return Err(StabilityError::NumericDegeneracy(format!(
            "eigenvalue {} has multiplicity {} but a smaller eigenspace (sigma = {:e}), \
             the system matrix is not diagonalizable",
            lambda, multiplicity, weakest
        )));
    }

    order[..multiplicity]
        .iter()
        .map(|&row| unit_phase(v_t.row(row).adjoint(), lambda))
        .collect()
}

/// Unit norm, with the arbitrary phase fixed on the largest entry.
fn unit_phase(
    vector: Vector4<Complex<f64>>,
    lambda: Complex<f64>,
) -> Result<Vector4<Complex<f64>>> {
    let norm = vector.norm();
    if !(norm.is_finite() && norm > 0.0) {
        return Err(StabilityError::NumericDegeneracy(format!(
            "degenerate eigenvector for {}",
            lambda
        )));
    }
    let vector = vector.unscale(norm);

    let (pivot, _) = vector
        .iter()
        .enumerate()
        .fold((0, -1.0), |best, (i, c)| {
            if c.modulus() > best.1 {
                (i, c.modulus())
            } else {
                best
            }
        });
    let phase = vector[pivot] / vector[pivot].modulus();
    let mut vector = vector.map(|c| c * phase.conj());
    vector[pivot].im = 0.0;
    Ok(vector)
}

/// Rejects eigenvector matrices that are numerically singular.
fn check_independent(
    eigenvectors: &Matrix4<Complex<f64>>,
    settings: &AnalysisSettings,
) -> Result<()> {
    let svd = eigenvectors
        .try_svd(false, false, settings.eigen_tolerance, settings.max_iterations)
        .ok_or_else(|| {
            StabilityError::NumericDegeneracy(
                "eigenvector matrix decomposition did not converge".to_string(),
            )
        })?;
    let smallest = svd
        .singular_values
        .iter()
        .fold(f64::INFINITY, |m, &s| m.min(s));
    if !(smallest > REPEATED_EIGENVALUE_TOLERANCE) {
        return Err(StabilityError::NumericDegeneracy(format!(
            "eigenvectors are linearly dependent (smallest singular value {:e})",
            smallest
        )));
    }
    Ok(())
}

/// Names the modes of a decomposition according to the axis conventions.
pub fn identify_modes(axis: Axis, modal: &ModalSet) -> Result<IdentifiedModes> {
    match axis {
        Axis::Longitudinal => Ok(identify_longitudinal(modal)),
        Axis::Lateral => identify_lateral(modal),
    }
}

/// Fastest-decaying eigenvalue is the short period, slowest the phugoid.
pub fn identify_longitudinal(modal: &ModalSet) -> IdentifiedModes {
    let order = modal.indices_by_real_part();
    let modes = vec![
        mode(modal, ModeKind::ShortPeriod, order[0]),
        mode(modal, ModeKind::Phugoid, order[STATE_COUNT - 1]),
    ];
    for m in &modes {
        if m.eigenvalue.im == 0.0 {
            warn!("{} eigenvalue {} is not oscillatory", m.kind, m.eigenvalue.re);
        }
    }
    IdentifiedModes {
        axis: Axis::Longitudinal,
        modes,
    }
}

/// Expects one complex pair (dutch roll) and two real roots. The faster real
/// root is roll subsidence, the slower one spiral.
pub fn identify_lateral(modal: &ModalSet) -> Result<IdentifiedModes> {
    let ev = &modal.eigenvalues;
    let scale = ev.iter().fold(1.0_f64, |m, l| m.max(l.modulus()));
    let tolerance = REAL_EIGENVALUE_TOLERANCE * scale;

    let (real, complex): (Vec<usize>, Vec<usize>) =
        (0..STATE_COUNT).partition(|&i| ev[i].im.abs() <= tolerance);
    if real.len() != 2 || complex.len() != 2 {
        return Err(StabilityError::ModeIdentification(format!(
            "expected two real eigenvalues and one complex pair, found {} real and {} complex",
            real.len(),
            complex.len()
        )));
    }

    let dutch_roll = complex
        .iter()
        .copied()
        .find(|&i| ev[i].im > 0.0)
        .unwrap_or(complex[0]);
    let (rolling, spiral) = if ev[real[0]].re.abs() >= ev[real[1]].re.abs() {
        (real[0], real[1])
    } else {
        (real[1], real[0])
    };

    Ok(IdentifiedModes {
        axis: Axis::Lateral,
        modes: vec![
            mode(modal, ModeKind::Rolling, rolling),
            mode(modal, ModeKind::Spiral, spiral),
            mode(modal, ModeKind::DutchRoll, dutch_roll),
        ],
    })
}

fn mode(modal: &ModalSet, kind: ModeKind, index: usize) -> Mode {
    Mode {
        kind,
        index,
        eigenvalue: modal.eigenvalues[index],
    }
}
