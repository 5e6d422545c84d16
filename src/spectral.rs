//! Extreme singular value extraction via full SVD over the reals.

use nalgebra::{DMatrix, SVD};

use crate::error::{Result, SpectralError};

/// Returns the pair `(smax, smin)` of extreme singular values of `mat`.
///
/// The full singular value set is scanned for its maximum and minimum; no
/// assumption is made about the ordering convention of the decomposition
/// routine. Non-convergence on degenerate or non-finite input is fatal and
/// surfaces as [`SpectralError::DecompositionFailed`].
pub fn extreme_singular_values(mat: &DMatrix<f64>) -> Result<(f64, f64)> {
    let svd = SVD::try_new(mat.clone(), false, false, f64::EPSILON, 0).ok_or_else(|| {
        SpectralError::DecompositionFailed(format!(
            "SVD did not converge for a {}x{} matrix",
            mat.nrows(),
            mat.ncols()
        ))
    })?;
    let smax = svd
        .singular_values
        .iter()
        .fold(f64::NEG_INFINITY, |acc, &s| acc.max(s));
    let smin = svd
        .singular_values
        .iter()
        .fold(f64::INFINITY, |acc, &s| acc.min(s));
    Ok((smax, smin))
}
