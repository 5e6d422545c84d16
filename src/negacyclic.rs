//! Negacyclic (skew-circulant) matrix construction and generating-vector
//! sampling.
//!
//! A negacyclic matrix models multiplication in the quotient ring
//! Z[x]/(x^n + 1): column 0 holds the generating vector v, and every
//! subsequent column is the previous column cyclically shifted down by one
//! position with the wrapped entry negated. Equivalently, it is the Toeplitz
//! matrix with first column v and first row [v_0, -v_{n-1}, ..., -v_1].
//!
//! The spectra of these matrices control the invertibility margin of random
//! ring elements, which is what the Von Neumann bound experiment in
//! [`crate::experiment`] probes.

use nalgebra::DMatrix;
use rand::Rng;

/// Builds the n x n negacyclic matrix whose first column is `vec`.
///
/// Defined for any finite real generating vector with n >= 1, even or odd.
/// Entry (i, j) is `vec[i - j]` on and below the diagonal and
/// `-vec[n - (j - i)]` above it.
pub fn negacyclic(vec: &[f64]) -> DMatrix<f64> {
    let n = vec.len();
    assert!(n >= 1, "generating vector must be non-empty");
    DMatrix::from_fn(n, n, |i, j| {
        if i >= j {
            vec[i - j]
        } else {
            -vec[n - (j - i)]
        }
    })
}

/// Samples a generating vector of length `n` with i.i.d. entries uniform in
/// `[0, bound)`.
///
/// If the draw happens to be identically zero, one uniformly-random
/// coordinate is forced to 1 so the resulting matrix is never trivial.
pub fn sample_generating_vector<R: Rng + ?Sized>(n: usize, bound: u64, rng: &mut R) -> Vec<f64> {
    let mut vec: Vec<f64> = (0..n).map(|_| rng.gen_range(0..bound) as f64).collect();
    if vec.iter().all(|&x| x == 0.0) {
        vec[rng.gen_range(0..n)] = 1.0;
    }
    vec
}
