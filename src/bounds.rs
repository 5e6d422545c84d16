//! Von Neumann bounds on the extreme singular values of random negacyclic
//! matrices, as functions of the dimension only.

/// The bound triple tested at a given dimension n.
///
/// `upper` is the expected ceiling `10 * sqrt(n)` for the maximum singular
/// value and `lower` the loose floor `0.1 / sqrt(n)` for the minimum.
/// `tight_lower` is the theoretical floor `1 / sqrt(n)`, reported for
/// comparison but never used in pass/fail testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonNeumannBounds {
    pub upper: f64,
    pub lower: f64,
    pub tight_lower: f64,
}

impl VonNeumannBounds {
    pub fn for_dimension(dim: usize) -> Self {
        let sqrt_n = (dim as f64).sqrt();
        Self {
            upper: 10.0 * sqrt_n,
            lower: 0.1 / sqrt_n,
            tight_lower: 1.0 / sqrt_n,
        }
    }
}
