//! Empirical validation of Von Neumann bounds on the extreme singular
//! values of random negacyclic matrices.
//!
//! Negacyclic matrices model polynomial multiplication modulo x^n + 1, the
//! arithmetic underlying ring-based lattice cryptography. The extreme
//! singular values of a random negacyclic matrix bound its operator norm
//! and invertibility margin, so parameter analysis relies on probabilistic
//! bounds for them. This crate checks those bounds experimentally: it
//! samples random generating vectors, builds the matrices, computes their
//! singular value spectra and counts bound violations across a geometric
//! sweep of dimensions.

pub mod bounds;
pub mod error;
pub mod experiment;
pub mod negacyclic;
pub mod spectral;

pub use bounds::VonNeumannBounds;
pub use error::{Result, SpectralError};
pub use experiment::{
    random_testing, random_testing_parallel, run_experiment, ExperimentSummary, TrialStats,
};
pub use negacyclic::{negacyclic, sample_generating_vector};
pub use spectral::extreme_singular_values;
