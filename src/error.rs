use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectralError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Singular value decomposition failed: {0}")]
    DecompositionFailed(String),
}

pub type Result<T> = std::result::Result<T, SpectralError>;
