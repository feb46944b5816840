/*
MIT License

Copyright (c) 2025 Ameyanagi

Model formulations adapted from published SasView marketplace kernels.
Copyright of the original models remains with their respective authors.
*/

use thiserror::Error;

/// Errors raised while constructing or evaluating model kernels
#[derive(Error, Debug)]
pub enum ModelError {
    /// Per-shell parameter slices disagree in length
    #[error(
        "shell parameter length mismatch: {name} has {got} entries, expected {expected}"
    )]
    ShellCountMismatch {
        name: &'static str,
        got: usize,
        expected: usize,
    },

    /// A model parameter is outside the domain the kernel can evaluate
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Generic model error
    #[error("model error: {0}")]
    Generic(String),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
