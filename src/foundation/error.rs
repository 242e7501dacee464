/// Convenience result type used across trochograph.
pub type TrochographResult<T> = Result<T, TrochographError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TrochographError {
    /// Invalid user-provided scene or module configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Numeric degeneracy (NaN/infinity, zero total arc length) that could
    /// not be recovered locally.
    #[error("numeric degeneracy: {0}")]
    Numeric(String),

    /// A pipeline stage broke the grid/sequence length invariant.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),

    /// Errors when serializing or deserializing scene files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrochographError {
    /// Build a [`TrochographError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TrochographError::Numeric`] value.
    pub fn numeric(msg: impl Into<String>) -> Self {
        Self::Numeric(msg.into())
    }

    /// Build a [`TrochographError::LengthMismatch`] value.
    pub fn length_mismatch(msg: impl Into<String>) -> Self {
        Self::LengthMismatch(msg.into())
    }

    /// Build a [`TrochographError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
