/// Convenience result type used across the crate.
pub type FanResult<T> = Result<T, FanError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// A running transition never fails; these errors come from parsing caller options, validating
/// custom stage timings and parsing the star layer markup.
#[derive(thiserror::Error, Debug)]
pub enum FanError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing options or timelines.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FanError {
    /// Build a [`FanError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FanError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FanError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
