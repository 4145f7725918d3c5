/// Convenience result type used across stargaze.
pub type StargazeResult<T> = Result<T, StargazeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum StargazeError {
    /// Malformed or missing configuration field. Raised before any frame is computed.
    #[error("config validation error: {0}")]
    ConfigValidation(String),

    /// Interpolation or easing ranges that cannot be evaluated.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Invalid animation parameters (spring constants, easing control points).
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while resolving visual state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),
}

impl StargazeError {
    /// Build a [`StargazeError::ConfigValidation`] value.
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Self::ConfigValidation(msg.into())
    }

    /// Build a [`StargazeError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`StargazeError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`StargazeError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
