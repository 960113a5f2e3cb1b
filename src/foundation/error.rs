use std::path::Path;

/// Result alias for every fallible framecurve API.
pub type FramecurveResult<T> = Result<T, FramecurveError>;

/// Failures from building, loading or resolving animated values.
///
/// The first four variants describe bad input and carry a message naming the offending
/// control point, parameter or property. [`FramecurveError::Other`] carries environment
/// failures (file IO, worker pool startup) with their source chain intact.
#[derive(thiserror::Error, Debug)]
pub enum FramecurveError {
    /// Malformed keyframe pair, frame range or sheet field.
    #[error("validation error: {0}")]
    Validation(String),

    /// Timing expression with an unusable parameter (speed, loop period, empty sequence).
    #[error("animation error: {0}")]
    Animation(String),

    /// A property failed while a sheet was resolved at a given frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Sheet JSON that does not parse or does not describe a valid sheet.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Environment failure; displayed with its full cause chain.
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl FramecurveError {
    /// Build a [`FramecurveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramecurveError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FramecurveError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`FramecurveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub(crate) fn io(action: &str, path: &Path, source: std::io::Error) -> Self {
        Self::Other(anyhow::Error::new(source).context(format!("{action} '{}'", path.display())))
    }
}

impl From<serde_json::Error> for FramecurveError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
