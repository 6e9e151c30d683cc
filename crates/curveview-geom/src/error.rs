use thiserror::Error;

/// Errors raised by sampling and coordinate mapping.
///
/// Every operation validates its inputs up front and returns one of these
/// instead of producing NaN/Inf downstream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

impl GeomError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;
