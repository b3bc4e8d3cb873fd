/// Crate-level error type for phasor construction and arithmetic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Constructor input has the wrong shape or is missing a component.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Divisor has zero magnitude.
    #[error("division by a zero-magnitude phasor")]
    DivisionByZero,
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Convenience Result type for phasor operations.
pub type Result<T> = std::result::Result<T, Error>;
