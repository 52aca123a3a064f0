//! Library error type

/// Errors raised by the library. Absence of a period is not an error, see [`crate::period`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Argument outside of the accepted domain, e.g. negative sequence length or zero in a
    /// subtraction set
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Canvas could not be created or encoded
    #[error("Render error: {0}")]
    Render(String),
}
