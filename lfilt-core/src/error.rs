use alloc::string::String;
use core::{error, fmt};

/// Errors raised whilst evaluating a linear filter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Filter coefficients cannot be normalized or evaluated.
    InvalidCoefficients {
        /// The offending coefficient vector, `b` or `a`.
        arg: String,
        /// Explaining why the coefficients are invalid.
        reason: String,
    },
    /// A buffer or other non-coefficient argument cannot be used.
    InvalidArg {
        /// The argument name.
        arg: String,
        /// Explaining why the argument is invalid.
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCoefficients { arg, reason } => {
                write!(f, "Invalid coefficients `{arg}`: {reason}")
            }
            Error::InvalidArg { arg, reason } => write!(f, "Invalid argument `{arg}`: {reason}"),
        }
    }
}

impl error::Error for Error {}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_argument_and_reason() {
        let err = Error::InvalidCoefficients {
            arg: "a".into(),
            reason: "First element of a found to be zero.".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid coefficients `a`: First element of a found to be zero."
        );
    }
}
