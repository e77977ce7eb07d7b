use core::fmt;

/// Validation errors raised at kernel construction or adapter binding time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required coefficient vector is empty.
    EmptyInput {
        /// Name of the argument that is empty.
        arg: &'static str,
    },
    /// Coefficients are present but cannot be normalized.
    InvalidCoefficients {
        /// Name of the coefficient vector.
        arg: &'static str,
        /// Human readable reason.
        reason: &'static str,
    },
    /// A contiguous 1D slice view could not be obtained.
    NonContiguous {
        /// Name of the argument that is non-contiguous.
        arg: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyInput { arg } => write!(f, "Input `{arg}` was empty."),
            ConfigError::InvalidCoefficients { arg, reason } => {
                write!(f, "Invalid coefficients `{arg}`: {reason}")
            }
            ConfigError::NonContiguous { arg } => {
                write!(f, "Argument `{arg}` is not contiguous in memory.")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Coefficient problems map onto [`lfilt_core::Error::InvalidCoefficients`], buffer problems
/// onto [`lfilt_core::Error::InvalidArg`].
impl From<ConfigError> for lfilt_core::Error {
    fn from(value: ConfigError) -> Self {
        match value {
            ConfigError::EmptyInput { arg } => lfilt_core::Error::InvalidCoefficients {
                arg: arg.into(),
                reason: "coefficient vector must not be empty.".into(),
            },
            ConfigError::InvalidCoefficients { arg, reason } => {
                lfilt_core::Error::InvalidCoefficients {
                    arg: arg.into(),
                    reason: reason.into(),
                }
            }
            ConfigError::NonContiguous { arg } => lfilt_core::Error::InvalidArg {
                arg: arg.into(),
                reason: "buffer is not contiguous in memory.".into(),
            },
        }
    }
}

/// Runtime execution invariant violations for checked kernel entrypoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecInvariantViolation {
    /// Output length mismatched the expected runtime shape.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
    /// Adapter binding/configuration failure.
    Config(ConfigError),
}

impl From<ConfigError> for ExecInvariantViolation {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl fmt::Display for ExecInvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecInvariantViolation::LengthMismatch { arg, expected, got } => {
                write!(
                    f,
                    "Execution length mismatch on `{arg}`. Expected {expected}, got {got}."
                )
            }
            ExecInvariantViolation::Config(err) => write!(f, "{err}"),
        }
    }
}

impl core::error::Error for ExecInvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn config_error_maps_to_invalid_coefficients() {
        let err: lfilt_core::Error = ConfigError::EmptyInput { arg: "a" }.into();
        assert!(matches!(
            err,
            lfilt_core::Error::InvalidCoefficients { ref arg, .. } if arg == "a"
        ));

        let err: lfilt_core::Error = ConfigError::InvalidCoefficients {
            arg: "a",
            reason: "leading coefficient must be non-zero",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid coefficients `a`: leading coefficient must be non-zero"
        );
    }

    #[test]
    fn non_contiguous_buffer_is_not_a_coefficient_error() {
        let err: lfilt_core::Error = ConfigError::NonContiguous { arg: "array_view" }.into();
        assert_eq!(
            err,
            lfilt_core::Error::InvalidArg {
                arg: "array_view".into(),
                reason: "buffer is not contiguous in memory.".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid argument `array_view`: buffer is not contiguous in memory."
        );
    }

    #[test]
    fn exec_violation_wraps_config_display() {
        let err = ExecInvariantViolation::from(ConfigError::NonContiguous { arg: "array_view" });
        assert_eq!(
            err.to_string(),
            "Argument `array_view` is not contiguous in memory."
        );
    }
}
