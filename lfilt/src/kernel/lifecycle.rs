use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
///
/// Everything a kernel needs is checked once in [`KernelLifecycle::try_new`], so execution
/// entrypoints only have to validate the buffers they are handed.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}

