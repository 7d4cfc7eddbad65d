use std::collections::TryReserveError;

/// Errors reported by the library.
///
/// Ill-formed input is never an error: decoders substitute U+FFFD and keep
/// going. Only arguments that can't be represented and failed allocations
/// reach the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value is out of range, a surrogate or a noncharacter.
    #[error("invalid codepoint U+{0:04X}")]
    InvalidCodepoint(u32),

    /// Growing an output buffer failed.
    #[error("could not allocate output buffer: {0}")]
    OutOfMemory(#[from] TryReserveError),

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for configuration key `{key}`")]
    InvalidConfig {
        /// Name of the offending key.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
