use thiserror::Error;

/// Core error type shared across Passio crates.
///
/// Every variant is an argument problem detected before generation starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// One of the length bounds is zero or negative.
    #[error("length must be positive (got {min}-{max})")]
    NonPositiveLength { min: i64, max: i64 },
    /// The lower length bound is above the upper one.
    #[error("minimum length cannot be greater than maximum length ({min} > {max})")]
    InvertedRange { min: usize, max: usize },
    /// The resolved charset has no symbols.
    #[error("charset cannot be empty")]
    EmptyCharset,
    /// A `@name` token did not match any preset.
    #[error("unknown charset '{name}' (available charsets: {})", available.join(", "))]
    UnknownPreset {
        name: String,
        available: Vec<&'static str>,
    },
}

/// Convenience alias for results returned by Passio crates.
pub type Result<T> = std::result::Result<T, Error>;
