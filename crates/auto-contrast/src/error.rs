//! The one error this crate surfaces.

use thiserror::Error;

/// The background color string could not be parsed.
///
/// The engine deliberately performs no fallback substitution here: what to
/// display instead is a caller policy. (The reference behavior is to fall
/// back to the configured dark color.) Out-of-range numeric options are
/// never an error; they are normalized silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color string {input:?}")]
pub struct InvalidColorError {
    /// The string that failed to parse.
    pub input: String,
    /// The underlying CSS parser error.
    #[source]
    pub source: csscolorparser::ParseColorError,
}
