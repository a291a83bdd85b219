//! Error types for struct population

use crate::reflect::Kind;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`populate`](crate::populate) and
/// [`Context::populate`](crate::Context::populate).
///
/// Only precondition failures are reported here. A value that cannot be
/// coerced into its field's type is never an error; see [`CoercionFailure`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The target handed to `populate` cannot be populated.
    #[error("fieldenv: {0}")]
    InvalidArgument(&'static str),
}

impl Error {
    /// Message used when the target is not a struct.
    pub const NOT_A_STRUCT: &'static str = "Populate must only be called with a struct pointer";

    pub(crate) fn not_a_struct() -> Self {
        Self::InvalidArgument(Self::NOT_A_STRUCT)
    }
}

/// A field whose raw value could not be parsed into its declared kind.
///
/// The field is left at its previous value and population carries on.
/// Collected by [`Context::populate_report`](crate::Context::populate_report).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed to parse '{key}' for field '{field}' as {kind}: {message}")]
pub struct CoercionFailure {
    /// Name of the struct field as handed to the formatter
    pub field: &'static str,
    /// Source key the value was looked up under
    pub key: String,
    /// Declared kind of the field
    pub kind: Kind,
    /// Raw value that failed to parse (possibly the declared default)
    pub value: String,
    /// Message from the parser
    pub message: String,
}
