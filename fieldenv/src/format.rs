//! Field name to source key formatting

/// Maps a struct field name to the key it is looked up under.
///
/// Implementations must be pure and infallible. Any `Fn(&str) -> String`
/// closure is a formatter.
///
/// ```rust
/// use fieldenv::Formatter;
///
/// let wrap = |field: &str| format!("BEFORE{field}AFTER");
/// assert_eq!(wrap.format("a"), "BEFOREaAFTER");
/// ```
pub trait Formatter: Send + Sync {
    /// Derive the source key for `field`.
    fn format(&self, field: &str) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format(&self, field: &str) -> String {
        self(field)
    }
}

/// Upper-cases the field name, optionally behind `PREFIX_`.
///
/// This is the default formatter: field `database_url` is looked up as
/// `DATABASE_URL`, or `APP_DATABASE_URL` with prefix `"APP"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uppercaser {
    /// Prepended with a `_` separator when non-empty
    pub prefix: String,
}

impl Uppercaser {
    /// Formatter without a prefix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    /// Formatter that prepends `prefix` and an underscore.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Formatter for Uppercaser {
    fn format(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, field).to_uppercase()
        }
    }
}
