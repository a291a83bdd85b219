//! The populator and its configuration

use crate::coerce::coerce;
use crate::error::{CoercionFailure, Error, Result};
use crate::format::{Formatter, Uppercaser};
use crate::reflect::{Populate, Shape};
use crate::source::{Env, Source};

/// A source and a formatter, used together to populate structs.
///
/// `Context::default()` reads environment variables named after the
/// upper-cased field names. Independent contexts share no state, so each
/// can be configured and used on its own.
///
/// # Example
///
/// ```rust
/// use fieldenv::{Context, Populate, Uppercaser};
/// use std::collections::HashMap;
///
/// #[derive(Debug, Default, Populate)]
/// struct Config {
///     pub host: String,
///     #[conf(default = "8080")]
///     pub port: u16,
/// }
///
/// let source = HashMap::from([("APP_HOST".to_string(), "example.com".to_string())]);
/// let context = Context::new()
///     .with_source(source)
///     .with_formatter(Uppercaser::with_prefix("APP"));
///
/// let mut config = Config::default();
/// context.populate(&mut config).unwrap();
/// assert_eq!(config.host, "example.com");
/// assert_eq!(config.port, 8080);
/// ```
pub struct Context {
    source: Box<dyn Source>,
    formatter: Box<dyn Formatter>,
}

impl Context {
    /// Context reading the process environment with [`Uppercaser::new`].
    pub fn new() -> Self {
        Self {
            source: Box::new(Env),
            formatter: Box::new(Uppercaser::new()),
        }
    }

    /// Replace the source, builder style.
    #[must_use]
    pub fn with_source(mut self, source: impl Source + 'static) -> Self {
        self.set_source(source);
        self
    }

    /// Replace the formatter, builder style.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.set_formatter(formatter);
        self
    }

    /// Replace the source used by later `populate` calls.
    pub fn set_source(&mut self, source: impl Source + 'static) {
        self.source = Box::new(source);
    }

    /// Replace the formatter used by later `populate` calls.
    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) {
        self.formatter = Box::new(formatter);
    }

    /// Source key for a field name.
    pub fn key(&self, field: &str) -> String {
        self.formatter.format(field)
    }

    /// Populate every settable field of `target`.
    ///
    /// For each field, the key is derived by the formatter and looked up in
    /// the source. An absent key falls back to the field's declared default,
    /// or to the empty string. The raw value is then parsed into the field's
    /// type; a value that fails to parse leaves the field unchanged and does
    /// not stop the remaining fields from being populated.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `target` is not a struct
    pub fn populate<T>(&self, target: &mut T) -> Result<()>
    where
        T: Populate + ?Sized,
    {
        self.populate_report(target).map(|_| ())
    }

    /// Like [`populate`](Self::populate), also returning the fields whose
    /// values could not be parsed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `target` is not a struct
    pub fn populate_report<T>(&self, target: &mut T) -> Result<Vec<CoercionFailure>>
    where
        T: Populate + ?Sized,
    {
        let fields = match target.shape() {
            Shape::Struct(fields) => fields,
            Shape::Scalar(kind) => {
                tracing::debug!(%kind, "refusing to populate a non-struct target");
                return Err(Error::not_a_struct());
            }
        };

        let mut failures = Vec::new();
        for field in fields {
            if !field.settable {
                continue;
            }

            let key = self.formatter.format(field.name);
            let (value, from_default) = match self.source.get(&key) {
                Some(value) => (value, false),
                None => (field.default.unwrap_or_default().to_string(), true),
            };
            tracing::trace!(field = field.name, %key, from_default, "resolved field");

            let kind = field.slot.kind();
            if let Err(e) = coerce(field.slot, &value) {
                tracing::debug!(
                    field = field.name,
                    %key,
                    %kind,
                    error = %e,
                    "skipping field with unparsable value"
                );
                failures.push(CoercionFailure {
                    field: field.name,
                    key,
                    kind,
                    value,
                    message: e.to_string(),
                });
            }
        }

        Ok(failures)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{Field, Kind, Value};
    use std::collections::HashMap;
    use std::time::Duration;
    use tracing_test::traced_test;

    /// Hand-written descriptor table, as the derive macro would generate.
    #[derive(Debug, Default)]
    struct Manual {
        name: String,
        retries: u8,
        timeout: Duration,
        hidden: String,
        other: Vec<String>,
    }

    impl Populate for Manual {
        fn shape(&mut self) -> Shape<'_> {
            Shape::Struct(vec![
                Field::new("name", None, self.name.slot()),
                Field::new("retries", Some("3"), self.retries.slot()),
                Field::new("timeout", Some("5s"), self.timeout.slot()),
                Field::hidden("hidden"),
                Field::new("other", None, crate::reflect::Slot::Other),
            ])
        }
    }

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_populate_manual_table() {
        let context = Context::new().with_source(source(&[
            ("NAME", "svc"),
            ("HIDDEN", "leak"),
            ("OTHER", "x"),
        ]));

        let mut target = Manual::default();
        context.populate(&mut target).unwrap();

        assert_eq!(target.name, "svc");
        assert_eq!(target.retries, 3);
        assert_eq!(target.timeout, Duration::from_secs(5));
        assert_eq!(target.hidden, "");
        assert!(target.other.is_empty());
    }

    #[test]
    fn test_populate_scalar_rejected() {
        let context = Context::new().with_source(source(&[]));
        let mut value = 1i32;

        let err = context.populate(&mut value).unwrap_err();
        assert_eq!(err, Error::InvalidArgument(Error::NOT_A_STRUCT));
        assert_eq!(value, 1);
    }

    #[test]
    fn test_populate_report_lists_failures() {
        let context = Context::new().with_source(source(&[
            ("NAME", "svc"),
            ("RETRIES", "many"),
            ("TIMEOUT", "soon"),
        ]));

        let mut target = Manual::default();
        let failures = context.populate_report(&mut target).unwrap();

        assert_eq!(target.name, "svc");
        assert_eq!(target.retries, 0);
        assert_eq!(target.timeout, Duration::ZERO);

        let fields: Vec<_> = failures.iter().map(|f| (f.field, f.kind)).collect();
        assert_eq!(fields, vec![("retries", Kind::U8), ("timeout", Kind::Duration)]);
        assert_eq!(failures[0].key, "RETRIES");
        assert_eq!(failures[0].value, "many");
    }

    #[test]
    fn test_formatter_is_consulted() {
        let context = Context::new()
            .with_source(source(&[("name!", "bang")]))
            .with_formatter(|field: &str| format!("{field}!"));

        let mut target = Manual::default();
        context.populate(&mut target).unwrap();
        assert_eq!(target.name, "bang");
        assert_eq!(context.key("name"), "name!");
    }

    #[test]
    #[traced_test]
    fn test_coercion_failure_is_logged() {
        let context = Context::new().with_source(source(&[("RETRIES", "many")]));

        let mut target = Manual::default();
        context.populate(&mut target).unwrap();

        assert!(logs_contain("skipping field with unparsable value"));
        assert!(logs_contain("RETRIES"));
    }
}
