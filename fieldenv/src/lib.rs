//! Populate struct fields from environment variables or any key/value source
//!
//! `fieldenv` fills the public fields of a struct in place. Each field name is
//! turned into a key by a [`Formatter`], the key is looked up in a [`Source`],
//! and the raw string is parsed into the field's type. By default keys are the
//! upper-cased field names and values come from the process environment.
//!
//! # Features
//!
//! - **Declarative**: field table generated with `#[derive(Populate)]`
//! - **Pluggable**: swap the [`Source`] and [`Formatter`], globally or per [`Context`]
//! - **Default values**: `#[conf(default = "...")]` when a key is absent
//! - **Forgiving**: unparsable values leave the field untouched
//!
//! # Supported Field Types
//!
//! - `String`: assigned verbatim
//! - `bool`: `1`, `t`, `true`, `0`, `f`, `false`, in any letter case
//! - `i8` to `i64`, `isize`, `u8` to `u64`, `usize`: base-10
//! - `f32`, `f64`: decimal
//! - [`std::time::Duration`]: `"300ms"`, `"5s"`, `"2h30m"` (see [`parse_duration`])
//!
//! Fields of any other type are left alone.
//!
//! # Example
//!
//! ```rust
//! use fieldenv::Populate;
//! use std::time::Duration;
//!
//! #[derive(Debug, Default, Populate)]
//! struct Config {
//!     pub database_url: String,
//!
//!     #[conf(default = "8080")]
//!     pub port: u16,
//!
//!     #[conf(default = "30s")]
//!     pub timeout: Duration,
//!
//!     // Private fields are never populated
//!     cache: Vec<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! let mut config = Config::default();
//! fieldenv::populate(&mut config)?;
//! #     assert_eq!(config.database_url, "postgres://localhost/db");
//! #     assert_eq!(config.port, 8080);
//! #     assert_eq!(config.timeout, Duration::from_secs(30));
//! #     assert!(config.cache.is_empty());
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[conf(default = "value")]`
//!
//! Raw value used when the key is absent from the source. It is parsed like
//! any other value; integer, float and boolean literals are accepted too.
//!
//! ```rust
//! # use fieldenv::Populate;
//! #[derive(Default, Populate)]
//! struct Config {
//!     #[conf(default = "127.0.0.1")]
//!     pub host: String,
//!
//!     #[conf(default = 10)]
//!     pub max_connections: u32,
//! }
//! ```
//!
//! ## `#[conf(name = "Name")]`
//!
//! Field name handed to the formatter instead of the identifier.
//!
//! ```rust
//! # use fieldenv::Populate;
//! #[derive(Default, Populate)]
//! struct Config {
//!     // Read from REDIS_URL
//!     #[conf(name = "redis_url")]
//!     pub cache: String,
//! }
//! ```
//!
//! ## `#[conf(skip)]`
//!
//! Never populate this field, even though it is public.
//!
//! ## `#[conf(value)]`
//!
//! Supported types are recognised by name, so a field declared through an
//! alias such as `type Port = u16` is left alone. Mark it to populate it
//! anyway; the alias must still resolve to a supported type.
//!
//! ```rust
//! # use fieldenv::{Context, Populate};
//! # use std::collections::HashMap;
//! type Port = u16;
//!
//! #[derive(Default, Populate)]
//! struct Config {
//!     #[conf(value)]
//!     pub port: Port,
//! }
//!
//! let source = HashMap::from([("PORT".to_string(), "8080".to_string())]);
//! let mut config = Config::default();
//! Context::new().with_source(source).populate(&mut config).unwrap();
//! assert_eq!(config.port, 8080);
//! ```
//!
//! # Global State
//!
//! [`populate`], [`set_source`] and [`set_formatter`] share one process-wide
//! [`Context`]. Build a [`Context`] directly to keep configurations apart.

mod coerce;
mod context;
mod duration;
mod error;
mod format;
mod global;
mod reflect;
mod source;

pub use coerce::parse_bool;
pub use context::Context;
pub use duration::{parse_duration, DurationError};
pub use error::{CoercionFailure, Error, Result};
pub use fieldenv_derive::Populate;
pub use format::{Formatter, Uppercaser};
pub use global::{populate, populate_report, set_formatter, set_source};
pub use reflect::{Field, Kind, Populate, Shape, Slot, Value};
pub use source::{Env, Source};
