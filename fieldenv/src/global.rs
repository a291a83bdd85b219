//! Process-wide default context
//!
//! The free functions [`populate`], [`set_source`] and [`set_formatter`]
//! share a single [`Context`]. It starts out reading environment variables
//! through [`Uppercaser::new`](crate::Uppercaser::new), and replacements
//! apply to every later `populate` call in the process.
//!
//! The lock only keeps the static sound. Swapping the source or formatter
//! while another thread is populating gives that thread whichever pair it
//! locked first; build separate [`Context`] values when independent
//! configurations are needed.

use crate::context::Context;
use crate::error::{CoercionFailure, Result};
use crate::format::Formatter;
use crate::reflect::Populate;
use crate::source::Source;
use parking_lot::RwLock;
use std::sync::LazyLock;

static ACTIVE: LazyLock<RwLock<Context>> = LazyLock::new(|| RwLock::new(Context::new()));

/// Replace the process-wide source.
///
/// The source is taken by value, so the active source can never be missing.
/// There is no null source to pass:
///
/// ```compile_fail
/// fieldenv::set_source(None::<fieldenv::Env>);
/// ```
///
/// ```compile_fail
/// fieldenv::set_source(std::ptr::null::<fieldenv::Env>());
/// ```
pub fn set_source(source: impl Source + 'static) {
    ACTIVE.write().set_source(source);
    tracing::debug!("replaced process-wide source");
}

/// Replace the process-wide formatter.
///
/// Like [`set_source`], a missing formatter cannot be expressed:
///
/// ```compile_fail
/// fieldenv::set_formatter(None::<fieldenv::Uppercaser>);
/// ```
///
/// ```compile_fail
/// fieldenv::set_formatter(std::ptr::null::<fieldenv::Uppercaser>());
/// ```
pub fn set_formatter(formatter: impl Formatter + 'static) {
    ACTIVE.write().set_formatter(formatter);
    tracing::debug!("replaced process-wide formatter");
}

/// Populate `target` using the process-wide source and formatter.
///
/// See [`Context::populate`].
///
/// # Errors
///
/// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `target`
///   is not a struct
pub fn populate<T>(target: &mut T) -> Result<()>
where
    T: Populate + ?Sized,
{
    ACTIVE.read().populate(target)
}

/// Populate `target` using the process-wide source and formatter, returning
/// the fields whose values could not be parsed.
///
/// See [`Context::populate_report`].
///
/// # Errors
///
/// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `target`
///   is not a struct
pub fn populate_report<T>(target: &mut T) -> Result<Vec<CoercionFailure>>
where
    T: Populate + ?Sized,
{
    ACTIVE.read().populate_report(target)
}
