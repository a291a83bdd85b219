//! Key/value sources consulted while populating a struct

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// A lookup from source keys to raw string values.
///
/// `None` means the key is absent, which is what triggers the field's
/// declared default. `Some(String::new())` is an explicitly empty value and
/// is used as is.
///
/// # Example
///
/// ```rust
/// use fieldenv::Source;
/// use std::collections::HashMap;
///
/// let mut source = HashMap::new();
/// source.insert("PORT".to_string(), "8080".to_string());
///
/// assert_eq!(Source::get(&source, "PORT"), Some("8080".to_string()));
/// assert_eq!(Source::get(&source, "HOST"), None);
/// ```
pub trait Source: Send + Sync {
    /// Look up `key`, distinguishing an absent key from an empty value.
    fn get(&self, key: &str) -> Option<String>;
}

/// Source backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl Source for Env {
    fn get(&self, key: &str) -> Option<String> {
        // Non-unicode values are present, so they are kept (lossily) rather
        // than being mistaken for an unset variable.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Source for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: Source + ?Sized> Source for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
