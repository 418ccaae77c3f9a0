//! HTTP header collection with case-insensitive names.
//!
//! [`HttpHeaders`] maps a normalized header name to a single combined value.
//! Every name and value is validated and normalized by the
//! [`validator`](crate::http::validator) module before it reaches the map, so
//! the map only ever holds lowercase, trimmed names and trimmed values made of
//! legal field characters.
//!
//! Appending to an existing header joins the values with `", "`. The joined
//! string is all that is kept; nothing records how many values went into it.
//!
//! Entries are kept in an ordered map and are enumerated in its index order.
//! Removing a header moves the last entry into the freed slot, so the order
//! only matches insertion order until the first deletion.

use std::fmt;

use indexmap::IndexMap;

use crate::config::HeadersConfig;
use crate::http::iter::{Entries, IntoIter, Keys, Values};
use crate::http::validator::{ValidationError, normalize_name, normalize_value};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    headers: IndexMap<String, String>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    /// Builds a store by appending every pair in order.
    ///
    /// Nothing is returned unless every pair is valid.
    pub fn from_pairs<I, N, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: ToString,
    {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.append(name, value)?;
        }
        Ok(headers)
    }

    /// Builds a store holding the default headers of `config`.
    pub fn from_config(config: &HeadersConfig) -> Result<Self, ValidationError> {
        Self::from_pairs(&config.defaults)
    }

    /// Stores `value` under `name`, replacing whatever was there.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl ToString) -> Result<(), ValidationError> {
        let name = normalize_name(name.as_ref())?;
        let value = normalize_value(&value.to_string())?;

        tracing::trace!(header = %name, "set header");
        self.headers.insert(name, value);
        Ok(())
    }

    /// Returns the combined value stored under `name`.
    ///
    /// A header stored with an empty value yields `Some("")`.
    pub fn get(&self, name: impl AsRef<str>) -> Result<Option<&str>, ValidationError> {
        let name = normalize_name(name.as_ref())?;
        Ok(self.headers.get(&name).map(String::as_str))
    }

    /// Adds `value` to `name`, joining it to any existing value with `", "`.
    pub fn append(&mut self, name: impl AsRef<str>, value: impl ToString) -> Result<(), ValidationError> {
        let name = normalize_name(name.as_ref())?;
        let value = normalize_value(&value.to_string())?;

        self.join_value(name, value);
        Ok(())
    }

    // Both `name` and `value` must already be normalized.
    fn join_value(&mut self, name: String, value: String) {
        tracing::trace!(header = %name, "append header");
        match self.headers.get_mut(&name) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => {
                self.headers.insert(name, value);
            }
        }
    }

    /// Removes `name` if present. Removing a missing header is not an error.
    pub fn delete(&mut self, name: impl AsRef<str>) -> Result<(), ValidationError> {
        let name = normalize_name(name.as_ref())?;

        if self.headers.swap_remove(&name).is_some() {
            tracing::trace!(header = %name, "delete header");
        }
        Ok(())
    }

    /// Whether a header named `name` is stored, whatever its value.
    pub fn has(&self, name: impl AsRef<str>) -> Result<bool, ValidationError> {
        let name = normalize_name(name.as_ref())?;
        Ok(self.headers.contains_key(&name))
    }

    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.headers.iter(),
        }
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self.headers.keys(),
        }
    }

    pub fn values(&self) -> Values<'_> {
        Values {
            inner: self.headers.values(),
        }
    }

    /// Calls `f(value, name, self)` for every header in enumeration order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str, &Self),
    {
        for (name, value) in self.entries() {
            f(value, name, self);
        }
    }

    /// Calls `f(value, name, ctx)` for every header in enumeration order.
    pub fn for_each_with<C, F>(&self, ctx: &C, mut f: F)
    where
        C: ?Sized,
        F: FnMut(&str, &str, &C),
    {
        for (name, value) in self.entries() {
            f(value, name, ctx);
        }
    }

    /// Like [`for_each`](Self::for_each), but stops at and returns the first
    /// error produced by `f`.
    pub fn try_for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&str, &str, &Self) -> Result<(), E>,
    {
        for (name, value) in self.entries() {
            f(value, name, self)?;
        }
        Ok(())
    }

    /// Appends every header of `other` to this store.
    pub fn extend_from(&mut self, other: &HttpHeaders) {
        for (name, value) in other.entries() {
            self.join_value(name.to_string(), value.to_string());
        }
    }

    pub fn clear(&mut self) {
        tracing::trace!(count = self.headers.len(), "clear headers");
        self.headers.clear();
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Renders the headers as `name: value\r\n` lines, same as `to_string()`.
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HttpHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.entries() {
            write!(f, "{}: {}\r\n", name, value)?;
        }
        Ok(())
    }
}

impl<N, V> TryFrom<Vec<(N, V)>> for HttpHeaders
where
    N: AsRef<str>,
    V: ToString,
{
    type Error = ValidationError;

    fn try_from(pairs: Vec<(N, V)>) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}

impl<'a> IntoIterator for &'a HttpHeaders {
    type Item = (&'a str, &'a str);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl IntoIterator for HttpHeaders {
    type Item = (String, String);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.headers.into_iter(),
        }
    }
}
