//! Construction inputs: the base a value is derived from and the component
//! overrides layered on top of it.

use crate::path::PathSpec;
use crate::query::QueryParams;
use crate::url::Url;

/// A single component override.
///
/// Distinguishes a component that was not supplied from one that was
/// explicitly cleared, so that falsy values (port `0`, an empty path) can be
/// set and inherited values can be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Not supplied; the inherited value is kept.
    Unset,
    /// Explicitly cleared.
    Clear,
    /// Explicitly set.
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Field<T> {
    /// Returns true if the override was not supplied.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Applies the override to an inherited value.
    pub fn resolve(self, inherited: Option<T>) -> Option<T> {
        match self {
            Self::Unset => inherited,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }
}

/// The base a new value is derived from.
#[derive(Debug, Clone, Copy, Default)]
pub enum Base<'a> {
    /// No base; only overrides contribute.
    #[default]
    Empty,
    /// An existing value, whose resolved components are copied.
    Url(&'a Url),
    /// A URL string, split into components.
    Str(&'a str),
}

impl<'a> From<&'a Url> for Base<'a> {
    fn from(url: &'a Url) -> Self {
        Self::Url(url)
    }
}

impl<'a> From<&'a str> for Base<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a String> for Base<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(s)
    }
}

impl From<()> for Base<'_> {
    fn from((): ()) -> Self {
        Self::Empty
    }
}

/// Component overrides for constructing a [`Url`].
///
/// Every option starts unset. Setters take the value to apply; `clear_*`
/// methods remove the inherited value.
///
/// # Examples
///
/// ```
/// use sugarurl::{Overrides, Url};
///
/// let url = Url::as_localhost_ssl(Overrides::new().scheme("ws").port(3000)).unwrap();
/// assert_eq!(url, "ws://localhost:3000");
///
/// let url = url.derive(Overrides::new().clear_port()).unwrap();
/// assert_eq!(url, "ws://localhost");
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Overrides {
    pub(crate) scheme: Field<String>,
    pub(crate) hostname: Field<String>,
    pub(crate) netloc: Field<String>,
    pub(crate) path: Field<PathSpec>,
    pub(crate) params: Field<QueryParams>,
    pub(crate) port: Field<u16>,
    pub(crate) username: Field<String>,
    pub(crate) password: Field<String>,
    pub(crate) fragment: Field<String>,
    pub(crate) trailing_slash: Option<bool>,
    pub(crate) allow_fragments: Option<bool>,
}

impl Overrides {
    /// Creates overrides with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme. It is stored lowercased.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Field::Set(scheme.into().to_ascii_lowercase());
        self
    }

    /// Clears the scheme; the configured default applies if an authority remains.
    pub fn clear_scheme(mut self) -> Self {
        self.scheme = Field::Clear;
        self
    }

    /// Sets the hostname. It is stored lowercased.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Field::Set(hostname.into().to_ascii_lowercase());
        self
    }

    /// Clears the hostname.
    pub fn clear_hostname(mut self) -> Self {
        self.hostname = Field::Clear;
        self
    }

    /// Sets the authority string (`user:pass@host:port`).
    ///
    /// Parts that are not overridden separately are decomposed from it.
    pub fn netloc(mut self, netloc: impl Into<String>) -> Self {
        self.netloc = Field::Set(netloc.into());
        self
    }

    /// Clears the authority and every inherited authority part.
    pub fn clear_netloc(mut self) -> Self {
        self.netloc = Field::Clear;
        self
    }

    /// Sets the path from a string or a sequence of segments.
    pub fn path(mut self, path: impl Into<PathSpec>) -> Self {
        self.path = Field::Set(path.into());
        self
    }

    /// Clears the path.
    pub fn clear_path(mut self) -> Self {
        self.path = Field::Clear;
        self
    }

    /// Replaces the query parameters entirely.
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.params = Field::Set(params.into_iter().collect());
        self
    }

    /// Clears the query parameters.
    pub fn clear_params(mut self) -> Self {
        self.params = Field::Clear;
        self
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Field::Set(port);
        self
    }

    /// Clears the port.
    pub fn clear_port(mut self) -> Self {
        self.port = Field::Clear;
        self
    }

    /// Sets the username. It is only serialized together with a password.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Field::Set(username.into());
        self
    }

    /// Clears the username.
    pub fn clear_username(mut self) -> Self {
        self.username = Field::Clear;
        self
    }

    /// Sets the password. It is only serialized together with a username.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Field::Set(password.into());
        self
    }

    /// Clears the password.
    pub fn clear_password(mut self) -> Self {
        self.password = Field::Clear;
        self
    }

    /// Sets the fragment. Percent-encoding is left untouched.
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Field::Set(fragment.into());
        self
    }

    /// Clears the fragment.
    pub fn clear_fragment(mut self) -> Self {
        self.fragment = Field::Clear;
        self
    }

    /// Forces normalized paths to end with `/` (or stops forcing it).
    pub fn trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.trailing_slash = Some(trailing_slash);
        self
    }

    /// Controls whether `#` in a base string starts a fragment.
    pub fn allow_fragments(mut self, allow_fragments: bool) -> Self {
        self.allow_fragments = Some(allow_fragments);
        self
    }
}
