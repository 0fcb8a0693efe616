//! Construction configuration.

use crate::constants::DEFAULT_SCHEME;

/// Configuration read by the construction algorithm.
///
/// Every [`Url`](crate::Url) carries the configuration it was built with, and
/// values derived from it reuse that configuration unless one is passed
/// explicitly to [`Url::with_config`](crate::Url::with_config).
///
/// # Examples
///
/// ```
/// use sugarurl::{Base, Overrides, Url, UrlConfig};
///
/// let config = UrlConfig::new().with_default_scheme("http");
/// let url = Url::with_config(&config, Base::Empty, Overrides::new().netloc("web.com")).unwrap();
/// assert_eq!(url, "http://web.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrlConfig {
    /// Scheme applied when an authority is present but no scheme resolved.
    ///
    /// Default: `"https"`
    pub default_scheme: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl UrlConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default scheme. The scheme is stored lowercased.
    #[must_use]
    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into().to_ascii_lowercase();
        self
    }
}
