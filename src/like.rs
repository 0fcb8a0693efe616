//! The string-conversion capability shared by URL values and plain strings.

/// Anything that has a canonical URL string form.
///
/// Operations that only need the string form of their argument, such as
/// [`Url::urljoin`](crate::Url::urljoin), accept any implementor, so values
/// and plain strings can be used interchangeably.
///
/// # Examples
///
/// ```
/// use sugarurl::{Url, UrlLike};
///
/// fn describe(url: &impl UrlLike) -> String {
///     format!("<{}>", url.as_url_str())
/// }
///
/// let url = Url::parse("http://localhost:3333").unwrap();
/// assert_eq!(describe(&url), describe(&"http://localhost:3333"));
/// ```
pub trait UrlLike {
    /// Returns the canonical string form.
    fn as_url_str(&self) -> &str;
}

impl UrlLike for str {
    fn as_url_str(&self) -> &str {
        self
    }
}

impl UrlLike for String {
    fn as_url_str(&self) -> &str {
        self
    }
}

impl<T: UrlLike + ?Sized> UrlLike for &T {
    fn as_url_str(&self) -> &str {
        (**self).as_url_str()
    }
}
