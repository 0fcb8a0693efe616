//! Path normalization and validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::UrlError;

/// One or more `/segment` groups, each optionally followed by `/`. Segments
/// contain neither `/` nor whitespace.
static PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:/[^/\s]+/?)+$").expect("path pattern compiles"));

/// A path override: either a single path string or a sequence of segments.
///
/// Segments are flattened by splitting every item on `/` and discarding
/// empty pieces, so `["api/v2", "users"]` and `"/api/v2/users"` resolve to
/// the same path.
///
/// # Examples
///
/// ```
/// use sugarurl::{Overrides, Url};
///
/// let a = Url::as_localhost(Overrides::new().path(["api/v2", "users"])).unwrap();
/// let b = Url::as_localhost(Overrides::new().path("api/v2/users")).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.path(), "/api/v2/users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// A path given as one string.
    Raw(String),
    /// A path given as segments to be flattened.
    Segments(Vec<String>),
}

impl PathSpec {
    /// Returns true if nothing was supplied (an empty string or no segments).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Raw(s) => s.is_empty(),
            Self::Segments(segments) => segments.is_empty(),
        }
    }

    fn flatten(self) -> String {
        match self {
            Self::Raw(s) => s,
            Self::Segments(segments) => segments
                .iter()
                .flat_map(|s| s.split('/'))
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

impl From<&str> for PathSpec {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<&String> for PathSpec {
    fn from(s: &String) -> Self {
        Self::Raw(s.clone())
    }
}

impl<S: ToString> From<Vec<S>> for PathSpec {
    fn from(segments: Vec<S>) -> Self {
        Self::Segments(segments.iter().map(ToString::to_string).collect())
    }
}

impl<S: ToString> From<&[S]> for PathSpec {
    fn from(segments: &[S]) -> Self {
        Self::Segments(segments.iter().map(ToString::to_string).collect())
    }
}

impl<S: ToString, const N: usize> From<[S; N]> for PathSpec {
    fn from(segments: [S; N]) -> Self {
        Self::Segments(segments.iter().map(ToString::to_string).collect())
    }
}

/// Resolves a path override into its normalized form.
///
/// Empty input yields an empty path. Anything else is flattened, given a
/// leading `/`, given a trailing `/` when `trailing_slash` is set, and
/// validated.
pub(crate) fn normalize(spec: PathSpec, trailing_slash: bool) -> Result<String, UrlError> {
    if spec.is_empty() {
        return Ok(String::new());
    }

    let mut path = spec.flatten();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if trailing_slash && !path.ends_with('/') {
        path.push('/');
    }

    if !is_valid(&path) {
        return Err(UrlError::InvalidPath { path });
    }
    Ok(path)
}

/// Returns true if the path matches the path pattern.
#[must_use]
pub fn is_valid(path: &str) -> bool {
    PATH_PATTERN.is_match(path)
}

/// Returns the non-empty segments of a path.
pub(crate) fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Replaces the segment at `index`, or appends when `index` equals the
/// segment count.
pub(crate) fn replace_segment(
    path: &str,
    index: usize,
    value: &str,
    trailing_slash: bool,
) -> Result<String, UrlError> {
    let mut parts = segments(path);
    let len = parts.len();
    match index {
        i if i == len => parts.push(value),
        i if i < len => parts[i] = value,
        _ => return Err(UrlError::IndexOutOfRange { index, len }),
    }

    let mut rejoined = format!("/{}", parts.join("/"));
    if trailing_slash {
        rejoined.push('/');
    }
    Ok(rejoined)
}
