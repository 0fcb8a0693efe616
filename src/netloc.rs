//! Authority (netloc) decomposition and merging.
//!
//! ```text
//! netloc = [ username [ ":" password ] "@" ] hostname [ ":" port ]
//! ```
//!
//! Credentials are only rendered as a pair; a username without a password
//! is dropped from the serialized authority.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::UrlError;
use crate::overrides::Field;

static NETLOC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<username>[^:]+?)(?::(?P<password>.*))?@)?(?P<hostname>[^:@]+)(?::(?P<port>[^:@]*))?$",
    )
    .expect("netloc pattern compiles")
});

/// The parts of an authority component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Authority {
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

impl Authority {
    /// Decomposes a netloc string into its parts.
    ///
    /// An empty netloc has no parts. Hostnames are lowercased.
    ///
    /// # Errors
    ///
    /// Returns `UrlError::Formulation` if a non-empty netloc does not match
    /// the authority pattern, or `UrlError::InvalidPort` for a bad port.
    pub(crate) fn decompose(netloc: &str) -> Result<Self, UrlError> {
        if netloc.is_empty() {
            return Ok(Self::default());
        }
        let Some(caps) = NETLOC_PATTERN.captures(netloc) else {
            return Err(UrlError::Formulation {
                components: format!("netloc {netloc:?}"),
            });
        };
        let text = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let port = match caps.name("port") {
            Some(m) => parse_port(m.as_str())?,
            None => None,
        };

        Ok(Self {
            username: text("username"),
            password: text("password"),
            hostname: text("hostname").map(|h| h.to_ascii_lowercase()),
            port,
        })
    }

    /// Serializes as `user:pass@host:port`, omitting absent parts.
    ///
    /// Returns `None` when there is no hostname.
    pub(crate) fn render(&self) -> Option<String> {
        let hostname = self.hostname.as_deref()?;
        let mut out = String::new();
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            out.push_str(username);
            out.push(':');
            out.push_str(password);
            out.push('@');
        }
        out.push_str(hostname);
        if let Some(port) = self.port {
            let _ = write!(out, ":{port}");
        }
        Some(out)
    }

    fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.hostname.is_none()
            && self.port.is_none()
    }
}

/// Explicit authority overrides for one construction.
#[derive(Debug, Clone, Default)]
pub(crate) struct AuthorityOverrides {
    pub netloc: Field<String>,
    pub username: Field<String>,
    pub password: Field<String>,
    pub hostname: Field<String>,
    pub port: Field<u16>,
}

/// Merges explicit overrides with the inherited authority.
///
/// Part precedence is explicit part override, then the decomposition of an
/// explicit netloc override, then the inherited parts. Clearing the netloc
/// discards the inherited parts.
///
/// Returns the recomputed netloc and the merged parts. Both are empty when
/// no netloc and no part resolved.
///
/// # Errors
///
/// Returns `UrlError::Formulation` if a netloc or an authority part resolved
/// but no hostname did.
pub(crate) fn merge(
    overrides: AuthorityOverrides,
    inherited_netloc: Option<String>,
    inherited: Authority,
) -> Result<(Option<String>, Authority), UrlError> {
    let fallback = match &overrides.netloc {
        Field::Set(netloc) => Authority::decompose(netloc)?,
        Field::Clear => Authority::default(),
        Field::Unset => inherited,
    };
    let netloc = non_empty(overrides.netloc.resolve(inherited_netloc));

    let parts = Authority {
        username: non_empty(overrides.username.resolve(fallback.username)),
        password: non_empty(overrides.password.resolve(fallback.password)),
        hostname: non_empty(overrides.hostname.resolve(fallback.hostname)),
        port: overrides.port.resolve(fallback.port),
    };

    if netloc.is_none() && parts.is_empty() {
        return Ok((None, parts));
    }

    let Some(rendered) = parts.render() else {
        return Err(UrlError::Formulation {
            components: format!("{parts:?} from netloc {netloc:?}"),
        });
    };
    tracing::trace!(netloc = %rendered, "recomputed authority");
    Ok((Some(rendered), parts))
}

/// Parses a port, treating empty text as absent.
pub(crate) fn parse_port(text: &str) -> Result<Option<u16>, UrlError> {
    if text.is_empty() {
        return Ok(None);
    }
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(UrlError::InvalidPort {
            value: text.to_string(),
        });
    }
    text.parse::<u16>()
        .map(Some)
        .map_err(|_| UrlError::InvalidPort {
            value: text.to_string(),
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
