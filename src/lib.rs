//! Immutable URL values built with a fluent, override-driven API.
//!
//! # Overview
//!
//! A [`Url`] is constructed from an optional base (another value or a URL
//! string) plus explicit [`Overrides`] for any of its components. Every
//! transformation, such as appending path segments, merging query parameters
//! or dropping the port, builds a new value through the same constructor, so
//! validation and normalization always apply and values never change after
//! construction.
//!
//! ```text
//! scheme://[username:password@]hostname[:port]/path[?query][#fragment]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use sugarurl::{Overrides, Url};
//!
//! // Parse a URL string
//! let url = Url::parse("http://localhost:3333").unwrap();
//! assert_eq!(url.hostname(), Some("localhost"));
//! assert_eq!(url.port(), Some(3333));
//!
//! // Derive new values
//! let users = url
//!     .append_path(["api", "v2", "users"])
//!     .and_then(|u| u.with_params([("page", 1)]))
//!     .unwrap();
//! assert_eq!(users, "http://localhost:3333/api/v2/users?page=1");
//!
//! // The original is untouched
//! assert_eq!(url, "http://localhost:3333");
//! ```
//!
//! # Overrides
//!
//! Each component can be left unset (inherited from the base), set, or
//! cleared:
//!
//! ```rust
//! use sugarurl::{Overrides, Url};
//!
//! let url = Url::as_localhost_ssl(Overrides::new().port(3000).path("/api")).unwrap();
//! assert_eq!(url, "https://localhost:3000/api");
//!
//! let url = url.derive(Overrides::new().clear_port().scheme("wss")).unwrap();
//! assert_eq!(url, "wss://localhost/api");
//! ```
//!
//! When an authority is present but no scheme resolves, the configured
//! default scheme is applied (see [`UrlConfig`]).
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Url`] (as a string),
//!   [`QueryParams`] (as an ordered map) and [`UrlConfig`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod constants;
mod error;
mod like;
mod netloc;
mod overrides;
mod path;
pub mod prelude;
mod query;
pub mod split;
mod url;

pub use config::UrlConfig;
pub use constants::{DEFAULT_SCHEME, LOCALHOST, LOCALHOST_SSL};
pub use error::UrlError;
pub use like::UrlLike;
pub use overrides::{Base, Field, Overrides};
pub use path::{PathSpec, is_valid as is_valid_path};
pub use query::{QueryParams, percent_decode};
pub use url::Url;
