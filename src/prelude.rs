//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use sugarurl::prelude::*;
//!
//! let url = Url::as_localhost(Overrides::new().port(8080)).unwrap();
//! assert_eq!(url, "http://localhost:8080");
//! ```

pub use crate::{
    // Core types
    Base, Field, Overrides, PathSpec, QueryParams, Url, UrlConfig, UrlLike,
    // Errors
    UrlError,
    // Constants
    DEFAULT_SCHEME, LOCALHOST, LOCALHOST_SSL,
};
