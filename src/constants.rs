//! Constants shared by construction, splitting and joining.

/// Scheme applied when a value has an authority but no scheme.
pub const DEFAULT_SCHEME: &str = "https";

/// Base string used by [`Url::as_localhost`](crate::Url::as_localhost).
pub const LOCALHOST: &str = "http://localhost";

/// Base string used by [`Url::as_localhost_ssl`](crate::Url::as_localhost_ssl).
pub const LOCALHOST_SSL: &str = "https://localhost";

/// Schemes whose serialized form carries a `//` authority marker even when
/// the authority itself is empty.
pub(crate) const NETLOC_SCHEMES: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https",
    "shttp", "snews", "prospero", "rtsp", "rtsps", "rtspu", "rsync", "svn", "svn+ssh", "sftp",
    "nfs", "git", "git+ssh", "ws", "wss", "itms-services",
];

/// Schemes for which relative references are resolved against a base.
pub(crate) const RELATIVE_SCHEMES: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "imap", "wais", "file", "https", "shttp", "mms",
    "prospero", "rtsp", "rtsps", "rtspu", "sftp", "svn", "svn+ssh", "ws", "wss",
];
