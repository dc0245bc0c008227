use std::fmt;

use http::Method;

/// Registration error
///
/// Returned by [`Router::add_route`](super::Router::add_route) and
/// [`Router::add_group`](super::Router::add_group) when something being
/// attached has an invalid shape. These are bugs in the calling code, so each
/// variant carries the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Route path is neither empty nor starts with `/`
    InvalidPath {
        /// Method the route was registered under
        method: Method,
        /// The invalid path
        path: String,
    },
    /// Group prefix is neither empty nor starts with `/`
    InvalidPrefix {
        /// The invalid prefix
        prefix: String,
    },
    /// Route uses a method outside GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS
    UnsupportedMethod {
        /// The rejected method
        method: Method,
        /// Path of the route carrying it
        path: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidPath { method, path } => {
                write!(
                    f,
                    "invalid route path '{}' for {}: path must be empty or start with '/'",
                    path, method
                )
            }
            RouteError::InvalidPrefix { prefix } => {
                write!(
                    f,
                    "invalid group prefix '{}': prefix must be empty or start with '/'",
                    prefix
                )
            }
            RouteError::UnsupportedMethod { method, path } => {
                write!(
                    f,
                    "unsupported method {} for route '{}': expected one of \
                    GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS",
                    method, path
                )
            }
        }
    }
}

impl std::error::Error for RouteError {}
