use http::Method;
use std::fmt;
use std::sync::Arc;

use super::error::RouteError;

/// Methods a route may be registered under.
pub const SUPPORTED_METHODS: [Method; 7] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::HEAD,
    Method::OPTIONS,
];

/// Shared handler callable.
///
/// `W` is the host's response sink, `R` its request descriptor. Both are
/// passed through by the router without inspection.
pub type Handler<W, R> = Arc<dyn Fn(&mut W, &R) + Send + Sync>;

/// One (method, path, handler) binding.
///
/// Cloning a route is cheap; clones share the handler.
pub struct Route<W, R> {
    method: Method,
    path: String,
    handler: Handler<W, R>,
}

impl<W, R> Route<W, R> {
    /// Create a route for any supported method.
    ///
    /// The path is stored verbatim: `/users/` and `/users` are different
    /// routes. Shape checks happen when the route reaches a
    /// [`Router`](super::Router).
    pub fn new<F>(method: Method, path: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut W, &R) + Send + Sync + 'static,
    {
        Self {
            method,
            path: path.into(),
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn handler(&self) -> &Handler<W, R> {
        &self.handler
    }

    pub(crate) fn validate(&self) -> Result<(), RouteError> {
        if !SUPPORTED_METHODS.contains(&self.method) {
            return Err(RouteError::UnsupportedMethod {
                method: self.method.clone(),
                path: self.path.clone(),
            });
        }
        if !is_valid_path(&self.path) {
            return Err(RouteError::InvalidPath {
                method: self.method.clone(),
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}

impl<W, R> Clone for Route<W, R> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
            path: self.path.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<W, R> fmt::Debug for Route<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Paths and prefixes are either empty or absolute.
pub(crate) fn is_valid_path(path: &str) -> bool {
    path.is_empty() || path.starts_with('/')
}

macro_rules! method_constructor {
    ($(#[$doc:meta])* $name:ident, $method:expr) => {
        $(#[$doc])*
        pub fn $name<W, R, F>(path: impl Into<String>, handler: F) -> Route<W, R>
        where
            F: Fn(&mut W, &R) + Send + Sync + 'static,
        {
            Route::new($method, path, handler)
        }
    };
}

method_constructor!(
    /// `GET` route.
    get,
    Method::GET
);
method_constructor!(
    /// `POST` route.
    post,
    Method::POST
);
method_constructor!(
    /// `PUT` route.
    put,
    Method::PUT
);
method_constructor!(
    /// `DELETE` route.
    delete,
    Method::DELETE
);
method_constructor!(
    /// `PATCH` route.
    patch,
    Method::PATCH
);
method_constructor!(
    /// `HEAD` route.
    head,
    Method::HEAD
);
method_constructor!(
    /// `OPTIONS` route.
    options,
    Method::OPTIONS
);
