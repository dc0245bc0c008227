//! Router core module - hot path for request dispatch.

use http::Method;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::error::RouteError;
use super::group::Group;
use super::route::{Handler, Route};
use super::table::{MethodVec, RouteTable};
use crate::runtime_config::RuntimeConfig;
use crate::server::{write_method_not_allowed, write_not_found, RequestDescriptor, ResponseSink};

/// Result of a successful lookup
pub struct RouteMatch<W, R> {
    /// Position of the route in registration (pre-order) order
    pub index: usize,
    /// Method the route was registered under
    pub method: Method,
    /// Effective path: all enclosing prefixes followed by the route path
    pub path: Arc<str>,
    /// The route's handler
    pub handler: Handler<W, R>,
}

impl<W, R> RouteMatch<W, R> {
    /// Invoke the matched handler.
    pub fn call(&self, res: &mut W, req: &R) {
        (self.handler)(res, req);
    }
}

impl<W, R> Clone for RouteMatch<W, R> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            method: self.method.clone(),
            path: Arc::clone(&self.path),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<W, R> fmt::Debug for RouteMatch<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("index", &self.index)
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// One row of [`Router::routes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Method,
    pub path: String,
}

/// Top-level route container and dispatch entry point.
///
/// The router behaves like a group with an empty prefix: its own routes come
/// first, then each top-level group in the order it was added. Registration
/// takes `&mut self`, dispatch takes `&self`, so once a router is shared
/// between worker threads (for example behind an `Arc`) it can no longer be
/// modified.
///
/// Effective paths are resolved into a route table on first use and cached.
/// Any later registration drops the cache; [`Router::freeze`] builds it ahead
/// of the first request.
pub struct Router<W, R> {
    routes: Vec<Route<W, R>>,
    groups: Vec<Group<W, R>>,
    config: RuntimeConfig,
    table: OnceCell<RouteTable<W, R>>,
}

impl<W, R> Router<W, R> {
    /// Empty router with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            routes: Vec::new(),
            groups: Vec::new(),
            config,
            table: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Attach a top-level route.
    ///
    /// # Errors
    ///
    /// Rejects a path that is neither empty nor starts with `/`, and methods
    /// other than the seven supported ones. The router is left unchanged.
    pub fn add_route(&mut self, route: Route<W, R>) -> Result<&mut Self, RouteError> {
        route.validate()?;
        debug!(method = %route.method(), path = %route.path(), "Route registered");
        self.routes.push(route);
        self.table.take();
        Ok(self)
    }

    /// Attach a top-level group with everything it contains.
    ///
    /// # Errors
    ///
    /// The whole subtree is checked first; the first invalid prefix, path or
    /// method found is returned and nothing is attached.
    pub fn add_group(&mut self, group: Group<W, R>) -> Result<&mut Self, RouteError> {
        group.validate()?;
        debug!(
            prefix = %group.prefix(),
            routes_count = group.route_count(),
            "Group registered"
        );
        self.groups.push(group);
        self.table.take();
        Ok(self)
    }

    /// Build the route table now instead of on the first request.
    pub fn freeze(&self) {
        self.table();
    }

    fn table(&self) -> &RouteTable<W, R> {
        self.table.get_or_init(|| {
            let table = RouteTable::build(&self.routes, &self.groups);
            let routes_summary: Vec<String> = table
                .entries()
                .iter()
                .take(10)
                .map(|e| format!("{} {}", e.method, e.path))
                .collect();
            info!(
                routes_count = table.len(),
                routes_summary = ?routes_summary,
                "Routing table loaded"
            );
            table
        })
    }

    /// Total number of routes, shadowed duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every route with its effective path, in the order lookups consider
    /// them.
    #[must_use]
    pub fn routes(&self) -> Vec<RouteEntry> {
        self.table()
            .entries()
            .iter()
            .map(|e| RouteEntry {
                method: e.method.clone(),
                path: e.path.to_string(),
            })
            .collect()
    }

    /// Methods registered for exactly `path`, first registration first.
    #[must_use]
    pub fn allowed_methods(&self, path: &str) -> MethodVec {
        self.table().allowed_methods(path)
    }

    /// Look up the route that would handle `method` and `path`.
    #[must_use]
    pub fn find(&self, method: &Method, path: &str) -> Option<RouteMatch<W, R>> {
        let (index, entry) = self.table().lookup(method, path)?;
        Some(RouteMatch {
            index,
            method: entry.method.clone(),
            path: Arc::clone(&entry.path),
            handler: Arc::clone(&entry.handler),
        })
    }

    /// Dispatch one request.
    ///
    /// Invokes the first route whose method and effective path equal the
    /// request's. Otherwise writes `404 page not found`, or a 405 with an
    /// `Allow` header when [`RuntimeConfig::method_not_allowed`] is set and
    /// the path exists under other methods. Handler panics are not caught.
    pub fn serve_http(&self, res: &mut W, req: &R)
    where
        W: ResponseSink,
        R: RequestDescriptor,
    {
        let method = req.method();
        let path = req.path();

        let table = self.table();
        debug!(method = %method, path = %path, "Route match attempt");
        let match_start = Instant::now();
        let found = table.lookup(method, path);
        let match_duration = match_start.elapsed();

        match found {
            Some((index, entry)) => {
                if match_duration > self.config.slow_match_threshold() {
                    warn!(
                        method = %method,
                        path = %path,
                        route_index = index,
                        duration_us = match_duration.as_micros(),
                        "Slow route matching detected"
                    );
                } else {
                    debug!(
                        method = %method,
                        path = %path,
                        route_index = index,
                        duration_us = match_duration.as_micros(),
                        "Route matched"
                    );
                }
                (entry.handler)(res, req);
            }
            None => {
                if self.config.method_not_allowed {
                    let allowed = table.allowed_methods(path);
                    if !allowed.is_empty() {
                        warn!(
                            method = %method,
                            path = %path,
                            allowed = ?allowed,
                            "Method not allowed"
                        );
                        write_method_not_allowed(res, &allowed);
                        return;
                    }
                }
                warn!(
                    method = %method,
                    path = %path,
                    duration_us = match_duration.as_micros(),
                    "No route matched"
                );
                write_not_found(res);
            }
        }
    }

    /// Print all registered routes to stdout.
    pub fn dump_routes(&self) {
        let table = self.table();
        println!("[routes] count={}", table.len());
        for entry in table.entries() {
            println!("[route] {} {}", entry.method, entry.path);
        }
    }
}

impl<W, R> Default for Router<W, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, R> fmt::Debug for Router<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("groups", &self.groups)
            .field("config", &self.config)
            .field("compiled", &self.table.get().is_some())
            .finish()
    }
}
