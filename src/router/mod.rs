//! # Router Module
//!
//! Route registration and match-and-dispatch.
//!
//! ## Overview
//!
//! - [`Route`] binds one method and path to a handler.
//! - [`Group`] prepends a prefix to the routes and groups it contains.
//! - [`Router`] holds top-level routes and groups and dispatches requests.
//!
//! ## Matching
//!
//! A route's effective path is the concatenation of every enclosing group
//! prefix, outermost first, followed by the route's own path. A request
//! matches a route when its method and path are byte-equal to the route's
//! method and effective path. There are no parameters, wildcards, case
//! folding or trailing-slash tolerance.
//!
//! Routes are considered in pre-order: the router's own routes, then each
//! group's routes before its subgroups. When two routes share method and
//! effective path, the first one in that order wins.
//!
//! ## Example
//!
//! ```rust
//! use rtr::{get, Group, ResponseRecorder, ResponseSink, Router};
//!
//! type Req = http::Request<()>;
//!
//! let mut router: Router<ResponseRecorder, Req> = Router::new();
//! let api = Group::new()
//!     .with_prefix("/api")
//!     .route(get("/status", |w: &mut ResponseRecorder, _: &Req| {
//!         w.write_body(br#"{"status": "ok"}"#)
//!     }));
//! router.add_group(api).unwrap();
//!
//! let req = http::Request::get("/api/status").body(()).unwrap();
//! let mut res = ResponseRecorder::new();
//! router.serve_http(&mut res, &req);
//! assert_eq!(res.status(), 200);
//! ```

mod core;
mod error;
mod group;
mod route;
mod table;
#[cfg(test)]
mod tests;

pub use self::core::{RouteEntry, RouteMatch, Router};
pub use error::RouteError;
pub use group::Group;
pub use route::{
    delete, get, head, options, patch, post, put, Handler, Route, SUPPORTED_METHODS,
};
pub use table::MethodVec;
