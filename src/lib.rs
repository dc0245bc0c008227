//! # rtr
//!
//! **rtr** is a small HTTP request router. Routes bind a method and an exact
//! path to a handler; groups nest routes under shared path prefixes; the
//! router dispatches each request to the first route whose method and full
//! path match, or answers `404 page not found`.
//!
//! ## Overview
//!
//! - **[`router`]** - routes, groups, the compiled route table and dispatch
//! - **[`server`]** - the request descriptor and response sink traits a host
//!   HTTP stack implements, plus an in-memory [`ResponseRecorder`]
//! - **[`runtime_config`]** - options such as opt-in `405 Method Not Allowed`
//! - **[`logging`]** - `tracing-subscriber` setup for host binaries
//!
//! ## Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host as Host HTTP stack
//!     participant Router
//!     participant Table as Route table
//!     participant Handler
//!
//!     Host->>Router: serve_http(res, req)
//!     Router->>Table: lookup(method, path)
//!     alt Route found
//!         Table-->>Router: first route in registration order
//!         Router->>Handler: handler(res, req)
//!         Handler-->>Host: status, headers, body via res
//!     else No route
//!         Router-->>Host: 404 page not found
//!     end
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rtr::{get, Group, ResponseRecorder, ResponseSink, Router};
//!
//! type Req = http::Request<()>;
//!
//! let mut router: Router<ResponseRecorder, Req> = Router::new();
//! router.add_route(get("/hello", |w: &mut ResponseRecorder, _: &Req| {
//!     w.write_body(b"Hello, World!")
//! }))?;
//!
//! let users = Group::new()
//!     .with_prefix("/users")
//!     .route(get("", |w: &mut ResponseRecorder, _: &Req| w.write_body(b"List of users")))
//!     .route(get("/123", |w: &mut ResponseRecorder, _: &Req| w.write_body(b"User ID: 123")));
//! router.add_group(Group::new().with_prefix("/api").group(users))?;
//!
//! let mut res = ResponseRecorder::new();
//! router.serve_http(&mut res, &http::Request::get("/api/users/123").body(())?);
//! assert_eq!(res.body_string(), "User ID: 123");
//!
//! let mut res = ResponseRecorder::new();
//! router.serve_http(&mut res, &http::Request::get("/nonexistent").body(())?);
//! assert_eq!(res.status(), 404);
//! assert_eq!(res.body_string(), "404 page not found\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Concurrency
//!
//! `Router` is `Send + Sync`. Registration needs `&mut Router`, dispatch only
//! `&Router`, so a router shared between worker threads is read-only by
//! construction. The route table is built once on first use and read without
//! locks afterwards.

pub mod logging;
pub mod router;
pub mod runtime_config;
pub mod server;

pub use router::{
    delete, get, head, options, patch, post, put, Group, Handler, Route, RouteEntry, RouteError,
    RouteMatch, Router,
};
pub use runtime_config::RuntimeConfig;
pub use server::{RequestDescriptor, ResponseRecorder, ResponseSink};
