//! Host-facing request and response abstractions.
//!
//! The router does not own a socket loop. Whatever HTTP stack hosts it supplies
//! a response sink and a request descriptor per request; these traits describe
//! the little the router needs from them.

mod request;
mod response;

pub use request::RequestDescriptor;
pub use response::{
    write_json, write_method_not_allowed, write_not_found, ResponseRecorder, ResponseSink,
    METHOD_NOT_ALLOWED_BODY, NOT_FOUND_BODY,
};
