use http::header::{HeaderValue, ALLOW, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{HeaderMap, Method, StatusCode};
use serde_json::Value;

/// Body written for requests that match no route.
pub const NOT_FOUND_BODY: &[u8] = b"404 page not found\n";

/// Body written when a path exists only under other methods and
/// method-not-allowed reporting is enabled.
pub const METHOD_NOT_ALLOWED_BODY: &[u8] = b"405 method not allowed\n";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Where a handler (and the router, for 404/405) writes its response.
///
/// Implementations decide when bytes actually hit the wire. The router calls
/// these methods only when it produces a response itself; on a match the sink
/// is handed to the handler as-is.
pub trait ResponseSink {
    /// Set the response status. Calling it more than once keeps the last value.
    fn set_status(&mut self, status: StatusCode);

    /// Mutable access to the response headers.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Append bytes to the response body.
    fn write_body(&mut self, bytes: &[u8]);
}

impl ResponseSink for http::Response<Vec<u8>> {
    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        http::Response::headers_mut(self)
    }

    fn write_body(&mut self, bytes: &[u8]) {
        self.body_mut().extend_from_slice(bytes);
    }
}

impl<T: ResponseSink + ?Sized> ResponseSink for &mut T {
    fn set_status(&mut self, status: StatusCode) {
        (**self).set_status(status);
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn write_body(&mut self, bytes: &[u8]) {
        (**self).write_body(bytes);
    }
}

/// In-memory response sink.
///
/// Records status, headers and body so callers can inspect what a handler
/// produced. A recorder whose status was never set reports `200 OK`, which
/// mirrors what most host stacks send when a handler only writes a body.
#[derive(Debug, Clone, Default)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded status, `200 OK` if none was set.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded lossily as UTF-8.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Convert the recording into an `http::Response`.
    #[must_use]
    pub fn into_response(self) -> http::Response<Vec<u8>> {
        let status = self.status();
        let mut res = http::Response::new(self.body);
        *res.status_mut() = status;
        *res.headers_mut() = self.headers;
        res
    }
}

impl ResponseSink for ResponseRecorder {
    fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_body(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }
}

fn write_plain_error<W: ResponseSink + ?Sized>(res: &mut W, status: StatusCode, body: &[u8]) {
    let headers = res.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    res.set_status(status);
    res.write_body(body);
}

/// Write the canonical not-found response.
pub fn write_not_found<W: ResponseSink + ?Sized>(res: &mut W) {
    write_plain_error(res, StatusCode::NOT_FOUND, NOT_FOUND_BODY);
}

/// Write a 405 response with an `Allow` header listing `allowed`.
pub fn write_method_not_allowed<W: ResponseSink + ?Sized>(res: &mut W, allowed: &[Method]) {
    let allow = allowed
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if let Ok(value) = HeaderValue::from_str(&allow) {
        res.headers_mut().insert(ALLOW, value);
    }
    write_plain_error(res, StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_BODY);
}

/// Serialize `body` as JSON with `Content-Type: application/json`.
pub fn write_json<W: ResponseSink + ?Sized>(res: &mut W, status: StatusCode, body: &Value) {
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    res.set_status(status);
    res.write_body(body.to_string().as_bytes());
}
