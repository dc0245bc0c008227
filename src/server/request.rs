use http::Method;

/// What the router needs to know about an incoming request.
///
/// The host HTTP stack owns the concrete request type; the router only reads
/// the method and the path. Anything else the descriptor carries (headers,
/// body, extensions, cancellation tokens) is handed to the matched handler
/// untouched.
pub trait RequestDescriptor {
    /// HTTP method of the request.
    fn method(&self) -> &Method;

    /// Request path with query string and fragment already stripped.
    fn path(&self) -> &str;
}

impl<B> RequestDescriptor for http::Request<B> {
    #[inline]
    fn method(&self) -> &Method {
        http::Request::method(self)
    }

    #[inline]
    fn path(&self) -> &str {
        self.uri().path()
    }
}

impl<T: RequestDescriptor + ?Sized> RequestDescriptor for &T {
    #[inline]
    fn method(&self) -> &Method {
        (**self).method()
    }

    #[inline]
    fn path(&self) -> &str {
        (**self).path()
    }
}
