#![allow(dead_code, clippy::expect_used)]

use http::{Method, Request};
use rtr::{get, Group, ResponseRecorder, ResponseSink, Router};

pub type Req = Request<()>;
pub type TestRouter = Router<ResponseRecorder, Req>;

/// Handler that writes a fixed body.
pub fn text(body: &'static str) -> impl Fn(&mut ResponseRecorder, &Req) + Send + Sync + 'static {
    move |w: &mut ResponseRecorder, _: &Req| w.write_body(body.as_bytes())
}

/// Handler that writes a fixed JSON body with `Content-Type: application/json`.
pub fn json(body: &'static str) -> impl Fn(&mut ResponseRecorder, &Req) + Send + Sync + 'static {
    move |w: &mut ResponseRecorder, _: &Req| {
        w.headers_mut().insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        w.write_body(body.as_bytes());
    }
}

pub fn request(method: Method, path: &str) -> Req {
    Request::builder()
        .method(method)
        .uri(path)
        .body(())
        .expect("valid request")
}

pub fn dispatch(router: &TestRouter, method: Method, path: &str) -> ResponseRecorder {
    let mut res = ResponseRecorder::new();
    router.serve_http(&mut res, &request(method, path));
    res
}

/// `/hello`, `/api/status`, `/api/users` and `/api/users/123`, all GET.
pub fn setup_test_router() -> TestRouter {
    let mut router = TestRouter::new();

    router
        .add_route(get("/hello", text("Hello, World!")))
        .expect("add /hello");

    let mut api = Group::new();
    api.set_prefix("/api")
        .add_route(get("/status", json(r#"{"status": "ok"}"#)));

    let mut users = Group::new();
    users
        .set_prefix("/users")
        .add_route(get("", text("List of users")))
        .add_route(get("/123", text("User ID: 123")));

    api.add_group(users);
    router.add_group(api).expect("add /api");
    router
}
