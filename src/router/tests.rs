use super::{get, post, put, Group, RouteError, Router};
use crate::runtime_config::RuntimeConfig;
use crate::server::{ResponseRecorder, ResponseSink};
use http::{Method, Request, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Req = Request<()>;
type TestRouter = Router<ResponseRecorder, Req>;

fn text(body: &'static str) -> impl Fn(&mut ResponseRecorder, &Req) + Send + Sync + 'static {
    move |w: &mut ResponseRecorder, _: &Req| w.write_body(body.as_bytes())
}

fn request(method: Method, path: &str) -> Req {
    Request::builder().method(method).uri(path).body(()).unwrap()
}

fn dispatch(router: &TestRouter, method: Method, path: &str) -> ResponseRecorder {
    let mut res = ResponseRecorder::new();
    router.serve_http(&mut res, &request(method, path));
    res
}

#[test]
fn test_empty_router_not_found() {
    let router = TestRouter::new();
    assert!(router.is_empty());
    let res = dispatch(&router, Method::GET, "/");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.body_string(), "404 page not found\n");
}

#[test]
fn test_root_path() {
    let mut router = TestRouter::new();
    router.add_route(get("/", text("root"))).unwrap();
    assert_eq!(dispatch(&router, Method::GET, "/").body_string(), "root");
    assert!(router.find(&Method::GET, "").is_none());
}

#[test]
fn test_group_with_empty_prefix_contributes_nothing() {
    let mut router = TestRouter::new();
    let group = Group::new().route(get("/plain", text("plain")));
    router.add_group(group).unwrap();
    assert_eq!(dispatch(&router, Method::GET, "/plain").body_string(), "plain");
}

#[test]
fn test_top_level_routes_before_groups() {
    let mut router = TestRouter::new();
    router
        .add_group(Group::new().with_prefix("/a").route(get("/b", text("group"))))
        .unwrap();
    router.add_route(get("/a/b", text("top"))).unwrap();
    assert_eq!(dispatch(&router, Method::GET, "/a/b").body_string(), "top");
}

#[test]
fn test_earlier_group_wins() {
    let mut router = TestRouter::new();
    router
        .add_group(
            Group::new()
                .with_prefix("/x")
                .group(Group::new().with_prefix("/y").route(get("", text("nested")))),
        )
        .unwrap();
    router
        .add_group(Group::new().with_prefix("/x/y").route(get("", text("later"))))
        .unwrap();
    assert_eq!(dispatch(&router, Method::GET, "/x/y").body_string(), "nested");
}

#[test]
fn test_find_reports_index_and_path() {
    let mut router = TestRouter::new();
    router.add_route(get("/one", text("1"))).unwrap();
    router
        .add_group(
            Group::new()
                .with_prefix("/api")
                .route(post("/items", text("2")))
                .route(post("/items", text("3"))),
        )
        .unwrap();

    let found = router.find(&Method::POST, "/api/items").unwrap();
    assert_eq!(found.index, 1);
    assert_eq!(found.method, Method::POST);
    assert_eq!(found.path.as_ref(), "/api/items");

    let mut res = ResponseRecorder::new();
    found.call(&mut res, &request(Method::POST, "/api/items"));
    assert_eq!(res.body_string(), "2");

    assert!(router.find(&Method::GET, "/api/items").is_none());
    assert_eq!(router.len(), 3);
}

#[test]
fn test_routes_listing_in_traversal_order() {
    let mut router = TestRouter::new();
    let users = Group::new()
        .with_prefix("/users")
        .route(get("", text("list")))
        .route(get("/123", text("one")));
    let api = Group::new()
        .with_prefix("/api")
        .route(get("/status", text("ok")))
        .group(users);
    router.add_route(get("/hello", text("hi"))).unwrap();
    router.add_group(api).unwrap();

    let listed: Vec<(Method, String)> = router
        .routes()
        .into_iter()
        .map(|e| (e.method, e.path))
        .collect();
    assert_eq!(
        listed,
        vec![
            (Method::GET, "/hello".to_string()),
            (Method::GET, "/api/status".to_string()),
            (Method::GET, "/api/users".to_string()),
            (Method::GET, "/api/users/123".to_string()),
        ]
    );
}

#[test]
fn test_registration_after_dispatch_rebuilds_table() {
    let mut router = TestRouter::new();
    router.add_route(get("/a", text("a"))).unwrap();
    router.freeze();
    assert_eq!(
        dispatch(&router, Method::GET, "/b").status(),
        StatusCode::NOT_FOUND
    );

    router.add_route(get("/b", text("b"))).unwrap();
    assert_eq!(dispatch(&router, Method::GET, "/b").body_string(), "b");
    assert_eq!(router.len(), 2);
}

#[test]
fn test_invalid_route_rejected_and_not_attached() {
    let mut router = TestRouter::new();
    let err = router.add_route(get("hello", text("x"))).unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidPath {
            method: Method::GET,
            path: "hello".to_string()
        }
    );
    assert!(router.is_empty());
}

#[test]
fn test_invalid_group_rejected_and_not_attached() {
    let mut router = TestRouter::new();
    let group = Group::new()
        .with_prefix("/api")
        .route(get("/ok", text("ok")))
        .group(Group::new().with_prefix("v1"));
    let err = router.add_group(group).unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidPrefix {
            prefix: "v1".to_string()
        }
    );
    assert!(router.is_empty());
    assert_eq!(
        dispatch(&router, Method::GET, "/api/ok").status(),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_method_mismatch_is_not_found_by_default() {
    let mut router = TestRouter::new();
    router.add_route(get("/hello", text("hi"))).unwrap();
    let res = dispatch(&router, Method::POST, "/hello");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.header("allow").is_none());
}

#[test]
fn test_method_not_allowed_when_enabled() {
    let mut router = TestRouter::with_config(RuntimeConfig::new().with_method_not_allowed(true));
    router
        .add_route(get("/hello", text("hi")))
        .unwrap()
        .add_route(put("/hello", text("put")))
        .unwrap()
        .add_route(get("/hello", text("dup")))
        .unwrap();

    let res = dispatch(&router, Method::DELETE, "/hello");
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.header("allow"), Some("GET, PUT"));
    assert_eq!(res.body_string(), "405 method not allowed\n");

    // Unknown paths still answer 404.
    let res = dispatch(&router, Method::DELETE, "/missing");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_allowed_methods() {
    let mut router = TestRouter::new();
    router
        .add_group(
            Group::new()
                .with_prefix("/items")
                .route(post("", text("create")))
                .route(get("", text("list"))),
        )
        .unwrap();
    assert_eq!(
        router.allowed_methods("/items").as_slice(),
        &[Method::POST, Method::GET]
    );
    assert!(router.allowed_methods("/items/").is_empty());
}

#[test]
fn test_handler_sees_request_verbatim() {
    let mut router: Router<ResponseRecorder, Request<String>> = Router::new();
    router
        .add_route(post(
            "/echo",
            |w: &mut ResponseRecorder, r: &Request<String>| {
                w.set_status(StatusCode::CREATED);
                w.write_body(r.body().as_bytes());
            },
        ))
        .unwrap();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/echo?ignored=1")
        .body("payload".to_string())
        .unwrap();
    let mut res = ResponseRecorder::new();
    router.serve_http(&mut res, &req);
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.body_string(), "payload");
}

#[test]
fn test_repeated_dispatch_is_deterministic() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let mut router = TestRouter::new();
    router
        .add_route(get("/count", move |_: &mut ResponseRecorder, _: &Req| {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .unwrap();
    router.add_route(get("/count", text("shadowed"))).unwrap();

    for _ in 0..10 {
        let res = dispatch(&router, Method::GET, "/count");
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.body().is_empty());
    }
    assert_eq!(hits.load(Ordering::SeqCst), 10);
}

#[test]
fn test_concurrent_dispatch() {
    let mut router = TestRouter::new();
    router
        .add_group(
            Group::new()
                .with_prefix("/api")
                .route(get("/a", text("a")))
                .route(get("/b", text("b"))),
        )
        .unwrap();
    let router = Arc::new(router);

    let workers: Vec<_> = (0..8)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                let (path, body) = if i % 2 == 0 { ("/api/a", "a") } else { ("/api/b", "b") };
                for _ in 0..100 {
                    let res = dispatch(&router, Method::GET, path);
                    assert_eq!(res.body_string(), body);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
}
