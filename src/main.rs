use clap::Parser;
use http::{Method, Request};
use rtr::logging::{init_logging, LogConfig, LogFormat};
use rtr::server::write_json;
use rtr::{get, Group, ResponseRecorder, ResponseSink, Router, RuntimeConfig};

type Req = Request<()>;

/// Build the sample routing table and run a few requests through it.
#[derive(Parser, Debug)]
#[command(name = "rtr", version, about)]
struct Cli {
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Log output format
    #[arg(long, env = "RTR_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// Answer 405 instead of 404 when a path exists under other methods
    #[arg(long)]
    method_not_allowed: bool,

    /// Print the compiled route table before dispatching
    #[arg(long)]
    dump_routes: bool,
}

fn build_router(config: RuntimeConfig) -> anyhow::Result<Router<ResponseRecorder, Req>> {
    let mut router = Router::with_config(config);

    router.add_route(get("/hello", |w: &mut ResponseRecorder, _: &Req| {
        w.write_body(b"Hello, World!");
    }))?;

    let users = Group::new()
        .with_prefix("/users")
        .route(get("", |w: &mut ResponseRecorder, _: &Req| {
            w.write_body(b"List of users");
        }))
        .route(get("/123", |w: &mut ResponseRecorder, _: &Req| {
            w.write_body(b"User ID: 123");
        }));

    let api = Group::new()
        .with_prefix("/api")
        .route(get("/status", |w: &mut ResponseRecorder, _: &Req| {
            write_json(w, http::StatusCode::OK, &serde_json::json!({ "status": "ok" }));
        }))
        .group(users);

    router.add_group(api)?;
    router.freeze();
    Ok(router)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    log_config.format = LogFormat::parse(&cli.log_format);
    if cli.verbose {
        log_config.log_level = "debug".to_string();
    }
    init_logging(&log_config)?;

    let config = RuntimeConfig::new().with_method_not_allowed(cli.method_not_allowed);
    let router = build_router(config)?;
    if cli.dump_routes {
        router.dump_routes();
    }

    let requests = [
        (Method::GET, "/hello"),
        (Method::GET, "/api/status"),
        (Method::GET, "/api/users"),
        (Method::GET, "/api/users/123"),
        (Method::GET, "/nonexistent"),
        (Method::POST, "/hello"),
        (Method::PUT, "/api/status"),
        (Method::DELETE, "/api/users"),
    ];

    for (method, path) in requests {
        let req = Request::builder().method(method.clone()).uri(path).body(())?;
        let mut res = ResponseRecorder::new();
        router.serve_http(&mut res, &req);
        println!(
            "{} {} -> {} {:?}",
            method,
            path,
            res.status().as_u16(),
            res.body_string()
        );
    }

    Ok(())
}
