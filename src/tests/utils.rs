use crate::app::App;
use crate::auth::{AuthConfig, SimulatedAuth};
use crate::catalog::Catalog;
use crate::db::connection::{init_db, Database};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static DB_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Fresh SQLite file per call; parallel tests never share one.
pub fn make_db(tag: &str) -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let seq = DB_SEQ.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("dormspace_{tag}_{nanos}_{seq}.sqlite"));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db).expect("Failed to initialize DB");
    db
}

/// App over the bundled seed data with instant auth.
pub fn test_app(tag: &str) -> App {
    App::with_parts(
        make_db(tag),
        Catalog::seeded().unwrap(),
        SimulatedAuth::new(AuthConfig {
            delay: Duration::ZERO,
        }),
    )
    .unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri.parse().unwrap();
    if let Some(c) = cookie {
        req.headers_mut()
            .insert("Cookie", format!("session={c}").parse().unwrap());
    }
    req
}

pub fn post_form(uri: &str, cookie: Option<&str>, form: &[(&str, &str)]) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form)
        .finish();

    let mut req = Request::new(Body::from(body));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    if let Some(c) = cookie {
        req.headers_mut()
            .insert("Cookie", format!("session={c}").parse().unwrap());
    }
    req
}

pub fn body_string(resp: Response) -> String {
    let mut out = String::new();
    resp.into_body().reader().read_to_string(&mut out).unwrap();
    out
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// The token from a `Set-Cookie: session=...` header, if one was issued.
pub fn issued_session(resp: &Response) -> Option<String> {
    resp.headers()
        .get("Set-Cookie")?
        .to_str()
        .ok()?
        .strip_prefix("session=")?
        .split(';')
        .next()
        .map(str::to_string)
}

/// A well-formed cookie value unique to the caller.
pub fn cookie(tag: &str) -> String {
    format!("test-session-{tag}-0123456789")
}

/// Status of the error page a handler rendered; panics on a non-error status.
pub fn error_status(result: crate::responses::ResultResp) -> u16 {
    match result {
        Ok(resp) => {
            let status = resp.status().as_u16();
            assert!(status >= 400, "expected an error page, got status {status}");
            status
        }
        Err(e) => e.status(),
    }
}
