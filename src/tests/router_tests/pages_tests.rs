// src/tests/router_tests/pages_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, cookie, error_status, get, post_form, test_app};

#[test]
fn static_pages_render() {
    let app = test_app("pages_static");
    let c = cookie("pages_static");

    for (path, needle) in [
        ("/", "Find Your Perfect Student Room"),
        ("/about", "About MyDormSpace"),
        ("/help", "Help &amp; FAQ"),
        ("/login", "Welcome Back"),
        ("/signup", "Create an Account"),
    ] {
        let resp = handle(get(path, Some(&c)), &app).unwrap();
        assert_eq!(resp.status(), 200, "{path}");
        assert!(body_string(resp).contains(needle), "{path} missing {needle}");
    }
}

#[test]
fn stylesheet_is_served_as_css() {
    let app = test_app("pages_css");
    let resp = handle(get("/static/main.css", Some(&cookie("pages_css"))), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let ct = resp.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(ct.starts_with("text/css"));
}

#[test]
fn home_shows_newest_listings() {
    let app = test_app("pages_home");
    let body = body_string(handle(get("/", Some(&cookie("pages_home"))), &app).unwrap());
    // Newest three in the seed data: 002 (Mar 5), 006 (Mar 1), 004 (Feb 28).
    assert!(body.contains("/listing/listing-002"));
    assert!(body.contains("/listing/listing-006"));
    assert!(body.contains("/listing/listing-004"));
    assert!(!body.contains("/listing/listing-005"));
}

#[test]
fn unknown_routes_and_methods_are_404() {
    let app = test_app("pages_404");
    let c = cookie("pages_404");

    assert_eq!(error_status(handle(get("/nope", Some(&c)), &app)), 404);
    assert_eq!(error_status(handle(get("/logout", Some(&c)), &app)), 404);
    assert_eq!(
        error_status(handle(post_form("/about", Some(&c), &[]), &app)),
        404
    );
}
