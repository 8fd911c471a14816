// src/tests/router_tests/auth_flow_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    body_string, cookie, get, issued_session, location, post_form, test_app,
};

fn login_as(app: &crate::app::App, c: &str, email: &str, user_type: &str) -> String {
    let resp = handle(
        post_form(
            "/login",
            Some(c),
            &[("email", email), ("password", "pw"), ("user_type", user_type)],
        ),
        app,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    location(&resp)
}

#[test]
fn first_visit_issues_session_cookie() {
    let app = test_app("auth_cookie");

    let resp = handle(get("/", None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let token = issued_session(&resp).expect("new visitors get a cookie");
    let header = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));

    let again = handle(get("/", Some(&token)), &app).unwrap();
    assert_eq!(issued_session(&again), None);
}

#[test]
fn error_pages_issue_session_cookie_too() {
    let app = test_app("auth_cookie_404");

    for path in ["/no-such-page", "/listing/listing-999"] {
        let resp = handle(get(path, None), &app).unwrap();
        assert_eq!(resp.status(), 404, "{path}");
        assert!(issued_session(&resp).is_some(), "{path} without cookie");
        let header = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
        assert!(header.starts_with("session="));
        assert!(body_string(resp).contains("404"));
    }
}

#[test]
fn malformed_cookie_is_replaced() {
    let app = test_app("auth_malformed");
    let resp = handle(get("/about", Some("bad")), &app).unwrap();
    assert!(issued_session(&resp).is_some());
}

#[test]
fn student_login_lands_on_dashboard_and_persists() {
    let app = test_app("auth_student");
    let c = cookie("auth_student");

    assert_eq!(login_as(&app, &c, "Jo@Uni.edu", "student"), "/dashboard");

    let resp = handle(get("/dashboard", Some(&c)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Welcome back, jo!"));
    assert!(body.contains("jo@uni.edu"));
    assert!(body.contains("Logout"));
}

#[test]
fn owner_login_lands_on_owner_dashboard() {
    let app = test_app("auth_owner");
    let c = cookie("auth_owner");

    assert_eq!(
        login_as(&app, &c, "landlord@example.com", "owner"),
        "/owner/dashboard"
    );
    let resp = handle(get("/login", Some(&c)), &app).unwrap();
    assert_eq!(location(&resp), "/owner/dashboard");
}

#[test]
fn missing_fields_rerender_login_with_error() {
    let app = test_app("auth_missing");
    let c = cookie("auth_missing");

    let resp = handle(
        post_form("/login", Some(&c), &[("email", "jo@uni.edu"), ("password", "")]),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Please fill in all fields"));
    assert!(body.contains(r#"value="jo@uni.edu""#));

    let resp = handle(get("/dashboard", Some(&c)), &app).unwrap();
    assert_eq!(location(&resp), "/login");
}

#[test]
fn signup_validates_then_signs_in() {
    let app = test_app("auth_signup");
    let c = cookie("auth_signup");

    let resp = handle(
        post_form(
            "/signup",
            Some(&c),
            &[
                ("name", "Priya Patel"),
                ("email", "priya@uni.edu"),
                ("password", "secret1"),
                ("confirm_password", "secret2"),
            ],
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Passwords don"));

    let resp = handle(
        post_form(
            "/signup",
            Some(&c),
            &[
                ("name", "Priya Patel"),
                ("email", "priya@uni.edu"),
                ("password", "secret1"),
                ("confirm_password", "secret1"),
                ("user_type", "student"),
            ],
        ),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/dashboard");

    let body = body_string(handle(get("/dashboard", Some(&c)), &app).unwrap());
    assert!(body.contains("Welcome back, Priya Patel!"));
}

#[test]
fn logout_clears_user() {
    let app = test_app("auth_logout");
    let c = cookie("auth_logout");
    login_as(&app, &c, "jo@uni.edu", "student");

    let resp = handle(post_form("/logout", Some(&c), &[]), &app).unwrap();
    assert_eq!(location(&resp), "/?notice=logged_out");

    let body = body_string(handle(get("/?notice=logged_out", Some(&c)), &app).unwrap());
    assert!(body.contains("Logged out successfully!"));
    assert!(body.contains("Sign Up"));

    let resp = handle(get("/dashboard", Some(&c)), &app).unwrap();
    assert_eq!(location(&resp), "/login");
}

#[test]
fn sessions_are_isolated_per_cookie() {
    let app = test_app("auth_isolated");
    let a = cookie("auth_isolated_a");
    let b = cookie("auth_isolated_b");
    login_as(&app, &a, "a@uni.edu", "student");

    let resp = handle(get("/dashboard", Some(&b)), &app).unwrap();
    assert_eq!(location(&resp), "/login");
}

#[test]
fn shutdown_cancels_sign_in() {
    let app = test_app("auth_shutdown");
    let c = cookie("auth_shutdown");
    app.shutdown();

    let resp = handle(
        post_form("/login", Some(&c), &[("email", "jo@uni.edu"), ("password", "pw")]),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 503);
    assert!(body_string(resp).contains("Sign-in was cancelled"));
}
