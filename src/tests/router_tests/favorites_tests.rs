// src/tests/router_tests/favorites_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    body_string, cookie, error_status, get, location, post_form, test_app,
};

fn sign_in(app: &crate::app::App, c: &str) {
    let resp = handle(
        post_form("/login", Some(c), &[("email", "fav@uni.edu"), ("password", "pw")]),
        app,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn anonymous_toggle_redirects_to_login() {
    let app = test_app("fav_anon");
    let c = cookie("fav_anon");

    let resp = handle(post_form("/listing/listing-001/favorite", Some(&c), &[]), &app).unwrap();
    assert_eq!(location(&resp), "/login");

    let resp = handle(post_form("/listing/listing-001/contact", Some(&c), &[]), &app).unwrap();
    assert_eq!(location(&resp), "/login");
}

#[test]
fn toggle_adds_then_removes_and_returns_to_page() {
    let app = test_app("fav_toggle");
    let c = cookie("fav_toggle");
    sign_in(&app, &c);

    let resp = handle(
        post_form(
            "/listing/listing-003/favorite",
            Some(&c),
            &[("return_to", "/listings?sort=newest")],
        ),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/listings?sort=newest&notice=favorite_added");

    let body = body_string(handle(get("/dashboard", Some(&c)), &app).unwrap());
    assert!(body.contains(r#"action="/listing/listing-003/favorite""#));

    let resp = handle(
        post_form(
            "/listing/listing-003/favorite",
            Some(&c),
            &[("return_to", "/dashboard")],
        ),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/dashboard?notice=favorite_removed");

    let body = body_string(
        handle(get("/dashboard?notice=favorite_removed", Some(&c)), &app).unwrap(),
    );
    assert!(body.contains("No saved favorites yet"));
    assert!(body.contains("Removed from favorites"));
}

#[test]
fn foreign_return_to_falls_back_to_detail() {
    let app = test_app("fav_return");
    let c = cookie("fav_return");
    sign_in(&app, &c);

    let resp = handle(
        post_form(
            "/listing/listing-002/favorite",
            Some(&c),
            &[("return_to", "https://evil.example/")],
        ),
        &app,
    )
    .unwrap();
    assert_eq!(
        location(&resp),
        "/listing/listing-002?notice=favorite_added"
    );

    let body = body_string(handle(get("/listing/listing-002", Some(&c)), &app).unwrap());
    assert!(body.contains("is-favorite"));
}

#[test]
fn favorite_of_unknown_listing_is_404() {
    let app = test_app("fav_unknown");
    let c = cookie("fav_unknown");
    sign_in(&app, &c);

    assert_eq!(
        error_status(handle(
            post_form("/listing/listing-404/favorite", Some(&c), &[]),
            &app
        )),
        404
    );
}

#[test]
fn contact_owner_confirms_for_signed_in_visitor() {
    let app = test_app("fav_contact");
    let c = cookie("fav_contact");
    sign_in(&app, &c);

    let resp = handle(
        post_form("/listing/listing-004/contact", Some(&c), &[("channel", "phone")]),
        &app,
    )
    .unwrap();
    let target = location(&resp);
    assert_eq!(target, "/listing/listing-004?notice=contact_sent");

    let body = body_string(handle(get(&target, Some(&c)), &app).unwrap());
    assert!(body.contains("Contact request sent to owner (simulated)"));
}

#[test]
fn student_dashboard_shows_bookings_and_profile() {
    let app = test_app("fav_bookings");
    let c = cookie("fav_bookings");
    sign_in(&app, &c);

    let body = body_string(handle(get("/dashboard", Some(&c)), &app).unwrap());
    assert!(body.contains("My Bookings"));
    assert!(body.contains(r#"data-booking-id="booking-001""#));
    assert!(body.contains(r#"data-booking-id="booking-002""#));
    assert!(body.contains("Confirmed"));
    assert!(body.contains("Pending"));
    assert!(body.contains("09/01/2023 - 05/31/2024"));
    assert!(body.contains(r#"action="/listing/listing-003/contact""#));

    assert!(body.contains("Your Profile Information"));
    assert!(body.contains(r#"value="fav@uni.edu""#));
    assert!(body.contains(r#"value="Student""#));
}
