// src/tests/router_tests/owner_tests.rs

use crate::app::App;
use crate::router::handle;
use crate::tests::utils::{
    body_string, cookie, error_status, get, location, post_form, test_app,
};

fn sign_in(app: &App, c: &str, user_type: &str) {
    let resp = handle(
        post_form(
            "/login",
            Some(c),
            &[
                ("email", "host@example.com"),
                ("password", "pw"),
                ("user_type", user_type),
            ],
        ),
        app,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
}

fn listing_form<'a>(title: &'a str, price: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", title),
        ("description", "Bright room, five minutes from campus."),
        ("price", price),
        ("room_type", "Studio"),
        ("address", "9 College Rd"),
        ("city", "Providence"),
        ("state", "Rhode Island"),
        ("zip_code", "02906"),
        ("amenity", "WiFi"),
        ("amenity", "Parking"),
        ("house_rules", "No smoking\nQuiet after 10pm"),
    ]
}

#[test]
fn owner_pages_are_guarded() {
    let app = test_app("owner_guard");

    let anon = cookie("owner_guard_anon");
    for path in ["/owner/dashboard", "/owner/listings/new", "/owner/listings/listing-001/edit"] {
        let resp = handle(get(path, Some(&anon)), &app).unwrap();
        assert_eq!(location(&resp), "/login", "{path}");
    }

    let student = cookie("owner_guard_student");
    sign_in(&app, &student, "student");
    let resp = handle(get("/owner/dashboard", Some(&student)), &app).unwrap();
    assert_eq!(location(&resp), "/dashboard");
    let resp = handle(post_form("/owner/listings", Some(&student), &listing_form("x", "500")), &app)
        .unwrap();
    assert_eq!(location(&resp), "/dashboard");
}

#[test]
fn new_owner_sees_empty_dashboard_with_stats() {
    let app = test_app("owner_empty");
    let c = cookie("owner_empty");
    sign_in(&app, &c, "owner");

    let resp = handle(get("/owner/dashboard", Some(&c)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Owner Dashboard"));
    assert!(body.contains("No listings yet"));
    assert!(body.contains("Total Views"));
    assert!(body.contains("142"));
    assert!(body.contains(r#"<p class="stat-value">0</p>"#));
    assert!(body.contains(r#"<p class="stat-value">2</p>"#));

    // Catalog examples fill the empty listings tab, without owner controls.
    assert!(body.contains("Sample listings"));
    assert!(body.contains(r#"href="/listing/listing-001""#));
    assert!(!body.contains("/owner/listings/listing-001/edit"));
}

#[test]
fn dashboard_lists_booking_requests_and_profile() {
    let app = test_app("owner_requests");
    let c = cookie("owner_requests");
    sign_in(&app, &c, "owner");

    let body = body_string(handle(get("/owner/dashboard", Some(&c)), &app).unwrap());
    assert!(body.contains("Booking Requests"));
    assert!(body.contains("Michael Chen"));
    assert!(body.contains("sarah.j@example.com"));
    assert!(body.contains("/owner/requests/request-001/accept"));
    assert!(body.contains("/owner/requests/request-002/decline"));

    assert!(body.contains("Owner Profile Information"));
    assert!(body.contains(r#"value="host@example.com""#));
    assert!(body.contains(r#"value="Property Owner""#));
    assert!(body.contains("(555) 123-4567"));
}

#[test]
fn booking_request_actions_confirm_with_notice() {
    let app = test_app("owner_request_actions");
    let c = cookie("owner_request_actions");
    sign_in(&app, &c, "owner");

    for (action, key, message) in [
        ("accept", "request_accepted", "Request accepted (simulated)"),
        ("contact", "student_contacted", "Message sent to student (simulated)"),
        ("decline", "request_declined", "Request declined (simulated)"),
    ] {
        let uri = format!("/owner/requests/request-002/{action}");
        let resp = handle(post_form(&uri, Some(&c), &[]), &app).unwrap();
        let target = location(&resp);
        assert_eq!(target, format!("/owner/dashboard?notice={key}"));

        let body = body_string(handle(get(&target, Some(&c)), &app).unwrap());
        assert!(body.contains(message), "{action}");
    }

    assert_eq!(
        error_status(handle(
            post_form("/owner/requests/request-999/accept", Some(&c), &[]),
            &app
        )),
        404
    );
    assert_eq!(
        error_status(handle(
            post_form("/owner/requests/request-001/approve", Some(&c), &[]),
            &app
        )),
        404
    );
}

#[test]
fn booking_request_actions_are_owner_only() {
    let app = test_app("owner_request_guard");

    let anon = cookie("owner_request_guard_anon");
    let resp = handle(
        post_form("/owner/requests/request-001/accept", Some(&anon), &[]),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/login");

    let student = cookie("owner_request_guard_student");
    sign_in(&app, &student, "student");
    let resp = handle(
        post_form("/owner/requests/request-001/accept", Some(&student), &[]),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/dashboard");
}

#[test]
fn oversized_form_is_rejected_not_truncated() {
    let app = test_app("owner_big_form");
    let c = cookie("owner_big_form");
    sign_in(&app, &c, "owner");

    let description = "a".repeat(70_000);
    let mut form = listing_form("Huge", "500");
    form.retain(|(k, _)| *k != "description");
    form.push(("description", &description));

    let resp = handle(post_form("/owner/listings", Some(&c), &form), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Form too large"));
    assert!(app.catalog.get("listing-007").unwrap().is_none());
    assert_eq!(app.catalog.len().unwrap(), 6);
}

#[test]
fn create_edit_delete_round_trip() {
    let app = test_app("owner_crud");
    let c = cookie("owner_crud");
    sign_in(&app, &c, "owner");

    let resp = handle(
        post_form("/owner/listings", Some(&c), &listing_form("Sunny Studio", "725")),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/owner/dashboard?notice=listing_created");

    let body = body_string(handle(get("/owner/dashboard", Some(&c)), &app).unwrap());
    assert!(body.contains("Sunny Studio"));
    assert!(body.contains("/owner/listings/listing-007/edit"));

    let body = body_string(
        handle(get("/owner/listings/listing-007/edit", Some(&c)), &app).unwrap(),
    );
    assert!(body.contains(r#"value="Sunny Studio""#));
    assert!(body.contains(r#"value="Parking" checked"#));

    let resp = handle(
        post_form(
            "/owner/listings/listing-007",
            Some(&c),
            &listing_form("Sunny Studio (renovated)", "760"),
        ),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/owner/dashboard?notice=listing_updated");

    let body = body_string(handle(get("/listing/listing-007", Some(&c)), &app).unwrap());
    assert!(body.contains("Sunny Studio (renovated)"));
    assert!(body.contains("$760"));
    assert!(body.contains("Edit listing"));

    // New listing is searchable by city.
    let body = body_string(
        handle(get("/listings?location=providence", Some(&c)), &app).unwrap(),
    );
    assert!(body.contains("/listing/listing-007"));

    let resp = handle(
        post_form("/owner/listings/listing-007/delete", Some(&c), &[]),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/owner/dashboard?notice=listing_deleted");
    assert_eq!(
        error_status(handle(get("/listing/listing-007", Some(&c)), &app)),
        404
    );
}

#[test]
fn invalid_drafts_rerender_form() {
    let app = test_app("owner_invalid");
    let c = cookie("owner_invalid");
    sign_in(&app, &c, "owner");

    let resp = handle(
        post_form("/owner/listings", Some(&c), &listing_form("Cheap", "12.5")),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Please enter a valid price"));
    assert!(body.contains(r#"value="Cheap""#));

    let resp = handle(
        post_form("/owner/listings", Some(&c), &listing_form("", "500")),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Please fill in all required fields"));
}

#[test]
fn other_owners_listings_are_forbidden() {
    let app = test_app("owner_forbidden");
    let c = cookie("owner_forbidden");
    sign_in(&app, &c, "owner");

    assert_eq!(
        error_status(handle(get("/owner/listings/listing-001/edit", Some(&c)), &app)),
        403
    );
    assert_eq!(
        error_status(handle(
            post_form("/owner/listings/listing-001", Some(&c), &listing_form("Mine now", "1")),
            &app
        )),
        403
    );
    assert_eq!(
        error_status(handle(
            post_form("/owner/listings/listing-001/delete", Some(&c), &[]),
            &app
        )),
        403
    );
    assert_eq!(
        error_status(handle(
            post_form("/owner/listings/listing-404/delete", Some(&c), &[]),
            &app
        )),
        404
    );
}
