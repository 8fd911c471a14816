// src/tests/router_tests/listings_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, cookie, error_status, get, test_app};

fn result_count(body: &str) -> Option<&str> {
    let start = body.find(r#"class="result-count">"#)? + r#"class="result-count">"#.len();
    let end = body[start..].find('<')? + start;
    Some(&body[start..end])
}

#[test]
fn default_filters_cover_the_seed_data() {
    let app = test_app("listings_default");
    let c = cookie("listings_default");

    let resp = handle(get("/listings", Some(&c)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    // All six seed listings are priced 400..=950.
    assert_eq!(result_count(&body), Some("6 Results"));
}

#[test]
fn query_string_filters_by_location_and_price() {
    let app = test_app("listings_filter");
    let c = cookie("listings_filter");

    let resp = handle(
        get("/listings?location=cambridge&min_price=300&max_price=500", Some(&c)),
        &app,
    )
    .unwrap();
    let body = body_string(resp);

    assert_eq!(result_count(&body), Some("1 Result"));
    assert!(body.contains("/listing/listing-005"));
    assert!(!body.contains("/listing/listing-003"));
}

#[test]
fn amenity_toggles_are_anded() {
    let app = test_app("listings_amenity");
    let c = cookie("listings_amenity");

    let resp = handle(
        get("/listings?amenity=parking&amenity=wifi&sort=price_high_low", Some(&c)),
        &app,
    )
    .unwrap();
    let body = body_string(resp);

    assert_eq!(result_count(&body), Some("2 Results"));
    let pos_006 = body.find("/listing/listing-006").unwrap();
    let pos_003 = body.find("/listing/listing-003").unwrap();
    assert!(pos_006 < pos_003, "price high to low should list 950 before 550");
}

#[test]
fn inverted_range_shows_empty_state() {
    let app = test_app("listings_inverted");
    let c = cookie("listings_inverted");

    let resp = handle(
        get("/listings?min_price=900&max_price=400", Some(&c)),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert_eq!(result_count(&body), Some("0 Results"));
    assert!(body.contains("No listings found"));
}

#[test]
fn unknown_room_type_matches_nothing_and_bad_sort_is_ignored() {
    let app = test_app("listings_unknown");
    let c = cookie("listings_unknown");

    let body = body_string(
        handle(get("/listings?room_type=penthouse", Some(&c)), &app).unwrap(),
    );
    assert_eq!(result_count(&body), Some("0 Results"));

    let body = body_string(
        handle(get("/listings?sort=cheapest-first&room_type=shared", Some(&c)), &app).unwrap(),
    );
    assert_eq!(result_count(&body), Some("2 Results"));
}

#[test]
fn detail_page_renders_and_unknown_id_is_404() {
    let app = test_app("listings_detail");
    let c = cookie("listings_detail");

    let resp = handle(get("/listing/listing-001", Some(&c)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Hosted by"));
    assert!(body.contains("Response rate"));

    assert_eq!(
        error_status(handle(get("/listing/listing-999", Some(&c)), &app)),
        404
    );
}
