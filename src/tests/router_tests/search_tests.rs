use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};
use astra::Body;
use http::{Method, Request};

fn position(body: &str, id: u32) -> usize {
    body.find(&format!("id=\"listing-{id}\""))
        .unwrap_or_else(|| panic!("listing {id} not rendered"))
}

#[test]
fn home_page_lists_everything_by_default() {
    let state = test_state();

    let resp = get(&state, "/");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.contains("Showing <strong>8</strong> properties"));
    assert!(!body.contains("No properties found"));
}

#[test]
fn location_filter_is_case_insensitive() {
    let state = test_state();

    let body = body_string(get(&state, "/?location=AUSTIN"));

    assert!(body.contains("Showing <strong>4</strong> properties"));
    for id in [1, 2, 6, 7] {
        position(&body, id);
    }
    assert!(!body.contains("id=\"listing-3\""));
}

#[test]
fn price_window_and_sort_order_are_applied() {
    let state = test_state();

    let body = body_string(get(
        &state,
        "/?min_price=200000&max_price=400000&sort=price-desc",
    ));

    assert!(body.contains("Showing <strong>4</strong> properties"));
    let order = [2, 6, 4, 7].map(|id| position(&body, id));
    assert!(order.windows(2).all(|w| w[0] < w[1]), "order was {order:?}");
}

#[test]
fn empty_result_shows_reset_link() {
    let state = test_state();

    let body = body_string(get(&state, "/?type=Commercial"));

    assert!(body.contains("Showing <strong>0</strong> properties"));
    assert!(body.contains("No properties found"));
    assert!(body.contains("Reset Filters"));
}

#[test]
fn non_numeric_filter_is_a_bad_request() {
    let state = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/?min_price=cheap")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    let resp = error_to_response(&err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("min_price must be a number"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/gallery")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).unwrap_err();

    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_to_response(&err).status(), 404);
}

#[test]
fn json_route_returns_sorted_results() {
    let state = test_state();

    let resp = get(&state, "/listings.json?type=Condo&sort=price-asc");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let value: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let ids: Vec<u64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![7, 2]);
    assert_eq!(value[0]["propertyType"], "Condo");
}

#[test]
fn health_check() {
    let state = test_state();
    assert_eq!(body_string(get(&state, "/health")), "ok");
}
