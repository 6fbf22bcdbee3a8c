use crate::errors::ServerError;
use crate::router::{handle, AppState};
use crate::tests::utils::{body_string, test_state};
use astra::{Body, Response};
use http::{Method, Request};

fn toggle(
    state: &AppState,
    id: &str,
    cookie: Option<&str>,
    referer: Option<&str>,
) -> Result<Response, ServerError> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(format!("/favorites/{id}"));
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    if let Some(referer) = referer {
        builder = builder.header("Referer", referer);
    }
    handle(builder.body(Body::empty()).unwrap(), state)
}

fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers().get(name).unwrap().to_str().unwrap()
}

#[test]
fn toggle_sets_cookie_and_returns_to_referer() {
    let state = test_state();

    let resp = toggle(
        &state,
        "3",
        None,
        Some("http://localhost:3000/?location=lake&sort=newest"),
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        header(&resp, "Location"),
        "/?location=lake&sort=newest#listing-3"
    );
    assert!(header(&resp, "Set-Cookie").starts_with("favorites=3;"));
}

#[test]
fn toggle_without_referer_goes_home() {
    let state = test_state();

    let resp = toggle(&state, "4", None, None).unwrap();

    assert_eq!(header(&resp, "Location"), "/#listing-4");
}

#[test]
fn toggle_removes_an_existing_favorite() {
    let state = test_state();

    let resp = toggle(&state, "3", Some("theme=dark; favorites=3.5"), None).unwrap();
    assert!(header(&resp, "Set-Cookie").starts_with("favorites=5;"));

    let resp = toggle(&state, "5", Some("favorites=5"), None).unwrap();
    let cookie = header(&resp, "Set-Cookie");
    assert!(cookie.starts_with("favorites=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[test]
fn unknown_listing_is_not_found() {
    let state = test_state();

    assert!(matches!(
        toggle(&state, "999", None, None),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        toggle(&state, "abc", None, None),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn search_page_marks_favorites_from_cookie() {
    let state = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("Cookie", "favorites=2")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(req, &state).unwrap());

    assert!(body.contains("1 saved"));
    assert_eq!(body.matches("heart active").count(), 1);
}

#[test]
fn quoted_cookie_keeps_existing_favorites() {
    let state = test_state();

    let resp = toggle(&state, "4", Some("favorites=\"3.5\""), None).unwrap();

    assert!(header(&resp, "Set-Cookie").starts_with("favorites=3.4.5;"));
}

#[test]
fn toggle_never_redirects_off_site() {
    let state = test_state();

    let resp = toggle(
        &state,
        "3",
        None,
        Some("http://localhost:3000//evil.example/x"),
    )
    .unwrap();

    assert_eq!(header(&resp, "Location"), "/evil.example/x#listing-3");
}
