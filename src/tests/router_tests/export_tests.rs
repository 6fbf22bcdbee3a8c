use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, test_state};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

#[test]
fn xlsx_download_has_attachment_headers() {
    let state = test_state();

    let resp = get(&state, "/listings.xlsx?type=Condo");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("listings.xlsx"));

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn xlsx_download_rejects_bad_filters() {
    let state = test_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/listings.xlsx?bedrooms=many")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(
        handle(req, &state),
        Err(ServerError::BadRequest(_))
    ));
}
