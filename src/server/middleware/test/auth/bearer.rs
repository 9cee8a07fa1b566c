use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use super::*;

fn headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Expected: the token after the `Bearer ` prefix
#[test]
fn extracts_bearer_token() {
    assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
}

/// Expected: None for other schemes, empty tokens, or no header
#[test]
fn ignores_non_bearer_headers() {
    assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
    assert_eq!(bearer_token(&headers("Bearer   ")), None);
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}
