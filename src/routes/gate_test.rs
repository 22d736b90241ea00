use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use super::*;
use crate::routes::with_edge;

fn test_router() -> Router {
    let pages = Router::new()
        .route("/protected", get(|| async { "protected" }))
        .route("/protected/settings", get(|| async { "settings" }))
        .route("/protectedness", get(|| async { "lookalike" }))
        .route("/tutors", get(|| async { "tutors" }));
    with_edge(pages, &ServerConfig::default())
}

async fn call(path: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut builder = axum::http::Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    test_router().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

#[test]
fn requires_session_matches_prefix_and_children_only() {
    assert!(requires_session("/protected", "/protected"));
    assert!(requires_session("/protected", "/protected/"));
    assert!(requires_session("/protected", "/protected/settings"));
    assert!(!requires_session("/protected", "/protectedness"));
    assert!(!requires_session("/protected", "/tutors"));
    assert!(!requires_session("/protected", "/"));
}

#[tokio::test]
async fn redirects_protected_without_cookie() {
    for path in ["/protected", "/protected/settings"] {
        let resp = call(path, None).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }
}

#[tokio::test]
async fn passes_protected_with_cookie() {
    let resp = call("/protected", Some("access_token=abc")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn other_cookies_do_not_open_the_gate() {
    let resp = call("/protected", Some("session_token=abc")).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn leaves_other_paths_alone() {
    assert_eq!(call("/protectedness", None).await.status(), StatusCode::OK);
    assert_eq!(call("/tutors", None).await.status(), StatusCode::OK);
    assert_eq!(call("/healthz", None).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn honours_configured_paths() {
    let config = ServerConfig {
        protected_prefix: "/members".to_owned(),
        login_path: "/signin".to_owned(),
        ..ServerConfig::default()
    };
    let router = with_edge(Router::new().route("/members/home", get(|| async { "home" })), &config);
    let resp = router
        .oneshot(axum::http::Request::builder().uri("/members/home").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/signin");
}
