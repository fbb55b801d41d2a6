//! Shared helpers for marquee-axum router tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use marquee_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use marquee_axum::routes::create_router;

/// Reviews fixture shipped with the repository.
pub const REVIEWS_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/reviews.json");

/// Router over the bundled catalog and the reviews fixture.
pub fn bundled_app() -> Router {
    let config = ServerConfig::with_defaults().with_reviews_file(REVIEWS_FIXTURE);
    create_router(bootstrap(&config), &CorsConfig::AllowAll)
}

/// Send a GET request and collect the status and body text.
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Send a GET request and parse the body as JSON.
// Allow unused: not every test binary reads JSON
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("Expected JSON body, got {body:?}: {e}"));
    (status, json)
}
