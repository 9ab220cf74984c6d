use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use imfuse_lambda::config::ServiceConfig;
use imfuse_lambda::state::AppState;

fn app() -> Router {
    imfuse_lambda::router(AppState::new(ServiceConfig::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_every_mode() {
    let (status, body) = get("/fusion/modes").await;
    assert_eq!(status, StatusCode::OK);
    let modes = body.as_array().unwrap();
    assert_eq!(modes.len(), 39);
    assert_eq!(
        modes[0],
        json!({
            "tag": "BladderFilling",
            "title": "Bladder Filling Comparison",
            "family": "bladder_filling",
            "manual": false
        })
    );
}

#[tokio::test]
async fn mode_lookup_by_tag() {
    let (status, body) = get("/fusion/modes/MriCtPet_UltimateComplex").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["family"], "mri_ct_pet");

    let (status, body) = get("/fusion/modes/Complex").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["manual"], true);

    let (status, body) = get("/fusion/modes/Nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown fusion mode: Nope");
}

#[tokio::test]
async fn classify_returns_mode_and_title() {
    let (status, body) = post(
        "/fusion/classify",
        json!({ "mriRigid": 1, "ctRigid": 1, "petRigid": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "mode": "MriCtPet_Single_Rigid_Rigid",
            "title": "MRI/CT, CT/CT and PET/CT Fusion"
        })
    );
}

#[tokio::test]
async fn registrations_for_bladder_filling() {
    let (status, body) = post(
        "/fusion/registrations",
        json!({
            "mriRigid": 0,
            "petRigid": 0,
            "petDeformable": 0,
            "ctRigid": 5,
            "ctDeformable": 0,
            "bladderFilling": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "BladderFilling");
    assert_eq!(
        body["registrations"],
        json!([{ "primary": "CT_CT", "secondary": "CT_CT", "method": "Rigid" }])
    );
    assert_eq!(body["isBladderFillingStudy"], true);
}

#[tokio::test]
async fn registrations_for_empty_vector() {
    let (status, body) = post("/fusion/registrations", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "Single_MRI");
    assert_eq!(
        body["registrations"],
        json!([{ "primary": "CT_CT", "secondary": "MRI", "method": "Rigid" }])
    );
    assert!(body.get("isBladderFillingStudy").is_none());
}

#[tokio::test]
async fn oversized_count_is_unprocessable() {
    let (status, body) = post("/fusion/registrations", json!({ "ctRigid": 11 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ctRigid count 11 exceeds the maximum of 10");
}

#[tokio::test]
async fn negative_count_is_bad_request() {
    let (status, body) = post("/fusion/classify", json!({ "petRigid": -1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn configured_origin_is_not_widened() {
    let config = ServiceConfig {
        allowed_origin: Some(HeaderValue::from_static("https://forms.example.org")),
        ..ServiceConfig::default()
    };
    let response = imfuse_lambda::router(AppState::new(config))
        .oneshot(
            Request::get("/health")
                .header("origin", "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let allowed = response.headers().get("access-control-allow-origin");
    assert_ne!(allowed, Some(&HeaderValue::from_static("*")));
}
