//! API tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use ewaste_classifiers::ClassificationOrchestrator;
use ewaste_server::{
    create_router,
    store::{DocumentStore, InMemoryStore},
    AppState, ServerConfig,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with_config(config: ServerConfig) -> Router {
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryStore::new());
    let state = AppState::from_parts(config, ClassificationOrchestrator::fallback_only(), store, None)
        .expect("state");
    create_router(state)
}

fn app() -> Router {
    app_with_config(ServerConfig::default())
}

fn admin_app() -> Router {
    app_with_config(ServerConfig {
        admin_api_key: Some("secret".to_string()),
        ..ServerConfig::default()
    })
}

fn post_json(uri: &str, headers: &[(&str, &str)], body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), get("/health", &[])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = send(&app(), get("/api/nope", &[])).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found_error");
}

#[tokio::test]
async fn test_classify_records_device_with_compat_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/devices/classify",
            &[("x-user-id", "user-1")],
            json!({ "name": "Old Smartphone", "category": "E-waste", "imageUrl": "https://img/1.png" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["userId"], "user-1");
    assert_eq!(body["hazardLevel"], "High");
    assert_eq!(body["hazardousMaterials"].as_array().unwrap().len(), 6);
    assert_eq!(body["recyclingSteps"].as_array().unwrap().len(), 7);
    assert_eq!(body["analysisSource"], "fallback");
    assert_eq!(body["status"], "detected");
    assert_eq!(body["imageUrl"], "https://img/1.png");
    assert_eq!(body["detailedData"]["keyword"], "smartphone");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    assert!(body["classificationResults"]
        .as_str()
        .unwrap()
        .starts_with("Old Smartphone (E-waste): "));
}

#[tokio::test]
async fn test_classify_low_risk_device() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/devices/classify",
            &[("x-user-id", "user-1")],
            json!({ "name": "Plastic Tray", "category": "Plastic" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["hazardLevel"], "Medium");
    assert_eq!(body["hazardousMaterials"].as_array().unwrap().len(), 3);
    assert!(body.get("imageUrl").is_none());
}

#[tokio::test]
async fn test_classify_requires_user() {
    let (status, body) = send(
        &app(),
        post_json("/api/devices/classify", &[], json!({ "name": "Laptop", "category": "Computer" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["type"], "authentication_error");
}

#[tokio::test]
async fn test_classify_rejects_blank_name() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/devices/classify",
            &[("x-user-id", "user-1")],
            json!({ "name": "   ", "category": "Computer" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn test_devices_and_stats_are_per_user() {
    let app = app();
    for (name, category) in [("Old Smartphone", "E-waste"), ("Plastic Tray", "Plastic")] {
        let (status, _) = send(
            &app,
            post_json(
                "/api/devices/classify",
                &[("x-user-id", "alice")],
                json!({ "name": name, "category": category }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, devices) = send(&app, get("/api/devices", &[("x-user-id", "alice")])).await;
    assert_eq!(status, StatusCode::OK);
    let devices = devices.as_array().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["name"], "Plastic Tray");

    let (_, other) = send(&app, get("/api/devices", &[("x-user-id", "bob")])).await;
    assert_eq!(other, json!([]));

    let (status, stats) = send(&app, get("/api/devices/stats", &[("x-user-id", "alice")])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalDevices"], 2);
    assert_eq!(stats["highHazardDevices"], 1);
    assert_eq!(stats["co2Saved"], 5.0);
    assert_eq!(stats["impactScore"], 200);

    let activity = stats["dailyActivity"].as_array().unwrap();
    assert_eq!(activity.len(), 7);
    assert_eq!(activity[6]["count"], 2);
}

#[tokio::test]
async fn test_heuristic_endpoint_generic_profile() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/classify/heuristic",
            &[],
            json!({ "name": "Unknown Gadget X", "category": "Unknown" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["detailedData"]["keyword"].is_null());
    assert!(!body["recyclingSteps"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_heuristic_endpoint_keyword_match() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/classify/heuristic",
            &[],
            json!({ "name": "smartphone battery", "category": "Phone" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detailedData"]["keyword"], "smartphone");
    assert_eq!(body["hazardLevel"], "High");
}

#[tokio::test]
async fn test_admin_routes_require_key() {
    let app = admin_app();
    let center = json!({
        "name": "Green Tech Recyclers",
        "address": "123 Eco Street",
        "location": { "type": "Point", "coordinates": [-73.98, 40.75] },
        "acceptedWaste": ["Batteries"],
        "rating": 4.5
    });

    let (status, _) = send(&app, post_json("/api/centers", &[], center.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, post_json("/api/centers", &[("x-admin-key", "wrong")], center.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, created) = send(&app, post_json("/api/centers", &[("x-admin-key", "secret")], center)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Green Tech Recyclers");

    let (status, centers) = send(&app, get("/api/centers", &[])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(centers.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_center_rejects_bad_coordinates() {
    let (status, _) = send(
        &admin_app(),
        post_json(
            "/api/centers",
            &[("x-admin-key", "secret")],
            json!({ "name": "Nowhere", "address": "0 Null Island", "location": { "coordinates": [200.0, 0.0] } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_hazard_creation_and_listing() {
    let app = app();
    let (status, _) = send(
        &app,
        post_json("/api/hazards", &[], json!({ "component": "CRT Glass" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post_json(
            "/api/hazards",
            &[],
            json!({
                "component": "CRT Glass",
                "hazardDescription": "Leaded glass from cathode ray tubes.",
                "classification": "Toxic",
                "disposalGuide": "Return to a CRT collection point."
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, hazards) = send(&app, get("/api/hazards", &[])).await;
    assert_eq!(hazards.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_metrics_without_recorder_is_empty() {
    let response = app().oneshot(get("/metrics", &[])).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}
