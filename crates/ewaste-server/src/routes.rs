//! HTTP routes and handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use ewaste_classifiers::{LegacyFields, ProfileMatch};
use ewaste_core::{ClassificationResult, DeviceSubmission};
use serde::Serialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::{AdminGuard, AuthUser};
use crate::error::AppError;
use crate::models::{
    ClassifyRequest, DeviceRecord, DeviceStatus, HazardRecord, NewCenter, NewHazard, RecyclingCenter,
};
use crate::state::AppState;
use crate::stats::{self, UserStats};

pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/api/devices/classify", post(classify_device))
        .route("/api/classify/heuristic", post(classify_heuristic))
        .route("/api/devices", get(list_devices))
        .route("/api/devices/stats", get(device_stats))
        .route("/api/centers", get(list_centers).post(create_center))
        .route("/api/hazards", get(list_hazards).post(create_hazard))
        .fallback(fallback)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default();

    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

/// Classify a submitted device and record it for the caller
async fn classify_device(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<ClassifyRequest>,
) -> Result<(StatusCode, Json<DeviceRecord>), AppError> {
    let submission = DeviceSubmission::new(req.name.trim(), req.category.trim());
    submission.validate()?;

    info!(
        "Classifying device for user {}: {} ({})",
        user.id, submission.name, submission.category
    );

    let outcome = state
        .orchestrator
        .classify_device(&submission.name, &submission.category)
        .await;
    let legacy = LegacyFields::from_result(&submission.name, &submission.category, &outcome.result);
    let detailed_data = state
        .keyword_classifier
        .lookup(&submission.name, &submission.category);

    let record = DeviceRecord {
        id: Uuid::new_v4(),
        user_id: user.id,
        name: submission.name,
        category: submission.category,
        legacy,
        classification: outcome.result,
        image_url: req.image_url.filter(|url| !url.trim().is_empty()),
        status: DeviceStatus::Detected,
        detailed_data,
        analysis_source: outcome.source,
        created_at: Utc::now(),
    };

    let record = state.store.insert_device(record).await?;
    debug!(
        "Stored device {} via {} in {}us",
        record.id,
        outcome.source.as_str(),
        outcome.latency_us
    );

    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeuristicResponse {
    #[serde(flatten)]
    result: ClassificationResult,
    detailed_data: ProfileMatch,
}

/// Knowledge-base classification without AI or persistence
async fn classify_heuristic(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<HeuristicResponse>, AppError> {
    let submission = DeviceSubmission::new(req.name.trim(), req.category.trim());
    submission.validate()?;

    let classifier = &state.keyword_classifier;
    Ok(Json(HeuristicResponse {
        result: classifier.classify_device(&submission.name, &submission.category),
        detailed_data: classifier.lookup(&submission.name, &submission.category),
    }))
}

async fn list_devices(State(state): State<AppState>, user: AuthUser) -> Result<Json<Vec<DeviceRecord>>, AppError> {
    Ok(Json(state.store.devices_for_user(&user.id).await?))
}

async fn device_stats(State(state): State<AppState>, user: AuthUser) -> Result<Json<UserStats>, AppError> {
    let stats = stats::user_stats(state.store.as_ref(), &user.id, Utc::now()).await?;
    Ok(Json(stats))
}

async fn list_centers(State(state): State<AppState>) -> Result<Json<Vec<RecyclingCenter>>, AppError> {
    Ok(Json(state.store.list_centers().await?))
}

async fn create_center(
    State(state): State<AppState>,
    _admin: AdminGuard,
    Json(req): Json<NewCenter>,
) -> Result<(StatusCode, Json<RecyclingCenter>), AppError> {
    let center = state.store.insert_center(req.into_record()?).await?;
    info!("Created recycling center {} ({})", center.name, center.id);
    Ok((StatusCode::CREATED, Json(center)))
}

async fn list_hazards(State(state): State<AppState>) -> Result<Json<Vec<HazardRecord>>, AppError> {
    Ok(Json(state.store.list_hazards().await?))
}

async fn create_hazard(
    State(state): State<AppState>,
    _admin: AdminGuard,
    Json(req): Json<NewHazard>,
) -> Result<(StatusCode, Json<HazardRecord>), AppError> {
    let hazard = state.store.insert_hazard(req.into_record()?).await?;
    info!("Created hazard {} ({})", hazard.component, hazard.id);
    Ok((StatusCode::CREATED, Json(hazard)))
}

async fn fallback() -> AppError {
    AppError::NotFound
}
