//! HTTP routes.
//!
//! Thin adapter over the encounter use cases: every endpoint answers with
//! the `{success, data?, error?}` envelope, and a failed operation never
//! leaves partially-written state behind (the use cases guarantee that).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skirmish_domain::{CombatantDraft, CombatantId, CombatantPatch, Encounter, EncounterId};

use crate::app::App;
use crate::use_cases::encounter::EncounterError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/combat", post(create_combat))
        .route("/api/combat/{id}", get(get_combat))
        .route("/api/combat/{id}/entity", post(add_entity))
        .route(
            "/api/combat/{id}/entity/{eid}",
            put(update_entity).delete(delete_entity),
        )
        .route("/api/combat/{id}/next-turn", post(next_turn))
        .route("/api/combat/{id}/reset", post(reset_combat))
        .route("/api/combat/{id}/import", post(import_combat))
}

async fn health() -> &'static str {
    "OK"
}

/// Success/error envelope wrapping every combat response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ApiResponse::err(message))).into_response()
    }
}

impl From<EncounterError> for ApiError {
    fn from(e: EncounterError) -> Self {
        match e {
            EncounterError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            EncounterError::Validation(_) => ApiError::BadRequest(e.to_string()),
            EncounterError::Repo(_) => ApiError::Internal(e.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateCombatRequest {
    name: String,
}

async fn create_combat(
    State(app): State<Arc<App>>,
    Json(req): Json<CreateCombatRequest>,
) -> Result<Json<ApiResponse<Encounter>>, ApiError> {
    let encounter = app.use_cases.encounter.create.execute(req.name).await?;
    Ok(Json(ApiResponse::ok(encounter)))
}

async fn get_combat(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Encounter>>, ApiError> {
    let encounter = app
        .use_cases
        .encounter
        .get
        .execute(EncounterId::new(id))
        .await?;
    Ok(Json(ApiResponse::ok(encounter)))
}

async fn add_entity(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(draft): Json<CombatantDraft>,
) -> Result<Json<ApiResponse<Encounter>>, ApiError> {
    let encounter = app
        .use_cases
        .encounter
        .add_combatant
        .execute(EncounterId::new(id), draft)
        .await?;
    Ok(Json(ApiResponse::ok(encounter)))
}

async fn update_entity(
    State(app): State<Arc<App>>,
    Path((id, eid)): Path<(String, String)>,
    Json(patch): Json<CombatantPatch>,
) -> Result<Json<ApiResponse<Encounter>>, ApiError> {
    let encounter = app
        .use_cases
        .encounter
        .update_combatant
        .execute(EncounterId::new(id), CombatantId::new(eid), patch)
        .await?;
    Ok(Json(ApiResponse::ok(encounter)))
}

async fn delete_entity(
    State(app): State<Arc<App>>,
    Path((id, eid)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Encounter>>, ApiError> {
    let encounter = app
        .use_cases
        .encounter
        .remove_combatant
        .execute(EncounterId::new(id), CombatantId::new(eid))
        .await?;
    Ok(Json(ApiResponse::ok(encounter)))
}

async fn next_turn(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Encounter>>, ApiError> {
    let encounter = app
        .use_cases
        .encounter
        .next_turn
        .execute(EncounterId::new(id))
        .await?;
    Ok(Json(ApiResponse::ok(encounter)))
}

async fn reset_combat(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Encounter>>, ApiError> {
    let encounter = app
        .use_cases
        .encounter
        .reset
        .execute(EncounterId::new(id))
        .await?;
    Ok(Json(ApiResponse::ok(encounter)))
}

async fn import_combat(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: String,
) -> Result<Json<ApiResponse<Encounter>>, ApiError> {
    let encounter = app
        .use_cases
        .encounter
        .import
        .execute(EncounterId::new(id), &body)
        .await?;
    Ok(Json(ApiResponse::ok(encounter)))
}
