//! HTTP handlers for the REST API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use super::dto::{HealthResponse, Rifle, RifleCreate, ShotCalculationRequest, ShotCalculationResponse};
use super::error::AppError;
use super::state::AppState;
use crate::calculator::calculate_corrections;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = match state.repository.health_check().await {
        Ok(true) => "ok".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        registry,
    })
}

/// POST /calculate
///
/// Drop and wind drift corrections for one shot.
pub async fn calculate_shot(
    State(state): State<AppState>,
    Json(request): Json<ShotCalculationRequest>,
) -> HandlerResult<ShotCalculationResponse> {
    let model = request.wind_model.unwrap_or(state.wind_model);
    debug!(%model, distance_yards = request.scenario.distance_yards, "calculate request");

    let result = calculate_corrections(&request.scenario, model).map_err(|e| {
        warn!(error = %e, "rejected calculation");
        AppError::from(e)
    })?;

    Ok(Json(result))
}

/// GET /rifles
pub async fn list_rifles(State(state): State<AppState>) -> HandlerResult<Vec<Rifle>> {
    Ok(Json(state.repository.list().await?))
}

/// POST /rifles
pub async fn create_rifle(
    State(state): State<AppState>,
    Json(profile): Json<RifleCreate>,
) -> Result<(StatusCode, Json<Rifle>), AppError> {
    let rifle = state.repository.create(profile).await?;
    Ok((StatusCode::CREATED, Json(rifle)))
}

/// GET /rifles/{rifle_id}
pub async fn get_rifle(
    State(state): State<AppState>,
    Path(rifle_id): Path<String>,
) -> HandlerResult<Rifle> {
    Ok(Json(state.repository.get(&rifle_id).await?))
}
