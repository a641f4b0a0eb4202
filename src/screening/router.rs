use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::batch::BatchEvaluation;
use super::rubric::RoleProfile;
use super::service::{EvaluationRequest, ScreeningService, StatsRequest};
use super::stats::StatsReport;
use crate::error::AppError;

/// Router builder exposing the screening endpoints.
pub fn screening_router(service: Arc<ScreeningService>) -> Router {
    Router::new()
        .route("/api/v1/screening/roles", get(roles_handler))
        .route("/api/v1/screening/rubrics/:role", get(rubric_handler))
        .route("/api/v1/screening/evaluations", post(evaluate_handler))
        .route("/api/v1/screening/stats", post(stats_handler))
        .with_state(service)
}

pub(crate) async fn roles_handler(State(service): State<Arc<ScreeningService>>) -> Response {
    let roles: Vec<_> = RoleProfile::ordered()
        .into_iter()
        .map(|role| json!({ "key": role.key(), "label": role.label() }))
        .collect();

    let payload = json!({
        "roles": roles,
        "default_role": service.default_role(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn rubric_handler(
    State(service): State<Arc<ScreeningService>>,
    Path(role): Path<String>,
) -> Response {
    let view = service.rubric(Some(&role));
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<ScreeningService>>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<BatchEvaluation>, AppError> {
    let evaluation = service.evaluate(request)?;
    Ok(Json(evaluation))
}

pub(crate) async fn stats_handler(
    State(service): State<Arc<ScreeningService>>,
    Json(request): Json<StatsRequest>,
) -> Response {
    let result = service.stats(&request);
    let status = if result.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    (status, Json(StatsReport::from(result))).into_response()
}
