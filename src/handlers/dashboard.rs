// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{config::AppState, models::dashboard::DashboardMetrics};

// GET /api/dashboard/metrics
#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contagens dos cards do painel (sem filtro de período)", body = DashboardMetrics)
    )
)]
pub async fn get_metrics(State(app_state): State<AppState>) -> impl IntoResponse {
    let metrics = app_state.dashboard_service.get_metrics().await;
    (StatusCode::OK, Json(metrics))
}
