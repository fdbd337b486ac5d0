// src/handlers/leads.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::{
        lead::{Lead, NewLead, UpdateLead},
        message::Message,
    },
};

// GET /api/leads
#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    responses(
        (status = 200, description = "Todos os leads, na ordem de cadastro", body = Vec<Lead>)
    )
)]
pub async fn list_leads(State(app_state): State<AppState>) -> impl IntoResponse {
    let leads = app_state.lead_service.list_leads().await;
    (StatusCode::OK, Json(leads))
}

// GET /api/leads/{id}
#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead encontrado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn get_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let lead = app_state
        .lead_service
        .get_lead(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(lead)))
}

// POST /api/leads
#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = NewLead,
    responses(
        (status = 201, description = "Lead criado", body = Lead),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewLead>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state.lead_service.create_lead(payload).await;

    Ok((StatusCode::CREATED, Json(lead)))
}

// PATCH/PUT /api/leads/{id}
#[utoipa::path(
    patch,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    request_body = UpdateLead,
    responses(
        (status = 200, description = "Lead atualizado", body = Lead),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLead>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let lead = app_state
        .lead_service
        .update_lead(id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(lead)))
}

// DELETE /api/leads/{id}
#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    responses(
        (status = 204, description = "Lead excluído"),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .lead_service
        .delete_lead(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/leads/{id}/messages
// Não exige que o lead exista: lead excluído ainda pode ter conversa.
#[utoipa::path(
    get,
    path = "/api/leads/{id}/messages",
    tag = "Messages",
    params(("id" = i32, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Conversa do lead, em ordem de chegada", body = Vec<Message>)
    )
)]
pub async fn list_lead_messages(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let messages = app_state.message_service.list_messages(Some(id)).await;
    (StatusCode::OK, Json(messages))
}
