// src/handlers/messages.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::message::{Message, MessageQuery, NewMessage, UpdateMessage},
};

// GET /api/messages?leadId=
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "Messages",
    params(MessageQuery),
    responses(
        (status = 200, description = "Mensagens (filtradas pelo lead, se informado)", body = Vec<Message>)
    )
)]
pub async fn list_messages(
    State(app_state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let messages = app_state.message_service.list_messages(query.lead_id).await;
    (StatusCode::OK, Json(messages))
}

// GET /api/messages/{id}
#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    tag = "Messages",
    params(("id" = i32, Path, description = "ID da mensagem")),
    responses(
        (status = 200, description = "Mensagem encontrada", body = Message),
        (status = 404, description = "Mensagem não encontrada")
    )
)]
pub async fn get_message(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let message = app_state
        .message_service
        .get_message(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(message)))
}

// POST /api/messages
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "Messages",
    request_body = NewMessage,
    responses(
        (status = 201, description = "Mensagem registrada (timestamp do servidor)", body = Message),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_message(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewMessage>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.message_service.create_message(payload).await;

    Ok((StatusCode::CREATED, Json(message)))
}

// PATCH /api/messages/{id}
#[utoipa::path(
    patch,
    path = "/api/messages/{id}",
    tag = "Messages",
    params(("id" = i32, Path, description = "ID da mensagem")),
    request_body = UpdateMessage,
    responses(
        (status = 200, description = "Mensagem atualizada", body = Message),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Mensagem não encontrada")
    )
)]
pub async fn update_message(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMessage>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state
        .message_service
        .update_message(id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(message)))
}

// DELETE /api/messages/{id}
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "Messages",
    params(("id" = i32, Path, description = "ID da mensagem")),
    responses(
        (status = 204, description = "Mensagem excluída"),
        (status = 404, description = "Mensagem não encontrada")
    )
)]
pub async fn delete_message(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .message_service
        .delete_message(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
