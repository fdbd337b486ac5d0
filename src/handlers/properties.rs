// src/handlers/properties.rs

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
    models::property::{NewProperty, Property, UpdateProperty},
};

// GET /api/properties
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    responses(
        (status = 200, description = "Todos os imóveis", body = Vec<Property>)
    )
)]
pub async fn list_properties(State(app_state): State<AppState>) -> impl IntoResponse {
    let properties = app_state.property_service.list_properties().await;
    (StatusCode::OK, Json(properties))
}

// GET /api/properties/{id}
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = i32, Path, description = "ID do imóvel")),
    responses(
        (status = 200, description = "Imóvel encontrado", body = Property),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn get_property(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let property = app_state
        .property_service
        .get_property(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(property)))
}

// POST /api/properties
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "Properties",
    request_body = NewProperty,
    responses(
        (status = 201, description = "Imóvel cadastrado", body = Property),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_property(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewProperty>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let property = app_state.property_service.create_property(payload).await;

    Ok((StatusCode::CREATED, Json(property)))
}

// PATCH/PUT /api/properties/{id}
#[utoipa::path(
    patch,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = i32, Path, description = "ID do imóvel")),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Imóvel atualizado", body = Property),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn update_property(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProperty>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let property = app_state
        .property_service
        .update_property(id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(property)))
}

// DELETE /api/properties/{id}
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = i32, Path, description = "ID do imóvel")),
    responses(
        (status = 204, description = "Imóvel excluído"),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn delete_property(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .property_service
        .delete_property(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
