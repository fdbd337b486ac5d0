// src/handlers/sales.rs

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
    models::sale::{NewSale, Sale, SalesReport, UpdateSale},
};

// GET /api/sales
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sales",
    responses(
        (status = 200, description = "Todas as vendas", body = Vec<Sale>)
    )
)]
pub async fn list_sales(State(app_state): State<AppState>) -> impl IntoResponse {
    let sales = app_state.sale_service.list_sales().await;
    (StatusCode::OK, Json(sales))
}

// GET /api/sales/report
#[utoipa::path(
    get,
    path = "/api/sales/report",
    tag = "Sales",
    responses(
        (status = 200, description = "Relatório de vendas com imóvel e cliente resolvidos", body = SalesReport)
    )
)]
pub async fn get_sales_report(
    State(app_state): State<AppState>,
    locale: Locale,
) -> impl IntoResponse {
    let report = app_state.sale_service.get_report(&locale.0).await;
    (StatusCode::OK, Json(report))
}

// GET /api/sales/{id}
#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = "Sales",
    params(("id" = i32, Path, description = "ID da venda")),
    responses(
        (status = 200, description = "Venda encontrada", body = Sale),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn get_sale(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let sale = app_state
        .sale_service
        .get_sale(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(sale)))
}

// POST /api/sales
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sales",
    request_body = NewSale,
    responses(
        (status = 201, description = "Venda registrada", body = Sale),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_sale(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<NewSale>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let sale = app_state.sale_service.create_sale(payload).await;

    Ok((StatusCode::CREATED, Json(sale)))
}

// PATCH/PUT /api/sales/{id}
#[utoipa::path(
    patch,
    path = "/api/sales/{id}",
    tag = "Sales",
    params(("id" = i32, Path, description = "ID da venda")),
    request_body = UpdateSale,
    responses(
        (status = 200, description = "Venda atualizada", body = Sale),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn update_sale(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSale>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let sale = app_state
        .sale_service
        .update_sale(id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(sale)))
}

// DELETE /api/sales/{id}
#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = "Sales",
    params(("id" = i32, Path, description = "ID da venda")),
    responses(
        (status = 204, description = "Venda excluída"),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn delete_sale(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .sale_service
        .delete_sale(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
