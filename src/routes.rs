// src/routes.rs

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn create_router(app_state: AppState) -> Router {
    let lead_routes = Router::new()
        .route(
            "/",
            get(handlers::leads::list_leads).post(handlers::leads::create_lead),
        )
        .route(
            "/{id}",
            get(handlers::leads::get_lead)
                .put(handlers::leads::update_lead)
                .patch(handlers::leads::update_lead)
                .delete(handlers::leads::delete_lead),
        )
        .route("/{id}/messages", get(handlers::leads::list_lead_messages));

    let property_routes = Router::new()
        .route(
            "/",
            get(handlers::properties::list_properties).post(handlers::properties::create_property),
        )
        .route(
            "/{id}",
            get(handlers::properties::get_property)
                .put(handlers::properties::update_property)
                .patch(handlers::properties::update_property)
                .delete(handlers::properties::delete_property),
        );

    let sale_routes = Router::new()
        .route(
            "/",
            get(handlers::sales::list_sales).post(handlers::sales::create_sale),
        )
        .route("/report", get(handlers::sales::get_sales_report))
        .route(
            "/{id}",
            get(handlers::sales::get_sale)
                .put(handlers::sales::update_sale)
                .patch(handlers::sales::update_sale)
                .delete(handlers::sales::delete_sale),
        );

    let message_routes = Router::new()
        .route(
            "/",
            get(handlers::messages::list_messages).post(handlers::messages::create_message),
        )
        .route(
            "/{id}",
            get(handlers::messages::get_message)
                .put(handlers::messages::update_message)
                .patch(handlers::messages::update_message)
                .delete(handlers::messages::delete_message),
        );

    // O frontend roda em outra origem durante o desenvolvimento
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard/metrics", get(handlers::dashboard::get_metrics))
        .nest("/api/leads", lead_routes)
        .nest("/api/properties", property_routes)
        .nest("/api/sales", sale_routes)
        .nest("/api/messages", message_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
