//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;

use crate::config::{AppState, Settings};

#[tokio::main]
async fn main() {
    // .expect() aqui: sem configuração válida a aplicação não deve iniciar.
    let settings = Settings::from_env().expect("Falha ao ler a configuração do ambiente.");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_target(false)
        .compact()
        .init();

    let app_state = AppState::new(&settings).expect("Falha ao inicializar o estado da aplicação.");
    let app = routes::create_router(app_state);

    let addr = settings.addr().expect("Endereço de escuta inválido.");
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(%addr, "🚀 Servidor escutando (Swagger em /swagger-ui)");

    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
