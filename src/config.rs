// src/config.rs

use std::{env, net::SocketAddr};

use anyhow::Context;

use crate::{
    common::i18n::I18nStore,
    db::{DashboardRepository, EntityStore, LeadRepository, MessageRepository, PropertyRepository, SaleRepository},
    services::{
        dashboard_service::DashboardService, lead_service::LeadService,
        message_service::MessageService, property_service::PropertyService,
        sale_service::SaleService,
    },
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
    pub default_locale: String,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("APP_PORT inválida: '{raw}'"))?,
            Err(_) => 3000,
        };
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".to_string());
        let default_locale = env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "pt".to_string());

        Ok(Self { host, port, log_filter, default_locale })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Endereço inválido: {}:{}", self.host, self.port))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
            default_locale: "pt".to_string(),
        }
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub i18n_store: I18nStore,
    pub default_locale: String,

    pub lead_service: LeadService,
    pub property_service: PropertyService,
    pub sale_service: SaleService,
    pub message_service: MessageService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    /// Monta o gráfico de dependências em cima de um store vazio.
    /// Reiniciar o processo começa tudo do zero.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let i18n_store = I18nStore::load(&settings.default_locale)?;
        let store = EntityStore::new();

        let lead_repo = LeadRepository::new(store.clone());
        let property_repo = PropertyRepository::new(store.clone());
        let sale_repo = SaleRepository::new(store.clone());
        let message_repo = MessageRepository::new(store.clone());
        let dashboard_repo = DashboardRepository::new(store);

        tracing::info!("✅ Store em memória inicializado");

        Ok(Self {
            default_locale: i18n_store.fallback().to_string(),
            lead_service: LeadService::new(lead_repo),
            property_service: PropertyService::new(property_repo),
            sale_service: SaleService::new(sale_repo, i18n_store.clone()),
            message_service: MessageService::new(message_repo),
            dashboard_service: DashboardService::new(dashboard_repo),
            i18n_store,
        })
    }
}
