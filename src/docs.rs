// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Leads ---
        handlers::leads::list_leads,
        handlers::leads::get_lead,
        handlers::leads::create_lead,
        handlers::leads::update_lead,
        handlers::leads::delete_lead,
        handlers::leads::list_lead_messages,

        // --- Properties ---
        handlers::properties::list_properties,
        handlers::properties::get_property,
        handlers::properties::create_property,
        handlers::properties::update_property,
        handlers::properties::delete_property,

        // --- Sales ---
        handlers::sales::list_sales,
        handlers::sales::get_sales_report,
        handlers::sales::get_sale,
        handlers::sales::create_sale,
        handlers::sales::update_sale,
        handlers::sales::delete_sale,

        // --- Messages ---
        handlers::messages::list_messages,
        handlers::messages::get_message,
        handlers::messages::create_message,
        handlers::messages::update_message,
        handlers::messages::delete_message,

        // --- Dashboard ---
        handlers::dashboard::get_metrics,
    ),
    components(
        schemas(
            // --- Leads ---
            models::lead::LeadStatus,
            models::lead::Lead,
            models::lead::NewLead,
            models::lead::UpdateLead,

            // --- Properties ---
            models::property::PropertyStatus,
            models::property::Property,
            models::property::NewProperty,
            models::property::UpdateProperty,

            // --- Sales ---
            models::sale::SaleStatus,
            models::sale::Sale,
            models::sale::NewSale,
            models::sale::UpdateSale,
            models::sale::SaleReportEntry,
            models::sale::SalesSummary,
            models::sale::SalesReport,

            // --- Messages ---
            models::message::Sender,
            models::message::MessageType,
            models::message::Message,
            models::message::NewMessage,
            models::message::UpdateMessage,

            // --- Dashboard ---
            models::dashboard::DashboardMetrics,
        )
    ),
    tags(
        (name = "Leads", description = "Cadastro e funil de clientes"),
        (name = "Properties", description = "Carteira de imóveis"),
        (name = "Sales", description = "Vendas e relatório de vendas"),
        (name = "Messages", description = "Conversas com os leads"),
        (name = "Dashboard", description = "Indicadores do painel")
    )
)]
pub struct ApiDoc;
