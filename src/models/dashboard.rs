// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// Os cards do topo do painel.
// Contagens sobre a coleção inteira: o período escolhido na tela não filtra nada aqui.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub new_leads: usize,         // Total de leads
    pub closed_sales: usize,      // Vendas com status finalizada
    pub active_properties: usize, // Imóveis disponíveis
    pub messages_sent: usize,     // Mensagens enviadas pelo corretor
}
