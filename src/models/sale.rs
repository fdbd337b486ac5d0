// src/models/sale.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::common::validation::{check_required, check_required_decimal, into_result, validate_required_decimal};
use crate::models::patch::Patch;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    #[default]
    EmProcesso,
    Finalizada,
    Cancelada,
}

// --- VENDA ---

/// Liga um lead a um imóvel. As referências não são checadas:
/// o imóvel ou o lead podem ter sido excluídos depois.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[schema(example = 1)]
    pub id: i32,
    pub property_id: i32,
    pub lead_id: i32,
    #[schema(example = "650000.00")]
    pub sale_price: String,
    #[schema(example = "39000.00")]
    pub commission: String,
    pub sale_date: DateTime<Utc>,
    pub status: SaleStatus,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub property_id: i32,
    pub lead_id: i32,

    #[validate(custom(function = "validate_required_decimal"))]
    #[schema(example = "650000.00")]
    pub sale_price: String,

    #[validate(custom(function = "validate_required_decimal"))]
    #[schema(example = "39000.00")]
    pub commission: String,

    #[schema(example = "2024-03-15T14:00:00Z")]
    pub sale_date: DateTime<Utc>,

    pub status: Option<SaleStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSale {
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub property_id: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub lead_id: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub sale_price: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub commission: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub sale_date: Patch<DateTime<Utc>>,
    #[serde(default)]
    #[schema(value_type = Option<SaleStatus>)]
    pub status: Patch<SaleStatus>,
}

impl Validate for UpdateSale {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "property_id", &self.property_id);
        check_required(&mut errors, "lead_id", &self.lead_id);
        check_required(&mut errors, "sale_date", &self.sale_date);
        check_required_decimal(&mut errors, "sale_price", &self.sale_price);
        check_required_decimal(&mut errors, "commission", &self.commission);
        into_result(errors)
    }
}

impl Sale {
    pub fn from_new(id: i32, new: NewSale) -> Self {
        Self {
            id,
            property_id: new.property_id,
            lead_id: new.lead_id,
            sale_price: new.sale_price,
            commission: new.commission,
            sale_date: new.sale_date,
            status: new.status.unwrap_or_default(),
        }
    }

    pub fn apply(&mut self, patch: UpdateSale) {
        patch.property_id.apply_required(&mut self.property_id);
        patch.lead_id.apply_required(&mut self.lead_id);
        patch.sale_price.apply_required(&mut self.sale_price);
        patch.commission.apply_required(&mut self.commission);
        patch.sale_date.apply_required(&mut self.sale_date);
        patch.status.apply_or_default(&mut self.status);
    }

    pub fn is_completed(&self) -> bool {
        self.status == SaleStatus::Finalizada
    }

    /// Valor da venda como decimal. Texto inválido conta como zero,
    /// igual à tela de relatório.
    pub fn price(&self) -> Decimal {
        self.sale_price.trim().parse().unwrap_or(Decimal::ZERO)
    }
}

// --- RELATÓRIO DE VENDAS ---

/// Uma linha do relatório: a venda com o nome do imóvel e do cliente já resolvidos.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleReportEntry {
    #[serde(flatten)]
    pub sale: Sale,
    #[schema(example = "Apartamento 3 quartos na Vila Mariana")]
    pub property_title: String,
    #[schema(example = "Ana Silva")]
    pub lead_name: String,
    /// `false` quando o imóvel ou o lead não existem mais
    pub references_resolved: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub completed_sales: usize,
    #[schema(value_type = String, example = "1300000.00")]
    pub total_value: Decimal,
    #[schema(value_type = String, example = "650000.00")]
    pub average_ticket: Decimal,
    /// Vendas finalizadas / total de leads, em %
    #[schema(value_type = String, example = "12.50")]
    pub conversion_rate: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub summary: SalesSummary,
    pub entries: Vec<SaleReportEntry>,
}
