// src/services/sale_service.rs

use rust_decimal::Decimal;

use crate::{
    common::{
        error::{AppError, Resource},
        i18n::I18nStore,
    },
    db::{SaleRepository, SalesSnapshot},
    models::sale::{NewSale, Sale, SaleReportEntry, SalesReport, SalesSummary, UpdateSale},
};

#[derive(Clone)]
pub struct SaleService {
    repo: SaleRepository,
    i18n_store: I18nStore,
}

impl SaleService {
    pub fn new(repo: SaleRepository, i18n_store: I18nStore) -> Self {
        Self { repo, i18n_store }
    }

    pub async fn list_sales(&self) -> Vec<Sale> {
        self.repo.list().await
    }

    pub async fn get_sale(&self, id: i32) -> Result<Sale, AppError> {
        self.repo
            .get(id)
            .await
            .ok_or(AppError::ResourceNotFound { resource: Resource::Sale, id })
    }

    /// Não checamos se o imóvel e o lead existem: a venda guarda só os ids.
    pub async fn create_sale(&self, new: NewSale) -> Sale {
        let sale = self.repo.create(new).await;
        tracing::info!(
            sale_id = sale.id,
            property_id = sale.property_id,
            lead_id = sale.lead_id,
            "Venda registrada"
        );
        sale
    }

    pub async fn update_sale(&self, id: i32, patch: UpdateSale) -> Result<Sale, AppError> {
        let sale = self
            .repo
            .update(id, patch)
            .await
            .ok_or(AppError::ResourceNotFound { resource: Resource::Sale, id })?;

        tracing::info!(sale_id = id, status = ?sale.status, "Venda atualizada");
        Ok(sale)
    }

    pub async fn delete_sale(&self, id: i32) -> Result<(), AppError> {
        if !self.repo.delete(id).await {
            return Err(AppError::ResourceNotFound { resource: Resource::Sale, id });
        }
        tracing::info!(sale_id = id, "Venda excluída");
        Ok(())
    }

    // =========================================================================
    //  RELATÓRIO DE VENDAS
    // =========================================================================

    /// Cada venda com o título do imóvel e o nome do cliente.
    /// Referência solta vira o texto "não encontrado" no idioma pedido.
    pub async fn get_report(&self, lang: &str) -> SalesReport {
        let snapshot = self.repo.snapshot_with_references().await;
        let summary = summarize(&snapshot);

        let property_fallback = self.i18n_store.translate(lang, "report.property_not_found");
        let lead_fallback = self.i18n_store.translate(lang, "report.lead_not_found");

        let entries = snapshot
            .rows
            .into_iter()
            .map(|row| SaleReportEntry {
                references_resolved: row.property_title.is_some() && row.lead_name.is_some(),
                property_title: row.property_title.unwrap_or_else(|| property_fallback.clone()),
                lead_name: row.lead_name.unwrap_or_else(|| lead_fallback.clone()),
                sale: row.sale,
            })
            .collect();

        SalesReport { summary, entries }
    }
}

fn summarize(snapshot: &SalesSnapshot) -> SalesSummary {
    let completed: Vec<&Sale> = snapshot
        .rows
        .iter()
        .map(|row| &row.sale)
        .filter(|s| s.is_completed())
        .collect();
    let completed_sales = completed.len();

    // Soma travada em Decimal::MAX
    let total_value = completed
        .iter()
        .fold(Decimal::ZERO, |acc, s| acc.checked_add(s.price()).unwrap_or(Decimal::MAX));

    let average_ticket = if completed_sales > 0 {
        (total_value / Decimal::from(completed_sales)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    let conversion_rate = if snapshot.lead_count > 0 {
        (Decimal::from(completed_sales) / Decimal::from(snapshot.lead_count) * Decimal::ONE_HUNDRED)
            .round_dp(2)
    } else {
        Decimal::ZERO
    };

    SalesSummary { completed_sales, total_value, average_ticket, conversion_rate }
}
