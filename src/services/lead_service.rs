// src/services/lead_service.rs

use crate::{
    common::error::{AppError, Resource},
    db::LeadRepository,
    models::lead::{Lead, NewLead, UpdateLead},
};

#[derive(Clone)]
pub struct LeadService {
    repo: LeadRepository,
}

impl LeadService {
    pub fn new(repo: LeadRepository) -> Self {
        Self { repo }
    }

    pub async fn list_leads(&self) -> Vec<Lead> {
        self.repo.list().await
    }

    pub async fn get_lead(&self, id: i32) -> Result<Lead, AppError> {
        self.repo
            .get(id)
            .await
            .ok_or(AppError::ResourceNotFound { resource: Resource::Lead, id })
    }

    pub async fn create_lead(&self, new: NewLead) -> Lead {
        let lead = self.repo.create(new).await;
        tracing::info!(lead_id = lead.id, origin = %lead.origin, "Lead criado");
        lead
    }

    pub async fn update_lead(&self, id: i32, patch: UpdateLead) -> Result<Lead, AppError> {
        let lead = self
            .repo
            .update(id, patch)
            .await
            .ok_or(AppError::ResourceNotFound { resource: Resource::Lead, id })?;

        tracing::info!(lead_id = id, status = ?lead.status, "Lead atualizado");
        Ok(lead)
    }

    /// Vendas e mensagens do lead continuam existindo (sem cascata).
    pub async fn delete_lead(&self, id: i32) -> Result<(), AppError> {
        if !self.repo.delete(id).await {
            return Err(AppError::ResourceNotFound { resource: Resource::Lead, id });
        }
        tracing::info!(lead_id = id, "Lead excluído");
        Ok(())
    }
}
