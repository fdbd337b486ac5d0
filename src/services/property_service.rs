// src/services/property_service.rs

use crate::{
    common::error::{AppError, Resource},
    db::PropertyRepository,
    models::property::{NewProperty, Property, UpdateProperty},
};

#[derive(Clone)]
pub struct PropertyService {
    repo: PropertyRepository,
}

impl PropertyService {
    pub fn new(repo: PropertyRepository) -> Self {
        Self { repo }
    }

    pub async fn list_properties(&self) -> Vec<Property> {
        self.repo.list().await
    }

    pub async fn get_property(&self, id: i32) -> Result<Property, AppError> {
        self.repo
            .get(id)
            .await
            .ok_or(AppError::ResourceNotFound { resource: Resource::Property, id })
    }

    pub async fn create_property(&self, new: NewProperty) -> Property {
        let property = self.repo.create(new).await;
        tracing::info!(property_id = property.id, title = %property.title, "Imóvel cadastrado");
        property
    }

    pub async fn update_property(&self, id: i32, patch: UpdateProperty) -> Result<Property, AppError> {
        let property = self
            .repo
            .update(id, patch)
            .await
            .ok_or(AppError::ResourceNotFound { resource: Resource::Property, id })?;

        tracing::info!(property_id = id, status = ?property.status, "Imóvel atualizado");
        Ok(property)
    }

    /// Vendas que apontam para o imóvel ficam com a referência solta.
    pub async fn delete_property(&self, id: i32) -> Result<(), AppError> {
        if !self.repo.delete(id).await {
            return Err(AppError::ResourceNotFound { resource: Resource::Property, id });
        }
        tracing::info!(property_id = id, "Imóvel excluído");
        Ok(())
    }
}
