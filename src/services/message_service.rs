// src/services/message_service.rs

use crate::{
    common::error::{AppError, Resource},
    db::MessageRepository,
    models::message::{Message, NewMessage, UpdateMessage},
};

#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
}

impl MessageService {
    pub fn new(repo: MessageRepository) -> Self {
        Self { repo }
    }

    /// Sem `lead_id` devolve todas as mensagens.
    pub async fn list_messages(&self, lead_id: Option<i32>) -> Vec<Message> {
        match lead_id {
            Some(lead_id) => self.repo.list_by_lead(lead_id).await,
            None => self.repo.list().await,
        }
    }

    pub async fn get_message(&self, id: i32) -> Result<Message, AppError> {
        self.repo
            .get(id)
            .await
            .ok_or(AppError::ResourceNotFound { resource: Resource::Message, id })
    }

    pub async fn create_message(&self, new: NewMessage) -> Message {
        let message = self.repo.create(new).await;
        tracing::info!(
            message_id = message.id,
            lead_id = message.lead_id,
            sender = ?message.sender,
            "Mensagem registrada"
        );
        message
    }

    pub async fn update_message(&self, id: i32, patch: UpdateMessage) -> Result<Message, AppError> {
        let message = self
            .repo
            .update(id, patch)
            .await
            .ok_or(AppError::ResourceNotFound { resource: Resource::Message, id })?;

        tracing::info!(message_id = id, "Mensagem atualizada");
        Ok(message)
    }

    pub async fn delete_message(&self, id: i32) -> Result<(), AppError> {
        if !self.repo.delete(id).await {
            return Err(AppError::ResourceNotFound { resource: Resource::Message, id });
        }
        tracing::info!(message_id = id, "Mensagem excluída");
        Ok(())
    }
}
