// src/models/message.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::common::validation::{check_required, check_required_text, into_result, validate_required_text};
use crate::models::patch::Patch;

/// Quem escreveu: o corretor (`user`) ou o cliente (`client`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Client,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    File,
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub lead_id: i32,
    #[schema(example = "Olá! O apartamento ainda está disponível?")]
    pub content: String,
    pub sender: Sender,
    /// Definido pelo servidor na criação
    pub timestamp: DateTime<Utc>,
    pub message_type: MessageType,
}

/// Não existe campo `timestamp` aqui: o servidor sempre define o horário.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub lead_id: i32,
    #[validate(custom(function = "validate_required_text"))]
    pub content: String,
    pub sender: Sender,
    pub message_type: Option<MessageType>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessage {
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub lead_id: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub content: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<Sender>)]
    pub sender: Patch<Sender>,
    #[serde(default)]
    #[schema(value_type = Option<MessageType>)]
    pub message_type: Patch<MessageType>,
}

impl Validate for UpdateMessage {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "lead_id", &self.lead_id);
        check_required_text(&mut errors, "content", &self.content);
        check_required(&mut errors, "sender", &self.sender);
        into_result(errors)
    }
}

/// Filtro do `GET /api/messages?leadId=`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MessageQuery {
    pub lead_id: Option<i32>,
}

impl Message {
    pub fn from_new(id: i32, new: NewMessage, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            lead_id: new.lead_id,
            content: new.content,
            sender: new.sender,
            timestamp,
            message_type: new.message_type.unwrap_or_default(),
        }
    }

    /// O `timestamp` nunca é alterado.
    pub fn apply(&mut self, patch: UpdateMessage) {
        patch.lead_id.apply_required(&mut self.lead_id);
        patch.content.apply_required(&mut self.content);
        patch.sender.apply_required(&mut self.sender);
        patch.message_type.apply_or_default(&mut self.message_type);
    }
}
