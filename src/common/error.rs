use std::collections::HashMap;
use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

/// As quatro coleções do CRM, usadas nas mensagens de "não encontrado".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Lead,
    Property,
    Sale,
    Message,
}

impl Resource {
    fn not_found_key(self) -> &'static str {
        match self {
            Resource::Lead => "error.not_found.lead",
            Resource::Property => "error.not_found.property",
            Resource::Sale => "error.not_found.sale",
            Resource::Message => "error.not_found.message",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Lead => "Lead",
            Resource::Property => "Imóvel",
            Resource::Sale => "Venda",
            Resource::Message => "Mensagem",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{resource} {id} não encontrado")]
    ResourceNotFound { resource: Resource, id: i32 },
}

/// O erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

// Chaves cujo nome no JSON não é o camelCase do campo Rust
const FIELD_ALIASES: &[(&str, &str)] = &[("property_type", "type")];

/// "gross_income" -> "grossIncome", para bater com o corpo da requisição.
fn json_field_name(field: &str) -> String {
    if let Some((_, alias)) = FIELD_ALIASES.iter().find(|(name, _)| *name == field) {
        return alias.to_string();
    }

    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl AppError {
    pub fn to_api_error(self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        match self {
            AppError::ValidationError(errors) => {
                // Devolvemos CÓDIGOS por campo ("required", "invalid_decimal"...);
                // o frontend escolhe o texto.
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let codes = field_errors.iter().map(|e| e.code.to_string()).collect();
                    details.insert(json_field_name(&field), codes);
                }

                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: i18n.translate(&locale.0, "error.validation"),
                    details: Some(json!(details)),
                }
            }
            AppError::ResourceNotFound { resource, id } => {
                tracing::warn!("{} {} não encontrado", resource, id);
                ApiError {
                    status: StatusCode::NOT_FOUND,
                    message: i18n.translate_with(&locale.0, resource.not_found_key(), &[("id", id.to_string())]),
                    details: None,
                }
            }
        }
    }
}
