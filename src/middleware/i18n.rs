// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::config::AppState;

// Extrator de idioma: primeiro idioma do Accept-Language que tenha catálogo,
// senão o padrão configurado ("pt").
#[derive(Debug, Clone)]
pub struct Locale(pub String);

impl FromRequestParts<AppState> for Locale {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                // Já vem ordenado pelo peso (q=...)
                accept_language::parse(header_str)
                    .into_iter()
                    .map(|tag| {
                        // "pt-BR" -> "pt"
                        tag.split('-').next().unwrap_or(&tag).to_lowercase()
                    })
                    .find(|lang| state.i18n_store.supports(lang))
            })
            .unwrap_or_else(|| state.default_locale.clone());

        Ok(Locale(lang))
    }
}
