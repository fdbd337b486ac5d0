// src/common/i18n.rs

use std::{collections::HashMap, sync::Arc};

use anyhow::{bail, Context};

// Os catálogos vão embutidos no binário: não dependem do diretório de execução.
const CATALOGS: &[(&str, &str)] = &[
    ("pt", include_str!("../../locales/pt.json")),
    ("en", include_str!("../../locales/en.json")),
];

/// Mensagens traduzidas por idioma -> chave.
#[derive(Debug, Clone)]
pub struct I18nStore {
    catalogs: Arc<HashMap<String, HashMap<String, String>>>,
    fallback: String,
}

impl I18nStore {
    /// Carrega todos os catálogos. `fallback` é o idioma usado quando
    /// a chave não existe no idioma pedido.
    pub fn load(fallback: &str) -> anyhow::Result<Self> {
        let mut catalogs = HashMap::new();
        for (lang, raw) in CATALOGS {
            let messages: HashMap<String, String> = serde_json::from_str(raw)
                .with_context(|| format!("Catálogo de mensagens '{lang}' inválido"))?;
            catalogs.insert(lang.to_string(), messages);
        }

        if !catalogs.contains_key(fallback) {
            bail!("Idioma padrão '{fallback}' não tem catálogo de mensagens");
        }

        Ok(Self { catalogs: Arc::new(catalogs), fallback: fallback.to_string() })
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.catalogs.contains_key(lang)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Busca no idioma pedido, depois no padrão; sem tradução devolve a própria chave.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        [lang, self.fallback.as_str()]
            .iter()
            .find_map(|l| self.catalogs.get(*l).and_then(|c| c.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Igual ao `translate`, trocando `{nome}` pelos valores informados.
    pub fn translate_with(&self, lang: &str, key: &str, args: &[(&str, String)]) -> String {
        args.iter().fold(self.translate(lang, key), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_has_the_same_keys() {
        let store = I18nStore::load("pt").unwrap();
        let mut pt: Vec<&String> = store.catalogs["pt"].keys().collect();
        let mut en: Vec<&String> = store.catalogs["en"].keys().collect();
        pt.sort();
        en.sort();
        assert_eq!(pt, en);
    }

    #[test]
    fn unknown_language_falls_back() {
        let store = I18nStore::load("pt").unwrap();
        assert_eq!(store.translate("fr", "report.lead_not_found"), "Cliente não encontrado");
        assert_eq!(store.translate("en", "report.lead_not_found"), "Client not found");
        assert_eq!(store.translate("pt", "chave.inexistente"), "chave.inexistente");
    }

    #[test]
    fn placeholders_are_replaced() {
        let store = I18nStore::load("pt").unwrap();
        let text = store.translate_with("pt", "error.not_found.sale", &[("id", "7".to_string())]);
        assert_eq!(text, "Venda 7 não encontrada.");
    }

    #[test]
    fn fallback_without_catalog_is_an_error() {
        assert!(I18nStore::load("de").is_err());
    }
}
