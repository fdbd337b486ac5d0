// src/models/patch.rs

use serde::{Deserialize, Deserializer};

/// Campo de uma atualização parcial.
///
/// O JSON distingue três situações e o `Option` comum só enxerga duas:
/// - chave ausente -> `Missing` (o valor atual é mantido)
/// - chave com `null` -> `Null` (o valor é limpo)
/// - chave com valor -> `Value(v)`
///
/// Use sempre junto com `#[serde(default)]`, pois o serde só chama o
/// `Deserialize` quando a chave existe no corpo.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    /// Campo obrigatório: só um valor substitui o atual.
    /// O `null` já foi barrado pela validação, aqui ele é ignorado.
    pub fn apply_required(self, target: &mut T) {
        if let Patch::Value(v) = self {
            *target = v;
        }
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Sobrescreve um campo anulável.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Patch::Missing => {}
            Patch::Null => *target = None,
            Patch::Value(v) => *target = Some(v),
        }
    }

    /// Sobrescreve um campo que nunca fica vazio no registro.
    /// `null` devolve o campo ao seu valor padrão.
    pub fn apply_or_default(self, target: &mut T)
    where
        T: Default,
    {
        match self {
            Patch::Missing => {}
            Patch::Null => *target = T::default(),
            Patch::Value(v) => *target = v,
        }
    }
}

impl Patch<String> {
    /// Igual ao `apply_to`, mas texto vazio conta como `null`
    /// (o formulário manda "" nos campos não preenchidos).
    pub fn apply_text(self, target: &mut Option<String>) {
        match self {
            Patch::Value(v) if v.trim().is_empty() => *target = None,
            other => other.apply_to(target),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

/// Texto opcional na criação: "" e só espaços viram `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        email: Patch<String>,
    }

    #[test]
    fn distinguishes_missing_null_and_value() {
        let missing: Body = serde_json::from_str("{}").unwrap();
        let null: Body = serde_json::from_str(r#"{"email": null}"#).unwrap();
        let value: Body = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();

        assert_eq!(missing.email, Patch::Missing);
        assert_eq!(null.email, Patch::Null);
        assert_eq!(value.email, Patch::Value("a@b.com".to_string()));
    }

    #[test]
    fn apply_keeps_value_when_missing() {
        let mut target = Some("antigo".to_string());
        Patch::<String>::Missing.apply_to(&mut target);
        assert_eq!(target.as_deref(), Some("antigo"));

        Patch::Null.apply_to(&mut target);
        assert_eq!(target, None);
    }

    #[test]
    fn empty_text_clears_field() {
        let mut target = Some("antigo".to_string());
        Patch::Value("  ".to_string()).apply_text(&mut target);
        assert_eq!(target, None);
    }

    #[test]
    fn null_resets_defaulted_field() {
        let mut regions = vec!["Centro".to_string()];
        Patch::Null.apply_or_default(&mut regions);
        assert!(regions.is_empty());
    }

    #[test]
    fn required_field_only_changes_with_a_value() {
        let mut name = "Ana Silva".to_string();

        Patch::Missing.apply_required(&mut name);
        Patch::Null.apply_required(&mut name);
        assert_eq!(name, "Ana Silva");

        Patch::Value("Ana Souza".to_string()).apply_required(&mut name);
        assert_eq!(name, "Ana Souza");
    }
}
