// src/models/lead.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::common::validation::{
    check_decimal, check_email, check_not_negative, check_required_text, into_result,
    validate_decimal, validate_optional_email, validate_required_text,
};
use crate::models::patch::{non_empty, Patch};

// --- ENUMS ---

/// Etapa do funil: novo -> em_contato -> interessado -> arquivado
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    Novo,
    EmContato,
    Interessado,
    Arquivado,
}

// --- LEAD (o registro guardado) ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Ana Silva")]
    pub name: String,
    #[schema(example = "11999998888")]
    pub phone: String,
    #[schema(example = "Site Institucional")]
    pub origin: String,

    pub email: Option<String>,
    pub status: LeadStatus,

    #[schema(example = "CLT")]
    pub professional_type: Option<String>,
    #[schema(example = "Casado")]
    pub marital_status: Option<String>,

    // Valores monetários sempre como texto
    #[schema(example = "8500.00")]
    pub gross_income: Option<String>,
    pub down_payment: Option<String>,

    #[schema(example = json!(["Centro", "Zona Sul"]))]
    pub interest_regions: Vec<String>,
    /// Ids de imóveis. Não há checagem de existência.
    pub interested_properties: Vec<i32>,
    pub documents: Vec<String>,

    pub preferred_rooms: Option<i32>,
    pub preferred_bathrooms: Option<i32>,
    pub preferred_garages: Option<i32>,
    pub preferred_amenities: Vec<String>,

    pub has_dependents: bool,
    pub dependents: Vec<String>,
}

// --- CRIAÇÃO ---

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[validate(custom(function = "validate_required_text"))]
    #[schema(example = "Ana Silva")]
    pub name: String,

    #[validate(custom(function = "validate_required_text"))]
    #[schema(example = "11999998888")]
    pub phone: String,

    #[validate(custom(function = "validate_required_text"))]
    #[schema(example = "Site Institucional")]
    pub origin: String,

    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    pub status: Option<LeadStatus>,
    pub professional_type: Option<String>,
    pub marital_status: Option<String>,

    #[validate(custom(function = "validate_decimal"))]
    pub gross_income: Option<String>,
    #[validate(custom(function = "validate_decimal"))]
    pub down_payment: Option<String>,

    pub interest_regions: Option<Vec<String>>,
    pub interested_properties: Option<Vec<i32>>,
    pub documents: Option<Vec<String>>,

    #[validate(range(min = 0, code = "range"))]
    pub preferred_rooms: Option<i32>,
    #[validate(range(min = 0, code = "range"))]
    pub preferred_bathrooms: Option<i32>,
    #[validate(range(min = 0, code = "range"))]
    pub preferred_garages: Option<i32>,
    pub preferred_amenities: Option<Vec<String>>,

    pub has_dependents: Option<bool>,
    pub dependents: Option<Vec<String>>,
}

// --- ATUALIZAÇÃO PARCIAL ---

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLead {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub phone: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub origin: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<LeadStatus>)]
    pub status: Patch<LeadStatus>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub professional_type: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub marital_status: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub gross_income: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub down_payment: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub interest_regions: Patch<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<i32>>)]
    pub interested_properties: Patch<Vec<i32>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub documents: Patch<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub preferred_rooms: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub preferred_bathrooms: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub preferred_garages: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub preferred_amenities: Patch<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub has_dependents: Patch<bool>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub dependents: Patch<Vec<String>>,
}

impl Validate for UpdateLead {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "name", &self.name);
        check_required_text(&mut errors, "phone", &self.phone);
        check_required_text(&mut errors, "origin", &self.origin);
        check_email(&mut errors, "email", &self.email);
        check_decimal(&mut errors, "gross_income", &self.gross_income);
        check_decimal(&mut errors, "down_payment", &self.down_payment);
        check_not_negative(&mut errors, "preferred_rooms", &self.preferred_rooms);
        check_not_negative(&mut errors, "preferred_bathrooms", &self.preferred_bathrooms);
        check_not_negative(&mut errors, "preferred_garages", &self.preferred_garages);
        into_result(errors)
    }
}

impl Lead {
    /// Tabela de padrões do lead: tudo que não veio ganha um valor definido.
    pub fn from_new(id: i32, new: NewLead) -> Self {
        Self {
            id,
            name: new.name,
            phone: new.phone,
            origin: new.origin,
            email: non_empty(new.email),
            status: new.status.unwrap_or_default(),
            professional_type: non_empty(new.professional_type),
            marital_status: non_empty(new.marital_status),
            gross_income: non_empty(new.gross_income),
            down_payment: non_empty(new.down_payment),
            interest_regions: new.interest_regions.unwrap_or_default(),
            interested_properties: new.interested_properties.unwrap_or_default(),
            documents: new.documents.unwrap_or_default(),
            preferred_rooms: new.preferred_rooms,
            preferred_bathrooms: new.preferred_bathrooms,
            preferred_garages: new.preferred_garages,
            preferred_amenities: new.preferred_amenities.unwrap_or_default(),
            has_dependents: new.has_dependents.unwrap_or(false),
            dependents: new.dependents.unwrap_or_default(),
        }
    }

    /// Sobrepõe apenas as chaves enviadas. O id nunca muda.
    pub fn apply(&mut self, patch: UpdateLead) {
        patch.name.apply_required(&mut self.name);
        patch.phone.apply_required(&mut self.phone);
        patch.origin.apply_required(&mut self.origin);
        patch.email.apply_text(&mut self.email);
        patch.status.apply_or_default(&mut self.status);
        patch.professional_type.apply_text(&mut self.professional_type);
        patch.marital_status.apply_text(&mut self.marital_status);
        patch.gross_income.apply_text(&mut self.gross_income);
        patch.down_payment.apply_text(&mut self.down_payment);
        patch.interest_regions.apply_or_default(&mut self.interest_regions);
        patch.interested_properties.apply_or_default(&mut self.interested_properties);
        patch.documents.apply_or_default(&mut self.documents);
        patch.preferred_rooms.apply_to(&mut self.preferred_rooms);
        patch.preferred_bathrooms.apply_to(&mut self.preferred_bathrooms);
        patch.preferred_garages.apply_to(&mut self.preferred_garages);
        patch.preferred_amenities.apply_or_default(&mut self.preferred_amenities);
        patch.has_dependents.apply_or_default(&mut self.has_dependents);
        patch.dependents.apply_or_default(&mut self.dependents);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ana() -> NewLead {
        NewLead {
            name: "Ana Silva".to_string(),
            phone: "11999998888".to_string(),
            origin: "Site Institucional".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn omitted_fields_get_their_defaults() {
        let lead = Lead::from_new(1, ana());

        assert_eq!(lead.status, LeadStatus::Novo);
        assert!(lead.interest_regions.is_empty());
        assert!(lead.interested_properties.is_empty());
        assert_eq!(lead.email, None);
        assert!(!lead.has_dependents);
    }

    #[test]
    fn blank_text_from_the_form_is_stored_as_null() {
        let mut new = ana();
        new.email = Some(String::new());
        new.gross_income = Some("  ".to_string());

        let lead = Lead::from_new(1, new);
        assert_eq!(lead.email, None);
        assert_eq!(lead.gross_income, None);
    }

    #[test]
    fn status_serializes_in_snake_case() {
        let lead = Lead::from_new(7, NewLead { status: Some(LeadStatus::EmContato), ..ana() });
        let value = serde_json::to_value(&lead).unwrap();

        assert_eq!(value["status"], "em_contato");
        assert_eq!(value["interestRegions"], json!([]));
        assert_eq!(value["hasDependents"], false);
    }

    #[test]
    fn patch_changes_only_sent_keys() {
        let mut lead = Lead::from_new(1, NewLead { email: Some("ana@exemplo.com".into()), ..ana() });
        let patch: UpdateLead = serde_json::from_value(json!({ "status": "interessado" })).unwrap();

        lead.apply(patch);

        assert_eq!(lead.status, LeadStatus::Interessado);
        assert_eq!(lead.email.as_deref(), Some("ana@exemplo.com"));
        assert_eq!(lead.name, "Ana Silva");
    }

    #[test]
    fn explicit_null_clears_field() {
        let mut lead = Lead::from_new(1, NewLead { email: Some("ana@exemplo.com".into()), ..ana() });
        let patch: UpdateLead = serde_json::from_value(json!({ "email": null, "status": null })).unwrap();

        lead.apply(patch);

        assert_eq!(lead.email, None);
        assert_eq!(lead.status, LeadStatus::Novo);
    }

    #[test]
    fn validation_rejects_blank_required_fields() {
        let new = NewLead { name: String::new(), ..ana() };
        let errors = new.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let patch: UpdateLead = serde_json::from_value(json!({ "phone": null, "grossIncome": "abc" })).unwrap();
        let errors = patch.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
        assert!(errors.field_errors().contains_key("gross_income"));
    }
}
