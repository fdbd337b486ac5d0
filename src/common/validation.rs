// src/common/validation.rs

use std::str::FromStr;

use rust_decimal::Decimal;
use validator::{ValidateEmail, ValidationError, ValidationErrors};

use crate::models::patch::Patch;

// ---
// Validações customizadas usadas pelo `#[validate(custom(...))]`
// ---

/// Valores monetários trafegam como texto ("350000.00").
/// Texto vazio é aceito: o formulário manda "" quando o campo não foi preenchido.
pub fn validate_decimal(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    let parsed = Decimal::from_str(value).map_err(|_| {
        let mut err = ValidationError::new("invalid_decimal");
        err.message = Some("O valor deve ser um número decimal (ex: 350000.00).".into());
        err
    })?;

    if parsed.is_sign_negative() {
        let mut err = ValidationError::new("negative_value");
        err.add_param("min".into(), &0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

/// Campo obrigatório no cadastro: só espaços conta como vazio.
pub fn validate_required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required_error());
    }
    Ok(())
}

/// Valor monetário obrigatório (ex: salePrice): não pode vir em branco.
pub fn validate_required_decimal(value: &str) -> Result<(), ValidationError> {
    validate_required_text(value)?;
    validate_decimal(value)
}

/// E-mail é opcional no cadastro de lead; só validamos quando veio preenchido.
pub fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        return Ok(());
    }
    let mut err = ValidationError::new("invalid_email");
    err.message = Some("O e-mail fornecido é inválido.".into());
    Err(err)
}

// ---
// Helpers para os payloads de atualização parcial (Patch<T>)
// ---

fn required_error() -> ValidationError {
    let mut err = ValidationError::new("required");
    err.message = Some("O campo é obrigatório.".into());
    err
}

/// Campo obrigatório não pode ser limpo numa atualização.
pub fn check_required_text(errors: &mut ValidationErrors, field: &'static str, value: &Patch<String>) {
    match value {
        Patch::Null => errors.add(field, required_error()),
        Patch::Value(v) if v.trim().is_empty() => errors.add(field, required_error()),
        _ => {}
    }
}

/// Campo obrigatório sem texto (ids, datas): só o `null` é proibido.
pub fn check_required<T>(errors: &mut ValidationErrors, field: &'static str, value: &Patch<T>) {
    if let Patch::Null = value {
        errors.add(field, required_error());
    }
}

pub fn check_decimal(errors: &mut ValidationErrors, field: &'static str, value: &Patch<String>) {
    if let Some(v) = value.as_value() {
        if let Err(e) = validate_decimal(v) {
            errors.add(field, e);
        }
    }
}

/// Decimal obrigatório (ex: salePrice): precisa estar presente e ser válido.
pub fn check_required_decimal(errors: &mut ValidationErrors, field: &'static str, value: &Patch<String>) {
    check_required_text(errors, field, value);
    check_decimal(errors, field, value);
}

pub fn check_email(errors: &mut ValidationErrors, field: &'static str, value: &Patch<String>) {
    if let Some(v) = value.as_value() {
        if let Err(e) = validate_optional_email(v) {
            errors.add(field, e);
        }
    }
}

pub fn check_not_negative(errors: &mut ValidationErrors, field: &'static str, value: &Patch<i32>) {
    if let Some(v) = value.as_value() {
        if *v < 0 {
            let mut err = ValidationError::new("range");
            err.add_param("min".into(), &0);
            err.message = Some("O valor não pode ser negativo.".into());
            errors.add(field, err);
        }
    }
}

/// Fecha a validação manual no mesmo formato do `#[derive(Validate)]`.
pub fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.errors().is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_accepts_text_amounts_and_blank() {
        assert!(validate_decimal("350000.00").is_ok());
        assert!(validate_decimal("1200").is_ok());
        assert!(validate_decimal("").is_ok());
    }

    #[test]
    fn decimal_rejects_garbage_and_negatives() {
        assert_eq!(validate_decimal("R$ 10").unwrap_err().code, "invalid_decimal");
        assert_eq!(validate_decimal("-5").unwrap_err().code, "negative_value");
    }

    #[test]
    fn required_values_reject_whitespace() {
        assert_eq!(validate_required_text("   ").unwrap_err().code, "required");
        assert!(validate_required_text(" Ana ").is_ok());

        assert_eq!(validate_required_decimal("   ").unwrap_err().code, "required");
        assert_eq!(validate_required_decimal("abc").unwrap_err().code, "invalid_decimal");
        assert!(validate_required_decimal("650000.00").is_ok());
    }

    #[test]
    fn optional_email_skips_blank() {
        assert!(validate_optional_email("").is_ok());
        assert!(validate_optional_email("ana@exemplo.com").is_ok());
        assert!(validate_optional_email("ana@").is_err());
    }

    #[test]
    fn required_text_cannot_be_cleared() {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "name", &Patch::Null);
        check_required_text(&mut errors, "phone", &Patch::Value(" ".to_string()));
        check_required_text(&mut errors, "origin", &Patch::Missing);

        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("phone"));
        assert!(!fields.contains_key("origin"));
    }
}
