// src/models/property.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::common::validation::{
    check_decimal, check_not_negative, check_required_decimal, check_required_text, into_result,
    validate_decimal, validate_required_decimal, validate_required_text,
};
use crate::models::patch::{non_empty, Patch};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Disponivel,
    Reservado,
    Vendido,
}

// --- IMÓVEL ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Apartamento 3 quartos na Vila Mariana")]
    pub title: String,
    #[serde(rename = "type")]
    #[schema(example = "Apartamento")]
    pub property_type: String,
    #[schema(example = "AP-0042")]
    pub code: Option<String>,
    pub description: Option<String>,

    #[schema(example = "650000.00")]
    pub sale_price: String,
    pub evaluation_price: Option<String>,
    pub condominium_fee: Option<String>,
    pub iptu: Option<String>,
    pub builder: Option<String>,

    #[schema(example = "Rua Domingos de Morais, 1200 - Vila Mariana, São Paulo/SP")]
    pub address: String,
    // Endereço detalhado (preenchido pelo CEP no formulário)
    #[schema(example = "04010-100")]
    pub zip_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,

    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub garages: Option<i32>,
    pub square_meters: Option<String>,

    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub reference_points: Vec<String>,

    pub status: PropertyStatus,
}

// --- CRIAÇÃO ---

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    #[validate(custom(function = "validate_required_text"))]
    pub title: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_required_text"))]
    #[schema(example = "Apartamento")]
    pub property_type: String,

    pub code: Option<String>,
    pub description: Option<String>,

    #[validate(custom(function = "validate_required_decimal"))]
    #[schema(example = "650000.00")]
    pub sale_price: String,
    #[validate(custom(function = "validate_decimal"))]
    pub evaluation_price: Option<String>,
    #[validate(custom(function = "validate_decimal"))]
    pub condominium_fee: Option<String>,
    #[validate(custom(function = "validate_decimal"))]
    pub iptu: Option<String>,
    pub builder: Option<String>,

    #[validate(custom(function = "validate_required_text"))]
    pub address: String,
    pub zip_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,

    #[validate(range(min = 0, code = "range"))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0, code = "range"))]
    pub bathrooms: Option<i32>,
    #[validate(range(min = 0, code = "range"))]
    pub garages: Option<i32>,
    #[validate(custom(function = "validate_decimal"))]
    pub square_meters: Option<String>,

    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub reference_points: Option<Vec<String>>,

    pub status: Option<PropertyStatus>,
}

// --- ATUALIZAÇÃO PARCIAL ---

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProperty {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default, rename = "type")]
    #[schema(value_type = Option<String>)]
    pub property_type: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub code: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub sale_price: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub evaluation_price: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub condominium_fee: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub iptu: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub builder: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub zip_code: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub street: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub number: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub complement: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub neighborhood: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub city: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub state: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub bedrooms: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub bathrooms: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub garages: Patch<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub square_meters: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub amenities: Patch<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub images: Patch<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub reference_points: Patch<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<PropertyStatus>)]
    pub status: Patch<PropertyStatus>,
}

impl Validate for UpdateProperty {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "title", &self.title);
        check_required_text(&mut errors, "property_type", &self.property_type);
        check_required_text(&mut errors, "address", &self.address);
        check_required_decimal(&mut errors, "sale_price", &self.sale_price);
        check_decimal(&mut errors, "evaluation_price", &self.evaluation_price);
        check_decimal(&mut errors, "condominium_fee", &self.condominium_fee);
        check_decimal(&mut errors, "iptu", &self.iptu);
        check_decimal(&mut errors, "square_meters", &self.square_meters);
        check_not_negative(&mut errors, "bedrooms", &self.bedrooms);
        check_not_negative(&mut errors, "bathrooms", &self.bathrooms);
        check_not_negative(&mut errors, "garages", &self.garages);
        into_result(errors)
    }
}

impl Property {
    pub fn from_new(id: i32, new: NewProperty) -> Self {
        Self {
            id,
            title: new.title,
            property_type: new.property_type,
            code: non_empty(new.code),
            description: non_empty(new.description),
            sale_price: new.sale_price,
            evaluation_price: non_empty(new.evaluation_price),
            condominium_fee: non_empty(new.condominium_fee),
            iptu: non_empty(new.iptu),
            builder: non_empty(new.builder),
            address: new.address,
            zip_code: non_empty(new.zip_code),
            street: non_empty(new.street),
            number: non_empty(new.number),
            complement: non_empty(new.complement),
            neighborhood: non_empty(new.neighborhood),
            city: non_empty(new.city),
            state: non_empty(new.state),
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            garages: new.garages,
            square_meters: non_empty(new.square_meters),
            amenities: new.amenities.unwrap_or_default(),
            images: new.images.unwrap_or_default(),
            reference_points: new.reference_points.unwrap_or_default(),
            status: new.status.unwrap_or_default(),
        }
    }

    pub fn apply(&mut self, patch: UpdateProperty) {
        patch.title.apply_required(&mut self.title);
        patch.property_type.apply_required(&mut self.property_type);
        patch.sale_price.apply_required(&mut self.sale_price);
        patch.address.apply_required(&mut self.address);
        patch.code.apply_text(&mut self.code);
        patch.description.apply_text(&mut self.description);
        patch.evaluation_price.apply_text(&mut self.evaluation_price);
        patch.condominium_fee.apply_text(&mut self.condominium_fee);
        patch.iptu.apply_text(&mut self.iptu);
        patch.builder.apply_text(&mut self.builder);
        patch.zip_code.apply_text(&mut self.zip_code);
        patch.street.apply_text(&mut self.street);
        patch.number.apply_text(&mut self.number);
        patch.complement.apply_text(&mut self.complement);
        patch.neighborhood.apply_text(&mut self.neighborhood);
        patch.city.apply_text(&mut self.city);
        patch.state.apply_text(&mut self.state);
        patch.bedrooms.apply_to(&mut self.bedrooms);
        patch.bathrooms.apply_to(&mut self.bathrooms);
        patch.garages.apply_to(&mut self.garages);
        patch.square_meters.apply_text(&mut self.square_meters);
        patch.amenities.apply_or_default(&mut self.amenities);
        patch.images.apply_or_default(&mut self.images);
        patch.reference_points.apply_or_default(&mut self.reference_points);
        patch.status.apply_or_default(&mut self.status);
    }
}
