use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Material;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMaterialRequest {
    pub name: String,
    pub available_quantity: i32,
    #[schema(value_type = String, example = "5.00")]
    pub rental_price: Decimal,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMaterialRequest {
    pub name: Option<String>,
    pub available_quantity: Option<i32>,
    #[schema(value_type = Option<String>, example = "5.00")]
    pub rental_price: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MaterialList {
    pub items: Vec<Material>,
}
