use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    entity::{
        materials::Model as MaterialModel, order_items::Model as OrderItemModel,
        orders::Model as OrderModel,
    },
    error::{AppError, AppResult},
    money,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    pub available_quantity: i32,
    pub rental_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub material_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl From<MaterialModel> for Material {
    fn from(model: MaterialModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            available_quantity: model.available_quantity,
            rental_price: money::to_decimal(model.rental_price),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<OrderModel> for Order {
    fn from(model: OrderModel) -> Self {
        Self {
            id: model.id,
            customer_name: model.customer_name,
            total_price: money::to_decimal(model.total_price),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<OrderItemModel> for OrderItem {
    fn from(model: OrderItemModel) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            material_id: model.material_id,
            quantity: model.quantity,
            unit_price: money::to_decimal(model.unit_price),
        }
    }
}

pub const NAME_MAX_LEN: usize = 100;

/// Trims `value` and checks it is a usable name for `field`.
pub fn normalize_name(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(value.to_string())
}
