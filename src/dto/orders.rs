use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Material, Order, OrderItem};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub material_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// State of the item, its material and its order right after an add or a removal.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemChange {
    pub item: OrderItem,
    pub material: Material,
    pub order: Order,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderReturned {
    pub order_id: Uuid,
    pub items_returned: usize,
}
