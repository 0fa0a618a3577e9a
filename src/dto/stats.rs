use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct Stats {
    pub total_materials: u64,
    pub total_orders: u64,
    #[schema(value_type = String, example = "15.00")]
    pub total_revenue: Decimal,
    pub most_rented: Option<MostRented>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MostRented {
    pub material_id: Uuid,
    pub name: String,
    pub total_rented: i64,
}
