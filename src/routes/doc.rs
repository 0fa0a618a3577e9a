use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        materials::{CreateMaterialRequest, MaterialList, UpdateMaterialRequest},
        orders::{
            AddItemRequest, CreateOrderRequest, ItemChange, OrderList, OrderReturned,
            OrderWithItems,
        },
        stats::{MostRented, Stats},
    },
    models::{Material, Order, OrderItem},
    notify::Severity,
    response::{ApiResponse, Meta},
    routes::{health, materials, orders, params, stats},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        materials::list_materials,
        materials::get_material,
        materials::create_material,
        materials::update_material,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::add_item,
        orders::return_order,
        orders::remove_item,
        stats::get_stats
    ),
    components(
        schemas(
            Material,
            Order,
            OrderItem,
            CreateMaterialRequest,
            UpdateMaterialRequest,
            MaterialList,
            CreateOrderRequest,
            AddItemRequest,
            ItemChange,
            OrderList,
            OrderReturned,
            OrderWithItems,
            Stats,
            MostRented,
            Severity,
            params::Pagination,
            params::SortOrder,
            Meta,
            ApiResponse<Material>,
            ApiResponse<MaterialList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<OrderWithItems>,
            ApiResponse<ItemChange>,
            ApiResponse<OrderReturned>,
            ApiResponse<Stats>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Materials", description = "Rentable material endpoints"),
        (name = "Orders", description = "Order and order item endpoints"),
        (name = "Stats", description = "Statistics endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_ledger_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/orders/{id}/items",
            "/api/orders/{id}/return",
            "/api/order-items/{id}",
            "/api/stats",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
