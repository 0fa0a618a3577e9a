use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::orders::{
        AddItemRequest, CreateOrderRequest, ItemChange, OrderList, OrderReturned, OrderWithItems,
    },
    error::AppResult,
    models::Order,
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order))
        .route("/{id}/items", post(add_item))
        .route("/{id}/return", post(return_order))
}

pub fn item_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(remove_item))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "List orders", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Create an empty order", body = ApiResponse<Order>),
        (status = 400, description = "Customer name is required"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let resp = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with its items", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = order_service::get_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/items",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Item added, stock taken", body = ApiResponse<ItemChange>),
        (status = 400, description = "Invalid quantity"),
        (status = 404, description = "Order or material not found"),
        (status = 409, description = "Insufficient stock"),
    ),
    tag = "Orders"
)]
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddItemRequest>,
) -> AppResult<Json<ApiResponse<ItemChange>>> {
    let resp = order_service::add_item(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/return",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order returned and deleted, stock restored", body = ApiResponse<OrderReturned>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn return_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderReturned>>> {
    let resp = order_service::return_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/order-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Order item ID")
    ),
    responses(
        (status = 200, description = "Item removed, stock restored", body = ApiResponse<ItemChange>),
        (status = 404, description = "Order item not found"),
    ),
    tag = "Orders"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ItemChange>>> {
    let resp = order_service::remove_item(&state, id).await?;
    Ok(Json(resp))
}
