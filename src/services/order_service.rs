use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    dto::orders::{
        AddItemRequest, CreateOrderRequest, ItemChange, OrderList, OrderWithItems, OrderReturned,
    },
    entity::{
        order_items::{Column as OrderItemCol, Entity as OrderItems},
        orders::{Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    notify::report,
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    state::AppState,
};

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => Orders::find().order_by_asc(OrderCol::CreatedAt),
        SortOrder::Desc => Orders::find().order_by_desc(OrderCol::CreatedAt),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Ok", OrderList { items: orders }, Some(meta)))
}

pub async fn get_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<OrderWithItems>> {
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();

    Ok(ApiResponse::success(
        "OK",
        OrderWithItems {
            order: order.into(),
            items,
        },
        Some(Meta::empty()),
    ))
}

pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let result = state.ledger().create_order(&payload.customer_name).await;
    let (order, message) = report(
        state.notifier.as_ref(),
        result,
        |_| "Order created".to_string(),
        "Error while creating the order",
    )?;
    Ok(ApiResponse::success(message, order, Some(Meta::empty())))
}

pub async fn add_item(
    state: &AppState,
    order_id: Uuid,
    payload: AddItemRequest,
) -> AppResult<ApiResponse<ItemChange>> {
    let result = state
        .ledger()
        .add_item(order_id, payload.material_id, payload.quantity)
        .await;
    let (added, message) = report(
        state.notifier.as_ref(),
        result,
        |added| {
            format!(
                "{}x {} added to the order",
                added.item.quantity, added.material.name
            )
        },
        "Error while adding to the order",
    )?;
    Ok(ApiResponse::success(
        message,
        ItemChange {
            item: added.item,
            material: added.material,
            order: added.order,
        },
        Some(Meta::empty()),
    ))
}

pub async fn remove_item(state: &AppState, item_id: Uuid) -> AppResult<ApiResponse<ItemChange>> {
    let result = state.ledger().remove_item(item_id).await;
    let (removed, message) = report(
        state.notifier.as_ref(),
        result,
        |removed| {
            format!(
                "{}x {} removed from the order",
                removed.item.quantity, removed.material.name
            )
        },
        "Error while removing the item",
    )?;
    Ok(ApiResponse::success(
        message,
        ItemChange {
            item: removed.item,
            material: removed.material,
            order: removed.order,
        },
        Some(Meta::empty()),
    ))
}

pub async fn return_order(
    state: &AppState,
    order_id: Uuid,
) -> AppResult<ApiResponse<OrderReturned>> {
    let result = state.ledger().return_order(order_id).await;
    let (returned, message) = report(
        state.notifier.as_ref(),
        result,
        |_| "Order returned".to_string(),
        "Error while returning the order",
    )?;
    Ok(ApiResponse::success(
        message,
        OrderReturned {
            order_id: returned.order.id,
            items_returned: returned.items.len(),
        },
        Some(Meta::empty()),
    ))
}
