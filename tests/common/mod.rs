#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use rental_inventory::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        materials::{ActiveModel as MaterialActive, Entity as Materials},
        order_items::{Column as OrderItemCol, Entity as OrderItems},
        orders::Entity as Orders,
    },
    models::{Material, Order, OrderItem},
    notify::RecordingNotifier,
    state::AppState,
};

/// Fresh in-memory database with migrations applied.
pub async fn setup_state() -> anyhow::Result<(AppState, RecordingNotifier)> {
    let orm = create_orm_conn(&AppConfig::in_memory()).await?;
    run_migrations(&orm).await?;

    let notifier = RecordingNotifier::new();
    let state = AppState::new(orm).with_notifier(Arc::new(notifier.clone()));
    Ok((state, notifier))
}

pub async fn seed_material(
    state: &AppState,
    name: &str,
    available_quantity: i32,
    rental_price_cents: i64,
) -> anyhow::Result<Material> {
    let material = MaterialActive {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        available_quantity: Set(available_quantity),
        rental_price: Set(rental_price_cents),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(material.into())
}

pub async fn material(state: &AppState, id: Uuid) -> anyhow::Result<Material> {
    let material = Materials::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| anyhow::anyhow!("material {id} missing"))?;
    Ok(material.into())
}

pub async fn order(state: &AppState, id: Uuid) -> anyhow::Result<Option<Order>> {
    Ok(Orders::find_by_id(id).one(&state.orm).await?.map(Order::from))
}

pub async fn items(state: &AppState, order_id: Uuid) -> anyhow::Result<Vec<OrderItem>> {
    Ok(OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect())
}

/// Checks that the order total equals the sum of its line totals.
pub async fn assert_total_consistent(state: &AppState, order_id: Uuid) -> anyhow::Result<()> {
    let order = order(state, order_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("order {order_id} missing"))?;
    let sum: rust_decimal::Decimal = items(state, order_id)
        .await?
        .iter()
        .map(OrderItem::line_total)
        .sum();
    assert_eq!(order.total_price, sum, "order total drifted from its items");
    Ok(())
}
