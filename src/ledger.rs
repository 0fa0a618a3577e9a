//! Stock and order-total bookkeeping.
//!
//! Each operation runs in its own transaction. Every early return drops the
//! transaction, which rolls back whatever was written so far, so after any
//! call every material has `available_quantity >= 0` and every order's
//! `total_price` equals the sum of its line totals.
//!
//! Stock is taken with a guarded relative update
//! (`available_quantity - n WHERE available_quantity >= n`) on top of the
//! row lock, so two concurrent callers cannot both pass the stock check.

use chrono::Utc;
use sea_orm::sea_query::{Expr, LockType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity::{
        materials::{Column as MaterialCol, Entity as Materials, Model as MaterialModel},
        order_items::{ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
    },
    error::{AppError, AppResult},
    models::{Material, Order, OrderItem, normalize_name},
    money,
};

/// Outcome of [`InventoryLedger::add_item`].
#[derive(Debug, Clone)]
pub struct AddedItem {
    pub item: OrderItem,
    pub material: Material,
    pub order: Order,
}

/// Outcome of [`InventoryLedger::remove_item`]. `order` is the order the item
/// belonged to, resolved before the item was deleted.
#[derive(Debug, Clone)]
pub struct RemovedItem {
    pub item: OrderItem,
    pub material: Material,
    pub order: Order,
}

/// Outcome of [`InventoryLedger::return_order`]: the deleted order and the
/// items whose stock went back to their materials.
#[derive(Debug, Clone)]
pub struct ReturnedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone)]
pub struct InventoryLedger {
    db: DatabaseConnection,
}

impl InventoryLedger {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_order(&self, customer_name: &str) -> AppResult<Order> {
        let customer_name = normalize_name("Customer name", customer_name)?;

        let txn = self.db.begin().await?;
        let order = OrderActive {
            id: Set(Uuid::new_v4()),
            customer_name: Set(customer_name),
            total_price: Set(0),
            created_at: Set(Utc::now().into()),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        tracing::info!(order_id = %order.id, "order created");
        Ok(order.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_item(
        &self,
        order_id: Uuid,
        material_id: Uuid,
        quantity: i32,
    ) -> AppResult<AddedItem> {
        if quantity <= 0 {
            return Err(AppError::Validation(
                "Quantity must be a positive integer".into(),
            ));
        }

        let txn = self.db.begin().await?;

        let order = Orders::find_by_id(order_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Order"))?;
        let material = Materials::find_by_id(material_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Material"))?;

        if quantity > material.available_quantity {
            return Err(AppError::InsufficientStock {
                available: material.available_quantity,
            });
        }

        let unit_price = material.rental_price;
        let line_total = money::line_total(quantity, unit_price)?;

        let taken = Materials::update_many()
            .col_expr(
                MaterialCol::AvailableQuantity,
                Expr::col(MaterialCol::AvailableQuantity).sub(quantity),
            )
            .filter(MaterialCol::Id.eq(material.id))
            .filter(MaterialCol::AvailableQuantity.gte(quantity))
            .exec(&txn)
            .await?;
        if taken.rows_affected == 0 {
            // another writer took the stock after our read
            let current = find_material(&txn, material.id).await?;
            return Err(AppError::InsufficientStock {
                available: current.available_quantity,
            });
        }

        let item = OrderItemActive {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.id),
            material_id: Set(material.id),
            quantity: Set(quantity),
            unit_price: Set(unit_price),
        }
        .insert(&txn)
        .await?;

        adjust_total(&txn, order.id, line_total).await?;

        let material = find_material(&txn, material.id).await?;
        let order = find_order(&txn, order.id).await?;
        txn.commit().await?;

        tracing::info!(
            item_id = %item.id,
            remaining = material.available_quantity,
            total = order.total_price,
            "item added to order"
        );
        Ok(AddedItem {
            item: item.into(),
            material: material.into(),
            order: order.into(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_item(&self, item_id: Uuid) -> AppResult<RemovedItem> {
        let txn = self.db.begin().await?;

        let item = OrderItems::find_by_id(item_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Order item"))?;
        let line_total = money::line_total(item.quantity, item.unit_price)?;

        // orders before materials, same lock order as add_item
        adjust_total(&txn, item.order_id, -line_total).await?;
        restock(&txn, item.material_id, item.quantity).await?;
        OrderItems::delete_by_id(item.id).exec(&txn).await?;

        let material = find_material(&txn, item.material_id).await?;
        let order = find_order(&txn, item.order_id).await?;
        txn.commit().await?;

        tracing::info!(
            order_id = %order.id,
            restored = item.quantity,
            total = order.total_price,
            "item removed from order"
        );
        Ok(RemovedItem {
            item: item.into(),
            material: material.into(),
            order: order.into(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn return_order(&self, order_id: Uuid) -> AppResult<ReturnedOrder> {
        let txn = self.db.begin().await?;

        let order = Orders::find_by_id(order_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Order"))?;
        let mut items = OrderItems::find()
            .filter(OrderItemCol::OrderId.eq(order.id))
            .all(&txn)
            .await?;
        // materials are always locked in id order
        items.sort_by_key(|item| item.material_id);

        for item in &items {
            restock(&txn, item.material_id, item.quantity).await?;
        }

        // also cascaded by the foreign key where it is enforced
        OrderItems::delete_many()
            .filter(OrderItemCol::OrderId.eq(order.id))
            .exec(&txn)
            .await?;
        Orders::delete_by_id(order.id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(order_id = %order.id, items = items.len(), "order returned");
        Ok(ReturnedOrder {
            order: order.into(),
            items: items.into_iter().map(Into::into).collect(),
        })
    }
}

async fn find_material(txn: &DatabaseTransaction, id: Uuid) -> AppResult<MaterialModel> {
    Materials::find_by_id(id)
        .one(txn)
        .await?
        .ok_or(AppError::NotFound("Material"))
}

async fn find_order(txn: &DatabaseTransaction, id: Uuid) -> AppResult<OrderModel> {
    Orders::find_by_id(id)
        .one(txn)
        .await?
        .ok_or(AppError::NotFound("Order"))
}

async fn restock(txn: &DatabaseTransaction, material_id: Uuid, quantity: i32) -> AppResult<()> {
    let result = Materials::update_many()
        .col_expr(
            MaterialCol::AvailableQuantity,
            Expr::col(MaterialCol::AvailableQuantity).add(quantity),
        )
        .filter(MaterialCol::Id.eq(material_id))
        .exec(txn)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Material"));
    }
    Ok(())
}

async fn adjust_total(txn: &DatabaseTransaction, order_id: Uuid, delta: i64) -> AppResult<()> {
    let result = Orders::update_many()
        .col_expr(OrderCol::TotalPrice, Expr::col(OrderCol::TotalPrice).add(delta))
        .filter(OrderCol::Id.eq(order_id))
        .exec(txn)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Order"));
    }
    Ok(())
}
