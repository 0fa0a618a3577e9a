use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::materials::{CreateMaterialRequest, MaterialList, UpdateMaterialRequest},
    entity::materials::{ActiveModel, Column, Entity as Materials},
    error::{AppError, AppResult},
    models::{Material, normalize_name},
    money,
    notify::report,
    response::{ApiResponse, Meta},
    routes::params::MaterialQuery,
    state::AppState,
};

pub async fn list_materials(
    state: &AppState,
    query: MaterialQuery,
) -> AppResult<ApiResponse<MaterialList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if query.available.unwrap_or(false) {
        condition = condition.add(Column::AvailableQuantity.gt(0));
    }

    let finder = Materials::find()
        .filter(condition)
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Name);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Material::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Materials", MaterialList { items }, Some(meta)))
}

pub async fn get_material(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Material>> {
    let material = Materials::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Material"))?;
    Ok(ApiResponse::success("Material", material.into(), None))
}

pub async fn create_material(
    state: &AppState,
    payload: CreateMaterialRequest,
) -> AppResult<ApiResponse<Material>> {
    let result = insert_material(state, payload).await;
    let (material, message) = report(
        state.notifier.as_ref(),
        result,
        |m| format!("Material {} added", m.name),
        "Error while adding the material",
    )?;
    Ok(ApiResponse::success(message, material, Some(Meta::empty())))
}

async fn insert_material(state: &AppState, payload: CreateMaterialRequest) -> AppResult<Material> {
    let name = normalize_name("Name", &payload.name)?;
    let available_quantity = checked_quantity(payload.available_quantity)?;
    let rental_price = money::to_cents(payload.rental_price)?;

    let material = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        available_quantity: Set(available_quantity),
        rental_price: Set(rental_price),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(material.into())
}

pub async fn update_material(
    state: &AppState,
    id: Uuid,
    payload: UpdateMaterialRequest,
) -> AppResult<ApiResponse<Material>> {
    let result = apply_material_update(state, id, payload).await;
    let (material, message) = report(
        state.notifier.as_ref(),
        result,
        |m| format!("Material {} updated", m.name),
        "Error while updating the material",
    )?;
    Ok(ApiResponse::success(message, material, Some(Meta::empty())))
}

/// Edits only touch the material row: prices already captured by order
/// items stay as they were.
async fn apply_material_update(
    state: &AppState,
    id: Uuid,
    payload: UpdateMaterialRequest,
) -> AppResult<Material> {
    let existing = Materials::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Material"))?;

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        active.name = Set(normalize_name("Name", &name)?);
    }
    if let Some(quantity) = payload.available_quantity {
        active.available_quantity = Set(checked_quantity(quantity)?);
    }
    if let Some(price) = payload.rental_price {
        active.rental_price = Set(money::to_cents(price)?);
    }

    if !active.is_changed() {
        return Ok(existing.into());
    }
    let material = active.update(&state.orm).await?;
    Ok(material.into())
}

fn checked_quantity(quantity: i32) -> AppResult<i32> {
    if quantity < 0 {
        return Err(AppError::Validation("Quantity must not be negative".into()));
    }
    Ok(quantity)
}
