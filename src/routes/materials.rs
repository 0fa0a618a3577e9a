use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::materials::{CreateMaterialRequest, MaterialList, UpdateMaterialRequest},
    error::AppResult,
    models::Material,
    response::ApiResponse,
    routes::params::MaterialQuery,
    services::material_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_materials).post(create_material))
        .route("/{id}", get(get_material).put(update_material))
}

#[utoipa::path(
    get,
    path = "/api/materials",
    params(MaterialQuery),
    responses(
        (status = 200, description = "List materials", body = ApiResponse<MaterialList>)
    ),
    tag = "Materials"
)]
pub async fn list_materials(
    State(state): State<AppState>,
    Query(query): Query<MaterialQuery>,
) -> AppResult<Json<ApiResponse<MaterialList>>> {
    let resp = material_service::list_materials(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/materials/{id}",
    params(
        ("id" = Uuid, Path, description = "Material ID")
    ),
    responses(
        (status = 200, description = "Get material", body = ApiResponse<Material>),
        (status = 404, description = "Material not found"),
    ),
    tag = "Materials"
)]
pub async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Material>>> {
    let resp = material_service::get_material(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/materials",
    request_body = CreateMaterialRequest,
    responses(
        (status = 201, description = "Create material", body = ApiResponse<Material>),
        (status = 400, description = "Invalid name, quantity or price"),
    ),
    tag = "Materials"
)]
pub async fn create_material(
    State(state): State<AppState>,
    Json(payload): Json<CreateMaterialRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Material>>)> {
    let resp = material_service::create_material(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/materials/{id}",
    params(
        ("id" = Uuid, Path, description = "Material ID")
    ),
    request_body = UpdateMaterialRequest,
    responses(
        (status = 200, description = "Updated material", body = ApiResponse<Material>),
        (status = 400, description = "Invalid name, quantity or price"),
        (status = 404, description = "Material not found"),
    ),
    tag = "Materials"
)]
pub async fn update_material(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMaterialRequest>,
) -> AppResult<Json<ApiResponse<Material>>> {
    let resp = material_service::update_material(&state, id, payload).await?;
    Ok(Json(resp))
}
