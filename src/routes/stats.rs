use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::stats::Stats, error::AppResult, response::ApiResponse, services::stats_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_stats))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Inventory and revenue statistics", body = ApiResponse<Stats>)
    ),
    tag = "Stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Stats>>> {
    let resp = stats_service::get_stats(&state).await?;
    Ok(Json(resp))
}
