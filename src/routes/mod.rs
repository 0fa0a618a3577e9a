use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod materials;
pub mod orders;
pub mod params;
pub mod stats;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/materials", materials::router())
        .nest("/orders", orders::router())
        .nest("/order-items", orders::item_router())
        .nest("/stats", stats::router())
}
