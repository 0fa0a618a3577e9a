pub mod material_service;
pub mod order_service;
pub mod stats_service;
