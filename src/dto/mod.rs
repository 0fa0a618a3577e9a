pub mod materials;
pub mod orders;
pub mod stats;
