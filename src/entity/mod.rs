pub mod materials;
pub mod order_items;
pub mod orders;

pub use materials::Entity as Materials;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
