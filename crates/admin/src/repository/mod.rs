mod category;
mod inventory;
mod product;
mod sale;

pub use self::category::{CategoryCommandRepository, CategoryQueryRepository};
pub use self::inventory::{InventoryCommandRepository, InventoryQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::sale::{SaleCommandRepository, SaleQueryRepository};
