mod category;
mod inventory;
mod product;
mod sale;

pub use self::category::Category;
pub use self::inventory::Inventory;
pub use self::product::Product;
pub use self::sale::Sale;
