pub mod category;
pub mod inventory;
pub mod product;
pub mod revenue;
pub mod sale;
