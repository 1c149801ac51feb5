use crate::model::Inventory as InventoryModel;
use serde::{Deserialize, Serialize};
use shared::utils::format_datetime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct InventoryResponse {
    pub id: i32,
    pub product_id: i32,
    pub stock_quantity: i32,
    pub last_updated: String,
}

impl From<InventoryModel> for InventoryResponse {
    fn from(value: InventoryModel) -> Self {
        InventoryResponse {
            id: value.inventory_id,
            product_id: value.product_id,
            stock_quantity: value.stock_quantity,
            last_updated: format_datetime(value.last_updated),
        }
    }
}
