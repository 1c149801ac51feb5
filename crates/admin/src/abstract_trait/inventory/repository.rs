use crate::{domain::requests::inventory::FindAllInventory, model::Inventory as InventoryModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynInventoryQueryRepository = Arc<dyn InventoryQueryRepositoryTrait + Send + Sync>;
pub type DynInventoryCommandRepository = Arc<dyn InventoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InventoryQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<(Vec<InventoryModel>, i64), RepositoryError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Option<InventoryModel>, RepositoryError>;
}

#[async_trait]
pub trait InventoryCommandRepositoryTrait {
    /// Creates the product's record on first call, overwrites the stock
    /// afterwards. Always refreshes `last_updated`.
    async fn upsert_stock(
        &self,
        product_id: i32,
        stock_quantity: i32,
    ) -> Result<InventoryModel, RepositoryError>;
}
