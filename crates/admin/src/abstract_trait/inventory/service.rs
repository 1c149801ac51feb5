use crate::domain::{
    requests::inventory::{FindAllInventory, UpdateInventoryRequest},
    response::inventory::InventoryResponse,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynInventoryQueryService = Arc<dyn InventoryQueryServiceTrait + Send + Sync>;
pub type DynInventoryCommandService = Arc<dyn InventoryCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait InventoryQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<ApiResponsePagination<Vec<InventoryResponse>>, ServiceError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError>;
}

#[async_trait]
pub trait InventoryCommandServiceTrait {
    async fn update_stock(
        &self,
        product_id: i32,
        req: &UpdateInventoryRequest,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError>;
}
