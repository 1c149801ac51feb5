use crate::domain::{
    requests::sale::{CreateSaleRequest, FindAllSales},
    response::sale::SaleResponse,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynSaleQueryService = Arc<dyn SaleQueryServiceTrait + Send + Sync>;
pub type DynSaleCommandService = Arc<dyn SaleCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait SaleQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllSales,
    ) -> Result<ApiResponsePagination<Vec<SaleResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<SaleResponse>, ServiceError>;
}

#[async_trait]
pub trait SaleCommandServiceTrait {
    async fn create_sale(
        &self,
        req: &CreateSaleRequest,
    ) -> Result<ApiResponse<SaleResponse>, ServiceError>;
}
