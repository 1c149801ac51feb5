use crate::{domain::requests::sale::RecordSale, model::Sale as SaleModel, revenue::SaleFilter};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSaleQueryRepository = Arc<dyn SaleQueryRepositoryTrait + Send + Sync>;
pub type DynSaleCommandRepository = Arc<dyn SaleCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SaleQueryRepositoryTrait {
    /// One page of matching sales, newest first, with the total match count.
    async fn find_all(
        &self,
        filter: &SaleFilter,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<SaleModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<SaleModel>, RepositoryError>;
    /// Every sale matching `filter`, unpaginated.
    async fn find_matching(&self, filter: &SaleFilter) -> Result<Vec<SaleModel>, RepositoryError>;
}

#[async_trait]
pub trait SaleCommandRepositoryTrait {
    async fn create_sale(&self, sale: &RecordSale) -> Result<SaleModel, RepositoryError>;
}
