mod category;
mod inventory;
mod product;
mod revenue;
mod sale;

pub use self::category::{CategoryCommandService, CategoryQueryService};
pub use self::inventory::{InventoryCommandService, InventoryQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::revenue::RevenueService;
pub use self::sale::{SaleCommandService, SaleQueryService};

use crate::{
    abstract_trait::{category::DynCategoryQueryRepository, product::DynProductQueryRepository},
    revenue::SaleFilter,
};
use shared::errors::ServiceError;

/// Existence checks for the identifiers a sale filter references.
#[derive(Clone)]
pub struct FilterReferences {
    product_query: DynProductQueryRepository,
    category_query: DynCategoryQueryRepository,
}

impl FilterReferences {
    pub fn new(
        product_query: DynProductQueryRepository,
        category_query: DynCategoryQueryRepository,
    ) -> Self {
        Self {
            product_query,
            category_query,
        }
    }

    /// An unknown product or category is an error, never an empty result.
    pub async fn ensure_exist(&self, filter: &SaleFilter) -> Result<(), ServiceError> {
        if let Some(id) = filter.product_id()
            && self.product_query.find_by_id(id).await?.is_none()
        {
            return Err(ServiceError::not_found("Product", id));
        }

        if let Some(id) = filter.category_id()
            && self.category_query.find_by_id(id).await?.is_none()
        {
            return Err(ServiceError::not_found("Category", id));
        }

        Ok(())
    }
}
