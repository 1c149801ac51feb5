use crate::{
    domain::requests::category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;
pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<(Vec<CategoryModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError>;
}

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError>;
    /// Fails with `RepositoryError::NotFound` when no row has `id`.
    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError>;
}
