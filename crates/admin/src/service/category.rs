use crate::{
    abstract_trait::category::{
        CategoryCommandServiceTrait, CategoryQueryServiceTrait, DynCategoryCommandRepository,
        DynCategoryQueryRepository,
    },
    domain::{
        requests::category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        response::category::CategoryResponse,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination},
    errors::{RepositoryError, ServiceError},
    utils::{Method, OperationTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
    tracer: OperationTracer,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracer: OperationTracer::new("category-query-service", "category", registry),
        }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError> {
        info!(
            "🔍 Finding all categories | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let tracing_ctx = self.tracer.start_tracing(
            "category_find_all",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("page", req.page.to_string()),
                KeyValue::new("page_size", req.page_size.to_string()),
                KeyValue::new("search", req.search.clone()),
            ],
        );

        let (categories, total) = match self.query.find_all(req).await {
            Ok(res) => res,
            Err(e) => {
                let msg = format!("Failed to fetch categories: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<CategoryResponse> =
            categories.into_iter().map(CategoryResponse::from).collect();
        let pagination = Pagination::new(req.page, req.page_size, total);

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            Method::Get,
            "Categories retrieved successfully",
        );

        Ok(ApiResponsePagination::success(
            "Categories retrieved successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start_tracing(
            "category_find_by_id",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("category_id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(category)) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Category retrieved successfully",
                );
                Ok(ApiResponse::success(
                    "Category retrieved successfully",
                    CategoryResponse::from(category),
                ))
            }
            Ok(None) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, "Category not found");
                Err(ServiceError::not_found("Category", id))
            }
            Err(e) => {
                let msg = format!("Failed to fetch category {id}: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[derive(Clone)]
pub struct CategoryCommandService {
    command: DynCategoryCommandRepository,
    tracer: OperationTracer,
}

impl CategoryCommandService {
    pub fn new(command: DynCategoryCommandRepository, registry: &mut Registry) -> Self {
        Self {
            command,
            tracer: OperationTracer::new("category-command-service", "category", registry),
        }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🏗️ Creating category: {}", req.name);

        let tracing_ctx = self.tracer.start_tracing(
            "category_create",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "create"),
                KeyValue::new("name", req.name.clone()),
            ],
        );

        match self.command.create_category(req).await {
            Ok(category) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Post,
                    "Category created successfully",
                );
                Ok(ApiResponse::success(
                    "Category created successfully",
                    CategoryResponse::from(category),
                ))
            }
            Err(e) => {
                let msg = format!("Failed to create category '{}': {e:?}", req.name);
                error!("{msg}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Post, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🔄 Updating category {id} to '{}'", req.name);

        let tracing_ctx = self.tracer.start_tracing(
            "category_update",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "update"),
                KeyValue::new("category_id", id.to_string()),
            ],
        );

        match self.command.update_category(id, req).await {
            Ok(category) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Put,
                    "Category updated successfully",
                );
                Ok(ApiResponse::success(
                    "Category updated successfully",
                    CategoryResponse::from(category),
                ))
            }
            Err(RepositoryError::NotFound) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Put, "Category not found");
                Err(ServiceError::not_found("Category", id))
            }
            Err(e) => {
                let msg = format!("Failed to update category {id}: {e:?}");
                error!("{msg}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Put, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
