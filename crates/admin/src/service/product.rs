use crate::{
    abstract_trait::{
        category::DynCategoryQueryRepository,
        product::{
            DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
            ProductQueryServiceTrait,
        },
    },
    domain::{
        requests::product::{CreateProductRequest, FindAllProducts},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination},
    errors::ServiceError,
    utils::{Method, OperationTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracer: OperationTracer,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracer: OperationTracer::new("product-query-service", "product", registry),
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Size: {}, Search: '{}', Category: {:?}",
            req.page, req.page_size, req.search, req.category_id
        );

        let tracing_ctx = self.tracer.start_tracing(
            "product_find_all",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("page", req.page.to_string()),
                KeyValue::new("page_size", req.page_size.to_string()),
                KeyValue::new("search", req.search.clone()),
            ],
        );

        let (products, total) = match self.query.find_all(req).await {
            Ok(res) => {
                info!("✅ Retrieved {} products from DB", res.0.len());
                res
            }
            Err(e) => {
                let msg = format!("Failed to fetch all products: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
        let pagination = Pagination::new(req.page, req.page_size, total);

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            Method::Get,
            "Products retrieved successfully",
        );

        Ok(ApiResponsePagination::success(
            "Products retrieved successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let tracing_ctx = self.tracer.start_tracing(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product_id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Product retrieved successfully",
                );
                Ok(ApiResponse::success(
                    "Product retrieved successfully",
                    ProductResponse::from(product),
                ))
            }
            Ok(None) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, "Product not found");
                Err(ServiceError::not_found("Product", id))
            }
            Err(e) => {
                let msg = format!("Failed to fetch product {id}: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    category_query: DynCategoryQueryRepository,
    tracer: OperationTracer,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        category_query: DynCategoryQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            command,
            category_query,
            tracer: OperationTracer::new("product-command-service", "product", registry),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product: {}", req.name);

        let tracing_ctx = self.tracer.start_tracing(
            "product_create",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("category_id", req.category_id.to_string()),
                KeyValue::new("name", req.name.clone()),
            ],
        );

        match self.category_query.find_by_id(req.category_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Post, "Category not found");
                return Err(ServiceError::not_found("Category", req.category_id));
            }
            Err(e) => {
                let msg = format!("Failed to look up category {}: {e:?}", req.category_id);
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Post, &msg);
                return Err(ServiceError::Repo(e));
            }
        }

        match self.command.create_product(req).await {
            Ok(product) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Post,
                    "Product created successfully",
                );
                Ok(ApiResponse::success(
                    "Product created successfully",
                    ProductResponse::from(product),
                ))
            }
            Err(e) => {
                let msg = format!("Failed to create product '{}': {e:?}", req.name);
                error!("{msg}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Post, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
