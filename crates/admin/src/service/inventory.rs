use crate::{
    abstract_trait::{
        inventory::{
            DynInventoryCommandRepository, DynInventoryQueryRepository,
            InventoryCommandServiceTrait, InventoryQueryServiceTrait,
        },
        product::DynProductQueryRepository,
    },
    domain::{
        requests::inventory::{FindAllInventory, UpdateInventoryRequest},
        response::inventory::InventoryResponse,
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
pub struct InventoryQueryService {
    query: DynInventoryQueryRepository,
    tracer: OperationTracer,
}

impl InventoryQueryService {
    pub fn new(query: DynInventoryQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracer: OperationTracer::new("inventory-query-service", "inventory", registry),
        }
    }
}

#[async_trait]
impl InventoryQueryServiceTrait for InventoryQueryService {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<ApiResponsePagination<Vec<InventoryResponse>>, ServiceError> {
        let tracing_ctx = self.tracer.start_tracing(
            "inventory_find_all",
            vec![
                KeyValue::new("component", "inventory"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("page", req.page.to_string()),
                KeyValue::new("page_size", req.page_size.to_string()),
            ],
        );

        let (records, total) = match self.query.find_all(req).await {
            Ok(res) => res,
            Err(e) => {
                let msg = format!("Failed to fetch inventory: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<InventoryResponse> =
            records.into_iter().map(InventoryResponse::from).collect();
        let pagination = Pagination::new(req.page, req.page_size, total);

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            Method::Get,
            "Inventory retrieved successfully",
        );

        Ok(ApiResponsePagination::success(
            "Inventory retrieved successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start_tracing(
            "inventory_find_by_product",
            vec![
                KeyValue::new("component", "inventory"),
                KeyValue::new("operation", "find_by_product"),
                KeyValue::new("product_id", product_id.to_string()),
            ],
        );

        match self.query.find_by_product(product_id).await {
            Ok(Some(record)) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Inventory retrieved successfully",
                );
                Ok(ApiResponse::success(
                    "Inventory retrieved successfully",
                    InventoryResponse::from(record),
                ))
            }
            Ok(None) => {
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    "Inventory record not found",
                );
                Err(ServiceError::NotFound(format!(
                    "Inventory for product with id {product_id} not found"
                )))
            }
            Err(e) => {
                let msg = format!("Failed to fetch inventory for product {product_id}: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[derive(Clone)]
pub struct InventoryCommandService {
    command: DynInventoryCommandRepository,
    product_query: DynProductQueryRepository,
    tracer: OperationTracer,
}

impl InventoryCommandService {
    pub fn new(
        command: DynInventoryCommandRepository,
        product_query: DynProductQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            command,
            product_query,
            tracer: OperationTracer::new("inventory-command-service", "inventory", registry),
        }
    }
}

#[async_trait]
impl InventoryCommandServiceTrait for InventoryCommandService {
    async fn update_stock(
        &self,
        product_id: i32,
        req: &UpdateInventoryRequest,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError> {
        info!(
            "📦 Updating stock of product {product_id} to {}",
            req.stock_quantity
        );

        let tracing_ctx = self.tracer.start_tracing(
            "inventory_update_stock",
            vec![
                KeyValue::new("component", "inventory"),
                KeyValue::new("operation", "update_stock"),
                KeyValue::new("product_id", product_id.to_string()),
                KeyValue::new("stock_quantity", req.stock_quantity.to_string()),
            ],
        );

        match self.product_query.find_by_id(product_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Put, "Product not found");
                return Err(ServiceError::not_found("Product", product_id));
            }
            Err(e) => {
                let msg = format!("Failed to look up product {product_id}: {e:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Put, &msg);
                return Err(ServiceError::Repo(e));
            }
        }

        match self.command.upsert_stock(product_id, req.stock_quantity).await {
            Ok(record) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Put,
                    "Inventory updated successfully",
                );
                Ok(ApiResponse::success(
                    "Inventory updated successfully",
                    InventoryResponse::from(record),
                ))
            }
            Err(e) => {
                let msg = format!("Failed to update inventory for product {product_id}: {e:?}");
                error!("{msg}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Put, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
