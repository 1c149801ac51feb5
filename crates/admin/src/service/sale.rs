use crate::{
    abstract_trait::{
        product::DynProductQueryRepository,
        sale::{
            DynSaleCommandRepository, DynSaleQueryRepository, SaleCommandServiceTrait,
            SaleQueryServiceTrait,
        },
    },
    domain::{
        requests::sale::{CreateSaleRequest, FindAllSales, RecordSale},
        response::sale::SaleResponse,
    },
    revenue::SaleFilter,
    service::FilterReferences,
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination},
    errors::ServiceError,
    utils::{DateBound, Method, OperationTracer, parse_date_bound},
};
use tracing::info;

#[derive(Clone)]
pub struct SaleQueryService {
    query: DynSaleQueryRepository,
    references: FilterReferences,
    tracer: OperationTracer,
}

impl SaleQueryService {
    pub fn new(
        query: DynSaleQueryRepository,
        references: FilterReferences,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            references,
            tracer: OperationTracer::new("sale-query-service", "sale", registry),
        }
    }

    async fn list(
        &self,
        req: &FindAllSales,
    ) -> Result<ApiResponsePagination<Vec<SaleResponse>>, ServiceError> {
        let filter = SaleFilter::parse(
            req.start_date.as_deref(),
            req.end_date.as_deref(),
            req.product_id,
            req.category_id,
        )?;

        self.references.ensure_exist(&filter).await?;

        let (sales, total) = self.query.find_all(&filter, req.page, req.page_size).await?;
        info!("✅ Retrieved {} sales (total: {total})", sales.len());

        let data = sales
            .into_iter()
            .map(SaleResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApiResponsePagination::success(
            "Sales retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }
}

#[async_trait]
impl SaleQueryServiceTrait for SaleQueryService {
    async fn find_all(
        &self,
        req: &FindAllSales,
    ) -> Result<ApiResponsePagination<Vec<SaleResponse>>, ServiceError> {
        info!(
            "🔍 Finding sales | Page: {}, Size: {}, Range: {:?}..{:?}",
            req.page, req.page_size, req.start_date, req.end_date
        );

        let tracing_ctx = self.tracer.start_tracing(
            "sale_find_all",
            vec![
                KeyValue::new("component", "sale"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("page", req.page.to_string()),
                KeyValue::new("page_size", req.page_size.to_string()),
            ],
        );

        match self.list(req).await {
            Ok(response) => {
                self.tracer
                    .complete_tracing_success(&tracing_ctx, Method::Get, &response.message);
                Ok(response)
            }
            Err(e) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &e.to_string());
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<SaleResponse>, ServiceError> {
        let tracing_ctx = self.tracer.start_tracing(
            "sale_find_by_id",
            vec![
                KeyValue::new("component", "sale"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("sale_id", id.to_string()),
            ],
        );

        let result = match self.query.find_by_id(id).await {
            Ok(Some(sale)) => SaleResponse::try_from(sale).map_err(ServiceError::from),
            Ok(None) => Err(ServiceError::not_found("Sale", id)),
            Err(e) => Err(ServiceError::Repo(e)),
        };

        match result {
            Ok(sale) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Sale retrieved successfully",
                );
                Ok(ApiResponse::success("Sale retrieved successfully", sale))
            }
            Err(e) => {
                let msg = format!("Failed to fetch sale {id}: {e}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(e)
            }
        }
    }
}

#[derive(Clone)]
pub struct SaleCommandService {
    command: DynSaleCommandRepository,
    product_query: DynProductQueryRepository,
    tracer: OperationTracer,
}

impl SaleCommandService {
    pub fn new(
        command: DynSaleCommandRepository,
        product_query: DynProductQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            command,
            product_query,
            tracer: OperationTracer::new("sale-command-service", "sale", registry),
        }
    }

    /// Fills in the product's category, and its current price and "now" when
    /// the request leaves them out.
    async fn resolve(&self, req: &CreateSaleRequest) -> Result<RecordSale, ServiceError> {
        let sale_date = match req.sale_date.as_deref() {
            Some(raw) => parse_date_bound(raw, DateBound::Start).ok_or_else(|| {
                ServiceError::Validation(vec![format!(
                    "sale_date '{raw}' is not a valid date or timestamp"
                )])
            })?,
            None => Utc::now().naive_utc(),
        };

        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", req.product_id))?;

        let unit_price = req.unit_price.unwrap_or(product.price);

        // rows written outside the API skip request validation
        if i64::from(req.quantity).checked_mul(unit_price).is_none() {
            return Err(ServiceError::Validation(vec![format!(
                "quantity {} at unit price {unit_price} exceeds the supported amount range",
                req.quantity
            )]));
        }

        Ok(RecordSale {
            product_id: product.product_id,
            category_id: product.category_id,
            quantity: req.quantity,
            unit_price,
            sale_date,
        })
    }
}

#[async_trait]
impl SaleCommandServiceTrait for SaleCommandService {
    async fn create_sale(
        &self,
        req: &CreateSaleRequest,
    ) -> Result<ApiResponse<SaleResponse>, ServiceError> {
        info!(
            "🧾 Recording sale | Product: {}, Quantity: {}",
            req.product_id, req.quantity
        );

        let tracing_ctx = self.tracer.start_tracing(
            "sale_create",
            vec![
                KeyValue::new("component", "sale"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product_id", req.product_id.to_string()),
                KeyValue::new("quantity", req.quantity.to_string()),
            ],
        );

        let result = match self.resolve(req).await {
            Ok(record) => self
                .command
                .create_sale(&record)
                .await
                .map_err(ServiceError::Repo)
                .and_then(|sale| SaleResponse::try_from(sale).map_err(ServiceError::from)),
            Err(e) => Err(e),
        };

        match result {
            Ok(sale) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Post,
                    "Sale recorded successfully",
                );
                Ok(ApiResponse::success("Sale recorded successfully", sale))
            }
            Err(e) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Post, &e.to_string());
                Err(e)
            }
        }
    }
}
