use crate::{
    abstract_trait::{revenue::RevenueServiceTrait, sale::DynSaleQueryRepository},
    domain::{
        requests::revenue::{RevenuePeriodQuery, RevenueQuery},
        response::revenue::{AppliedFilter, PeriodRevenue, RevenuePeriodResponse, RevenueResponse},
    },
    revenue::{RevenueError, RevenuePeriod, SaleFilter, aggregate, group_by},
    service::FilterReferences,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{DateBound, Method, OperationTracer, format_datetime, parse_date_bound},
};
use tracing::info;

/// Read side of the revenue engine. Validation always runs before any
/// lookup, so an inverted range is reported even for unknown identifiers.
#[derive(Clone)]
pub struct RevenueService {
    sales: DynSaleQueryRepository,
    references: FilterReferences,
    tracer: OperationTracer,
}

impl RevenueService {
    pub fn new(
        sales: DynSaleQueryRepository,
        references: FilterReferences,
        registry: &mut Registry,
    ) -> Self {
        Self {
            sales,
            references,
            tracer: OperationTracer::new("revenue-service", "revenue", registry),
        }
    }

    async fn summarize(&self, req: &RevenueQuery) -> Result<RevenueResponse, ServiceError> {
        let filter = SaleFilter::parse(
            req.start_date.as_deref(),
            req.end_date.as_deref(),
            req.product_id,
            req.category_id,
        )?;

        self.references.ensure_exist(&filter).await?;

        let sales = self.sales.find_matching(&filter).await?;
        let summary = aggregate(&sales, &filter)?;

        info!(
            "📈 Aggregated {} sales: revenue {}, units {}",
            summary.count, summary.total_revenue, summary.total_units
        );

        let response = RevenueResponse::new(&filter, summary);

        Ok(match req.group_by {
            Some(dimension) => {
                let groups = group_by(&sales, &filter, dimension)?;
                response.with_groups(dimension, groups)
            }
            None => response,
        })
    }

    async fn breakdown(
        &self,
        req: &RevenuePeriodQuery,
    ) -> Result<RevenuePeriodResponse, ServiceError> {
        let raw = req
            .start_date
            .as_deref()
            .ok_or(RevenueError::Missing("start_date"))?;
        let anchor =
            parse_date_bound(raw, DateBound::Start).ok_or_else(|| RevenueError::InvalidDate {
                field: "start_date",
                value: raw.to_string(),
            })?;

        let until = req
            .end_date
            .as_deref()
            .map(|raw| {
                parse_date_bound(raw, DateBound::End).ok_or_else(|| RevenueError::InvalidDate {
                    field: "end_date",
                    value: raw.to_string(),
                })
            })
            .transpose()?;

        // range check before any lookup, same as the plain revenue filter
        let requested = SaleFilter::new(Some(anchor), until, req.product_id, req.category_id)?;

        // an explicit end_date replaces the calendar day as the daily window
        let windows = RevenuePeriod::ALL
            .iter()
            .map(|period| {
                let window = match (period, until) {
                    (RevenuePeriod::Daily, Some(end)) => Ok((anchor, end)),
                    _ => period.window(anchor),
                };
                window.map(|(start, end)| (*period, start, end))
            })
            .collect::<Result<Vec<_>, RevenueError>>()?;

        // weekly can reach into the next year, past the annual window
        let latest = windows
            .iter()
            .map(|(_, _, end)| *end)
            .max()
            .unwrap_or(anchor);

        let outer = requested.with_window(anchor, latest)?;

        self.references.ensure_exist(&outer).await?;

        let sales = self.sales.find_matching(&outer).await?;

        let mut periods = Vec::with_capacity(windows.len());
        for (period, start, end) in windows {
            let summary = aggregate(&sales, &outer.with_window(start, end)?)?;
            periods.push(PeriodRevenue {
                period,
                start_date: format_datetime(start),
                end_date: format_datetime(end),
                total_revenue: summary.total_revenue,
                total_units: summary.total_units,
                count: summary.count,
            });
        }

        Ok(RevenuePeriodResponse {
            filter: AppliedFilter {
                start_date: Some(format_datetime(anchor)),
                end_date: until.map(format_datetime),
                product_id: outer.product_id(),
                category_id: outer.category_id(),
            },
            periods,
        })
    }
}

#[async_trait]
impl RevenueServiceTrait for RevenueService {
    async fn aggregate_revenue(
        &self,
        req: &RevenueQuery,
    ) -> Result<ApiResponse<RevenueResponse>, ServiceError> {
        info!(
            "📊 Aggregating revenue | Range: {:?}..{:?}, Product: {:?}, Category: {:?}",
            req.start_date, req.end_date, req.product_id, req.category_id
        );

        let tracing_ctx = self.tracer.start_tracing(
            "revenue_aggregate",
            vec![
                KeyValue::new("component", "revenue"),
                KeyValue::new("operation", "aggregate"),
                KeyValue::new("start_date", req.start_date.clone().unwrap_or_default()),
                KeyValue::new("end_date", req.end_date.clone().unwrap_or_default()),
            ],
        );

        match self.summarize(req).await {
            Ok(data) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Revenue aggregated successfully",
                );
                Ok(ApiResponse::success("Revenue aggregated successfully", data))
            }
            Err(e) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &e.to_string());
                Err(e)
            }
        }
    }

    async fn revenue_by_period(
        &self,
        req: &RevenuePeriodQuery,
    ) -> Result<ApiResponse<RevenuePeriodResponse>, ServiceError> {
        info!(
            "📅 Revenue by period | Anchor: {:?}, Until: {:?}, Product: {:?}, Category: {:?}",
            req.start_date, req.end_date, req.product_id, req.category_id
        );

        let tracing_ctx = self.tracer.start_tracing(
            "revenue_by_period",
            vec![
                KeyValue::new("component", "revenue"),
                KeyValue::new("operation", "by_period"),
                KeyValue::new("start_date", req.start_date.clone().unwrap_or_default()),
                KeyValue::new("end_date", req.end_date.clone().unwrap_or_default()),
            ],
        );

        match self.breakdown(req).await {
            Ok(data) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Revenue by period retrieved successfully",
                );
                Ok(ApiResponse::success(
                    "Revenue by period retrieved successfully",
                    data,
                ))
            }
            Err(e) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, &e.to_string());
                Err(e)
            }
        }
    }
}
