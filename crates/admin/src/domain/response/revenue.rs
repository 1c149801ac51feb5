use crate::revenue::{RevenueBucket, RevenueDimension, RevenuePeriod, RevenueSummary, SaleFilter};
use serde::{Deserialize, Serialize};
use shared::utils::format_datetime;
use utoipa::ToSchema;

/// Echo of the filter that produced a result, with dates normalized.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
pub struct AppliedFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
}

impl From<&SaleFilter> for AppliedFilter {
    fn from(filter: &SaleFilter) -> Self {
        AppliedFilter {
            start_date: filter.start_date().map(format_datetime),
            end_date: filter.end_date().map(format_datetime),
            product_id: filter.product_id(),
            category_id: filter.category_id(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct RevenueResponse {
    pub filter: AppliedFilter,
    pub total_revenue: i64,
    pub total_units: i64,
    pub count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<RevenueDimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<RevenueBucket>>,
}

impl RevenueResponse {
    pub fn new(filter: &SaleFilter, summary: RevenueSummary) -> Self {
        RevenueResponse {
            filter: AppliedFilter::from(filter),
            total_revenue: summary.total_revenue,
            total_units: summary.total_units,
            count: summary.count,
            group_by: None,
            groups: None,
        }
    }

    pub fn with_groups(mut self, dimension: RevenueDimension, groups: Vec<RevenueBucket>) -> Self {
        self.group_by = Some(dimension);
        self.groups = Some(groups);
        self
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct PeriodRevenue {
    pub period: RevenuePeriod,
    pub start_date: String,
    pub end_date: String,
    pub total_revenue: i64,
    pub total_units: i64,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct RevenuePeriodResponse {
    pub filter: AppliedFilter,
    pub periods: Vec<PeriodRevenue>,
}
