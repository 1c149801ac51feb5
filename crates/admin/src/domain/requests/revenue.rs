use crate::revenue::RevenueDimension;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Raw revenue filter. Dates stay strings here so malformed values are
/// reported by the revenue engine instead of a generic query rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RevenueQuery {
    #[schema(example = "2024-02-01")]
    pub start_date: Option<String>,

    #[schema(example = "2024-02-28")]
    pub end_date: Option<String>,

    pub product_id: Option<i32>,

    pub category_id: Option<i32>,

    pub group_by: Option<RevenueDimension>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RevenuePeriodQuery {
    /// Anchor of every window. Required.
    #[schema(example = "2024-02-01")]
    pub start_date: Option<String>,

    /// Closes the daily window instead of the anchor's calendar day.
    #[schema(example = "2024-02-03")]
    pub end_date: Option<String>,

    pub product_id: Option<i32>,

    pub category_id: Option<i32>,
}
