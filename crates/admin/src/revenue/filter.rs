use crate::{model::Sale, revenue::RevenueError};
use chrono::NaiveDateTime;
use shared::utils::{DateBound, parse_date_bound};

/// Conjunction of optional predicates over sales. Bounds are inclusive.
///
/// Only constructible through [`SaleFilter::new`] or [`SaleFilter::parse`],
/// so a value always holds an ordered range and positive identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaleFilter {
    start_date: Option<NaiveDateTime>,
    end_date: Option<NaiveDateTime>,
    product_id: Option<i32>,
    category_id: Option<i32>,
}

impl SaleFilter {
    /// The range check runs first so an inverted range is reported as such
    /// whatever the identifiers hold.
    pub fn new(
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
        product_id: Option<i32>,
        category_id: Option<i32>,
    ) -> Result<Self, RevenueError> {
        if let (Some(start), Some(end)) = (start_date, end_date)
            && start > end
        {
            return Err(RevenueError::InvalidRange { start, end });
        }

        check_identifier("product_id", product_id)?;
        check_identifier("category_id", category_id)?;

        Ok(Self {
            start_date,
            end_date,
            product_id,
            category_id,
        })
    }

    /// Parses raw query values. A plain date as `end_date` includes that
    /// whole day.
    pub fn parse(
        start_date: Option<&str>,
        end_date: Option<&str>,
        product_id: Option<i32>,
        category_id: Option<i32>,
    ) -> Result<Self, RevenueError> {
        let start = parse_bound("start_date", start_date, DateBound::Start)?;
        let end = parse_bound("end_date", end_date, DateBound::End)?;

        Self::new(start, end, product_id, category_id)
    }

    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.end_date
    }

    pub fn product_id(&self) -> Option<i32> {
        self.product_id
    }

    pub fn category_id(&self) -> Option<i32> {
        self.category_id
    }

    /// Same dimensional predicates over a different time window.
    pub fn with_window(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, RevenueError> {
        Self::new(Some(start), Some(end), self.product_id, self.category_id)
    }

    pub fn matches(&self, sale: &Sale) -> bool {
        self.start_date.is_none_or(|start| sale.sale_date >= start)
            && self.end_date.is_none_or(|end| sale.sale_date <= end)
            && self.product_id.is_none_or(|id| sale.product_id == id)
            && self.category_id.is_none_or(|id| sale.category_id == id)
    }
}

fn parse_bound(
    field: &'static str,
    value: Option<&str>,
    bound: DateBound,
) -> Result<Option<NaiveDateTime>, RevenueError> {
    value
        .map(|raw| {
            parse_date_bound(raw, bound).ok_or_else(|| RevenueError::InvalidDate {
                field,
                value: raw.to_string(),
            })
        })
        .transpose()
}

fn check_identifier(field: &'static str, value: Option<i32>) -> Result<(), RevenueError> {
    match value {
        Some(id) if id <= 0 => Err(RevenueError::InvalidIdentifier { field, value: id }),
        _ => Ok(()),
    }
}
