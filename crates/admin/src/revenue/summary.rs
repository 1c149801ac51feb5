use crate::{
    model::Sale,
    revenue::{RevenueError, SaleFilter},
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RevenueSummary {
    pub total_revenue: i64,
    pub total_units: i64,
    pub count: i64,
}

impl RevenueSummary {
    /// Leaves `self` untouched when any total would overflow.
    pub fn add(&mut self, sale: &Sale) -> Result<(), RevenueError> {
        let overflow = || RevenueError::Overflow(sale.sale_id);

        let revenue = sale.revenue().ok_or_else(overflow)?;
        let total_revenue = self.total_revenue.checked_add(revenue).ok_or_else(overflow)?;
        let total_units = self
            .total_units
            .checked_add(i64::from(sale.quantity))
            .ok_or_else(overflow)?;

        self.total_revenue = total_revenue;
        self.total_units = total_units;
        self.count += 1;
        Ok(())
    }

    pub fn checked_merge(self, other: &RevenueSummary) -> Option<RevenueSummary> {
        Some(RevenueSummary {
            total_revenue: self.total_revenue.checked_add(other.total_revenue)?,
            total_units: self.total_units.checked_add(other.total_units)?,
            count: self.count.checked_add(other.count)?,
        })
    }
}

/// Dimension a revenue query can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RevenueDimension {
    Product,
    Category,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RevenueBucket {
    pub key: String,
    #[serde(flatten)]
    pub summary: RevenueSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum GroupKey {
    Id(i32),
    Label(String),
}

impl GroupKey {
    fn of(sale: &Sale, dimension: RevenueDimension) -> Self {
        let date = sale.sale_date.date();
        match dimension {
            RevenueDimension::Product => GroupKey::Id(sale.product_id),
            RevenueDimension::Category => GroupKey::Id(sale.category_id),
            RevenueDimension::Day => GroupKey::Label(date.format("%Y-%m-%d").to_string()),
            RevenueDimension::Week => {
                let week = date.iso_week();
                GroupKey::Label(format!("{:04}-W{:02}", week.year(), week.week()))
            }
            RevenueDimension::Month => GroupKey::Label(date.format("%Y-%m").to_string()),
            RevenueDimension::Year => GroupKey::Label(format!("{:04}", date.year())),
        }
    }

    fn into_label(self) -> String {
        match self {
            GroupKey::Id(id) => id.to_string(),
            GroupKey::Label(label) => label,
        }
    }
}

pub fn aggregate<'a, I>(sales: I, filter: &SaleFilter) -> Result<RevenueSummary, RevenueError>
where
    I: IntoIterator<Item = &'a Sale>,
{
    sales
        .into_iter()
        .filter(|sale| filter.matches(sale))
        .try_fold(RevenueSummary::default(), |mut summary, sale| {
            summary.add(sale)?;
            Ok(summary)
        })
}

/// Buckets are ordered by key: identifiers numerically, periods
/// chronologically.
pub fn group_by<'a, I>(
    sales: I,
    filter: &SaleFilter,
    dimension: RevenueDimension,
) -> Result<Vec<RevenueBucket>, RevenueError>
where
    I: IntoIterator<Item = &'a Sale>,
{
    let mut groups: BTreeMap<GroupKey, RevenueSummary> = BTreeMap::new();

    for sale in sales.into_iter().filter(|sale| filter.matches(sale)) {
        groups
            .entry(GroupKey::of(sale, dimension))
            .or_default()
            .add(sale)?;
    }

    Ok(groups
        .into_iter()
        .map(|(key, summary)| RevenueBucket {
            key: key.into_label(),
            summary,
        })
        .collect())
}
