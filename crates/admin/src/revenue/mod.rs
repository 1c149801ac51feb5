//! Revenue aggregation over recorded sales.
//!
//! Everything here is pure: callers load the candidate sales (narrowed by the
//! same [`SaleFilter`] at the database) and the engine filters and folds them.

mod error;
mod filter;
mod period;
mod summary;

pub use self::error::RevenueError;
pub use self::filter::SaleFilter;
pub use self::period::RevenuePeriod;
pub use self::summary::{RevenueBucket, RevenueDimension, RevenueSummary, aggregate, group_by};

#[cfg(test)]
pub(crate) mod testing {
    use crate::model::Sale;
    use chrono::{NaiveDate, NaiveDateTime};

    pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    pub fn sale(
        id: i32,
        product_id: i32,
        category_id: i32,
        quantity: i32,
        unit_price: i64,
        sale_date: NaiveDateTime,
    ) -> Sale {
        Sale {
            sale_id: id,
            product_id,
            category_id,
            quantity,
            unit_price,
            sale_date,
            created_at: sale_date,
        }
    }
}
