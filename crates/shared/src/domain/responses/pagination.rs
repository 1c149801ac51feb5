use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE_SIZE: i32 = 10;
pub const MAX_PAGE_SIZE: i32 = 100;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, ToSchema, PartialEq, Eq)]
pub struct Pagination {
    pub page: i32,
    pub page_size: i32,
    pub total_items: i32,
    pub total_pages: i32,
}

impl Pagination {
    /// Builds the pagination block for a page of `total` matching rows.
    /// Zero rows still reports one (empty) page.
    pub fn new(page: i32, page_size: i32, total: i64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = if total <= 0 {
            1
        } else {
            ((total - 1) / page_size as i64) + 1
        };

        Self {
            page: page.max(1),
            page_size,
            total_items: total.clamp(0, i32::MAX as i64) as i32,
            total_pages: total_pages.min(i32::MAX as i64) as i32,
        }
    }

    pub fn offset(page: i32, page_size: i32) -> i64 {
        ((page.max(1) - 1) as i64) * page_size.max(1) as i64
    }
}
