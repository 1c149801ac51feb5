mod api;
mod pagination;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Pagination};
