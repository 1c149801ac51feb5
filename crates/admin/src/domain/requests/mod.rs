pub mod category;
pub mod inventory;
pub mod product;
pub mod revenue;
pub mod sale;

use shared::domain::responses::DEFAULT_PAGE_SIZE;

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

/// Empty or whitespace-only search terms mean "no search".
pub(crate) fn search_term(search: &str) -> Option<String> {
    let trimmed = search.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
