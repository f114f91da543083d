//! Route handlers, organized by entity.

pub mod auth;
pub mod form;
pub mod health;
pub mod level;
pub mod menu;
pub mod privilege;
pub mod user;

use coreadmin_core::error::AppError;
use coreadmin_core::types::PageRequest;
use coreadmin_core::types::pagination::DEFAULT_ROWS;

use crate::dto::request::RowsQuery;

/// Parse the `{page}` path parameter: positive integer or 400.
pub(crate) fn parse_page(raw: &str) -> Result<u64, AppError> {
    raw.parse::<u64>()
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| AppError::validation("invalid page number"))
}

/// Build a [`PageRequest`] from the `{page}` path parameter and the `rows`
/// query parameter. An absent or invalid `rows` falls back to the default.
pub(crate) fn page_request(raw_page: &str, rows: &RowsQuery) -> Result<PageRequest, AppError> {
    let page = parse_page(raw_page)?;
    let rows = rows
        .rows
        .as_deref()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|rows| *rows >= 1)
        .unwrap_or(DEFAULT_ROWS);
    Ok(PageRequest::new(page, rows))
}
