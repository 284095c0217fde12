//! Shared response envelope types for API handlers.
//!
//! Single resources use a `{ "data": ... }` envelope; listings use
//! `{ "data": [...], "meta": {...} }` with pagination metadata.

use serde::Serialize;

use catalog_core::search::SearchOutput;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Pagination metadata echoed alongside a page of results.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub current_page: i64,
    pub per_page: i64,
    pub last_page: i64,
}

/// Standard `{ "data": [...], "meta": {...} }` page envelope.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T: Serialize> From<SearchOutput<T>> for Paginated<T> {
    fn from(output: SearchOutput<T>) -> Self {
        Self {
            data: output.items,
            meta: PageMeta {
                total: output.total,
                current_page: output.current_page,
                per_page: output.per_page,
                last_page: output.last_page,
            },
        }
    }
}
