//! Shared query parameter types for API handlers.

use serde::Deserialize;

use catalog_core::search::{SearchInput, SearchInputProps};

/// Raw search parameters for paginated list endpoints
/// (`?page=&per_page=&sort=&sort_dir=&filter=`).
///
/// Values are captured as strings and normalized by [`SearchInput`]
/// construction in core; invalid paging input collapses to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
}

impl SearchParams {
    pub fn into_search_input(self) -> SearchInput {
        SearchInput::new(SearchInputProps {
            page: self.page,
            per_page: self.per_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter: self.filter,
        })
    }
}
