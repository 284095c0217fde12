//! Search input normalization and the generic filter/sort/paginate pipeline.
//!
//! `search` implementations compose the three stages in fixed order:
//! filter, then sort, then pagination. Filtering semantics belong to each
//! concrete repository (passed in as a predicate); sorting and pagination
//! are shared free functions parameterized by a sortable-fields allow-list
//! and a sort-value extractor. The pipeline itself raises no errors:
//! invalid paging and direction inputs are normalized away by
//! [`SearchInput`] construction.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Default page number when the raw input is absent or invalid.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the raw input is absent or invalid.
pub const DEFAULT_PER_PAGE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

// ---------------------------------------------------------------------------
// SearchInput
// ---------------------------------------------------------------------------

/// Raw, untrusted query values as they arrive from the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInputProps {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
}

/// Normalized query parameters, immutable after construction.
///
/// Normalization rules:
/// - `page`: anything that is not a positive integer collapses to 1.
/// - `per_page`: anything that is not a positive integer falls back to the
///   fixed default of 10.
/// - `sort`: empty or missing becomes `None`.
/// - `sort_dir`: forced to `None` whenever `sort` is `None`; otherwise
///   case-insensitive `"desc"` gives `Desc` and anything else gives `Asc`.
/// - `filter`: empty or missing becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub page: i64,
    pub per_page: i64,
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
    pub filter: Option<String>,
}

impl SearchInput {
    pub fn new(props: SearchInputProps) -> Self {
        let page = parse_positive_int(props.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let per_page = parse_positive_int(props.per_page.as_deref()).unwrap_or(DEFAULT_PER_PAGE);
        let sort = normalize_string(props.sort);
        let sort_dir = match &sort {
            None => None,
            Some(_) => match props.sort_dir.as_deref() {
                Some(dir) if dir.eq_ignore_ascii_case("desc") => Some(SortDirection::Desc),
                _ => Some(SortDirection::Asc),
            },
        };
        let filter = normalize_string(props.filter);

        Self {
            page,
            per_page,
            sort,
            sort_dir,
            filter,
        }
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new(SearchInputProps::default())
    }
}

fn parse_positive_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
}

fn normalize_string(raw: Option<String>) -> Option<String> {
    raw.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Pipeline stages
// ---------------------------------------------------------------------------

/// Sort key extracted from an entity field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    Time(Timestamp),
}

/// Stage 1: filter.
///
/// A `None` filter returns the input unchanged and the predicate is never
/// invoked; that no-op is part of the contract, not an optimization.
pub fn apply_filter<E, F>(items: Vec<E>, filter: Option<&str>, predicate: F) -> Vec<E>
where
    F: Fn(&E, &str) -> bool,
{
    match filter {
        None => items,
        Some(filter) => items.into_iter().filter(|e| predicate(e, filter)).collect(),
    }
}

/// Stage 2: sort.
///
/// Returns the items unchanged when `sort` is `None` or names a field
/// outside the allow-list. Otherwise performs a stable sort on the value
/// extracted by `value_of` (equal keys keep their filtered order),
/// ascending unless `sort_dir` is `Desc`. `value_of` may derive the key
/// rather than read a field directly (e.g. a case-folded name).
pub fn apply_sort<E, F>(
    mut items: Vec<E>,
    sort: Option<&str>,
    sort_dir: Option<SortDirection>,
    sortable_fields: &[&str],
    value_of: F,
) -> Vec<E>
where
    F: Fn(&E, &str) -> Option<SortValue>,
{
    let Some(field) = sort else {
        return items;
    };
    if !sortable_fields.contains(&field) {
        return items;
    }

    items.sort_by(|a, b| {
        let ordering = value_of(a, field).cmp(&value_of(b, field));
        match sort_dir {
            Some(SortDirection::Desc) => ordering.reverse(),
            _ => ordering,
        }
    });
    items
}

/// Stage 3: paginate.
///
/// 1-indexed slicing; out-of-range pages yield an empty slice, never an
/// error.
pub fn apply_pagination<E>(items: Vec<E>, page: i64, per_page: i64) -> Vec<E> {
    let start = (page - 1).saturating_mul(per_page).max(0) as usize;
    items
        .into_iter()
        .skip(start)
        .take(per_page.max(0) as usize)
        .collect()
}

// ---------------------------------------------------------------------------
// SearchOutput
// ---------------------------------------------------------------------------

/// Page envelope returned by `search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutput<E> {
    /// The page's entities, in final filtered/sorted order.
    pub items: Vec<E>,
    /// Count of entities matching the filter before pagination.
    pub total: i64,
    pub current_page: i64,
    pub per_page: i64,
    /// `ceil(total / per_page)`, never below 1.
    pub last_page: i64,
}

impl<E> SearchOutput<E> {
    pub fn new(items: Vec<E>, total: i64, current_page: i64, per_page: i64) -> Self {
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: ((total + per_page - 1) / per_page).max(1),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
