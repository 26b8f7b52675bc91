use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD};

/// Sort direction as transmitted to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("ASC"),
            SortOrder::Desc => f.write_str("DESC"),
        }
    }
}

/// Active column sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: SortOrder,
}

/// Client-side query state of a table screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Zero-based page index.
    pub page_index: usize,
    pub page_size: usize,
    pub sort: Option<SortState>,
    /// Filter values by field; empty values are never stored.
    pub filters: BTreeMap<String, String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            sort: None,
            filters: BTreeMap::new(),
        }
    }

    /// Field transmitted as `sortBy`; `created_at` when unsorted.
    pub fn sort_field(&self) -> &str {
        self.sort
            .as_ref()
            .map_or(DEFAULT_SORT_FIELD, |sort| sort.field.as_str())
    }

    /// Direction transmitted as `sortOrder`; newest first when unsorted.
    pub fn sort_order(&self) -> SortOrder {
        self.sort.as_ref().map_or(SortOrder::Desc, |sort| sort.direction)
    }

    /// Direction of `field` if it is the sorted column.
    pub fn sort_direction_of(&self, field: &str) -> Option<SortOrder> {
        self.sort
            .as_ref()
            .filter(|sort| sort.field == field)
            .map(|sort| sort.direction)
    }

    pub fn to_params(&self) -> ListParams {
        ListParams {
            page: self.page_index + 1,
            page_size: self.page_size,
            sort_field: self.sort_field().to_string(),
            sort_order: self.sort_order(),
            filters: self.filters.clone(),
        }
    }
}

/// Parameters of one list request.
///
/// Two requests with equal parameters are interchangeable, so this also serves
/// as the key used to detect stale responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListParams {
    /// One-based page number.
    pub page: usize,
    pub page_size: usize,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    /// Non-empty filter value for `field`.
    pub fn filter(&self, field: &str) -> Option<&str> {
        self.filters
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl Default for ListParams {
    fn default() -> Self {
        QueryState::default().to_params()
    }
}
