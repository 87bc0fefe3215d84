//! Pagination, sorting and filtering inputs shared by list endpoints

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Maximum number of items per page
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination input as supplied by a client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationInput {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Items per page
    pub limit: Option<u32>,
    /// Raw offset, used when a caller works offset-based rather than page-based
    pub offset: Option<u32>,
}

impl PaginationInput {
    /// Effective page number, defaulting to the first page
    pub fn get_page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, defaulted and clamped to [`MAX_PAGE_SIZE`]
    pub fn get_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE)
    }

    /// Effective item offset
    pub fn get_offset(&self) -> u64 {
        match self.offset {
            Some(offset) => offset as u64,
            None => (self.get_page() as u64 - 1) * self.get_limit() as u64,
        }
    }
}

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub offset: u64,
}

impl PaginationMeta {
    /// Compute metadata for a result set of `total` items under `input`
    pub fn from_input(input: &PaginationInput, total: u64) -> Self {
        let page = input.get_page();
        let limit = input.get_limit();
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(limit as u64) as u32
        };

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1 && total > 0,
            offset: input.get_offset(),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort input parsed from `_sort`/`_order` query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortInput {
    /// Field to sort by
    pub field: String,
    /// Raw order string; anything other than "DESC" sorts ascending
    pub order: Option<String>,
}

impl SortInput {
    /// Build from optional query parameters; absent field means no sorting
    pub fn from_query(field: Option<String>, order: Option<String>) -> Option<Self> {
        field.map(|field| Self { field, order })
    }

    pub fn get_direction(&self) -> SortDirection {
        match self.order.as_deref() {
            Some(order) if order.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Filter comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Eq,
    Contains,
}

/// A single field filter parsed from query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterInput {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

/// Combined input for list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListInput {
    pub pagination: Option<PaginationInput>,
    pub sort: Option<SortInput>,
    pub filters: Option<Vec<FilterInput>>,
}

/// Standard list response carrying items plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>, meta: PaginationMeta) -> Self {
        Self { items, meta }
    }

    /// An empty result set for the requested pagination window
    pub fn empty(input: &PaginationInput) -> Self {
        Self {
            items: Vec::new(),
            meta: PaginationMeta::from_input(input, 0),
        }
    }
}
