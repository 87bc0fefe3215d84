use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};

use crate::errors::WebError;
use gantry_api_types::pagination::{FilterInput, FilterOperator, ListInput, SortInput, MAX_PAGE_SIZE};

/// Pagination query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Items per page (max 100)
    pub limit: Option<u32>,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: Some(25),
        }
    }
}

impl PaginationQuery {
    /// Convert to standard pagination input
    pub fn to_pagination_input(&self) -> gantry_api_types::PaginationInput {
        gantry_api_types::PaginationInput {
            page: self.page,
            limit: self.limit,
            offset: None,
        }
    }

    /// Validate pagination parameters
    pub fn validate(&self) -> Result<(), WebError> {
        if let Some(limit) = self.limit {
            if limit > MAX_PAGE_SIZE {
                return Err(WebError::bad_request(format!(
                    "Invalid pagination: maximum limit is {}",
                    MAX_PAGE_SIZE
                )));
            }
            if limit == 0 {
                return Err(WebError::bad_request(
                    "Invalid pagination: limit must be greater than 0",
                ));
            }
        }

        if let Some(page) = self.page {
            if page == 0 {
                return Err(WebError::bad_request(
                    "Invalid pagination: page must be greater than 0",
                ));
            }
        }

        Ok(())
    }
}

/// Sort query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortQuery {
    /// Field to sort by
    #[serde(rename = "_sort")]
    pub sort: Option<String>,
    /// Sort order (ASC/DESC)
    #[serde(rename = "_order")]
    pub order: Option<String>,
}

impl SortQuery {
    /// Convert to standard sort input
    pub fn to_sort_input(&self) -> Option<SortInput> {
        SortInput::from_query(self.sort.clone(), self.order.clone())
    }
}

/// Combined query parameters for list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub pagination: PaginationQuery,
    pub sort: SortQuery,
    /// Remaining query parameters (field filters, `search`)
    pub filters: HashMap<String, String>,
}

impl ListQuery {
    /// Convert to standard list input
    pub fn to_list_input(&self) -> ListInput {
        ListInput {
            pagination: Some(self.pagination.to_pagination_input()),
            sort: self.sort.to_sort_input(),
            filters: Some(self.to_filter_inputs()),
        }
    }

    /// Convert the raw filter map to standard filter inputs
    pub fn to_filter_inputs(&self) -> Vec<FilterInput> {
        self.filters
            .iter()
            .filter_map(|(field, value)| {
                // Pagination and sort parameters are not filters
                if field.starts_with('_') || field == "page" || field == "limit" {
                    return None;
                }

                let operator = if field == "search" {
                    FilterOperator::Contains
                } else {
                    FilterOperator::Eq
                };

                Some(FilterInput {
                    field: field.clone(),
                    operator,
                    value: value.clone(),
                })
            })
            .collect()
    }

    /// Validate all query parameters
    pub fn validate(&self) -> Result<(), WebError> {
        self.pagination.validate()
    }
}

/// Extract and validate query parameters for list endpoints
///
/// Parameters arrive as an untyped string map; `page` and `limit` are parsed
/// here so that a non-numeric value produces a bad-request response instead
/// of being silently dropped.
#[derive(Debug)]
pub struct QueryParams(pub ListQuery);

impl QueryParams {
    fn from_raw(raw: HashMap<String, String>) -> Result<Self, WebError> {
        let page = parse_u32_param(&raw, "page")?;
        let limit = parse_u32_param(&raw, "limit")?;

        let query = ListQuery {
            pagination: PaginationQuery { page, limit },
            sort: SortQuery {
                sort: raw.get("_sort").cloned(),
                order: raw.get("_order").cloned(),
            },
            filters: raw,
        };

        query.validate()?;

        Ok(QueryParams(query))
    }
}

fn parse_u32_param(raw: &HashMap<String, String>, name: &str) -> Result<Option<u32>, WebError> {
    match raw.get(name) {
        None => Ok(None),
        Some(value) => value.parse::<u32>().map(Some).map_err(|_| {
            WebError::bad_request(format!(
                "Invalid query parameters: {} must be a positive integer",
                name
            ))
        }),
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|err| WebError::bad_request(format!("Invalid query parameters: {}", err)))?;

        QueryParams::from_raw(raw)
    }
}
