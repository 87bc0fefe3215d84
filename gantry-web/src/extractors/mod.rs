pub mod filter_extraction;
pub mod query;

pub use filter_extraction::extract_resource_filters;
pub use query::{ListQuery, PaginationQuery, QueryParams, SortQuery};
