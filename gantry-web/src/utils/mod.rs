pub mod response;

pub use response::{ApiResponse, ResponseBuilder, ResponseMeta};
