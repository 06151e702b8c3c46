pub mod pagination;
pub mod response;

pub use pagination::OffsetQuery;
pub use response::{ErrorResponse, MessageResponse, error_response};
