//! Shared HTTP building blocks

pub mod json;
pub mod response;

pub use json::{JsonBody, JsonBodyRejection};
pub use response::{domain_error, ApiResponse, ApiResult, MessageResponse};
