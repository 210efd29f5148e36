//! Request and response DTOs for the HTTP API.

pub mod request;
pub mod response;
