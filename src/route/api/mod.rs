pub mod app;
pub mod describe_api;

pub use describe_api::ENDPOINTS;
