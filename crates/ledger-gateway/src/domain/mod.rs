//! Gateway-local types: configuration and the REST error mapping.

pub mod config;
pub mod error;

pub use config::GatewayConfig;
pub use error::{ApiError, ApiResult};
