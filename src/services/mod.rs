pub mod api_client;
pub mod auth_service;
pub mod product_service;
pub mod session_service;

pub use api_client::{ApiClient, ApiError, ApiResult};
pub use session_service::SessionService;
