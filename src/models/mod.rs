pub mod auth;
pub mod forecast;
pub mod product;
pub mod role;
pub mod session;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use forecast::{Forecast, ForecastBatch, ForecastRequest, ForecastResponse};
pub use product::{CategoriesResponse, Category, Product, ProductForm, ProductUpdate};
pub use role::{Capabilities, Role};
pub use session::Session;
