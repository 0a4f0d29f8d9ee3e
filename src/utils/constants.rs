// Cookie names shared with the backend middleware
pub const COOKIE_TOKEN: &str = "token";
pub const COOKIE_USER_ID: &str = "user_id";
pub const COOKIE_USER_ROLE: &str = "user_role";

// localStorage keys
pub const STORAGE_KEY_USER_NAME: &str = "userName";

// User-facing routes
pub const ROUTE_LOGIN: &str = "/login";
pub const ROUTE_REGISTER: &str = "/register";
pub const ROUTE_HOME: &str = "/home";
pub const ROUTE_MANAGE_PRODUCTS: &str = "/create-manage-product";
pub const ROUTE_PRICE_OPTIMIZATION: &str = "/page-optimization";
