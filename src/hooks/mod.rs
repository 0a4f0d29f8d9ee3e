pub mod use_catalog;
pub mod use_logout;

pub use use_catalog::{filter_products, remove_product, toggle_selected, use_catalog, UseCatalogHandle};
pub use use_logout::use_logout;
