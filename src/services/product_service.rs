use crate::models::{
    CategoriesResponse, ForecastRequest, ForecastResponse, Product, ProductForm, ProductUpdate,
};
use crate::services::{ApiClient, ApiError, ApiResult};

pub async fn fetch_categories(client: &ApiClient) -> ApiResult<CategoriesResponse> {
    client
        .get_json("/api/categories/", "Failed to fetch categories")
        .await
}

pub async fn fetch_products(client: &ApiClient) -> ApiResult<Vec<Product>> {
    client
        .get_json("/api/products/", "Failed to fetch products")
        .await
}

pub async fn create_product(client: &ApiClient, form: &ProductForm) -> ApiResult<Product> {
    if !form.is_complete() {
        return Err(ApiError::Validation("Please fill all fields.".to_string()));
    }
    client
        .post_json("/api/product/", form, "Failed to submit the product data")
        .await
}

/// Sends only the fields that differ from the product's last known values.
/// An unchanged form is rejected here, before any request goes out.
pub async fn update_product(
    client: &ApiClient,
    product_id: i64,
    form: &ProductForm,
    original: &ProductForm,
) -> ApiResult<Product> {
    if !form.is_complete() {
        return Err(ApiError::Validation("Please fill all fields.".to_string()));
    }

    let changes: ProductUpdate = form.diff(original);
    if changes.is_empty() {
        return Err(ApiError::Validation("No changes were made.".to_string()));
    }

    client
        .put_json(
            &format!("/api/product/{}/", product_id),
            &changes,
            "Failed to update the product",
        )
        .await
}

pub async fn delete_product(client: &ApiClient, product_id: i64) -> ApiResult<()> {
    client
        .delete(
            &format!("/api/product/{}/", product_id),
            "Failed to delete the product",
        )
        .await
}

/// Bulk demand forecast for the selected product ids. The response batch
/// replaces any previous one wholesale.
pub async fn request_forecast(
    client: &ApiClient,
    product_ids: Vec<String>,
) -> ApiResult<ForecastResponse> {
    let request = ForecastRequest {
        product_id_list: product_ids,
    };
    client
        .post_json(
            "/api/demand-forecast/",
            &request,
            "Failed to fetch the demand forecast",
        )
        .await
}
