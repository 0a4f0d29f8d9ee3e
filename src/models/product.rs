use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// Product row as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub cost_price: String,
    pub selling_price: String,
    pub stock_available: i64,
    pub units_sold: i64,
    pub customer_rating: String,
    pub optimized_price: String,
    pub category: Category,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Form state for the add/edit modal. Every field is kept as the raw input
/// string; the backend parses numerics on its side.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct ProductForm {
    pub name: String,
    pub category_name: String,
    pub cost_price: String,
    pub selling_price: String,
    pub description: String,
    pub stock_available: String,
    pub units_sold: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category_name: product.category.name.clone(),
            cost_price: product.cost_price.clone(),
            selling_price: product.selling_price.clone(),
            description: product.description.clone(),
            stock_available: product.stock_available.to_string(),
            units_sold: product.units_sold.to_string(),
        }
    }

    /// Every field must be filled in before the form may be submitted.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.category_name.is_empty()
            && !self.cost_price.is_empty()
            && !self.selling_price.is_empty()
            && !self.description.is_empty()
            && !self.stock_available.is_empty()
            && !self.units_sold.is_empty()
    }

    /// Field-by-field diff against the product's last known values. Only
    /// changed fields end up in the PUT body.
    pub fn diff(&self, original: &ProductForm) -> ProductUpdate {
        fn changed(current: &str, previous: &str) -> Option<String> {
            (current != previous).then(|| current.to_string())
        }

        ProductUpdate {
            name: changed(&self.name, &original.name),
            category_name: changed(&self.category_name, &original.category_name),
            cost_price: changed(&self.cost_price, &original.cost_price),
            selling_price: changed(&self.selling_price, &original.selling_price),
            description: changed(&self.description, &original.description),
            stock_available: changed(&self.stock_available, &original.stock_available),
            units_sold: changed(&self.units_sold, &original.units_sold),
        }
    }
}

/// Partial update body; unchanged fields are left out of the JSON entirely.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_available: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_sold: Option<String>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category_name.is_none()
            && self.cost_price.is_none()
            && self.selling_price.is_none()
            && self.description.is_none()
            && self.stock_available.is_none()
            && self.units_sold.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> ProductForm {
        ProductForm {
            name: "Monitor".to_string(),
            category_name: "Electronics".to_string(),
            cost_price: "120.00".to_string(),
            selling_price: "199.99".to_string(),
            description: "27 inch monitor".to_string(),
            stock_available: "14".to_string(),
            units_sold: "230".to_string(),
        }
    }

    #[test]
    fn complete_form_passes_validation() {
        assert!(sample_form().is_complete());
    }

    #[test]
    fn any_empty_field_fails_validation() {
        let mut form = sample_form();
        form.description = String::new();
        assert!(!form.is_complete());

        let mut form = sample_form();
        form.units_sold = String::new();
        assert!(!form.is_complete());
    }

    #[test]
    fn identical_form_diffs_to_empty_update() {
        let original = sample_form();
        let edited = sample_form();
        assert!(edited.diff(&original).is_empty());
    }

    #[test]
    fn diff_contains_only_changed_fields() {
        let original = sample_form();
        let mut edited = sample_form();
        edited.selling_price = "189.99".to_string();
        edited.stock_available = "20".to_string();

        let update = edited.diff(&original);
        assert_eq!(update.selling_price.as_deref(), Some("189.99"));
        assert_eq!(update.stock_available.as_deref(), Some("20"));
        assert!(update.name.is_none());
        assert!(update.category_name.is_none());
        assert!(update.cost_price.is_none());
        assert!(update.description.is_none());
        assert!(update.units_sold.is_none());
    }

    #[test]
    fn update_body_skips_unchanged_fields() {
        let original = sample_form();
        let mut edited = sample_form();
        edited.name = "Monitor 27\"".to_string();

        let json = serde_json::to_string(&edited.diff(&original)).unwrap();
        assert!(json.contains("name"));
        assert!(!json.contains("cost_price"));
    }

    #[test]
    fn form_from_product_stringifies_counts() {
        let product = Product {
            id: 7,
            name: "Monitor".to_string(),
            description: "27 inch monitor".to_string(),
            cost_price: "120.00".to_string(),
            selling_price: "199.99".to_string(),
            stock_available: 14,
            units_sold: 230,
            customer_rating: "4.4".to_string(),
            optimized_price: "184.50".to_string(),
            category: Category { name: "Electronics".to_string() },
        };

        let form = ProductForm::from_product(&product);
        assert_eq!(form.stock_available, "14");
        assert_eq!(form.units_sold, "230");
        assert_eq!(form.category_name, "Electronics");
    }
}
