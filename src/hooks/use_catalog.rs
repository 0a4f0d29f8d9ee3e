use web_sys::window;
use yew::prelude::*;

use crate::models::Product;
use crate::services::{product_service, ApiClient, ApiError, SessionService};

/// (full list, search text, category) -> filtered view.
///
/// Category must match exactly unless it is "All"; the search text matches
/// the product name case-insensitively. Both predicates AND together and
/// the original order is preserved.
pub fn filter_products(products: &[Product], search: &str, category: &str) -> Vec<Product> {
    let mut filtered: Vec<Product> = products.to_vec();

    if category != "All" {
        filtered.retain(|product| product.category.name == category);
    }
    if !search.is_empty() {
        let needle = search.to_lowercase();
        filtered.retain(|product| product.name.to_lowercase().contains(&needle));
    }
    filtered
}

/// Checkbox toggle for the forecast selection set.
pub fn toggle_selected(mut selected: Vec<String>, product_id: &str) -> Vec<String> {
    if let Some(position) = selected.iter().position(|id| id == product_id) {
        selected.remove(position);
    } else {
        selected.push(product_id.to_string());
    }
    selected
}

/// Local removal after a confirmed delete; no refetch happens.
pub fn remove_product(products: &[Product], product_id: i64) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.id != product_id)
        .cloned()
        .collect()
}

/// Page-scoped catalog store: the server-truth list, the derived visible
/// list and the current filter inputs, plus the callbacks that mutate them.
pub struct UseCatalogHandle {
    pub products: UseStateHandle<Vec<Product>>,
    pub visible: UseStateHandle<Vec<Product>>,
    pub categories: UseStateHandle<Vec<String>>,
    pub search_term: UseStateHandle<String>,
    pub selected_category: UseStateHandle<String>,
    pub refresh: Callback<()>,
    pub set_search: Callback<String>,
    pub set_category: Callback<String>,
    pub delete: Callback<i64>,
}

#[hook]
pub fn use_catalog() -> UseCatalogHandle {
    let products = use_state(Vec::<Product>::new);
    let visible = use_state(Vec::<Product>::new);
    let categories = use_state(Vec::<String>::new);
    let search_term = use_state(String::new);
    let selected_category = use_state(|| "All".to_string());

    // Monotonic tag per refresh; a slow response that resolves after a newer
    // refresh was issued is discarded instead of overwriting it.
    let refresh_seq = use_mut_ref(|| 0u64);

    let refresh = {
        let products = products.clone();
        let visible = visible.clone();
        let categories = categories.clone();
        let refresh_seq = refresh_seq.clone();

        Callback::from(move |_| {
            let products = products.clone();
            let visible = visible.clone();
            let categories = categories.clone();
            let refresh_seq = refresh_seq.clone();

            let seq = {
                let mut current = refresh_seq.borrow_mut();
                *current += 1;
                *current
            };

            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new(SessionService::new());

                let fetched = async {
                    let category_data = product_service::fetch_categories(&client).await?;
                    let product_data = product_service::fetch_products(&client).await?;
                    Ok::<_, ApiError>(category_data.zip(product_data))
                }
                .await;

                if *refresh_seq.borrow() != seq {
                    log::warn!("⚠️ Discarding stale refresh #{}", seq);
                    return;
                }

                match fetched {
                    Ok(Some((category_data, product_data))) => {
                        log::info!(
                            "📦 Catalog loaded: {} products, {} categories",
                            product_data.len(),
                            category_data.categories.len()
                        );
                        categories.set(category_data.categories);
                        // A refresh shows the unfiltered list again; the
                        // current search/category text is only reapplied on
                        // the next filter interaction.
                        visible.set(product_data.clone());
                        products.set(product_data);
                    }
                    // 401: teardown and redirect are already in progress.
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("❌ Failed to load catalog: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    // Initial load on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let set_search = {
        let products = products.clone();
        let visible = visible.clone();
        let search_term = search_term.clone();
        let selected_category = selected_category.clone();

        Callback::from(move |query: String| {
            visible.set(filter_products(products.as_slice(), &query, &selected_category));
            search_term.set(query);
        })
    };

    let set_category = {
        let products = products.clone();
        let visible = visible.clone();
        let search_term = search_term.clone();
        let selected_category = selected_category.clone();

        Callback::from(move |category: String| {
            visible.set(filter_products(products.as_slice(), &search_term, &category));
            selected_category.set(category);
        })
    };

    let delete = {
        let products = products.clone();
        let visible = visible.clone();

        Callback::from(move |product_id: i64| {
            let products = products.clone();
            let visible = visible.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new(SessionService::new());
                match product_service::delete_product(&client, product_id).await {
                    Ok(Some(())) => {
                        log::info!("🗑️ Product {} deleted", product_id);
                        products.set(remove_product(products.as_slice(), product_id));
                        visible.set(remove_product(visible.as_slice(), product_id));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("❌ Failed to delete product {}: {}", product_id, e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    UseCatalogHandle {
        products,
        visible,
        categories,
        search_term,
        selected_category,
        refresh,
        set_search,
        set_category,
        delete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn product(id: i64, name: &str, category: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            cost_price: "1.00".to_string(),
            selling_price: "2.00".to_string(),
            stock_available: 0,
            units_sold: 0,
            customer_rating: "0.0".to_string(),
            optimized_price: "0.00".to_string(),
            category: Category {
                name: category.to_string(),
            },
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Espresso Machine", "Appliances"),
            product(2, "Office Chair", "Furniture"),
            product(3, "Standing Desk", "Furniture"),
            product(4, "Desk Lamp", "Lighting"),
        ]
    }

    #[test]
    fn all_category_and_empty_search_keep_everything() {
        let products = catalog();
        assert_eq!(filter_products(&products, "", "All"), products);
    }

    #[test]
    fn category_must_match_exactly() {
        let filtered = filter_products(&catalog(), "", "Furniture");
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name() {
        let filtered = filter_products(&catalog(), "dEsK", "All");
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn both_predicates_and_together() {
        let filtered = filter_products(&catalog(), "desk", "Furniture");
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn filtering_preserves_original_order() {
        let filtered = filter_products(&catalog(), "e", "All");
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_products(&catalog(), "desk", "Furniture");
        let twice = filter_products(&once, "desk", "Furniture");
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_yields_empty_list() {
        assert!(filter_products(&catalog(), "turbine", "All").is_empty());
        assert!(filter_products(&catalog(), "", "Groceries").is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let selected = toggle_selected(Vec::new(), "7");
        assert_eq!(selected, vec!["7".to_string()]);

        let selected = toggle_selected(selected, "3");
        assert_eq!(selected, vec!["7".to_string(), "3".to_string()]);

        let selected = toggle_selected(selected, "7");
        assert_eq!(selected, vec!["3".to_string()]);
    }

    #[test]
    fn remove_product_drops_only_the_matching_id() {
        let remaining = remove_product(&catalog(), 2);
        let ids: Vec<i64> = remaining.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn remove_product_with_unknown_id_changes_nothing() {
        let products = catalog();
        assert_eq!(remove_product(&products, 99), products);
    }
}
