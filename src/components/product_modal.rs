use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::ProductForm;
use crate::services::{product_service, ApiClient, SessionService};

#[derive(Properties, PartialEq)]
pub struct ProductModalProps {
    pub edit_mode: bool,
    #[prop_or_default]
    pub product_id: Option<i64>,
    /// Last known values of the product being edited; the update diff is
    /// computed against these.
    #[prop_or_default]
    pub original: Option<ProductForm>,
    pub on_close: Callback<()>,
}

/// Add/edit product modal. Validation and the update diff both happen
/// locally before any request goes out.
#[function_component(ProductModal)]
pub fn product_modal(props: &ProductModalProps) -> Html {
    let form = {
        let original = props.original.clone();
        use_state(move || original.unwrap_or_default())
    };

    let field = |apply: fn(&mut ProductForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_name = field(|f, v| f.name = v);
    let on_category = field(|f, v| f.category_name = v);
    let on_cost_price = field(|f, v| f.cost_price = v);
    let on_selling_price = field(|f, v| f.selling_price = v);
    let on_stock = field(|f, v| f.stock_available = v);
    let on_units_sold = field(|f, v| f.units_sold = v);

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = area.value();
            form.set(next);
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        let edit_mode = props.edit_mode;
        let product_id = props.product_id;
        let original = props.original.clone();

        Callback::from(move |_: MouseEvent| {
            let form = (*form).clone();
            let on_close = on_close.clone();
            let original = original.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new(SessionService::new());

                let result = if edit_mode {
                    match (product_id, original) {
                        (Some(id), Some(original)) => {
                            product_service::update_product(&client, id, &form, &original)
                                .await
                                .map(|updated| updated.map(|_| ()))
                        }
                        _ => {
                            log::error!("❌ Edit modal opened without a product");
                            return;
                        }
                    }
                } else {
                    product_service::create_product(&client, &form)
                        .await
                        .map(|created| created.map(|_| ()))
                };

                match result {
                    Ok(Some(())) => on_close.emit(()),
                    // 401: redirect already under way.
                    Ok(None) => {}
                    Err(e) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    let title = if props.edit_mode { "Edit Product" } else { "Add New Product" };
    let submit_label = if props.edit_mode { "Save" } else { "Add" };

    html! {
        <div class="modal-overlay">
            <div class="modal-container">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="btn-close" onclick={on_cancel.clone()}>{"✕"}</button>
                </div>
                <div class="input-group">
                    <label>{"Product Name:"}</label>
                    <input value={form.name.clone()} oninput={on_name} placeholder="Enter Product Name" />
                </div>
                <div class="input-group">
                    <label>{"Product Category:"}</label>
                    <input value={form.category_name.clone()} oninput={on_category} placeholder="Enter Product Category" />
                </div>
                <div class="input-row">
                    <div class="input-group">
                        <label>{"Cost Price:"}</label>
                        <input value={form.cost_price.clone()} oninput={on_cost_price} placeholder="XX.XX" />
                    </div>
                    <div class="input-group">
                        <label>{"Selling Price:"}</label>
                        <input value={form.selling_price.clone()} oninput={on_selling_price} placeholder="XX.XX" />
                    </div>
                </div>
                <div class="input-group">
                    <label>{"Description:"}</label>
                    <textarea value={form.description.clone()} oninput={on_description} placeholder="Enter Description" />
                </div>
                <div class="input-row">
                    <div class="input-group">
                        <label>{"Available Stock:"}</label>
                        <input value={form.stock_available.clone()} oninput={on_stock} placeholder="0" />
                    </div>
                    <div class="input-group">
                        <label>{"Units Sold:"}</label>
                        <input value={form.units_sold.clone()} oninput={on_units_sold} placeholder="0" />
                    </div>
                </div>
                <div class="modal-footer">
                    <button class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                    <button class="btn btn-primary" onclick={on_submit}>{submit_label}</button>
                </div>
            </div>
        </div>
    }
}
