use yew::prelude::*;

use crate::models::ProductForm;

#[derive(Properties, PartialEq)]
pub struct ViewModalProps {
    pub product: ProductForm,
    pub on_close: Callback<()>,
}

/// Read-only product details.
#[function_component(ViewModal)]
pub fn view_modal(props: &ViewModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let product = &props.product;

    html! {
        <div class="modal-overlay">
            <div class="modal-container">
                <div class="modal-header">
                    <h2>{"View Product"}</h2>
                    <button class="btn-close" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                <div class="input-group">
                    <label>{"Product Name:"}</label>
                    <div>{&product.name}</div>
                </div>
                <div class="input-group">
                    <label>{"Product Category:"}</label>
                    <div>{&product.category_name}</div>
                </div>
                <div class="input-row">
                    <div class="input-group">
                        <label>{"Cost Price:"}</label>
                        <div>{format!("${}", product.cost_price)}</div>
                    </div>
                    <div class="input-group">
                        <label>{"Selling Price:"}</label>
                        <div>{format!("${}", product.selling_price)}</div>
                    </div>
                </div>
                <div class="input-group">
                    <label>{"Description:"}</label>
                    <div>{&product.description}</div>
                </div>
                <div class="input-row">
                    <div class="input-group">
                        <label>{"Available Stock:"}</label>
                        <div>{&product.stock_available}</div>
                    </div>
                    <div class="input-group">
                        <label>{"Units Sold:"}</label>
                        <div>{&product.units_sold}</div>
                    </div>
                </div>
                <div class="modal-footer">
                    <button class="btn btn-outline" onclick={on_close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
