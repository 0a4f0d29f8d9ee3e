use yew::prelude::*;

use crate::models::{ForecastBatch, Product};

#[derive(Properties, PartialEq)]
pub struct ForecastModalProps {
    pub batch: ForecastBatch,
    /// Currently visible products; only the ones the server actually
    /// forecast end up in the table.
    pub products: Vec<Product>,
    pub on_close: Callback<()>,
}

/// Demand forecast results for the selected products.
#[function_component(ForecastModal)]
pub fn forecast_modal(props: &ForecastModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let batch = &props.batch;
    let rows = props
        .products
        .iter()
        .filter_map(|product| {
            batch.value_for(product.id).map(|forecast_value| {
                let forecast_value = forecast_value.to_string();
                html! {
                    <tr key={product.id.to_string()}>
                        <td>{&product.name}</td>
                        <td>{&product.category.name}</td>
                        <td>{format!("${}", product.cost_price)}</td>
                        <td>{format!("${}", product.selling_price)}</td>
                        <td>{product.stock_available}</td>
                        <td>{product.units_sold}</td>
                        <td class="forecast-value">{forecast_value}</td>
                    </tr>
                }
            })
        })
        .collect::<Html>();

    html! {
        <div class="modal-overlay">
            <div class="modal-container wide">
                <div class="modal-header">
                    <h2>{"Demand Forecast"}</h2>
                    <button class="btn-close" onclick={on_close}>{"✕"}</button>
                </div>
                <table class="forecast-table">
                    <thead>
                        <tr>
                            <th>{"Product Name"}</th>
                            <th>{"Product Category"}</th>
                            <th>{"Cost Price"}</th>
                            <th>{"Selling Price"}</th>
                            <th>{"Available Stock"}</th>
                            <th>{"Units Sold"}</th>
                            <th>{"Calculated Demand Forecast"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
