use web_sys::window;
use yew::prelude::*;

use crate::components::{
    CategorySelect, ForecastModal, HeaderComponent, ProductModal, SearchInput, ViewModal,
};
use crate::hooks::{toggle_selected, use_catalog};
use crate::models::{Capabilities, ForecastBatch, ProductForm, Role};
use crate::services::{product_service, ApiClient, SessionService};
use crate::utils::constants::ROUTE_HOME;

/// Which overlay is on screen. At most one at a time, by construction.
#[derive(Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Add,
    Edit(i64),
    View(i64),
    Forecast(ForecastBatch),
}

/// Product catalog manager: search/filter toolbar, the product table with
/// role-gated row actions, the forecast selection set and the modals.
#[function_component(ManageProducts)]
pub fn manage_products() -> Html {
    let catalog = use_catalog();
    let selected_products = use_state(Vec::<String>::new);
    let modal = use_state(|| ModalState::Closed);
    // Once a forecast has been computed the column stays visible for the
    // rest of the page visit.
    let show_forecast_column = use_state(|| false);
    let forecast_batch = use_state(ForecastBatch::default);

    let role = SessionService::new()
        .read()
        .role
        .unwrap_or_else(|| Role::Other(String::new()));
    let capabilities = Capabilities::for_role(&role);

    let on_search = catalog.set_search.clone();
    let on_category = catalog.set_category.clone();

    let on_add_click = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalState::Add))
    };

    let on_forecast_click = {
        let selected_products = selected_products.clone();
        let modal = modal.clone();

        Callback::from(move |_: MouseEvent| {
            if selected_products.is_empty() {
                return;
            }
            let ids = (*selected_products).clone();
            let modal = modal.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new(SessionService::new());
                match product_service::request_forecast(&client, ids).await {
                    Ok(Some(response)) => {
                        log::info!(
                            "📊 Forecast computed for {} products",
                            response.created_forecasts.len()
                        );
                        modal.set(ModalState::Forecast(ForecastBatch::new(
                            response.created_forecasts,
                        )));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("❌ Forecast request failed: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        })
    };

    // Closing add/edit re-syncs the catalog with the server.
    let on_editor_close = {
        let modal = modal.clone();
        let refresh = catalog.refresh.clone();
        Callback::from(move |_: ()| {
            modal.set(ModalState::Closed);
            refresh.emit(());
        })
    };

    let on_view_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Closed))
    };

    let forecast_enabled = !selected_products.is_empty();
    let forecast_class = if forecast_enabled {
        "btn btn-primary"
    } else {
        "btn btn-disabled"
    };

    let category_options: Vec<String> = std::iter::once("All".to_string())
        .chain(catalog.categories.iter().cloned())
        .collect();

    let rows = catalog.visible.iter().map(|product| {
        let product_id = product.id;

        let on_toggle = {
            let selected_products = selected_products.clone();
            let id = product_id.to_string();
            Callback::from(move |_: Event| {
                selected_products.set(toggle_selected((*selected_products).clone(), &id));
            })
        };

        let on_view_click = {
            let modal = modal.clone();
            Callback::from(move |_: MouseEvent| modal.set(ModalState::View(product_id)))
        };

        let on_edit_click = {
            let modal = modal.clone();
            Callback::from(move |_: MouseEvent| modal.set(ModalState::Edit(product_id)))
        };

        let on_delete_click = {
            let delete = catalog.delete.clone();
            Callback::from(move |_: MouseEvent| delete.emit(product_id))
        };

        html! {
            <tr key={product_id.to_string()}>
                <td>
                    <input
                        type="checkbox"
                        checked={selected_products.contains(&product_id.to_string())}
                        onchange={on_toggle}
                    />
                </td>
                <td>{&product.name}</td>
                <td>{&product.category.name}</td>
                <td>{format!("${}", product.cost_price)}</td>
                <td>{format!("${}", product.selling_price)}</td>
                <td class="cell-ellipsis">{&product.description}</td>
                <td>{product.stock_available}</td>
                <td>{product.units_sold}</td>
                if *show_forecast_column {
                    <td class="forecast-cell">
                        {forecast_batch
                            .value_for(product_id)
                            .map(str::to_string)
                            .unwrap_or_else(|| "No data".to_string())}
                    </td>
                }
                <td>
                    <div class="action-buttons">
                        <button class="icon-btn" title="View" onclick={on_view_click}>{"👁"}</button>
                        if capabilities.can_edit {
                            <button class="icon-btn" title="Edit" onclick={on_edit_click}>{"✏️"}</button>
                        }
                        if capabilities.can_delete {
                            <button class="icon-btn icon-delete" title="Delete" onclick={on_delete_click}>{"🗑"}</button>
                        }
                    </div>
                </td>
            </tr>
        }
    });

    let modal_view = match &*modal {
        ModalState::Closed => html! {},
        ModalState::Add => html! {
            <ProductModal edit_mode={false} on_close={on_editor_close.clone()} />
        },
        ModalState::Edit(product_id) => {
            if !capabilities.can_edit {
                html! {}
            } else if let Some(product) = catalog.visible.iter().find(|p| p.id == *product_id) {
                html! {
                    <ProductModal
                        edit_mode={true}
                        product_id={Some(*product_id)}
                        original={Some(ProductForm::from_product(product))}
                        on_close={on_editor_close.clone()}
                    />
                }
            } else {
                html! {}
            }
        }
        ModalState::View(product_id) => {
            if let Some(product) = catalog.visible.iter().find(|p| p.id == *product_id) {
                html! {
                    <ViewModal
                        product={ProductForm::from_product(product)}
                        on_close={on_view_close.clone()}
                    />
                }
            } else {
                html! {}
            }
        }
        ModalState::Forecast(batch) => {
            let on_forecast_close = {
                let modal = modal.clone();
                let forecast_batch = forecast_batch.clone();
                let show_forecast_column = show_forecast_column.clone();
                let batch = batch.clone();
                Callback::from(move |_: ()| {
                    forecast_batch.set(batch.clone());
                    show_forecast_column.set(true);
                    modal.set(ModalState::Closed);
                })
            };
            html! {
                <ForecastModal
                    batch={batch.clone()}
                    products={(*catalog.visible).clone()}
                    on_close={on_forecast_close}
                />
            }
        }
    };

    html! {
        <>
            <HeaderComponent />
            <div>
                <div class="toolbar">
                    <div class="toolbar-left">
                        <a href={ROUTE_HOME}>{"‹ Back"}</a>
                        <div class="divider"></div>
                        {"Create and Manage Product"}
                    </div>
                    <div class="toolbar-right">
                        <SearchInput value={(*catalog.search_term).clone()} on_change={on_search} />
                        <CategorySelect
                            selected={(*catalog.selected_category).clone()}
                            categories={category_options}
                            on_change={on_category}
                        />
                        <div class="divider"></div>
                        <button class="btn btn-primary" onclick={on_add_click}>
                            {"+ Add New Product"}
                        </button>
                        <button
                            class={forecast_class}
                            disabled={!forecast_enabled}
                            onclick={on_forecast_click}
                        >
                            {"📊 Demand Forecast"}
                        </button>
                    </div>
                </div>

                <div class="table-wrapper">
                    <table class="product-table">
                        <thead>
                            <tr>
                                <th></th>
                                <th>{"Product Name"}</th>
                                <th>{"Product Category"}</th>
                                <th>{"Cost Price"}</th>
                                <th>{"Selling Price"}</th>
                                <th>{"Description"}</th>
                                <th>{"Available Stock"}</th>
                                <th>{"Units Sold"}</th>
                                if *show_forecast_column {
                                    <th>{"Calculated Demand Forecast"}</th>
                                }
                                <th>{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if catalog.visible.is_empty() {
                                <tr><td><span class="no-data">{"No Data available"}</span></td></tr>
                            } else {
                                { for rows }
                            }
                        </tbody>
                    </table>
                </div>
            </div>
            {modal_view}
        </>
    }
}
